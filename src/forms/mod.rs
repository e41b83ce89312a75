//! In-terminal forms for creating posts and events.
//!
//! A form is an ordered list of fields with one focused field. Most fields
//! are single-line; multiline ones accept embedded newlines. Converting a
//! form into a request payload is the only place where defaults, tag
//! splitting and date conversion happen; nothing is sent if that conversion
//! fails.
//!
//! Required fields are sent exactly as typed and only rejected when empty.
//! Optional fields are trimmed, and an all-whitespace value counts as absent.

pub mod event;
pub mod input;
pub mod post;

use input::InputState;
use thiserror::Error;

pub use event::EventForm;
pub use post::PostForm;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field}: cannot read {input:?} as a local date and time (YYYY-MM-DD HH:MM)")]
    InvalidDateTime { field: &'static str, input: String },
}

/// Split a comma-separated tag list, trimming each tag and dropping empty
/// fragments. Order and duplicates are preserved.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub multiline: bool,
    pub input: InputState,
}

impl FormField {
    pub fn new(label: &'static str, placeholder: &'static str, required: bool) -> Self {
        Self {
            label,
            placeholder,
            required,
            multiline: false,
            input: InputState::new(),
        }
    }

    /// Let the field hold several lines.
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub title: &'static str,
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl Form {
    pub fn new(title: &'static str, fields: Vec<FormField>) -> Self {
        Self {
            title,
            fields,
            focused: 0,
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn on_last_field(&self) -> bool {
        self.focused + 1 == self.fields.len()
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut InputState> {
        self.fields.get_mut(self.focused).map(|f| &mut f.input)
    }

    pub fn focused_is_multiline(&self) -> bool {
        self.fields.get(self.focused).is_some_and(|f| f.multiline)
    }

    /// Value of field `idx` exactly as typed.
    pub fn raw(&self, idx: usize) -> &str {
        self.fields.get(idx).map(|f| f.input.text.as_str()).unwrap_or("")
    }

    /// Trimmed value of field `idx`.
    pub fn value(&self, idx: usize) -> &str {
        self.raw(idx).trim()
    }

    /// Untrimmed value of a required field, or [`FormError::MissingField`]
    /// if nothing was typed.
    pub fn required(&self, idx: usize) -> Result<String, FormError> {
        let value = self.raw(idx);
        if value.is_empty() {
            let label = self.fields.get(idx).map(|f| f.label).unwrap_or("field");
            return Err(FormError::MissingField(label));
        }
        Ok(value.to_string())
    }

    /// Value of an optional field; empty means absent.
    pub fn optional(&self, idx: usize) -> Option<String> {
        let value = self.value(idx);
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn set(&mut self, idx: usize, text: &str) {
        if let Some(field) = self.fields.get_mut(idx) {
            field.input.text = text.to_string();
            field.input.move_end();
        }
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.input.clear();
        }
        self.focused = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.input.text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("a, b ,,c"), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
        assert_eq!(parse_tags("x"), vec!["x"]);
        assert_eq!(parse_tags(" rust, rust ,tui"), vec!["rust", "rust", "tui"]);
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = Form::new(
            "t",
            vec![FormField::new("A", "", false), FormField::new("B", "", true)],
        );
        form.focus_prev();
        assert_eq!(form.focused, 1);
        assert!(form.on_last_field());
        form.focus_next();
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn test_multiline_flag_follows_focus() {
        let mut form = Form::new(
            "t",
            vec![FormField::new("Title", "", true), FormField::new("Content", "", true).multiline()],
        );
        assert!(!form.focused_is_multiline());
        form.focus_next();
        assert!(form.focused_is_multiline());
    }

    #[test]
    fn test_required_and_optional() {
        let mut form = Form::new(
            "t",
            vec![FormField::new("Title", "", true), FormField::new("Image URL", "", false)],
        );
        assert_eq!(form.required(0), Err(FormError::MissingField("Title")));
        form.set(0, "   ");
        assert_eq!(form.required(0).unwrap(), "   ");
        form.set(0, "  Hi  ");
        assert_eq!(form.required(0).unwrap(), "  Hi  ");
        form.set(1, "  ");
        assert_eq!(form.optional(1), None);
        form.set(1, " https://img.example/a.png ");
        assert_eq!(form.optional(1).as_deref(), Some("https://img.example/a.png"));
        assert!(!form.is_blank());
        form.reset();
        assert!(form.is_blank());
    }
}
