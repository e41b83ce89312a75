use super::{parse_tags, Form, FormError, FormField};
use crate::api::models::{NewPost, DEFAULT_AUTHOR};

const AUTHOR: usize = 0;
const TITLE: usize = 1;
const CONTENT: usize = 2;
const TAGS: usize = 3;
const IMAGE_URL: usize = 4;

#[derive(Debug, Clone)]
pub struct PostForm {
    pub form: Form,
}

impl Default for PostForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PostForm {
    pub fn new() -> Self {
        Self {
            form: Form::new(
                "Create a Post",
                vec![
                    FormField::new("Author", "Your name", false),
                    FormField::new("Title", "Post title", true),
                    FormField::new("Content", "Write something...", true).multiline(),
                    FormField::new("Tags", "tags, comma,separated", false),
                    FormField::new("Image URL", "Image URL (optional)", false),
                ],
            ),
        }
    }

    pub fn to_payload(&self) -> Result<NewPost, FormError> {
        let f = &self.form;
        Ok(NewPost {
            author: f.optional(AUTHOR).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            title: f.required(TITLE)?,
            content: f.required(CONTENT)?,
            tags: parse_tags(f.value(TAGS)),
            image_url: f.optional(IMAGE_URL),
        })
    }

    pub fn reset(&mut self) {
        self.form.reset();
    }
}
