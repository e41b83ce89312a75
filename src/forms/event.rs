use super::{Form, FormError, FormField};
use crate::api::models::{NewEvent, DEFAULT_ORGANIZER};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

const ORGANIZER: usize = 0;
const TITLE: usize = 1;
const DESCRIPTION: usize = 2;
const LOCATION: usize = 3;
const START: usize = 4;
const END: usize = 5;

/// Accepted spellings of a wall-clock date and time.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Interpret `raw` as a wall-clock time in `tz` and return the matching
/// instant. Ambiguous times (clocks going back) resolve to the earlier one;
/// times skipped by a clock change are rejected.
pub fn local_to_instant<Tz: TimeZone>(
    tz: &Tz,
    field: &'static str,
    raw: &str,
) -> Result<DateTime<Utc>, FormError> {
    let invalid = || FormError::InvalidDateTime {
        field,
        input: raw.to_string(),
    };
    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
        .ok_or_else(invalid)?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(invalid)
}

#[derive(Debug, Clone)]
pub struct EventForm {
    pub form: Form,
}

impl Default for EventForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EventForm {
    pub fn new() -> Self {
        Self {
            form: Form::new(
                "Create an Event",
                vec![
                    FormField::new("Organizer", "Organizer", false),
                    FormField::new("Title", "Event title", true),
                    FormField::new("Description", "Description", true).multiline(),
                    FormField::new("Location", "Location", true),
                    FormField::new("Start", "YYYY-MM-DD HH:MM", true),
                    FormField::new("End", "YYYY-MM-DD HH:MM (optional)", false),
                ],
            ),
        }
    }

    /// Build the payload with start/end read in the system time zone.
    pub fn to_payload(&self) -> Result<NewEvent, FormError> {
        self.to_payload_in(&Local)
    }

    pub fn to_payload_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<NewEvent, FormError> {
        let f = &self.form;
        let title = f.required(TITLE)?;
        let description = f.required(DESCRIPTION)?;
        let location = f.required(LOCATION)?;
        let start = f.optional(START).ok_or(FormError::MissingField("Start"))?;
        let start_time = local_to_instant(tz, "Start", &start)?;
        let end_time = f
            .optional(END)
            .map(|raw| local_to_instant(tz, "End", &raw))
            .transpose()?;
        Ok(NewEvent {
            organizer: f.optional(ORGANIZER).unwrap_or_else(|| DEFAULT_ORGANIZER.to_string()),
            title,
            description,
            location,
            start_time,
            end_time,
        })
    }

    pub fn reset(&mut self) {
        self.form.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn filled() -> EventForm {
        let mut event = EventForm::new();
        event.form.set(TITLE, "Park cleanup");
        event.form.set(DESCRIPTION, "Bags provided");
        event.form.set(LOCATION, "Riverside");
        event.form.set(START, "2024-06-01T10:30");
        event
    }

    #[test]
    fn test_local_start_converts_to_instant() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let payload = filled().to_payload_in(&plus_two).unwrap();
        assert_eq!(payload.start_time, Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap());
        assert_eq!(payload.organizer, "community");
        assert_eq!(payload.end_time, None);
    }

    #[test]
    fn test_payload_wire_shape() {
        let mut event = filled();
        event.form.set(ORGANIZER, "Friends of the River");
        event.form.set(END, "2024-06-01 12:00");
        let payload = event.to_payload_in(&Utc).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "organizer": "Friends of the River",
                "title": "Park cleanup",
                "description": "Bags provided",
                "location": "Riverside",
                "start_time": "2024-06-01T10:30:00.000Z",
                "end_time": "2024-06-01T12:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_absent_end_serializes_as_null() {
        let payload = filled().to_payload_in(&Utc).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["end_time"], serde_json::Value::Null);
    }

    #[test]
    fn test_description_keeps_newlines() {
        let mut event = filled();
        event.form.set(DESCRIPTION, "Bags provided\nMeet at the gate");
        event.form.set(START, " 2024-06-01 10:30 ");
        let payload = event.to_payload_in(&Utc).unwrap();
        assert_eq!(payload.description, "Bags provided\nMeet at the gate");
        assert_eq!(payload.start_time, Utc.with_ymd_and_hms(2024, 6, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_unparsable_start_is_rejected() {
        let mut event = filled();
        event.form.set(START, "next friday");
        assert_eq!(
            event.to_payload_in(&Utc),
            Err(FormError::InvalidDateTime {
                field: "Start",
                input: "next friday".into(),
            })
        );
    }

    #[test]
    fn test_missing_start_is_required() {
        let mut event = filled();
        event.form.set(START, "");
        assert_eq!(event.to_payload_in(&Utc), Err(FormError::MissingField("Start")));
    }

    #[test]
    fn test_blank_start_is_missing() {
        let mut event = filled();
        event.form.set(START, "   ");
        assert_eq!(event.to_payload_in(&Utc), Err(FormError::MissingField("Start")));
    }

    #[test]
    fn test_bad_end_is_rejected() {
        let mut event = filled();
        event.form.set(END, "2024-13-01 10:00");
        assert!(matches!(
            event.to_payload_in(&Utc),
            Err(FormError::InvalidDateTime { field: "End", .. })
        ));
    }
}
