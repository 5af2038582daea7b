//! Date/time selection collaborator for the interview time field.
//!
//! The picker behaves like a text control that only yields a value when the text resolves to
//! a calendar timestamp. Anything else leaves the selection empty, so the validator reports
//! the field as missing on submit.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};

pub const DEFAULT_DISPLAY_FORMAT: &str = "%m/%d/%Y, %-I:%M %p";

const ACCEPTED_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y, %I:%M %p",
    "%m/%d/%Y %I:%M %p",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimePicker {
    display_format: String,
}

impl Default for DateTimePicker {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_FORMAT)
    }
}

impl DateTimePicker {
    pub fn new(display_format: impl Into<String>) -> Self {
        Self {
            display_format: display_format.into(),
        }
    }

    pub fn display_format(&self) -> &str {
        &self.display_format
    }

    /// Resolve typed text into a selection. A bare date selects midnight.
    pub fn parse(&self, raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        ACCEPTED_FORMATS
            .iter()
            .copied()
            .chain(std::iter::once(self.display_format.as_str()))
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }

    /// Whether chrono can render `format`. Unknown specifiers make rendering fail.
    pub fn is_renderable(format: &str) -> bool {
        !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    }

    /// Render with the display format, falling back to the default one when it cannot render.
    pub fn format(&self, value: &NaiveDateTime) -> String {
        let mut rendered = String::new();
        if write!(rendered, "{}", value.format(&self.display_format)).is_ok() {
            return rendered;
        }
        value.format(DEFAULT_DISPLAY_FORMAT).to_string()
    }

    pub fn placeholder(&self) -> &'static str {
        "Select date and time"
    }
}
