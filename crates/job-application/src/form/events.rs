use serde::{Deserialize, Serialize};

use super::domain::Skill;

/// Discrete user input delivered to the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    /// Keystroke-level update of a text-like field, addressed by its registry key.
    SetField { field: String, value: String },
    SelectPosition { position: String },
    ToggleSkill { skill: String },
    SetSkills { skills: Vec<String> },
    /// Raw text typed into the date/time picker.
    PickInterviewTime { value: String },
    ClearInterviewTime,
    Submit,
    Reset,
}

/// Input the controller cannot route to a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("field '{0}' is not a text input")]
    NotTextField(String),
    #[error("'{0}' is not in the skills catalog")]
    UnknownSkill(String),
}

pub(crate) fn parse_skill(raw: &str) -> Result<Skill, EventError> {
    Skill::parse(raw).ok_or_else(|| EventError::UnknownSkill(raw.to_string()))
}

/// Failure reading a newline-delimited JSON event script.
#[derive(Debug, thiserror::Error)]
pub enum EventScriptError {
    #[error("failed to read event script: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse one event per line. Blank lines and `#` comments are skipped.
pub fn read_event_script<R: std::io::BufRead>(
    reader: R,
) -> Result<Vec<FormEvent>, EventScriptError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event =
            serde_json::from_str(trimmed).map_err(|source| EventScriptError::Malformed {
                line: index + 1,
                source,
            })?;
        events.push(event);
    }
    Ok(events)
}
