use job_application::form::FormEvent;
use serde::Deserialize;

/// One-shot submission document. Keys follow the form's field names.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SubmissionInput {
    #[serde(deserialize_with = "deserialize_text")]
    pub(crate) full_name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub(crate) email: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub(crate) phone_number: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub(crate) position: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub(crate) experience: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub(crate) portfolio: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub(crate) management_experience: String,
    pub(crate) skills: Vec<String>,
    pub(crate) interview_time: Option<String>,
}

impl SubmissionInput {
    /// Replay the document as the input events a user would produce, ending with submit.
    pub(crate) fn into_events(self) -> Vec<FormEvent> {
        let text = |field: &str, value: String| FormEvent::SetField {
            field: field.to_string(),
            value,
        };

        let mut events = vec![
            text("fullName", self.full_name),
            text("email", self.email),
            text("phoneNumber", self.phone_number),
            FormEvent::SelectPosition {
                position: self.position,
            },
            text("experience", self.experience),
            text("portfolio", self.portfolio),
            text("managementExperience", self.management_experience),
            FormEvent::SetSkills {
                skills: self.skills,
            },
        ];
        events.push(match self.interview_time {
            Some(value) => FormEvent::PickInterviewTime { value },
            None => FormEvent::ClearInterviewTime,
        });
        events.push(FormEvent::Submit);
        events
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Number inputs may arrive as JSON numbers; the form stores what was typed.
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
