use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::domain::{Position, Skill};
use super::fields::FieldName;

/// Raw input state of every field, hidden ones included.
///
/// Values typed into conditional fields survive position changes so switching back restores
/// them; only the validator and the record builder decide what counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(deserialize_with = "deserialize_position")]
    pub position: Position,
    pub experience: String,
    pub portfolio: String,
    pub management_experience: String,
    pub skills: Vec<Skill>,
    pub interview_time: Option<NaiveDateTime>,
}

impl FormValues {
    /// Text currently held by a text-like field. `None` for non-text inputs.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FullName => Some(&self.full_name),
            FieldName::Email => Some(&self.email),
            FieldName::PhoneNumber => Some(&self.phone_number),
            FieldName::Experience => Some(&self.experience),
            FieldName::Portfolio => Some(&self.portfolio),
            FieldName::ManagementExperience => Some(&self.management_experience),
            FieldName::Position | FieldName::Skills | FieldName::InterviewTime => None,
        }
    }

    pub(crate) fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FullName => Some(&mut self.full_name),
            FieldName::Email => Some(&mut self.email),
            FieldName::PhoneNumber => Some(&mut self.phone_number),
            FieldName::Experience => Some(&mut self.experience),
            FieldName::Portfolio => Some(&mut self.portfolio),
            FieldName::ManagementExperience => Some(&mut self.management_experience),
            FieldName::Position | FieldName::Skills | FieldName::InterviewTime => None,
        }
    }

    /// Toggle a checkbox, keeping the selection in catalog order.
    pub fn toggle_skill(&mut self, skill: Skill) -> bool {
        if let Some(index) = self.skills.iter().position(|selected| *selected == skill) {
            self.skills.remove(index);
            false
        } else {
            self.skills.push(skill);
            self.skills.sort();
            true
        }
    }

    pub fn set_skills(&mut self, skills: impl IntoIterator<Item = Skill>) {
        let mut selected: Vec<Skill> = skills.into_iter().collect();
        selected.sort();
        selected.dedup();
        self.skills = selected;
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

fn deserialize_position<'de, D>(deserializer: D) -> Result<Position, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Position::from_value).unwrap_or_default())
}
