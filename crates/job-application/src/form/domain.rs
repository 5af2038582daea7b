use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Role the applicant is applying for. `Unset` covers the blank "Select..." option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[default]
    #[serde(rename = "")]
    Unset,
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const SELECTABLE: [Position; 3] =
        [Position::Developer, Position::Designer, Position::Manager];

    /// Maps a raw select value onto a position, ignoring case and surrounding whitespace.
    /// Anything outside the catalog is unset.
    pub fn from_value(raw: &str) -> Self {
        let raw = raw.trim();
        Self::SELECTABLE
            .into_iter()
            .find(|position| position.value().eq_ignore_ascii_case(raw))
            .unwrap_or(Self::Unset)
    }

    pub const fn value(self) -> &'static str {
        match self {
            Position::Unset => "",
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }

    pub const fn option_label(self) -> &'static str {
        match self {
            Position::Unset => "Select...",
            other => other.value(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Fixed catalog backing the "Additional Skills" checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
    React,
    Next,
}

impl Skill {
    pub const CATALOG: [Skill; 5] = [
        Skill::JavaScript,
        Skill::Css,
        Skill::Python,
        Skill::React,
        Skill::Next,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
            Skill::React => "React",
            Skill::Next => "Next",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::CATALOG
            .into_iter()
            .find(|skill| skill.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position-specific answers. Only the variant matching the submitted position is captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "position", rename_all = "snake_case")]
pub enum RoleDetails {
    Unspecified,
    Developer {
        experience: f64,
    },
    Designer {
        experience: f64,
        portfolio: String,
    },
    Manager {
        management_experience: String,
    },
}

impl RoleDetails {
    pub fn position(&self) -> Position {
        match self {
            RoleDetails::Unspecified => Position::Unset,
            RoleDetails::Developer { .. } => Position::Developer,
            RoleDetails::Designer { .. } => Position::Designer,
            RoleDetails::Manager { .. } => Position::Manager,
        }
    }

    pub fn experience(&self) -> Option<f64> {
        match self {
            RoleDetails::Developer { experience } | RoleDetails::Designer { experience, .. } => {
                Some(*experience)
            }
            _ => None,
        }
    }

    pub fn portfolio(&self) -> Option<&str> {
        match self {
            RoleDetails::Designer { portfolio, .. } => Some(portfolio),
            _ => None,
        }
    }

    pub fn management_experience(&self) -> Option<&str> {
        match self {
            RoleDetails::Manager {
                management_experience,
            } => Some(management_experience),
            _ => None,
        }
    }
}

/// Snapshot captured on a successful submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub role: RoleDetails,
    pub skills: Vec<Skill>,
    pub interview_time: NaiveDateTime,
}

impl ApplicationRecord {
    pub fn position(&self) -> Position {
        self.role.position()
    }

    pub fn skills_label(&self) -> String {
        self.skills
            .iter()
            .map(|skill| skill.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Which of the two rendering modes the component is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    #[default]
    Editing,
    Submitted,
}

impl FormMode {
    pub const fn label(self) -> &'static str {
        match self {
            FormMode::Editing => "editing",
            FormMode::Submitted => "submitted",
        }
    }
}
