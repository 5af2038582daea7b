use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::domain::Position;

/// Unique key of every field in the registry, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    PhoneNumber,
    Position,
    Experience,
    Portfolio,
    ManagementExperience,
    Skills,
    InterviewTime,
}

impl FieldName {
    pub const fn key(self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::PhoneNumber => "phoneNumber",
            FieldName::Position => "position",
            FieldName::Experience => "experience",
            FieldName::Portfolio => "portfolio",
            FieldName::ManagementExperience => "managementExperience",
            FieldName::Skills => "skills",
            FieldName::InterviewTime => "interviewTime",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        FIELD_REGISTRY
            .iter()
            .map(|definition| definition.name)
            .find(|name| name.key() == key)
    }

    pub fn definition(self) -> &'static FieldDefinition {
        // Registry order matches declaration order.
        &FIELD_REGISTRY[self as usize]
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Email,
    Number,
    Select,
    MultiSelect,
    DateTime,
}

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\S+@\S+$").expect("email pattern compiles"));
static DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern compiles"));
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).expect("url pattern compiles")
});

/// Shape or numeric constraint attached to a field definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    None,
    Email,
    Digits,
    Url,
    PositiveNumber,
}

impl FormatRule {
    /// Pattern check for text-shaped rules. Numeric rules are evaluated by the validator.
    pub fn matches(self, value: &str) -> bool {
        match self {
            FormatRule::None | FormatRule::PositiveNumber => true,
            FormatRule::Email => EMAIL_PATTERN.is_match(value),
            FormatRule::Digits => DIGITS_PATTERN.is_match(value),
            FormatRule::Url => URL_PATTERN.is_match(value),
        }
    }
}

/// Which positions make a field visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    When(&'static [Position]),
}

impl Visibility {
    pub fn allows(self, position: Position) -> bool {
        match self {
            Visibility::Always => true,
            Visibility::When(positions) => positions.contains(&position),
        }
    }
}

/// Static description of one form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: FieldName,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
    pub format: FormatRule,
    pub visibility: Visibility,
}

impl FieldDefinition {
    pub fn is_visible_for(&self, position: Position) -> bool {
        self.visibility.allows(position)
    }

    pub fn is_conditional(&self) -> bool {
        !matches!(self.visibility, Visibility::Always)
    }
}

const EXPERIENCE_POSITIONS: &[Position] = &[Position::Developer, Position::Designer];
const PORTFOLIO_POSITIONS: &[Position] = &[Position::Designer];
const MANAGEMENT_POSITIONS: &[Position] = &[Position::Manager];

pub static FIELD_REGISTRY: [FieldDefinition; 9] = [
    FieldDefinition {
        name: FieldName::FullName,
        label: "Full Name",
        kind: InputKind::Text,
        required: true,
        format: FormatRule::None,
        visibility: Visibility::Always,
    },
    FieldDefinition {
        name: FieldName::Email,
        label: "Email",
        kind: InputKind::Email,
        required: true,
        format: FormatRule::Email,
        visibility: Visibility::Always,
    },
    FieldDefinition {
        name: FieldName::PhoneNumber,
        label: "Phone Number",
        kind: InputKind::Text,
        required: true,
        format: FormatRule::Digits,
        visibility: Visibility::Always,
    },
    FieldDefinition {
        name: FieldName::Position,
        label: "Applying for Position",
        kind: InputKind::Select,
        required: false,
        format: FormatRule::None,
        visibility: Visibility::Always,
    },
    FieldDefinition {
        name: FieldName::Experience,
        label: "Relevant Experience (Years)",
        kind: InputKind::Number,
        required: true,
        format: FormatRule::PositiveNumber,
        visibility: Visibility::When(EXPERIENCE_POSITIONS),
    },
    FieldDefinition {
        name: FieldName::Portfolio,
        label: "Portfolio URL",
        kind: InputKind::Text,
        required: true,
        format: FormatRule::Url,
        visibility: Visibility::When(PORTFOLIO_POSITIONS),
    },
    FieldDefinition {
        name: FieldName::ManagementExperience,
        label: "Management Experience",
        kind: InputKind::Text,
        required: true,
        format: FormatRule::None,
        visibility: Visibility::When(MANAGEMENT_POSITIONS),
    },
    FieldDefinition {
        name: FieldName::Skills,
        label: "Additional Skills",
        kind: InputKind::MultiSelect,
        required: false,
        format: FormatRule::None,
        visibility: Visibility::Always,
    },
    FieldDefinition {
        name: FieldName::InterviewTime,
        label: "Preferred Interview Time",
        kind: InputKind::DateTime,
        required: true,
        format: FormatRule::None,
        visibility: Visibility::Always,
    },
];

/// A field as it should be rendered for the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleField {
    pub definition: &'static FieldDefinition,
    pub required: bool,
}

impl VisibleField {
    pub fn name(&self) -> FieldName {
        self.definition.name
    }
}

/// Resolve the ordered set of fields to render for `position`.
///
/// `min_skills` promotes the skills selection to required when non-zero.
pub fn visible_fields(position: Position, min_skills: usize) -> Vec<VisibleField> {
    FIELD_REGISTRY
        .iter()
        .filter(|definition| definition.is_visible_for(position))
        .map(|definition| VisibleField {
            definition,
            required: definition.required
                || (definition.name == FieldName::Skills && min_skills > 0),
        })
        .collect()
}

/// Conditional fields that become required for `position`.
pub fn conditional_requirements(position: Position) -> Vec<FieldName> {
    FIELD_REGISTRY
        .iter()
        .filter(|definition| definition.is_conditional() && definition.is_visible_for(position))
        .map(|definition| definition.name)
        .collect()
}
