mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{ApplicationRecord, Position, RoleDetails};
use super::fields::{visible_fields, FieldName};
use super::values::FormValues;

/// Category of a field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    RequiredFieldMissing,
    FormatInvalid,
    ConstraintViolation,
}

/// Inline error shown beneath a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl FieldError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Aggregate error map keyed by field, ordered like the registry. At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldName, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn kind_of(&self, field: FieldName) -> Option<ValidationErrorKind> {
        self.get(field).map(|error| error.kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    pub(crate) fn set(&mut self, field: FieldName, outcome: Option<FieldError>) {
        match outcome {
            Some(error) => {
                self.0.insert(field, error);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub(crate) fn retain_visible(&mut self, position: Position) {
        self.0
            .retain(|field, _| field.definition().is_visible_for(position));
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// Applies the rule table to a set of form values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    min_skills: usize,
}

impl Validator {
    pub fn new(min_skills: usize) -> Self {
        Self { min_skills }
    }

    pub fn min_skills(&self) -> usize {
        self.min_skills
    }

    /// Validate every field visible for the current position.
    pub fn validate(&self, values: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for field in visible_fields(values.position, self.min_skills) {
            errors.set(field.name(), self.check_field(values, field.name()));
        }
        errors
    }

    /// Validate a single field. Hidden fields always pass.
    pub fn check_field(&self, values: &FormValues, field: FieldName) -> Option<FieldError> {
        if !field.definition().is_visible_for(values.position) {
            return None;
        }
        rules::check(values, field, self.min_skills)
    }

    /// Validate and, when clean, build the record for the submitted position.
    pub fn capture(&self, values: &FormValues) -> Result<ApplicationRecord, ValidationErrors> {
        let errors = self.validate(values);
        if !errors.is_empty() {
            return Err(errors);
        }

        let Some(interview_time) = values.interview_time else {
            let mut errors = ValidationErrors::default();
            errors.set(
                FieldName::InterviewTime,
                rules::check(values, FieldName::InterviewTime, self.min_skills),
            );
            return Err(errors);
        };

        let experience = || rules::parse_experience(&values.experience).unwrap_or_default();
        let role = match values.position {
            Position::Unset => RoleDetails::Unspecified,
            Position::Developer => RoleDetails::Developer {
                experience: experience(),
            },
            Position::Designer => RoleDetails::Designer {
                experience: experience(),
                portfolio: values.portfolio.clone(),
            },
            Position::Manager => RoleDetails::Manager {
                management_experience: values.management_experience.clone(),
            },
        };

        Ok(ApplicationRecord {
            full_name: values.full_name.clone(),
            email: values.email.clone(),
            phone_number: values.phone_number.clone(),
            role,
            skills: values.skills.clone(),
            interview_time,
        })
    }
}
