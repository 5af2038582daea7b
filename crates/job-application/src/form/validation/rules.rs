use super::super::fields::{FieldName, FormatRule};
use super::super::values::FormValues;
use super::{FieldError, ValidationErrorKind};

pub(super) fn check(
    values: &FormValues,
    field: FieldName,
    min_skills: usize,
) -> Option<FieldError> {
    match field {
        FieldName::FullName => required(&values.full_name, "Full Name is required"),
        FieldName::Email => required(&values.email, "Email is required")
            .or_else(|| pattern(&values.email, FormatRule::Email, "Invalid email format")),
        FieldName::PhoneNumber => {
            required(&values.phone_number, "Phone Number is required").or_else(|| {
                pattern(
                    &values.phone_number,
                    FormatRule::Digits,
                    "Phone Number must be a number",
                )
            })
        }
        FieldName::Position => None,
        FieldName::Experience => required(&values.experience, "Relevant Experience is required")
            .or_else(|| positive_number(&values.experience)),
        FieldName::Portfolio => required(&values.portfolio, "Portfolio URL is required")
            .or_else(|| pattern(&values.portfolio, FormatRule::Url, "Invalid URL format")),
        FieldName::ManagementExperience => required(
            &values.management_experience,
            "Management Experience is required",
        ),
        FieldName::Skills => minimum_selection(values.skills.len(), min_skills),
        FieldName::InterviewTime => match values.interview_time {
            Some(_) => None,
            None => Some(FieldError::new(
                ValidationErrorKind::RequiredFieldMissing,
                "Preferred Interview Time is required",
            )),
        },
    }
}

pub(super) fn parse_experience(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

// Whitespace counts as a value; only the empty string is missing.
fn required(value: &str, message: &str) -> Option<FieldError> {
    value
        .is_empty()
        .then(|| FieldError::new(ValidationErrorKind::RequiredFieldMissing, message))
}

fn pattern(value: &str, rule: FormatRule, message: &str) -> Option<FieldError> {
    (!rule.matches(value)).then(|| FieldError::new(ValidationErrorKind::FormatInvalid, message))
}

fn positive_number(raw: &str) -> Option<FieldError> {
    match parse_experience(raw) {
        None => Some(FieldError::new(
            ValidationErrorKind::FormatInvalid,
            "Experience must be a number",
        )),
        Some(years) if years <= 0.0 => Some(FieldError::new(
            ValidationErrorKind::ConstraintViolation,
            "Experience must be greater than 0",
        )),
        Some(_) => None,
    }
}

fn minimum_selection(selected: usize, min_skills: usize) -> Option<FieldError> {
    (selected < min_skills).then(|| {
        FieldError::new(
            ValidationErrorKind::RequiredFieldMissing,
            format!("Select at least {min_skills} skill(s)"),
        )
    })
}
