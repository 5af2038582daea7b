use super::common::*;
use crate::form::domain::{Position, RoleDetails, Skill};
use crate::form::fields::FieldName;
use crate::form::validation::{ValidationErrorKind, Validator};
use crate::form::values::FormValues;

#[test]
fn blank_form_reports_every_always_required_field() {
    let errors = Validator::default().validate(&FormValues::default());

    let fields: Vec<FieldName> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(
        fields,
        vec![
            FieldName::FullName,
            FieldName::Email,
            FieldName::PhoneNumber,
            FieldName::InterviewTime,
        ]
    );
    assert!(errors
        .iter()
        .all(|(_, error)| error.kind == ValidationErrorKind::RequiredFieldMissing));
    assert_eq!(
        errors.get(FieldName::InterviewTime).map(|e| e.message.as_str()),
        Some("Preferred Interview Time is required")
    );
}

#[test]
fn unknown_positions_require_no_conditional_fields() {
    let mut values = developer_values();
    values.position = Position::from_value("Astronaut");
    values.experience.clear();

    let errors = Validator::default().validate(&values);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn email_and_phone_shapes_are_enforced() {
    let mut values = developer_values();
    values.email = "jane.x.com".to_string();
    values.phone_number = "555-123-4567".to_string();

    let errors = Validator::default().validate(&values);
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.kind_of(FieldName::Email),
        Some(ValidationErrorKind::FormatInvalid)
    );
    assert_eq!(
        errors.get(FieldName::Email).map(|e| e.message.as_str()),
        Some("Invalid email format")
    );
    assert_eq!(
        errors.get(FieldName::PhoneNumber).map(|e| e.message.as_str()),
        Some("Phone Number must be a number")
    );
}

#[test]
fn whitespace_counts_as_a_value() {
    let mut values = developer_values();
    values.full_name = "   ".to_string();
    assert!(Validator::default().validate(&values).is_empty());
}

#[test]
fn designer_portfolio_must_be_url_shaped() {
    let mut values = designer_values();
    values.portfolio = "notaurl".to_string();

    let errors = Validator::default().validate(&values);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.kind_of(FieldName::Portfolio),
        Some(ValidationErrorKind::FormatInvalid)
    );
    assert_eq!(
        errors.get(FieldName::Portfolio).map(ToString::to_string),
        Some("Invalid URL format".to_string())
    );
}

#[test]
fn designer_requires_portfolio_and_experience() {
    let mut values = designer_values();
    values.portfolio.clear();
    values.experience.clear();

    let errors = Validator::default().validate(&values);
    assert_eq!(
        errors.get(FieldName::Portfolio).map(|e| e.message.as_str()),
        Some("Portfolio URL is required")
    );
    assert_eq!(
        errors.get(FieldName::Experience).map(|e| e.message.as_str()),
        Some("Relevant Experience is required")
    );
}

#[test]
fn developer_experience_must_be_positive() {
    for raw in ["0", "-2", "0.0"] {
        let mut values = developer_values();
        values.experience = raw.to_string();

        let errors = Validator::default().validate(&values);
        assert_eq!(
            errors.kind_of(FieldName::Experience),
            Some(ValidationErrorKind::ConstraintViolation),
            "{raw}"
        );
        assert_eq!(
            errors.get(FieldName::Experience).map(|e| e.message.as_str()),
            Some("Experience must be greater than 0")
        );
    }
}

#[test]
fn non_numeric_experience_is_a_format_error() {
    let mut values = developer_values();
    values.experience = "three".to_string();

    let errors = Validator::default().validate(&values);
    assert_eq!(
        errors.kind_of(FieldName::Experience),
        Some(ValidationErrorKind::FormatInvalid)
    );
}

#[test]
fn manager_requires_management_experience() {
    let mut values = manager_values();
    values.management_experience.clear();

    let errors = Validator::default().validate(&values);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(FieldName::ManagementExperience).map(|e| e.message.as_str()),
        Some("Management Experience is required")
    );
}

#[test]
fn hidden_fields_are_never_validated() {
    let mut values = manager_values();
    values.portfolio = "notaurl".to_string();
    values.experience = "-1".to_string();

    assert!(Validator::default().validate(&values).is_empty());
    assert!(Validator::default()
        .check_field(&values, FieldName::Portfolio)
        .is_none());
}

#[test]
fn skills_are_optional_unless_a_minimum_is_configured() {
    let values = manager_values();
    assert!(values.skills.is_empty());
    assert!(Validator::default().validate(&values).is_empty());

    let errors = Validator::new(1).validate(&values);
    assert_eq!(
        errors.kind_of(FieldName::Skills),
        Some(ValidationErrorKind::RequiredFieldMissing)
    );
    assert_eq!(
        errors.get(FieldName::Skills).map(|e| e.message.as_str()),
        Some("Select at least 1 skill(s)")
    );
}

#[test]
fn capture_builds_role_details_for_the_submitted_position_only() {
    let mut values = designer_values();
    values.management_experience = "left over".to_string();

    let record = Validator::default().capture(&values).expect("valid designer");
    assert_eq!(
        record.role,
        RoleDetails::Designer {
            experience: 5.0,
            portfolio: "https://jane.design".to_string(),
        }
    );
    assert_eq!(record.skills, vec![Skill::Css, Skill::React]);
    assert_eq!(record.interview_time, interview_time());

    let mut values = manager_values();
    values.portfolio = "https://stale.example".to_string();
    let record = Validator::default().capture(&values).expect("valid manager");
    assert_eq!(record.role.portfolio(), None);
    assert_eq!(record.role.experience(), None);
    assert_eq!(
        record.role.management_experience(),
        Some("Led a team of 8 for 4 years")
    );
}

#[test]
fn capture_returns_errors_for_invalid_values() {
    let mut values = developer_values();
    values.experience = "0".to_string();

    let errors = Validator::default()
        .capture(&values)
        .expect_err("zero experience rejected");
    assert_eq!(
        errors.kind_of(FieldName::Experience),
        Some(ValidationErrorKind::ConstraintViolation)
    );
}
