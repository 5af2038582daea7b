use super::common::*;
use crate::config::FormConfig;
use crate::form::controller::{EventOutcome, FormController, SubmitOutcome};
use crate::form::domain::{FormMode, Position, RoleDetails, Skill};
use crate::form::events::{EventError, FormEvent};
use crate::form::fields::FieldName;
use crate::form::validation::ValidationErrorKind;
use crate::form::values::FormValues;

#[test]
fn valid_submit_captures_record_and_clears_inputs() {
    let mut controller = filled_controller(&developer_values());

    let outcome = controller.submit();
    let record = match outcome {
        SubmitOutcome::Accepted(record) => record,
        other => panic!("expected accepted submission, got {other:?}"),
    };

    assert_eq!(record.role, RoleDetails::Developer { experience: 3.0 });
    assert_eq!(controller.mode(), FormMode::Submitted);
    assert_eq!(controller.last_record(), Some(&record));
    assert!(controller.values().is_blank());
    assert!(controller.errors().is_empty());
}

#[test]
fn invalid_submit_stays_editing_without_record() {
    let mut values = designer_values();
    values.portfolio = "notaurl".to_string();
    let mut controller = filled_controller(&values);

    match controller.submit() {
        SubmitOutcome::Rejected(errors) => assert_eq!(
            errors.kind_of(FieldName::Portfolio),
            Some(ValidationErrorKind::FormatInvalid)
        ),
        other => panic!("expected rejection, got {other:?}"),
    }

    assert_eq!(controller.mode(), FormMode::Editing);
    assert!(controller.last_record().is_none());
    assert_eq!(controller.values().portfolio, "notaurl");
    assert_eq!(controller.errors().len(), 1);
}

#[test]
fn errors_clear_as_soon_as_the_field_passes() {
    let mut values = developer_values();
    values.experience = "0".to_string();
    let mut controller = filled_controller(&values);

    assert!(!controller.submit().is_accepted());
    assert_eq!(
        controller.errors().kind_of(FieldName::Experience),
        Some(ValidationErrorKind::ConstraintViolation)
    );

    controller
        .set_text(FieldName::Experience, "")
        .expect("text field");
    assert_eq!(
        controller.errors().kind_of(FieldName::Experience),
        Some(ValidationErrorKind::RequiredFieldMissing)
    );

    controller
        .set_text(FieldName::Experience, "2")
        .expect("text field");
    assert!(controller.errors().get(FieldName::Experience).is_none());
    assert!(controller.submit().is_accepted());
}

#[test]
fn edits_before_first_submit_do_not_raise_errors() {
    let mut controller = FormController::default();
    controller
        .set_text(FieldName::Email, "not-an-email")
        .expect("text field");
    assert!(controller.errors().is_empty());
}

#[test]
fn changing_position_hides_designer_fields_and_drops_their_errors() {
    let mut values = designer_values();
    values.portfolio = "notaurl".to_string();
    let mut controller = filled_controller(&values);
    assert!(!controller.submit().is_accepted());
    assert!(controller.errors().get(FieldName::Portfolio).is_some());

    controller.select_position(Position::Developer);
    controller.select_position(Position::Developer);

    let visible: Vec<FieldName> = controller
        .visible_fields()
        .iter()
        .map(|field| field.name())
        .collect();
    assert!(!visible.contains(&FieldName::Portfolio));
    assert!(visible.contains(&FieldName::Experience));
    assert!(controller.errors().get(FieldName::Portfolio).is_none());

    // The hidden draft survives and is restored when switching back.
    assert_eq!(controller.values().portfolio, "notaurl");
    let record = match controller.submit() {
        SubmitOutcome::Accepted(record) => record,
        other => panic!("expected accepted submission, got {other:?}"),
    };
    assert_eq!(record.role.portfolio(), None);
}

#[test]
fn reset_returns_to_blank_editing() {
    let mut controller = filled_controller(&developer_values());
    assert!(controller.submit().is_accepted());

    assert!(controller.reset());
    assert_eq!(controller.mode(), FormMode::Editing);
    assert!(controller.last_record().is_none());
    assert!(controller.values().is_blank());
    assert!(controller.errors().is_empty());
    assert!(controller.summary_view().is_none());
}

#[test]
fn reset_while_editing_and_submit_while_submitted_are_ignored() {
    let mut controller = filled_controller(&developer_values());
    assert!(!controller.reset());
    assert_eq!(controller.values(), &developer_values());

    assert!(controller.submit().is_accepted());
    assert_eq!(controller.submit(), SubmitOutcome::Ignored);
    assert!(controller.last_record().is_some());
}

#[test]
fn edits_are_ignored_while_showing_a_submission() {
    let mut controller = filled_controller(&developer_values());
    assert!(controller.submit().is_accepted());

    controller
        .set_text(FieldName::FullName, "Someone Else")
        .expect("ignored edit is not an error");
    controller.toggle_skill(Skill::Python);
    assert!(controller.values().is_blank());

    let outcome = controller
        .apply(FormEvent::SelectPosition {
            position: "Manager".to_string(),
        })
        .expect("event accepted");
    assert_eq!(outcome, EventOutcome::Ignored);
}

#[test]
fn apply_routes_events_through_the_lifecycle() {
    let mut controller = FormController::default();
    let events = vec![
        FormEvent::SetField {
            field: "fullName".to_string(),
            value: "Jane Doe".to_string(),
        },
        FormEvent::SetField {
            field: "email".to_string(),
            value: "jane@x.com".to_string(),
        },
        FormEvent::SetField {
            field: "phoneNumber".to_string(),
            value: "5551234567".to_string(),
        },
        FormEvent::SelectPosition {
            position: "Manager".to_string(),
        },
        FormEvent::SetField {
            field: "managementExperience".to_string(),
            value: "Ran platform org".to_string(),
        },
        FormEvent::ToggleSkill {
            skill: "python".to_string(),
        },
        FormEvent::PickInterviewTime {
            value: "2025-10-20 14:30".to_string(),
        },
    ];
    for event in events {
        assert_eq!(controller.apply(event), Ok(EventOutcome::Updated));
    }

    match controller.apply(FormEvent::Submit) {
        Ok(EventOutcome::Submitted(SubmitOutcome::Accepted(record))) => {
            assert_eq!(record.position(), Position::Manager);
            assert_eq!(record.skills, vec![Skill::Python]);
            assert_eq!(record.interview_time, interview_time());
        }
        other => panic!("expected accepted submission, got {other:?}"),
    }

    assert_eq!(controller.apply(FormEvent::Submit), Ok(EventOutcome::Ignored));
    assert_eq!(controller.apply(FormEvent::Reset), Ok(EventOutcome::Reset));
    assert_eq!(controller.apply(FormEvent::Reset), Ok(EventOutcome::Ignored));
}

#[test]
fn apply_rejects_unroutable_events() {
    let mut controller = FormController::default();
    assert_eq!(
        controller.apply(FormEvent::SetField {
            field: "salary".to_string(),
            value: "lots".to_string(),
        }),
        Err(EventError::UnknownField("salary".to_string()))
    );
    assert_eq!(
        controller.apply(FormEvent::ToggleSkill {
            skill: "Rust".to_string(),
        }),
        Err(EventError::UnknownSkill("Rust".to_string()))
    );
    assert_eq!(
        controller.set_text(FieldName::Skills, "React"),
        Err(EventError::NotTextField("skills".to_string()))
    );
}

#[test]
fn unparseable_picker_text_leaves_interview_time_missing() {
    let mut controller = filled_controller(&developer_values());
    assert!(!controller.pick_interview_time("whenever works"));
    assert!(controller.values().interview_time.is_none());

    match controller.submit() {
        SubmitOutcome::Rejected(errors) => assert_eq!(
            errors.kind_of(FieldName::InterviewTime),
            Some(ValidationErrorKind::RequiredFieldMissing)
        ),
        other => panic!("expected rejection, got {other:?}"),
    }

    assert!(controller.pick_interview_time("2025-10-20T14:30"));
    assert!(controller.errors().is_empty());
}

#[test]
fn configured_minimum_skills_blocks_submission() {
    let config = FormConfig {
        min_skills: 2,
        ..FormConfig::default()
    };
    let mut controller = FormController::from_config(&config);
    fill(&mut controller, &developer_values());

    assert!(!controller.submit().is_accepted());
    assert_eq!(
        controller.errors().kind_of(FieldName::Skills),
        Some(ValidationErrorKind::RequiredFieldMissing)
    );

    controller.toggle_skill(Skill::Next);
    assert!(controller.errors().is_empty());
    assert!(controller.submit().is_accepted());
}

#[test]
fn blank_values_are_the_default_state() {
    let controller = FormController::default();
    assert_eq!(controller.mode(), FormMode::Editing);
    assert_eq!(controller.values(), &FormValues::default());
    assert_eq!(controller.position(), Position::Unset);
}
