use chrono::{NaiveDate, NaiveDateTime};

use crate::form::controller::FormController;
use crate::form::domain::{Position, Skill};
use crate::form::fields::FieldName;
use crate::form::values::FormValues;

pub(super) fn interview_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 20)
        .expect("valid date")
        .and_hms_opt(14, 30, 0)
        .expect("valid time")
}

pub(super) fn developer_values() -> FormValues {
    FormValues {
        full_name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone_number: "5551234567".to_string(),
        position: Position::Developer,
        experience: "3".to_string(),
        skills: vec![Skill::React],
        interview_time: Some(interview_time()),
        ..FormValues::default()
    }
}

pub(super) fn designer_values() -> FormValues {
    FormValues {
        position: Position::Designer,
        experience: "5".to_string(),
        portfolio: "https://jane.design".to_string(),
        skills: vec![Skill::Css, Skill::React],
        ..developer_values()
    }
}

pub(super) fn manager_values() -> FormValues {
    FormValues {
        position: Position::Manager,
        experience: String::new(),
        management_experience: "Led a team of 8 for 4 years".to_string(),
        skills: Vec::new(),
        ..developer_values()
    }
}

/// Drive a controller through the same edits a user would make.
pub(super) fn fill(controller: &mut FormController, values: &FormValues) {
    for field in [
        FieldName::FullName,
        FieldName::Email,
        FieldName::PhoneNumber,
        FieldName::Experience,
        FieldName::Portfolio,
        FieldName::ManagementExperience,
    ] {
        let text = values.text(field).unwrap_or_default().to_string();
        controller.set_text(field, text).expect("text field");
    }
    controller.select_position(values.position);
    controller.set_skills(values.skills.iter().copied());
    controller.set_interview_time(values.interview_time);
}

pub(super) fn filled_controller(values: &FormValues) -> FormController {
    let mut controller = FormController::default();
    fill(&mut controller, values);
    controller
}
