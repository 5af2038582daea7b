//! Render models for the two component modes.

use std::fmt;

use serde::Serialize;

use super::controller::FormController;
use super::domain::{ApplicationRecord, Position, Skill};
use super::fields::{FieldName, InputKind};
use super::picker::DateTimePicker;
use super::validation::{FieldError, ValidationErrorKind};

pub const FORM_HEADING: &str = "Job Application Form";
pub const SUMMARY_HEADING: &str = "Submitted Data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: FieldName,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
    pub value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldErrorView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrorView {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl From<&FieldError> for FieldErrorView {
    fn from(error: &FieldError) -> Self {
        Self {
            kind: error.kind,
            message: error.message.clone(),
        }
    }
}

/// Form mode: the visible inputs for the current position with their inline errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub heading: &'static str,
    pub fields: Vec<FieldView>,
}

impl FormView {
    pub(crate) fn build(controller: &FormController) -> Self {
        let values = controller.values();
        let errors = controller.errors();
        let picker = controller.picker();

        let fields = controller
            .visible_fields()
            .into_iter()
            .map(|field| {
                let name = field.name();
                let (value, options, placeholder) = match name {
                    FieldName::Position => (
                        values.position.value().to_string(),
                        position_options(values.position),
                        None,
                    ),
                    FieldName::Skills => (
                        values
                            .skills
                            .iter()
                            .map(|skill| skill.label())
                            .collect::<Vec<_>>()
                            .join(", "),
                        skill_options(&values.skills),
                        None,
                    ),
                    FieldName::InterviewTime => (
                        values
                            .interview_time
                            .as_ref()
                            .map(|time| picker.format(time))
                            .unwrap_or_default(),
                        Vec::new(),
                        Some(picker.placeholder()),
                    ),
                    other => (
                        values.text(other).unwrap_or_default().to_string(),
                        Vec::new(),
                        None,
                    ),
                };

                FieldView {
                    name,
                    label: field.definition.label,
                    kind: field.definition.kind,
                    required: field.required,
                    value,
                    options,
                    placeholder,
                    error: errors.get(name).map(FieldErrorView::from),
                }
            })
            .collect();

        Self {
            heading: FORM_HEADING,
            fields,
        }
    }

    pub fn field(&self, name: FieldName) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.name == name)
    }
}

fn position_options(current: Position) -> Vec<OptionView> {
    std::iter::once(Position::Unset)
        .chain(Position::SELECTABLE)
        .map(|position| OptionView {
            value: position.value().to_string(),
            label: position.option_label().to_string(),
            selected: position == current,
        })
        .collect()
}

fn skill_options(selected: &[Skill]) -> Vec<OptionView> {
    Skill::CATALOG
        .into_iter()
        .map(|skill| OptionView {
            value: skill.label().to_string(),
            label: skill.label().to_string(),
            selected: selected.contains(&skill),
        })
        .collect()
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for field in &self.fields {
            let marker = if field.required { " *" } else { "" };
            match field.kind {
                InputKind::Select | InputKind::MultiSelect => {
                    let options = field
                        .options
                        .iter()
                        .map(|option| {
                            let mark = if option.selected { "x" } else { " " };
                            format!("[{mark}] {}", option.label)
                        })
                        .collect::<Vec<_>>()
                        .join("  ");
                    writeln!(f, "{}{}: {}", field.label, marker, options)?;
                }
                _ => {
                    let shown = match (field.value.is_empty(), field.placeholder) {
                        (true, Some(placeholder)) => format!("<{placeholder}>"),
                        _ => field.value.clone(),
                    };
                    writeln!(f, "{}{}: {}", field.label, marker, shown)?;
                }
            }
            if let Some(error) = &field.error {
                writeln!(f, "  ! {}", error.message)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// Summary mode: read-only lines of the last record, mirroring the form's conditional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub heading: &'static str,
    pub lines: Vec<SummaryLine>,
}

impl SummaryView {
    pub fn build(record: &ApplicationRecord, picker: &DateTimePicker) -> Self {
        let mut lines = vec![
            line(FieldName::FullName, record.full_name.clone()),
            line(FieldName::Email, record.email.clone()),
            line(FieldName::PhoneNumber, record.phone_number.clone()),
            line(FieldName::Position, record.position().value().to_string()),
        ];

        if let Some(experience) = record.role.experience() {
            lines.push(line(FieldName::Experience, experience.to_string()));
        }
        if let Some(portfolio) = record.role.portfolio() {
            lines.push(line(FieldName::Portfolio, portfolio.to_string()));
        }
        if let Some(management) = record.role.management_experience() {
            lines.push(line(FieldName::ManagementExperience, management.to_string()));
        }

        lines.push(line(FieldName::Skills, record.skills_label()));
        lines.push(line(
            FieldName::InterviewTime,
            picker.format(&record.interview_time),
        ));

        Self {
            heading: SUMMARY_HEADING,
            lines,
        }
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.lines.iter().map(|line| line.label).collect()
    }
}

fn line(field: FieldName, value: String) -> SummaryLine {
    SummaryLine {
        label: field.definition().label,
        value,
    }
}

impl fmt::Display for SummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for line in &self.lines {
            writeln!(f, "{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}
