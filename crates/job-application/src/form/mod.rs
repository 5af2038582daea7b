//! Job application form: field registry, conditional visibility, validation, and the
//! submit/reset lifecycle behind the form and summary views.

pub mod controller;
pub mod domain;
pub mod events;
pub mod fields;
pub mod picker;
pub mod validation;
pub mod values;
pub mod views;

#[cfg(test)]
mod tests;

pub use controller::{EventOutcome, FormController, SubmitOutcome};
pub use domain::{ApplicationRecord, FormMode, Position, RoleDetails, Skill};
pub use events::{read_event_script, EventError, EventScriptError, FormEvent};
pub use fields::{
    conditional_requirements, visible_fields, FieldDefinition, FieldName, FormatRule, InputKind,
    VisibleField, FIELD_REGISTRY,
};
pub use picker::DateTimePicker;
pub use validation::{FieldError, ValidationErrorKind, ValidationErrors, Validator};
pub use values::FormValues;
pub use views::{FieldView, FormView, SummaryLine, SummaryView};
