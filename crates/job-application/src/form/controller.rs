use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::config::FormConfig;

use super::domain::{ApplicationRecord, FormMode, Position, Skill};
use super::events::{parse_skill, EventError, FormEvent};
use super::fields::{visible_fields, FieldName, VisibleField};
use super::picker::DateTimePicker;
use super::validation::{ValidationErrors, Validator};
use super::values::FormValues;
use super::views::{FormView, SummaryView};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted(ApplicationRecord),
    Rejected(ValidationErrors),
    /// The component was already showing a summary.
    Ignored,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// What an applied event did to the component.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Updated,
    Submitted(SubmitOutcome),
    Reset,
    Ignored,
}

/// Owns the whole form state: field values, inline errors, the last record, and the mode.
#[derive(Debug, Clone)]
pub struct FormController {
    validator: Validator,
    picker: DateTimePicker,
    values: FormValues,
    errors: ValidationErrors,
    last_record: Option<ApplicationRecord>,
    mode: FormMode,
    submit_attempted: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(Validator::default(), DateTimePicker::default())
    }
}

impl FormController {
    pub fn new(validator: Validator, picker: DateTimePicker) -> Self {
        Self {
            validator,
            picker,
            values: FormValues::default(),
            errors: ValidationErrors::default(),
            last_record: None,
            mode: FormMode::Editing,
            submit_attempted: false,
        }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(
            Validator::new(config.min_skills),
            DateTimePicker::new(config.interview_time_format.clone()),
        )
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn last_record(&self) -> Option<&ApplicationRecord> {
        self.last_record.as_ref()
    }

    pub fn picker(&self) -> &DateTimePicker {
        &self.picker
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn position(&self) -> Position {
        self.values.position
    }

    pub fn visible_fields(&self) -> Vec<VisibleField> {
        visible_fields(self.values.position, self.validator.min_skills())
    }

    pub fn form_view(&self) -> FormView {
        FormView::build(self)
    }

    /// Summary of the last submission, if the component is in summary mode.
    pub fn summary_view(&self) -> Option<SummaryView> {
        match (self.mode, &self.last_record) {
            (FormMode::Submitted, Some(record)) => Some(SummaryView::build(record, &self.picker)),
            _ => None,
        }
    }

    pub fn set_text(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<(), EventError> {
        if !self.accepts_edits("set_text") {
            return Ok(());
        }
        let slot = self
            .values
            .text_mut(field)
            .ok_or_else(|| EventError::NotTextField(field.key().to_string()))?;
        *slot = value.into();
        self.revalidate(field);
        Ok(())
    }

    pub fn select_position(&mut self, position: Position) {
        if !self.accepts_edits("select_position") {
            return;
        }
        if self.values.position != position {
            debug!(from = %self.values.position, to = %position, "position changed");
        }
        self.values.position = position;
        self.errors.retain_visible(position);
    }

    pub fn toggle_skill(&mut self, skill: Skill) {
        if !self.accepts_edits("toggle_skill") {
            return;
        }
        self.values.toggle_skill(skill);
        self.revalidate(FieldName::Skills);
    }

    pub fn set_skills(&mut self, skills: impl IntoIterator<Item = Skill>) {
        if !self.accepts_edits("set_skills") {
            return;
        }
        self.values.set_skills(skills);
        self.revalidate(FieldName::Skills);
    }

    /// Feed raw picker text. Returns whether it resolved to a timestamp.
    pub fn pick_interview_time(&mut self, raw: &str) -> bool {
        let selection = self.picker.parse(raw);
        let picked = selection.is_some();
        self.set_interview_time(selection);
        picked
    }

    pub fn set_interview_time(&mut self, value: Option<NaiveDateTime>) {
        if !self.accepts_edits("set_interview_time") {
            return;
        }
        self.values.interview_time = value;
        self.revalidate(FieldName::InterviewTime);
    }

    /// Validate and, on success, capture the record, blank the inputs, and show the summary.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.mode == FormMode::Submitted {
            debug!("submit ignored while showing a submission");
            return SubmitOutcome::Ignored;
        }

        self.submit_attempted = true;
        match self.validator.capture(&self.values) {
            Ok(record) => {
                info!(position = %record.position(), "application submitted");
                self.last_record = Some(record.clone());
                self.values = FormValues::default();
                self.errors.clear();
                self.submit_attempted = false;
                self.mode = FormMode::Submitted;
                SubmitOutcome::Accepted(record)
            }
            Err(errors) => {
                info!(error_count = errors.len(), "application rejected");
                self.errors = errors.clone();
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Start a new application. Returns `false` when already editing.
    pub fn reset(&mut self) -> bool {
        if self.mode == FormMode::Editing {
            debug!("reset ignored while editing");
            return false;
        }

        info!("starting new application");
        self.last_record = None;
        self.values = FormValues::default();
        self.errors.clear();
        self.submit_attempted = false;
        self.mode = FormMode::Editing;
        true
    }

    pub fn apply(&mut self, event: FormEvent) -> Result<EventOutcome, EventError> {
        if self.mode == FormMode::Submitted
            && !matches!(event, FormEvent::Submit | FormEvent::Reset)
        {
            debug!(?event, "edit ignored while showing a submission");
            return Ok(EventOutcome::Ignored);
        }

        match event {
            FormEvent::SetField { field, value } => {
                let name = FieldName::from_key(&field).ok_or(EventError::UnknownField(field))?;
                match name {
                    FieldName::Position => self.select_position(Position::from_value(&value)),
                    FieldName::InterviewTime => {
                        self.pick_interview_time(&value);
                    }
                    other => self.set_text(other, value)?,
                }
            }
            FormEvent::SelectPosition { position } => {
                self.select_position(Position::from_value(&position));
            }
            FormEvent::ToggleSkill { skill } => self.toggle_skill(parse_skill(&skill)?),
            FormEvent::SetSkills { skills } => {
                let parsed = skills
                    .iter()
                    .map(|raw| parse_skill(raw))
                    .collect::<Result<Vec<_>, _>>()?;
                self.set_skills(parsed);
            }
            FormEvent::PickInterviewTime { value } => {
                self.pick_interview_time(&value);
            }
            FormEvent::ClearInterviewTime => self.set_interview_time(None),
            FormEvent::Submit => {
                return Ok(match self.submit() {
                    SubmitOutcome::Ignored => EventOutcome::Ignored,
                    outcome => EventOutcome::Submitted(outcome),
                });
            }
            FormEvent::Reset => {
                return Ok(if self.reset() {
                    EventOutcome::Reset
                } else {
                    EventOutcome::Ignored
                });
            }
        }

        Ok(EventOutcome::Updated)
    }

    fn accepts_edits(&self, action: &'static str) -> bool {
        if self.mode == FormMode::Submitted {
            debug!(action, "edit ignored while showing a submission");
            return false;
        }
        true
    }

    // Errors only track edits once a submit has been attempted.
    fn revalidate(&mut self, field: FieldName) {
        if self.submit_attempted {
            let outcome = self.validator.check_field(&self.values, field);
            self.errors.set(field, outcome);
        }
    }
}
