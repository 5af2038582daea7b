//! Line-oriented front end for the form: prompts for each visible field, submits, shows
//! inline errors, re-prompts the failing fields, and offers a new application after the
//! summary.

use job_application::form::{
    FieldName, FormController, Position, Skill, SubmitOutcome, FIELD_REGISTRY,
};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Totals reported when the session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub submitted: usize,
    pub rejected: usize,
}

pub struct Session<R, W> {
    controller: FormController,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(controller: FormController, input: R, output: W) -> Self {
        Self {
            controller,
            input,
            output,
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the applicant declines a new application or input ends.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            writeln!(self.output, "{}", self.controller.form_view().heading)?;
            let mut pending: Vec<FieldName> =
                FIELD_REGISTRY.iter().map(|definition| definition.name).collect();

            let accepted = loop {
                if !self.prompt_fields(&pending)? {
                    return Ok(summary);
                }

                match self.controller.submit() {
                    SubmitOutcome::Accepted(_) => break true,
                    SubmitOutcome::Rejected(errors) => {
                        summary.rejected += 1;
                        writeln!(self.output, "\nPlease correct the following:")?;
                        for (field, error) in errors.iter() {
                            writeln!(
                                self.output,
                                "  {}: {}",
                                field.definition().label,
                                error.message
                            )?;
                        }
                        pending = errors.iter().map(|(field, _)| field).collect();
                    }
                    SubmitOutcome::Ignored => break false,
                }
            };

            if accepted {
                summary.submitted += 1;
                if let Some(view) = self.controller.summary_view() {
                    writeln!(self.output, "\n{view}")?;
                }
            }

            match self.ask("Start a new application? [y/N]: ")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    self.controller.reset();
                    writeln!(self.output)?;
                }
                _ => return Ok(summary),
            }
        }
    }

    // Returns false when input is exhausted.
    fn prompt_fields(&mut self, fields: &[FieldName]) -> io::Result<bool> {
        for &field in fields {
            // Visibility can change mid-pass once a position is picked.
            if !field.definition().is_visible_for(self.controller.position()) {
                continue;
            }
            if !self.prompt_field(field)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn prompt_field(&mut self, field: FieldName) -> io::Result<bool> {
        let label = field.definition().label;
        match field {
            FieldName::Position => {
                let Some(answer) = self.ask(&format!(
                    "{label} [Developer/Designer/Manager, blank for none]: "
                ))?
                else {
                    return Ok(false);
                };
                self.controller.select_position(Position::from_value(&answer));
            }
            FieldName::Skills => loop {
                let catalog = Skill::CATALOG
                    .iter()
                    .map(|skill| skill.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                let Some(answer) = self.ask(&format!("{label} (comma separated: {catalog}): "))?
                else {
                    return Ok(false);
                };
                let parsed = answer
                    .split(',')
                    .map(str::trim)
                    .filter(|raw| !raw.is_empty())
                    .map(|raw| Skill::parse(raw).ok_or(raw))
                    .collect::<Result<Vec<_>, _>>();
                match parsed {
                    Ok(skills) => {
                        self.controller.set_skills(skills);
                        break;
                    }
                    Err(unknown) => {
                        writeln!(self.output, "  '{unknown}' is not one of: {catalog}")?;
                    }
                }
            },
            FieldName::InterviewTime => {
                let Some(answer) = self.ask(&format!("{label} (YYYY-MM-DD HH:MM): "))? else {
                    return Ok(false);
                };
                if !self.controller.pick_interview_time(&answer) && !answer.trim().is_empty() {
                    writeln!(self.output, "  could not read '{}' as a date and time", answer.trim())?;
                }
            }
            text => {
                let Some(answer) = self.ask(&format!("{label}: "))? else {
                    return Ok(false);
                };
                if let Err(err) = self.controller.set_text(text, answer) {
                    debug!(%err, "text input rejected");
                }
            }
        }
        Ok(true)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
