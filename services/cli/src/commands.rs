use crate::infra::SubmissionInput;
use clap::Args;
use job_application::config::FormConfig;
use job_application::error::AppError;
use job_application::form::{
    read_event_script, visible_fields, EventOutcome, FormController, FormEvent, Position,
    SubmitOutcome,
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing::warn;

/// Exit code when a submission is rejected by validation.
pub(crate) const EXIT_REJECTED: i32 = 2;

#[derive(Args, Debug)]
pub(crate) struct FieldsArgs {
    /// Position to resolve fields for (Developer, Designer, Manager). Omit for none.
    #[arg(long, default_value = "")]
    pub(crate) position: String,
}

#[derive(Args, Debug)]
pub(crate) struct SubmitArgs {
    /// JSON document with fullName, email, phoneNumber, position, experience, portfolio,
    /// managementExperience, skills, and interviewTime
    #[arg(long)]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ReplayArgs {
    /// Newline-delimited JSON events, e.g. {"event":"select_position","position":"Designer"}
    #[arg(long)]
    pub(crate) events: PathBuf,
}

pub(crate) fn run_fields(args: FieldsArgs, config: &FormConfig) -> Result<i32, AppError> {
    let mut out = io::stdout().lock();
    write_fields(&mut out, Position::from_value(&args.position), config)?;
    Ok(0)
}

pub(crate) fn run_submit(args: SubmitArgs, config: &FormConfig) -> Result<i32, AppError> {
    let reader = BufReader::new(File::open(&args.input)?);
    let input: SubmissionInput = serde_json::from_reader(reader)?;
    let mut out = io::stdout().lock();
    submit_document(&mut out, input, config)
}

pub(crate) fn run_replay(args: ReplayArgs, config: &FormConfig) -> Result<i32, AppError> {
    let reader = BufReader::new(File::open(&args.events)?);
    let events = read_event_script(reader)?;
    let mut out = io::stdout().lock();
    replay_events(&mut out, events, config)
}

pub(crate) fn write_fields<W: Write>(
    out: &mut W,
    position: Position,
    config: &FormConfig,
) -> io::Result<()> {
    let label = match position {
        Position::Unset => "no position selected",
        other => other.value(),
    };
    writeln!(out, "Fields for {label}")?;
    for field in visible_fields(position, config.min_skills) {
        let requirement = if field.required { "required" } else { "optional" };
        writeln!(
            out,
            "- {} ({}) [{}]",
            field.definition.label,
            field.name(),
            requirement
        )?;
    }
    Ok(())
}

pub(crate) fn submit_document<W: Write>(
    out: &mut W,
    input: SubmissionInput,
    config: &FormConfig,
) -> Result<i32, AppError> {
    let mut controller = FormController::from_config(config);
    let mut code = 0;
    for event in input.into_events() {
        if let EventOutcome::Submitted(outcome) = controller.apply(event)? {
            code = render_submission(out, &controller, &outcome)?;
        }
    }
    Ok(code)
}

/// Apply every event, rendering the component after each submit or reset.
/// Returns the rejected exit code when the last submit attempt failed.
pub(crate) fn replay_events<W: Write>(
    out: &mut W,
    events: Vec<FormEvent>,
    config: &FormConfig,
) -> Result<i32, AppError> {
    let mut controller = FormController::from_config(config);
    let mut code = 0;
    for event in events {
        match controller.apply(event)? {
            EventOutcome::Submitted(outcome) => {
                code = render_submission(out, &controller, &outcome)?;
            }
            EventOutcome::Reset => {
                code = 0;
                writeln!(out, "{}", controller.form_view())?;
            }
            EventOutcome::Ignored => warn!("event ignored in {} mode", controller.mode().label()),
            EventOutcome::Updated => {}
        }
    }
    Ok(code)
}

fn render_submission<W: Write>(
    out: &mut W,
    controller: &FormController,
    outcome: &SubmitOutcome,
) -> io::Result<i32> {
    match outcome {
        SubmitOutcome::Accepted(_) => {
            if let Some(summary) = controller.summary_view() {
                writeln!(out, "{summary}")?;
            }
            Ok(0)
        }
        SubmitOutcome::Rejected(_) => {
            writeln!(out, "{}", controller.form_view())?;
            Ok(EXIT_REJECTED)
        }
        SubmitOutcome::Ignored => Ok(0),
    }
}
