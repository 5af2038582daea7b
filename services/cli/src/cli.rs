use crate::commands::{run_fields, run_replay, run_submit, FieldsArgs, ReplayArgs, SubmitArgs};
use crate::session::Session;
use clap::{Parser, Subcommand};
use job_application::config::AppConfig;
use job_application::error::AppError;
use job_application::form::FormController;
use job_application::telemetry;
use std::io;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Job Application Form",
    about = "Fill in, validate, and review job applications from the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in the form interactively (default command)
    Interactive,
    /// Print the fields shown for a position
    Fields(FieldsArgs),
    /// Submit a JSON document of field values once
    Submit(SubmitArgs),
    /// Apply newline-delimited JSON input events in order
    Replay(ReplayArgs),
}

pub(crate) fn run() -> Result<i32, AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, min_skills = config.form.min_skills, "job application form ready");

    let command = cli.command.unwrap_or(Command::Interactive);
    match command {
        Command::Interactive => {
            let stdin = io::stdin();
            let mut session = Session::new(
                FormController::from_config(&config.form),
                stdin.lock(),
                io::stdout().lock(),
            );
            let summary = session.run()?;
            info!(submitted = summary.submitted, "interactive session finished");
            Ok(0)
        }
        Command::Fields(args) => run_fields(args, &config.form),
        Command::Submit(args) => run_submit(args, &config.form),
        Command::Replay(args) => run_replay(args, &config.form),
    }
}
