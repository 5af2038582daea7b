mod cli;
mod commands;
mod infra;
mod session;

use job_application::error::AppError;

pub use session::{Session, SessionSummary};

/// Parse arguments, run the chosen command, and return the process exit code.
pub fn run() -> Result<i32, AppError> {
    cli::run()
}
