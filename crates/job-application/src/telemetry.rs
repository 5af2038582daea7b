use crate::config::TelemetryConfig;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Crates whose spans a bare `APP_LOG_LEVEL` such as `debug` applies to.
const FORM_TARGETS: [&str; 2] = ["job_application", "job_application_cli"];

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("APP_LOG_LEVEL '{value}' is not a usable log filter")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("could not install the form logger: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Expand a bare level into per-crate directives so dependencies stay at `warn`.
/// Anything already carrying directives or commas is used as written.
pub fn filter_directives(log_level: &str) -> String {
    let level = log_level.trim();
    if level.is_empty() || level.contains(['=', ',']) {
        return level.to_string();
    }
    let mut directives = vec!["warn".to_string()];
    directives.extend(FORM_TARGETS.iter().map(|target| format!("{target}={level}")));
    directives.join(",")
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
/// Output goes to stderr so rendered views keep stdout.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directives = filter_directives(&config.log_level);
            EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter {
                value: config.log_level.clone(),
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
