use std::env;
use std::fmt;

use crate::form::picker::{DateTimePicker, DEFAULT_DISPLAY_FORMAT};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub form: FormConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let min_skills = env::var("FORM_MIN_SKILLS")
            .unwrap_or_else(|_| "0".to_string())
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidMinSkills)?;

        let interview_time_format = env::var("FORM_INTERVIEW_TIME_FORMAT")
            .unwrap_or_else(|_| DEFAULT_DISPLAY_FORMAT.to_string());
        if interview_time_format.trim().is_empty() {
            return Err(ConfigError::EmptyInterviewTimeFormat);
        }
        if !DateTimePicker::is_renderable(&interview_time_format) {
            return Err(ConfigError::InvalidInterviewTimeFormat(interview_time_format));
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            form: FormConfig {
                min_skills,
                interview_time_format,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Form behavior knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Minimum number of skills to select; zero leaves the selection optional.
    pub min_skills: usize,
    pub interview_time_format: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_skills: 0,
            interview_time_format: DEFAULT_DISPLAY_FORMAT.to_string(),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMinSkills,
    EmptyInterviewTimeFormat,
    InvalidInterviewTimeFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinSkills => {
                write!(f, "FORM_MIN_SKILLS must be a non-negative integer")
            }
            ConfigError::EmptyInterviewTimeFormat => {
                write!(f, "FORM_INTERVIEW_TIME_FORMAT must not be empty")
            }
            ConfigError::InvalidInterviewTimeFormat(format) => {
                write!(f, "FORM_INTERVIEW_TIME_FORMAT '{format}' is not a valid chrono format")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
