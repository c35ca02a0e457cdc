use std::env;
use std::path::PathBuf;

use crate::services::gate::DEFAULT_LABEL;

/// Action configuration loaded from the runner environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Label a fork pull request must carry (default: "safe-to-test")
    pub label: String,
    /// Name of the triggering event
    pub event_name: String,
    /// Path to the JSON event payload
    pub event_path: PathBuf,
    /// Step output file, when the runner provides one
    pub output_path: Option<PathBuf>,
    /// Job summary file, when the runner provides one
    pub summary_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let label = lookup("INPUT_LABEL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LABEL.to_string());

        if label.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidValue("INPUT_LABEL"));
        }

        let event_name = lookup("GITHUB_EVENT_NAME")
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingEnvVar("GITHUB_EVENT_NAME"))?;

        let event_path = lookup("GITHUB_EVENT_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingEnvVar("GITHUB_EVENT_PATH"))?;

        let output_path = lookup("GITHUB_OUTPUT")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let summary_path = lookup("GITHUB_STEP_SUMMARY")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            label,
            event_name,
            event_path,
            output_path,
            summary_path,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
