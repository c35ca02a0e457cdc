use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::models::PayloadError;

/// Application-level error type
///
/// Every variant ends the run with a failure status; the message is what the
/// runner shows in the job log.
#[derive(Debug, Error)]
pub enum AppError {
    /// Runner environment is incomplete
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Payload parsed but lacks a field the gate needs
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// Payload file could not be read
    #[error("Failed to read event payload {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload file is not valid JSON of the expected shape
    #[error("Invalid event payload: {0}")]
    Json(#[from] serde_json::Error),
}
