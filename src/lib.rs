//! safe-to-test - CI gate for fork pull requests
//!
//! Decides whether a pull request event may run further automated tests.
//! Pull requests opened from a fork must carry a trusted label; pull requests
//! from the base repository always pass.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

use std::fs;

use tracing::{debug, info};

pub use config::{Config, ConfigError};
pub use error::AppError;
pub use models::{EventKind, EventPayload, Label, PayloadError, PullRequest, RepoRef};
pub use services::{
    AllowReason, DEFAULT_LABEL, GateInput, GateReport, Outcome, Reporter, decide,
};

/// Validated input together with the decision reached for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub input: GateInput,
    pub outcome: Outcome,
}

/// Validate a parsed payload and decide
pub fn evaluate(
    event: EventKind,
    payload: &EventPayload,
    label: &str,
) -> Result<Evaluation, PayloadError> {
    let input = GateInput::from_payload(event, payload)?;
    let outcome = decide(&input, label);
    Ok(Evaluation { input, outcome })
}

/// Read the event payload named by the configuration and decide
///
/// Unsupported events are skipped before the payload file is opened.
pub fn run(config: &Config) -> Result<Evaluation, AppError> {
    let event = EventKind::from(config.event_name.as_str());
    info!("Evaluating {} event with label {:?}", event, config.label);

    if !event.is_supported() {
        let input = GateInput::unsupported(event);
        let outcome = decide(&input, &config.label);
        info!("Gate outcome: {} (event not gated)", outcome.as_str());
        return Ok(Evaluation { input, outcome });
    }

    let raw = fs::read_to_string(&config.event_path).map_err(|source| AppError::Io {
        path: config.event_path.clone(),
        source,
    })?;
    debug!(
        "Read {} bytes of event payload from {}",
        raw.len(),
        config.event_path.display()
    );

    let payload = EventPayload::from_json(&raw)?;
    let evaluation = evaluate(event, &payload, &config.label)?;

    info!(
        "Gate outcome: {} (base: {}, head: {}, fork: {})",
        evaluation.outcome.as_str(),
        evaluation.input.base_repo,
        evaluation.input.head_repo,
        evaluation.input.is_fork()
    );
    match serde_json::to_string(&evaluation.outcome) {
        Ok(json) => debug!("Decision: {}", json),
        Err(e) => debug!("Failed to serialize decision {:?}: {}", evaluation.outcome, e),
    }

    Ok(evaluation)
}
