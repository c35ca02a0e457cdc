//! Gate Service
//!
//! Decides whether a pull request may run further automated tests.
//! Pull requests from forks need the configured label; everything opened from
//! the base repository passes.
//!
//! [`decide`] is pure: the outcome depends only on the [`GateInput`] and the
//! required label.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{EventKind, EventPayload, PayloadError, SUPPORTED_EVENTS};

/// Label name used when the action input is not set
pub const DEFAULT_LABEL: &str = "safe-to-test";

/// Why an allowed pull request passed the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowReason {
    /// Head and base are the same repository
    NotFork,
    /// Fork carrying the required label
    Labelled,
}

/// Result of evaluating the gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "lowercase")]
pub enum Outcome {
    Allowed(AllowReason),
    Blocked(String),
    Skipped(String),
}

impl Outcome {
    /// Value written to the `outcome` step output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allowed(_) => "allowed",
            Self::Blocked(_) => "blocked",
            Self::Skipped(_) => "skipped",
        }
    }

    /// Whether the action's terminal status is a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed(AllowReason::NotFork) => {
                f.write_str("Pull request is not from a fork, skipping.")
            }
            Self::Allowed(AllowReason::Labelled) => {
                f.write_str("Pull request has the required label, skipping.")
            }
            Self::Blocked(message) | Self::Skipped(message) => f.write_str(message),
        }
    }
}

/// Everything the decision reads, extracted from the event payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateInput {
    pub event: EventKind,
    /// Full name of the repository the pull request targets
    pub base_repo: String,
    /// Full name of the repository the pull request comes from
    pub head_repo: String,
    pub labels: Vec<String>,
}

impl GateInput {
    /// Input for a trigger the gate does not apply to; the payload is not read
    pub fn unsupported(event: EventKind) -> Self {
        Self {
            event,
            base_repo: String::new(),
            head_repo: String::new(),
            labels: Vec::new(),
        }
    }

    /// Validate the payload fields the gate needs
    ///
    /// Unsupported events never look at the payload, so they cannot fail here.
    /// Every supported event must carry `repository` and `pull_request`.
    pub fn from_payload(event: EventKind, payload: &EventPayload) -> Result<Self, PayloadError> {
        if !event.is_supported() {
            return Ok(Self::unsupported(event));
        }

        let base_repo = payload.repository()?.full_name.clone();
        let head_repo = payload.head_repository()?.full_name.clone();
        let labels = payload.pull_request()?.label_names();

        Ok(Self {
            event,
            base_repo,
            head_repo,
            labels,
        })
    }

    /// Case-sensitive comparison of head and base full names
    pub fn is_fork(&self) -> bool {
        self.head_repo != self.base_repo
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label == name)
    }
}

/// Message carried by [`Outcome::Blocked`]
pub fn blocked_message(label: &str) -> String {
    format!(
        "Pull request does not have the \"{label}\" label. Code owners must add the \"{label}\" label to the pull request before it can be tested."
    )
}

/// Reason carried by [`Outcome::Skipped`]
pub fn skipped_reason() -> String {
    format!(
        "This action only works with the following events: {}.",
        SUPPORTED_EVENTS.join(", ")
    )
}

/// Evaluate the gate for one event
pub fn decide(input: &GateInput, required_label: &str) -> Outcome {
    if !input.event.is_supported() {
        return Outcome::Skipped(skipped_reason());
    }

    if !input.is_fork() {
        return Outcome::Allowed(AllowReason::NotFork);
    }

    if input.has_label(required_label) {
        return Outcome::Allowed(AllowReason::Labelled);
    }

    Outcome::Blocked(blocked_message(required_label))
}
