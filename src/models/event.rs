//! Workflow trigger model
//!
//! The runner exposes the trigger as a plain string (`GITHUB_EVENT_NAME`).
//! Only pull request shaped triggers are gated; everything else is skipped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Triggers the gate applies to, in the order they are reported
pub const SUPPORTED_EVENTS: [&str; 3] = ["pull_request", "pull_request_target", "merge_group"];

/// Event that started the workflow run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    PullRequest,
    PullRequestTarget,
    MergeGroup,
    /// Any other trigger, keeping the raw name for reporting
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::PullRequest => "pull_request",
            Self::PullRequestTarget => "pull_request_target",
            Self::MergeGroup => "merge_group",
            Self::Other(name) => name,
        }
    }

    /// Whether the gate should evaluate this trigger at all
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for EventKind {
    fn from(s: &str) -> Self {
        match s {
            "pull_request" => Self::PullRequest,
            "pull_request_target" => Self::PullRequestTarget,
            "merge_group" => Self::MergeGroup,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for EventKind {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
