//! Event payload read from `GITHUB_EVENT_PATH`
//!
//! The top-level payload fields are optional here so that a payload with the
//! wrong shape fails with a [`PayloadError`] naming the field instead of a
//! serde message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pull_request::PullRequest;
use super::repository::RepoRef;

/// Errors raised while validating an event payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Event payload is missing required field: {0}")]
    MissingField(&'static str),

    #[error("Event payload field is empty: {0}")]
    EmptyField(&'static str),
}

/// Webhook event payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
    #[serde(default)]
    pub repository: Option<RepoRef>,
}

impl EventPayload {
    /// Parse a payload document; a JSON `null` document yields an empty payload
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let payload: Option<Self> = serde_json::from_str(raw)?;
        Ok(payload.unwrap_or_default())
    }

    /// Base repository of the event
    pub fn repository(&self) -> Result<&RepoRef, PayloadError> {
        let repo = self
            .repository
            .as_ref()
            .ok_or(PayloadError::MissingField("repository"))?;
        non_empty(repo, "repository.full_name")
    }

    pub fn pull_request(&self) -> Result<&PullRequest, PayloadError> {
        self.pull_request
            .as_ref()
            .ok_or(PayloadError::MissingField("pull_request"))
    }

    /// Repository the pull request originates from
    pub fn head_repository(&self) -> Result<&RepoRef, PayloadError> {
        let repo = self
            .pull_request()?
            .head
            .repo
            .as_ref()
            .ok_or(PayloadError::MissingField("pull_request.head.repo"))?;
        non_empty(repo, "pull_request.head.repo.full_name")
    }
}

fn non_empty<'a>(repo: &'a RepoRef, field: &'static str) -> Result<&'a RepoRef, PayloadError> {
    if repo.full_name.trim().is_empty() {
        return Err(PayloadError::EmptyField(field));
    }
    Ok(repo)
}
