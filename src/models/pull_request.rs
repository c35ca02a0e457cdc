//! Pull request model and related types
//!
//! Mirrors the subset of the webhook `pull_request` object the gate reads.

use serde::{Deserialize, Serialize};

use super::repository::RepoRef;

/// Label attached to a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Head side of a pull request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// `None` when the repository behind the branch was deleted
    #[serde(default)]
    pub repo: Option<RepoRef>,
}

/// Pull request entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub head: Branch,
    pub labels: Vec<Label>,
}

impl PullRequest {
    /// Label names in payload order
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|label| label.name.clone()).collect()
    }
}
