//! Repository reference model

use serde::{Deserialize, Serialize};

/// Repository as it appears inside an event payload
///
/// Only `full_name` is read; the payload carries many more fields which are
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// `owner/name`
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_payload_fields_are_ignored() {
        let repo: RepoRef = serde_json::from_str(
            r#"{"id": 1, "full_name": "base-owner/repo", "private": false}"#,
        )
        .unwrap();
        assert_eq!(repo.full_name, "base-owner/repo");
    }
}
