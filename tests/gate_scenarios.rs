//! End-to-end gate scenarios
//!
//! Each test writes an event payload to disk, points a `Config` at it and runs
//! the full read → validate → decide → report path.

use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

use safe_to_test::{AllowReason, AppError, Config, GateReport, Outcome, Reporter, run};

// ============================================================================
// Test Helpers
// ============================================================================

const BLOCKED_MESSAGE: &str = "Pull request does not have the \"safe-to-test\" label. Code owners must add the \"safe-to-test\" label to the pull request before it can be tested.";

fn pr_payload(head: &str, base: &str, labels: &[&str]) -> Value {
    json!({
        "action": "synchronize",
        "number": 12,
        "pull_request": {
            "number": 12,
            "head": {"ref": "feature", "repo": {"full_name": head}},
            "base": {"ref": "main", "repo": {"full_name": base}},
            "labels": labels.iter().map(|name| json!({"name": name})).collect::<Vec<_>>(),
        },
        "repository": {"full_name": base},
    })
}

/// Write the payload and build a config pointing at it
fn setup(event_name: &str, payload: &str) -> (TempDir, Config) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let event_path = dir.path().join("event.json");
    std::fs::write(&event_path, payload).expect("Failed to write payload");

    let config = Config {
        label: "safe-to-test".to_string(),
        event_name: event_name.to_string(),
        event_path,
        output_path: Some(dir.path().join("output")),
        summary_path: Some(dir.path().join("summary.md")),
    };
    (dir, config)
}

fn setup_json(event_name: &str, payload: &Value) -> (TempDir, Config) {
    setup(event_name, &payload.to_string())
}

// ============================================================================
// Decision scenarios
// ============================================================================

#[test]
fn test_fork_without_label_is_blocked() {
    let (_dir, config) = setup_json(
        "pull_request",
        &pr_payload("fork-owner/repo", "base-owner/repo", &[]),
    );

    let evaluation = run(&config).unwrap();
    assert_eq!(evaluation.outcome, Outcome::Blocked(BLOCKED_MESSAGE.to_string()));
    assert!(evaluation.outcome.is_failure());
}

#[test]
fn test_fork_with_label_is_allowed() {
    let (_dir, config) = setup_json(
        "pull_request",
        &pr_payload("fork-owner/repo", "base-owner/repo", &["safe-to-test"]),
    );

    let evaluation = run(&config).unwrap();
    assert_eq!(evaluation.outcome, Outcome::Allowed(AllowReason::Labelled));
}

#[test]
fn test_non_fork_is_allowed() {
    let (_dir, config) = setup_json(
        "pull_request",
        &pr_payload("base-owner/repo", "base-owner/repo", &[]),
    );

    let evaluation = run(&config).unwrap();
    assert_eq!(evaluation.outcome, Outcome::Allowed(AllowReason::NotFork));
}

#[test]
fn test_unsupported_event_is_skipped() {
    let (_dir, config) = setup_json(
        "not_allowed_event",
        &pr_payload("fork-owner/repo", "base-owner/repo", &[]),
    );

    let evaluation = run(&config).unwrap();
    assert!(matches!(evaluation.outcome, Outcome::Skipped(_)));
    assert!(!evaluation.outcome.is_failure());
}

#[test]
fn test_pull_request_target_fork_is_gated() {
    let (_dir, config) = setup_json(
        "pull_request_target",
        &pr_payload("fork-owner/repo", "base-owner/repo", &["documentation"]),
    );

    assert!(run(&config).unwrap().outcome.is_failure());
}

#[test]
fn test_custom_label() {
    let (_dir, mut config) = setup_json(
        "pull_request",
        &pr_payload("fork-owner/repo", "base-owner/repo", &["ok-to-test"]),
    );
    config.label = "ok-to-test".to_string();

    let evaluation = run(&config).unwrap();
    assert_eq!(evaluation.outcome, Outcome::Allowed(AllowReason::Labelled));
}

#[test]
fn test_merge_group_fork_is_gated() {
    let (_dir, config) = setup_json(
        "merge_group",
        &pr_payload("fork-owner/repo", "base-owner/repo", &[]),
    );

    let evaluation = run(&config).unwrap();
    assert_eq!(evaluation.outcome, Outcome::Blocked(BLOCKED_MESSAGE.to_string()));
}

// ============================================================================
// Error scenarios
// ============================================================================

#[test]
fn test_null_payload_fails_with_field_name() {
    let (_dir, config) = setup("pull_request", "null");

    let err = run(&config).unwrap_err();
    assert!(matches!(err, AppError::Payload(_)));
    assert_eq!(
        err.to_string(),
        "Event payload is missing required field: repository"
    );
}

#[test]
fn test_deleted_fork_fails() {
    let payload = json!({
        "pull_request": {
            "head": {"ref": "feature", "repo": null},
            "base": {"ref": "main", "repo": {"full_name": "base-owner/repo"}},
            "labels": [],
        },
        "repository": {"full_name": "base-owner/repo"},
    });
    let (_dir, config) = setup_json("pull_request", &payload);

    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("pull_request.head.repo"));
}

#[test]
fn test_merge_group_without_pull_request_fails() {
    let payload = json!({
        "action": "checks_requested",
        "merge_group": {
            "head_sha": "ec26c3e57ca3a959ca5aad62de7213c562f8c821",
            "head_ref": "refs/heads/gh-readonly-queue/main/pr-12-f0e1d2c3",
            "base_ref": "refs/heads/main",
        },
        "repository": {"full_name": "base-owner/repo"},
    });
    let (_dir, config) = setup_json("merge_group", &payload);

    let err = run(&config).unwrap_err();
    assert!(matches!(err, AppError::Payload(_)));
    assert_eq!(
        err.to_string(),
        "Event payload is missing required field: pull_request"
    );
}

#[test]
fn test_invalid_json_fails() {
    let (_dir, config) = setup("pull_request", "{\"pull_request\": ");

    assert!(matches!(run(&config).unwrap_err(), AppError::Json(_)));
}

#[test]
fn test_missing_payload_file_fails() {
    let (_dir, mut config) = setup("pull_request", "{}");
    config.event_path = PathBuf::from("/nonexistent/event.json");

    let err = run(&config).unwrap_err();
    assert!(matches!(err, AppError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/event.json"));
}

#[test]
fn test_unsupported_event_ignores_payload_shape() {
    let (_dir, config) = setup("workflow_dispatch", "{\"inputs\": {}}");

    assert!(matches!(run(&config).unwrap().outcome, Outcome::Skipped(_)));
}

#[test]
fn test_unsupported_event_skips_without_payload_file() {
    let (_dir, mut config) = setup("push", "{}");
    config.event_path = PathBuf::from("/nonexistent/event.json");

    let evaluation = run(&config).unwrap();
    assert!(matches!(evaluation.outcome, Outcome::Skipped(_)));
    assert!(!evaluation.outcome.is_failure());
}

#[test]
fn test_unsupported_event_skips_malformed_payload() {
    for raw in [r#"{"pull_request": {"head": {}}}"#, "42", "{not json"] {
        let (_dir, config) = setup("push", raw);

        let evaluation = run(&config).unwrap();
        assert!(
            matches!(evaluation.outcome, Outcome::Skipped(_)),
            "payload {raw} should be skipped"
        );
    }
}

// ============================================================================
// Reporting
// ============================================================================

#[test]
fn test_blocked_report_reaches_runner_files() {
    let (dir, config) = setup_json(
        "pull_request",
        &pr_payload("fork-owner/repo", "base-owner/repo", &[]),
    );

    let evaluation = run(&config).unwrap();
    let mut reporter = Reporter::new(
        Vec::new(),
        config.output_path.clone(),
        config.summary_path.clone(),
    );
    reporter
        .report(&GateReport::new(
            &evaluation.input,
            &evaluation.outcome,
            &config.label,
        ))
        .unwrap();

    let stdout = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(stdout, format!("::error::{BLOCKED_MESSAGE}\n"));

    let outputs = std::fs::read_to_string(dir.path().join("output")).unwrap();
    assert_eq!(outputs, "outcome=blocked\nfork=true\n");

    let summary = std::fs::read_to_string(dir.path().join("summary.md")).unwrap();
    assert!(summary.contains("| Outcome | **blocked** |"));
    assert!(summary.contains(BLOCKED_MESSAGE));
}
