//! Integration tests for CLI argument parsing and pre-network validation.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use star_history::cli::Cli;
use star_history::error::AppError;
use star_history::github::{FetchError, Transport};
use star_history_core::{HistoryError, RepoId};
use std::path::PathBuf;

// =============================================================================
// ARGUMENT PARSING TESTS
// =============================================================================

#[test]
fn defaults_match_the_documented_interface() {
    let cli = Cli::try_parse_from(["star-history"]).unwrap();

    assert_eq!(cli.repo, "moltbot/moltbot");
    assert_eq!(cli.output, PathBuf::from("data/star_history.json"));
    assert_eq!(cli.transport, "graphql");
    assert!(!cli.json_mode);
    assert!(!cli.quiet);
}

#[test]
fn positional_repo_and_flags_parse() {
    let cli = Cli::try_parse_from([
        "star-history",
        "rust-lang/rust",
        "--output",
        "out/rust.json",
        "--transport",
        "rest",
        "--quiet",
    ])
    .unwrap();

    assert_eq!(cli.repo, "rust-lang/rust");
    assert_eq!(cli.output, PathBuf::from("out/rust.json"));
    assert_eq!(cli.transport, "rest");
    assert!(cli.quiet);
}

// =============================================================================
// PRE-NETWORK VALIDATION TESTS
// =============================================================================

#[tokio::test]
async fn malformed_repo_is_rejected_before_any_request() {
    let mut cli = Cli::try_parse_from(["star-history", "not-a-repo"]).unwrap();
    cli.token = Some("test-token".to_string());

    let err = star_history::cli::execute(cli).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::History(HistoryError::InvalidRepo(_))
    ));
}

#[tokio::test]
async fn unknown_transport_is_rejected_before_any_request() {
    let mut cli =
        Cli::try_parse_from(["star-history", "owner/repo", "--transport", "soap"]).unwrap();
    cli.token = Some("test-token".to_string());

    let err = star_history::cli::execute(cli).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Fetch(FetchError::UnknownTransport(_))
    ));
}

#[tokio::test]
async fn graphql_without_token_is_rejected_before_any_request() {
    let mut cli = Cli::try_parse_from(["star-history", "owner/repo"]).unwrap();
    // Clear any GITHUB_TOKEN picked up from the test environment
    cli.token = None;

    let err = star_history::cli::execute(cli).await.unwrap_err();

    assert!(matches!(err, AppError::Fetch(FetchError::MissingToken)));
}

#[tokio::test]
async fn failed_run_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("star_history.json");

    let mut cli = Cli::try_parse_from([
        "star-history",
        "owner/repo",
        "--output",
        path.to_str().unwrap(),
    ])
    .unwrap();
    // Run fails before any request (graphql transport without a token),
    // so nothing may be written to the output path
    cli.token = None;

    assert!(star_history::cli::execute(cli).await.is_err());

    assert!(!path.exists());
    assert!(!path.parent().unwrap().exists());
}

// =============================================================================
// ERROR MESSAGE TESTS
// =============================================================================

#[test]
fn terminal_errors_render_human_readable_messages() {
    assert_eq!(
        RepoId::parse("a/b/c").unwrap_err().to_string(),
        "Invalid repository format: a/b/c (expected owner/repo)"
    );
    assert_eq!(
        Transport::parse("soap").unwrap_err().to_string(),
        "Unknown transport: soap. Use: graphql, rest"
    );
    assert!(
        FetchError::Unauthorized
            .to_string()
            .contains("Authentication failed")
    );
}
