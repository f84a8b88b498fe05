//! # CLI Command Implementation
//!
//! The single pipeline command: validate input, fetch stargazer
//! timestamps, aggregate to cumulative daily counts, write the
//! snapshot, print a summary.

use crate::cli::Cli;
use crate::error::AppError;
use crate::github::{FetchError, StarsClient, Transport};
use crate::output;
use chrono::Utc;
use star_history_core::{RepoId, StarHistory, cumulative_history};
use std::path::Path;

// =============================================================================
// FETCH COMMAND
// =============================================================================

/// Run the full pipeline for the configured repository.
///
/// Argument and credential problems are rejected before any network
/// traffic. Any fetch failure aborts before the output file is touched,
/// so a rate-limited run never leaves a partial snapshot behind.
pub async fn cmd_fetch(cli: &Cli) -> Result<(), AppError> {
    let repo = RepoId::parse(&cli.repo)?;
    let transport = Transport::parse(&cli.transport)?;

    if transport == Transport::Graphql && cli.token.is_none() {
        return Err(FetchError::MissingToken.into());
    }

    tracing::info!("fetching stargazers for {} via {:?}", repo, transport);

    let client = StarsClient::new(cli.token.clone())?;
    let timestamps = client.fetch_timestamps(&repo, transport).await?;

    tracing::info!("aggregating {} stars by date", timestamps.len());
    let history = cumulative_history(&timestamps)?;

    let snapshot = StarHistory::new(&repo, Utc::now(), history);
    output::write_snapshot(&cli.output, &snapshot)?;

    if !cli.quiet {
        print_summary(&snapshot, cli.json_mode, &cli.output);
    }

    Ok(())
}

// =============================================================================
// SUMMARY OUTPUT
// =============================================================================

/// Print the run summary, human-readable or JSON.
fn print_summary(snapshot: &StarHistory, json_mode: bool, output: &Path) {
    if json_mode {
        let summary = serde_json::json!({
            "repository": snapshot.repository,
            "total_stars": snapshot.total_stars,
            "days_with_activity": snapshot.days_with_activity(),
            "first_date": snapshot.date_range().map(|(first, _)| first.to_string()),
            "last_date": snapshot.date_range().map(|(_, last)| last.to_string()),
            "output": output.to_string_lossy(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_default()
        );
        return;
    }

    println!("Star History Summary");
    println!("====================");
    println!("Repository:  {}", snapshot.repository);
    println!("Total stars: {}", snapshot.total_stars);
    match snapshot.date_range() {
        Some((first, last)) => println!("Date range:  {} to {}", first, last),
        None => println!("Date range:  (no stars yet)"),
    }
    println!("Active days: {}", snapshot.days_with_activity());
    println!("Saved to:    {:?}", output);
}
