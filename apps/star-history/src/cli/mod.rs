//! # CLI Module
//!
//! This module implements the CLI interface for star-history.
//!
//! The binary takes a single optional `owner/repo` argument plus flags
//! for the output path, transport, and summary format, then runs the
//! whole pipeline: fetch → bucket → accumulate → write.

mod commands;

use clap::Parser;
use std::path::PathBuf;

pub use commands::*;

use crate::error::AppError;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// star-history - cumulative star counts as JSON
///
/// Fetches every star-grant timestamp for a repository and writes
/// cumulative daily counts for later visualization.
#[derive(Parser, Debug)]
#[command(name = "star-history")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository to fetch, in owner/repo form
    #[arg(default_value = "moltbot/moltbot")]
    pub repo: String,

    /// Output file path for the JSON snapshot
    #[arg(short, long, default_value = "data/star_history.json")]
    pub output: PathBuf,

    /// API transport: "graphql" (token required, no star cap) or "rest"
    #[arg(short = 't', long, default_value = "graphql")]
    pub transport: String,

    /// GitHub token; required for the graphql transport
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Print the run summary in JSON format (for programmatic access)
    #[arg(long)]
    pub json_mode: bool,

    /// Suppress the run summary
    #[arg(short, long)]
    pub quiet: bool,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), AppError> {
    cmd_fetch(&cli).await
}
