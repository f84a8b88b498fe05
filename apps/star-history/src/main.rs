//! # star-history - GitHub Star History Fetcher
//!
//! The main binary: fetch a repository's stargazer timestamps, bucket
//! them by day, and persist cumulative counts as JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Default repository, GraphQL transport
//! GITHUB_TOKEN=$(gh auth token) star-history
//!
//! # Explicit repository and output path
//! GITHUB_TOKEN=xxx star-history rust-lang/rust --output data/rust.json
//!
//! # REST transport works without a token (40,000-star API cap applies)
//! star-history some/small-repo --transport rest
//! ```

use clap::Parser;
use star_history::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — STAR_HISTORY_LOG_FORMAT=json enables machine-parseable output.
    let log_format =
        std::env::var("STAR_HISTORY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "star_history=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Execute the pipeline
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
