//! # Application Error Type
//!
//! One terminal error enum for the binary. Core validation errors and
//! fetch errors pass through with their own messages; file-system
//! failures are wrapped here.

use crate::github::FetchError;
use star_history_core::HistoryError;
use thiserror::Error;

/// Errors that abort a star-history run.
///
/// Every variant is terminal: the binary reports the message and exits
/// non-zero. There are no retries and no partial-result recovery.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid repository argument or star timestamp.
    #[error(transparent)]
    History(#[from] HistoryError),

    /// Terminal fetch failure from the GitHub client.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// An I/O error occurred while writing the snapshot.
    #[error("I/O error: {0}")]
    Io(String),

    /// The snapshot could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
