//! # Core Type Definitions
//!
//! This module contains all core types for the star-history aggregation engine:
//! - Repository identifier (`RepoId`)
//! - Daily cumulative snapshot entry (`DailyStars`)
//! - Error types (`HistoryError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// REPOSITORY IDENTIFIER
// =============================================================================

/// Identifier for a repository on the forge, in `owner/name` form.
///
/// Parsing validates the shape before any network call is made:
/// exactly one `/`, both segments non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RepoId {
    /// Account that owns the repository.
    pub owner: String,
    /// Repository name within the owner's account.
    pub name: String,
}

impl RepoId {
    /// Parse an `owner/repo` string into a validated identifier.
    ///
    /// Returns `HistoryError::InvalidRepo` when the string does not
    /// contain exactly one `/` separating two non-empty segments.
    pub fn parse(s: &str) -> Result<Self, HistoryError> {
        let mut parts = s.split('/');

        let (Some(owner), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(HistoryError::InvalidRepo(s.to_string()));
        };

        if owner.is_empty() || name.is_empty() {
            return Err(HistoryError::InvalidRepo(s.to_string()));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl FromStr for RepoId {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

// =============================================================================
// DAILY SNAPSHOT ENTRY
// =============================================================================

/// One entry of the cumulative history: the running star total as of `date`.
///
/// Serializes as `{"date": "YYYY-MM-DD", "stars": N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DailyStars {
    /// Calendar day, UTC.
    pub date: NaiveDate,
    /// Cumulative star count up to and including `date`.
    pub stars: u64,
}

impl DailyStars {
    /// Create a new history entry.
    #[must_use]
    pub const fn new(date: NaiveDate, stars: u64) -> Self {
        Self { date, stars }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the aggregation core.
///
/// - No silent failures
/// - Use `Result<T, HistoryError>` for fallible operations
/// - The core never panics; all errors are recoverable
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// The repository argument is not in `owner/repo` form.
    #[error("Invalid repository format: {0} (expected owner/repo)")]
    InvalidRepo(String),

    /// A star timestamp does not start with a `YYYY-MM-DD` calendar date.
    #[error("Invalid star timestamp: {0}")]
    InvalidTimestamp(String),
}

// =============================================================================
// TESTS
// =============================================================================
