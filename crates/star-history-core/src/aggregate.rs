//! # Aggregation Module
//!
//! Date bucketing and cumulative counting for star timestamps.
//!
//! - Validate timestamps before counting
//! - Group by calendar day, days sorted ascending
//! - Emit one cumulative entry per day with activity
//! - No I/O, no async, no network

use crate::{DailyStars, HistoryError};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Extract the calendar date from a forge timestamp.
///
/// Forge timestamps are RFC 3339 (`2024-03-01T08:15:00Z`); the first
/// 10 characters are the `YYYY-MM-DD` date. Anything that does not
/// start with a valid date is rejected rather than bucketed as garbage,
/// since a bad date would corrupt the ordering of the whole history.
pub fn star_date(timestamp: &str) -> Result<NaiveDate, HistoryError> {
    let date_part = timestamp
        .get(..10)
        .ok_or_else(|| HistoryError::InvalidTimestamp(timestamp.to_string()))?;

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| HistoryError::InvalidTimestamp(timestamp.to_string()))
}

/// Convert star timestamps to cumulative daily counts.
///
/// The input order does not matter: timestamps are bucketed by calendar
/// day into a `BTreeMap`, which yields days in ascending order, and the
/// running total is accumulated over that ordering.
///
/// Guarantees on the output:
/// - Dates are strictly increasing
/// - `stars` values are non-decreasing
/// - Each entry's `stars` equals the number of timestamps on or before its date
/// - The last entry's `stars` equals the input length
/// - Empty input produces an empty history
///
/// # Errors
/// Returns `HistoryError::InvalidTimestamp` if any timestamp does not
/// start with a valid `YYYY-MM-DD` date.
pub fn cumulative_history(timestamps: &[String]) -> Result<Vec<DailyStars>, HistoryError> {
    let mut daily_counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for ts in timestamps {
        let date = star_date(ts)?;
        *daily_counts.entry(date).or_insert(0) += 1;
    }

    let mut history = Vec::with_capacity(daily_counts.len());
    let mut cumulative: u64 = 0;

    for (date, count) in daily_counts {
        cumulative = cumulative.saturating_add(count);
        history.push(DailyStars::new(date, cumulative));
    }

    Ok(history)
}

// =============================================================================
// TESTS
// =============================================================================
