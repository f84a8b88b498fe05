//! # Snapshot Module
//!
//! The on-disk document: repository, fetch time, total, and the daily
//! cumulative sequence. The layout is stable — visualization tooling
//! reads these files directly.
//!
//! ```json
//! {
//!   "repository": "moltbot/moltbot",
//!   "fetched_at": "2024-03-01T08:15:00Z",
//!   "total_stars": 4,
//!   "history": [{"date": "2024-02-28", "stars": 1}, ...]
//! }
//! ```

use crate::{DailyStars, RepoId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layout for the `fetched_at` field.
const FETCHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A complete star-history snapshot for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarHistory {
    /// Repository in `owner/repo` form.
    pub repository: String,
    /// UTC time the history was fetched, `YYYY-MM-DDTHH:MM:SSZ`.
    pub fetched_at: String,
    /// Total star events observed. Equals the last history entry's count.
    pub total_stars: u64,
    /// Cumulative daily counts, dates strictly ascending.
    pub history: Vec<DailyStars>,
}

impl StarHistory {
    /// Assemble a snapshot from an aggregated history.
    ///
    /// The total is taken from the last history entry, so it always
    /// agrees with the sequence (zero for an empty history).
    #[must_use]
    pub fn new(repo: &RepoId, fetched_at: DateTime<Utc>, history: Vec<DailyStars>) -> Self {
        let total_stars = history.last().map_or(0, |entry| entry.stars);

        Self {
            repository: repo.to_string(),
            fetched_at: fetched_at.format(FETCHED_AT_FORMAT).to_string(),
            total_stars,
            history,
        }
    }

    /// First and last dates with star activity, if any.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.history.first()?;
        let last = self.history.last()?;
        Some((first.date, last.date))
    }

    /// Number of distinct days with at least one star event.
    #[must_use]
    pub fn days_with_activity(&self) -> usize {
        self.history.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn repo() -> RepoId {
        RepoId::parse("moltbot/moltbot").expect("repo")
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("ymd")
    }

    #[test]
    fn total_comes_from_last_entry() {
        let history = vec![
            DailyStars::new(day(2024, 1, 1), 3),
            DailyStars::new(day(2024, 1, 4), 7),
        ];
        let fetched = Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).single().expect("time");

        let snapshot = StarHistory::new(&repo(), fetched, history);

        assert_eq!(snapshot.total_stars, 7);
        assert_eq!(snapshot.fetched_at, "2024-02-01T09:30:00Z");
        assert_eq!(snapshot.repository, "moltbot/moltbot");
    }

    #[test]
    fn empty_history_has_zero_total() {
        let fetched = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).single().expect("time");
        let snapshot = StarHistory::new(&repo(), fetched, vec![]);

        assert_eq!(snapshot.total_stars, 0);
        assert_eq!(snapshot.date_range(), None);
        assert_eq!(snapshot.days_with_activity(), 0);
    }

    #[test]
    fn date_range_spans_first_to_last() {
        let history = vec![
            DailyStars::new(day(2023, 6, 1), 1),
            DailyStars::new(day(2023, 6, 9), 2),
            DailyStars::new(day(2023, 7, 2), 5),
        ];
        let fetched = Utc.with_ymd_and_hms(2023, 8, 1, 0, 0, 0).single().expect("time");

        let snapshot = StarHistory::new(&repo(), fetched, history);

        assert_eq!(
            snapshot.date_range(),
            Some((day(2023, 6, 1), day(2023, 7, 2)))
        );
        assert_eq!(snapshot.days_with_activity(), 3);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let history = vec![
            DailyStars::new(day(2024, 1, 1), 2),
            DailyStars::new(day(2024, 1, 2), 5),
        ];
        let fetched = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).single().expect("time");
        let snapshot = StarHistory::new(&repo(), fetched, history);

        let json = serde_json::to_string_pretty(&snapshot).expect("serialize");
        let restored: StarHistory = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(restored, snapshot);
    }

    #[test]
    fn snapshot_uses_stable_key_names() {
        let fetched = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).single().expect("time");
        let snapshot = StarHistory::new(&repo(), fetched, vec![]);

        let json = serde_json::to_string(&snapshot).expect("serialize");
        assert!(json.contains("\"repository\""));
        assert!(json.contains("\"fetched_at\""));
        assert!(json.contains("\"total_stars\""));
        assert!(json.contains("\"history\""));
    }
}
