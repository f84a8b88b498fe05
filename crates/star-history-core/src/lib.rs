//! # star-history-core
//!
//! The deterministic aggregation engine for star-history - THE LOGIC.
//!
//! Timestamps in, cumulative daily counts out. This crate owns
//! everything that can be computed without touching the network:
//! repository identifier validation, date bucketing, cumulative
//! counting, and the snapshot document layout.
//!
//! ## Architectural Constraints
//!
//! - Is pure: NO async, NO network, NO file I/O
//! - Is deterministic: `BTreeMap` ordering, integer arithmetic only
//! - Is minimal: if it is not needed to turn star timestamps into a
//!   snapshot document, it does not live here

// =============================================================================
// MODULES
// =============================================================================

pub mod aggregate;
pub mod snapshot;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use aggregate::{cumulative_history, star_date};
pub use snapshot::StarHistory;
pub use types::{DailyStars, HistoryError, RepoId};
