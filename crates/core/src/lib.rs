//! Index selection and deletion for time-stamped search indices
//!
//! This crate provides:
//! - Timestamp parsing of `prefix-YYYY.MM.DD[.HH]` index names
//! - Retention-window selection (daily and hourly cutoffs)
//! - Disk-budget selection (oldest-first eviction)
//! - The deletion executor with dry-run support
//! - The `Cluster` collaborator trait the selectors and executor talk to

pub mod clock;
pub mod cluster;
pub mod error;
pub mod executor;
pub mod expiration;
pub mod narrate;
pub mod overusage;
pub mod timestamp;

#[cfg(test)]
pub(crate) mod testing;

/// Tracing target for selection and deletion events.
pub const TRACING_TARGET: &str = "reaper_core";

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use cluster::{Cluster, DeleteOutcome};
pub use error::{Error, Result};
pub use executor::{execute, RunMode, RunSummary};
pub use expiration::{find_expired, Cutoffs, ExpiredIndices, RetentionWindow};
pub use narrate::{Event, Narrator, Retention, Silent, SkipReason};
pub use overusage::{find_overusage, DiskBudget};
pub use timestamp::{parse_timestamp, DateParts, Granularity, IndexPattern, IndexTimestamp, ParseError};

/// An index picked for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Index name
    pub index: String,
    /// How far past its cutoff the index is (zero for disk-based selection)
    pub overdue: chrono::TimeDelta,
}

impl Selection {
    pub fn new(index: impl Into<String>, overdue: chrono::TimeDelta) -> Self {
        Self {
            index: index.into(),
            overdue,
        }
    }

    /// Selection made by the disk-usage sweep, which has no cutoff
    pub fn over_budget(index: impl Into<String>) -> Self {
        Self::new(index, chrono::TimeDelta::zero())
    }
}
