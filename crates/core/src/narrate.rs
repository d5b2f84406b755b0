//! Per-index decision events
//!
//! Every skip, retention and deletion decision is reported to a
//! [`Narrator`] passed in by the caller. The CLI prints them; tests
//! record them.

use crate::timestamp::{Granularity, ParseError};
use chrono::TimeDelta;

/// Why an index was not considered at all
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Name does not start with the configured prefix
    MissingPrefix { prefix: String },
    /// Suffix after the prefix is not a valid timestamp
    InvalidTimestamp(ParseError),
    /// No retention window was configured for this granularity
    UnconfiguredGranularity(Granularity),
}

/// Why a considered index was kept
#[derive(Debug, Clone, PartialEq)]
pub enum Retention {
    /// Index is this far newer than its cutoff
    AboveCutoff(TimeDelta),
    /// Cumulative size so far is still within the disk budget
    WithinBudget { usage_bytes: u64, limit_bytes: u64 },
}

/// A single per-index decision
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Skipped { index: String, reason: SkipReason },
    Retained { index: String, reason: Retention },
    /// Dry run: the index would have been deleted
    WouldDelete { index: String, overdue: TimeDelta },
    /// Delete request about to be sent
    Deleting { index: String, overdue: TimeDelta },
    Deleted { index: String },
    DeleteFailed { index: String, detail: String },
}

/// Sink for decision events
pub trait Narrator: Send + Sync {
    fn record(&self, event: Event);
}

/// Narrator that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Narrator for Silent {
    fn record(&self, _event: Event) {}
}
