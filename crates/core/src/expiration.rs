//! Retention-window selection
//!
//! Picks indices whose embedded timestamp is older than the cutoff for
//! their granularity: days for `YYYY.MM.DD`, hours for `YYYY.MM.DD.HH`.

use crate::clock::Clock;
use crate::narrate::{Event, Narrator, Retention, SkipReason};
use crate::timestamp::{DateParts, Granularity, IndexPattern};
use crate::{Result, Selection, TRACING_TARGET};
use chrono::{NaiveDateTime, TimeDelta};
use futures::stream::{self, Stream};
use std::collections::BTreeSet;
use tracing::debug;

/// How long daily and hourly indices are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetentionWindow {
    pub days: Option<u32>,
    pub hours: Option<u32>,
}

impl RetentionWindow {
    pub fn days(days: u32) -> Self {
        Self {
            days: Some(days),
            hours: None,
        }
    }

    pub fn hours(hours: u32) -> Self {
        Self {
            days: None,
            hours: Some(hours),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_none() && self.hours.is_none()
    }

    /// Cutoffs relative to `now`.
    ///
    /// A window reaching past the earliest representable date puts the
    /// cutoff at `NaiveDateTime::MIN`, so nothing of that granularity expires.
    pub fn cutoffs(&self, now: NaiveDateTime) -> Cutoffs {
        Cutoffs {
            daily: self.days.map(|days| back_from(now, i64::from(days) * 86_400)),
            hourly: self.hours.map(|hours| back_from(now, i64::from(hours) * 3_600)),
        }
    }
}

fn back_from(now: NaiveDateTime, seconds: i64) -> NaiveDateTime {
    TimeDelta::try_seconds(seconds)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Points in time before which an index is expired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutoffs {
    pub daily: Option<NaiveDateTime>,
    pub hourly: Option<NaiveDateTime>,
}

impl Cutoffs {
    pub fn for_granularity(&self, granularity: Granularity) -> Option<NaiveDateTime> {
        match granularity {
            Granularity::Daily => self.daily,
            Granularity::Hourly => self.hourly,
        }
    }
}

/// Lazy, single-pass sequence of expired indices in ascending name order
pub struct ExpiredIndices<'a> {
    names: std::vec::IntoIter<String>,
    cutoffs: Cutoffs,
    pattern: &'a IndexPattern,
    narrator: &'a dyn Narrator,
}

impl<'a> ExpiredIndices<'a> {
    /// Lift into the stream shape the executor consumes
    pub fn into_stream(self) -> impl Stream<Item = Result<Selection>> + 'a {
        stream::iter(self.map(Ok))
    }

    fn skip(&self, index: String, reason: SkipReason) {
        debug!(target: TRACING_TARGET, index = %index, ?reason, "Skipping index");
        self.narrator.record(Event::Skipped { index, reason });
    }

    /// Decide on one index, returning it if expired
    fn evaluate(&self, index: String) -> Option<Selection> {
        let Some(suffix) = self.pattern.suffix(&index) else {
            let prefix = self.pattern.prefix.clone();
            self.skip(index, SkipReason::MissingPrefix { prefix });
            return None;
        };

        let parts = match DateParts::split(suffix, &self.pattern.separator) {
            Ok(parts) => parts,
            Err(err) => {
                self.skip(index, SkipReason::InvalidTimestamp(err));
                return None;
            }
        };

        let granularity = parts.granularity();
        let Some(cutoff) = self.cutoffs.for_granularity(granularity) else {
            self.skip(index, SkipReason::UnconfiguredGranularity(granularity));
            return None;
        };

        let timestamp = match parts.into_timestamp() {
            Ok(timestamp) => timestamp,
            Err(err) => {
                self.skip(index, SkipReason::InvalidTimestamp(err));
                return None;
            }
        };

        if timestamp.at < cutoff {
            Some(Selection::new(index, cutoff - timestamp.at))
        } else {
            self.narrator.record(Event::Retained {
                index,
                reason: Retention::AboveCutoff(timestamp.at - cutoff),
            });
            None
        }
    }
}

impl Iterator for ExpiredIndices<'_> {
    type Item = Selection;

    fn next(&mut self) -> Option<Selection> {
        while let Some(index) = self.names.next() {
            if let Some(selection) = self.evaluate(index) {
                return Some(selection);
            }
        }
        None
    }
}

/// Select indices older than the retention window.
///
/// The reference time is read from `clock` once, here. Names are
/// deduplicated and walked in ascending order; nothing is evaluated until
/// the returned iterator is pulled.
pub fn find_expired<'a>(
    indices: impl IntoIterator<Item = String>,
    window: RetentionWindow,
    clock: &dyn Clock,
    pattern: &'a IndexPattern,
    narrator: &'a dyn Narrator,
) -> ExpiredIndices<'a> {
    let now = clock.now();
    let cutoffs = window.cutoffs(now);
    debug!(target: TRACING_TARGET, %now, ?cutoffs, "Computed retention cutoffs");

    let names: BTreeSet<String> = indices.into_iter().collect();

    ExpiredIndices {
        names: names.into_iter().collect::<Vec<_>>().into_iter(),
        cutoffs,
        pattern,
        narrator,
    }
}
