//! Disk-budget selection
//!
//! Walks indices newest first, summing primary sizes. Once the running
//! total exceeds the budget, the index that tipped it and every older
//! index are selected.

use crate::cluster::Cluster;
use crate::narrate::{Event, Narrator, Retention, SkipReason};
use crate::timestamp::IndexPattern;
use crate::{Error, Result, Selection, TRACING_TARGET};
use futures::stream::{self, Stream};
use std::collections::BTreeSet;
use tracing::debug;

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// Maximum cumulative primary size to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskBudget {
    limit_bytes: u64,
}

impl DiskBudget {
    /// Budget in GB (2^30 bytes). Must be finite and greater than zero.
    pub fn from_gb(gb: f64) -> Result<Self> {
        if !gb.is_finite() || gb <= 0.0 {
            return Err(Error::InvalidBudget(gb));
        }
        // Sizes are whole bytes, so flooring keeps `usage > limit` exact
        let limit_bytes = (gb * BYTES_PER_GB).floor() as u64;
        Ok(Self { limit_bytes })
    }

    pub fn from_bytes(limit_bytes: u64) -> Self {
        Self { limit_bytes }
    }

    pub fn limit_bytes(&self) -> u64 {
        self.limit_bytes
    }
}

struct Sweep<'a, C: ?Sized> {
    names: std::vec::IntoIter<String>,
    usage_bytes: u64,
    cluster: &'a C,
}

/// Select the oldest indices that push cumulative size over `budget`.
///
/// Names are deduplicated and scanned in descending order. Sizes are
/// queried one at a time as the stream is polled, and only for indices
/// matching the prefix.
pub fn find_overusage<'a, C>(
    cluster: &'a C,
    indices: impl IntoIterator<Item = String>,
    budget: DiskBudget,
    pattern: &'a IndexPattern,
    narrator: &'a dyn Narrator,
) -> impl Stream<Item = Result<Selection>> + 'a
where
    C: Cluster + ?Sized,
{
    let names: BTreeSet<String> = indices.into_iter().collect();
    let sweep = Sweep {
        names: names.into_iter().rev().collect::<Vec<_>>().into_iter(),
        usage_bytes: 0,
        cluster,
    };
    let limit_bytes = budget.limit_bytes();

    stream::try_unfold(sweep, move |mut sweep| async move {
        while let Some(index) = sweep.names.next() {
            if !pattern.matches(&index) {
                let prefix = pattern.prefix.clone();
                debug!(target: TRACING_TARGET, index = %index, "Skipping index without prefix");
                narrator.record(Event::Skipped {
                    index,
                    reason: SkipReason::MissingPrefix { prefix },
                });
                continue;
            }

            let size = sweep.cluster.primary_size_bytes(&index).await?;
            sweep.usage_bytes = sweep.usage_bytes.saturating_add(size);
            debug!(target: TRACING_TARGET, index = %index, size, usage = sweep.usage_bytes, "Measured index");

            if sweep.usage_bytes > limit_bytes {
                return Ok(Some((Selection::over_budget(index), sweep)));
            }

            narrator.record(Event::Retained {
                index,
                reason: Retention::WithinBudget {
                    usage_bytes: sweep.usage_bytes,
                    limit_bytes,
                },
            });
        }
        Ok::<_, Error>(None)
    })
}
