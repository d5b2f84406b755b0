//! Deletion executor
//!
//! Drains a selection stream and deletes (or, in a dry run, reports) each
//! selected index. A refused delete is reported and the run moves on.

use crate::cluster::Cluster;
use crate::narrate::{Event, Narrator};
use crate::{Result, Selection, TRACING_TARGET};
use futures::{pin_mut, Stream, TryStreamExt};
use tracing::{info, warn};

/// Whether deletes are actually issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    DryRun,
    Delete,
}

impl RunMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            RunMode::DryRun
        } else {
            RunMode::Delete
        }
    }
}

/// Tally of what happened to the selected indices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub selected: usize,
    pub deleted: usize,
    pub would_delete: usize,
    pub failed: usize,
}

/// Process every selection in order.
///
/// Errors from the stream or from the delete transport end the run; an
/// unacknowledged delete does not.
pub async fn execute<C, S>(
    cluster: &C,
    selections: S,
    mode: RunMode,
    narrator: &dyn Narrator,
) -> Result<RunSummary>
where
    C: Cluster + ?Sized,
    S: Stream<Item = Result<Selection>>,
{
    pin_mut!(selections);
    let mut summary = RunSummary::default();

    while let Some(Selection { index, overdue }) = selections.try_next().await? {
        summary.selected += 1;

        if mode == RunMode::DryRun {
            summary.would_delete += 1;
            narrator.record(Event::WouldDelete { index, overdue });
            continue;
        }

        narrator.record(Event::Deleting {
            index: index.clone(),
            overdue,
        });
        let outcome = cluster.delete_index(&index).await?;

        if outcome.acknowledged {
            info!(target: TRACING_TARGET, index = %index, "Deleted index");
            summary.deleted += 1;
            narrator.record(Event::Deleted { index });
        } else {
            warn!(target: TRACING_TARGET, index = %index, detail = %outcome.detail, "Delete was not acknowledged");
            summary.failed += 1;
            narrator.record(Event::DeleteFailed {
                index,
                detail: outcome.detail,
            });
        }
    }

    Ok(summary)
}
