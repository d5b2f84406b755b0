//! Console narration of per-index decisions

use crate::util::{format_duration, format_gb};
use owo_colors::OwoColorize;
use reaper_core::{Event, Narrator, Retention, SkipReason};

/// Human-readable line for an event, without color
pub fn describe(event: &Event) -> String {
    match event {
        Event::Skipped { index, reason } => match reason {
            SkipReason::MissingPrefix { prefix } => {
                format!("Skipping index due to missing prefix {prefix}: {index}")
            }
            SkipReason::InvalidTimestamp(err) => {
                format!("Could not find a valid timestamp from the index: {index} ({err})")
            }
            SkipReason::UnconfiguredGranularity(granularity) => format!(
                "Skipping {index} because it is of a type ({granularity}) that I'm not asked to delete."
            ),
        },
        Event::Retained { index, reason } => match reason {
            Retention::AboveCutoff(margin) => {
                format!("{index} is {} above the cutoff.", format_duration(*margin))
            }
            Retention::WithinBudget {
                usage_bytes,
                limit_bytes,
            } => format!(
                "keeping {index}, disk usage is {} and disk limit is {}.",
                format_gb(*usage_bytes),
                format_gb(*limit_bytes)
            ),
        },
        Event::WouldDelete { index, overdue } => format!(
            "Would have attempted deleting index {index} because it is {} older than the calculated cutoff.",
            format_duration(*overdue)
        ),
        Event::Deleting { index, overdue } => format!(
            "Deleting index {index} because it was {} older than cutoff.",
            format_duration(*overdue)
        ),
        Event::Deleted { index } => format!("Successfully deleted index: {index}"),
        Event::DeleteFailed { index, detail } => {
            format!("Error deleting index: {index}. ({detail})")
        }
    }
}

/// Narrator printing one line per event to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Narrator for Console {
    fn record(&self, event: Event) {
        let line = describe(&event);
        match event {
            Event::Skipped { .. } | Event::Retained { .. } => println!("{}", line.dimmed()),
            Event::WouldDelete { .. } | Event::Deleting { .. } => println!("{}", line.yellow()),
            Event::Deleted { .. } => println!("{}", line.green()),
            Event::DeleteFailed { .. } => println!("{}", line.red()),
        }
    }
}
