//! One sweep: list, select, delete

use crate::config::{Policy, Settings};
use crate::console::Console;
use crate::util::format_elapsed;
use crate::TRACING_TARGET;
use anyhow::{Context, Result};
use cluster::HttpCluster;
use owo_colors::OwoColorize;
use reaper_core::{
    execute, find_expired, find_overusage, Clock, Cluster, Narrator, RunMode, RunSummary,
};
use std::time::Duration;
use tracing::info;

/// Connect to the configured cluster and run the sweep
pub async fn run(settings: &Settings) -> Result<RunSummary> {
    let cluster = HttpCluster::new(&settings.cluster).context("Failed to create cluster client")?;
    info!(target: TRACING_TARGET, endpoint = %cluster.endpoint(), mode = ?settings.mode, "Starting sweep");

    sweep(&cluster, settings, &settings.clock, &Console).await
}

/// Lines announcing what the sweep is about to do
pub fn banner(policy: &Policy) -> Vec<String> {
    match policy {
        Policy::Retention(window) => {
            let mut lines = Vec::new();
            if let Some(days) = window.days {
                lines.push(format!("Deleting daily indices older than {days} days."));
            }
            if let Some(hours) = window.hours {
                lines.push(format!("Deleting hourly indices older than {hours} hours."));
            }
            lines
        }
        Policy::DiskUsage { gb, .. } => {
            vec![format!("Let's keep disk usage lower than {gb} GB.")]
        }
    }
}

/// Run the selector chosen by `settings.policy` against `cluster`
pub async fn sweep<C>(
    cluster: &C,
    settings: &Settings,
    clock: &dyn Clock,
    narrator: &dyn Narrator,
) -> Result<RunSummary>
where
    C: Cluster + ?Sized,
{
    for line in banner(&settings.policy) {
        println!("{}", line.bold());
    }
    println!();

    let indices = cluster
        .list_indices()
        .await
        .context("Failed to list indices")?;
    info!(target: TRACING_TARGET, count = indices.len(), "Listed indices");

    let summary = match settings.policy {
        Policy::Retention(window) => {
            let expired = find_expired(indices, window, clock, &settings.pattern, narrator);
            execute(cluster, expired.into_stream(), settings.mode, narrator).await
        }
        Policy::DiskUsage { budget, .. } => {
            let over = find_overusage(cluster, indices, budget, &settings.pattern, narrator);
            execute(cluster, over, settings.mode, narrator).await
        }
    }
    .context("Sweep aborted")?;

    Ok(summary)
}

/// Closing report after a sweep
pub fn print_summary(summary: &RunSummary, mode: RunMode, elapsed: Duration) {
    println!();
    if summary.selected == 0 {
        println!("{}", "No indices selected for deletion".dimmed());
    } else if mode == RunMode::DryRun {
        println!(
            "Would delete: {}",
            summary.would_delete.to_string().yellow()
        );
    } else {
        println!("Deleted:      {}", summary.deleted.to_string().green());
        if summary.failed > 0 {
            println!("Failed:       {}", summary.failed.to_string().red());
        }
    }
    println!();
    println!("Done in {}.", format_elapsed(elapsed));
}
