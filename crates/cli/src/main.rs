//! index-reaper CLI - delete expired or over-budget indices

use anyhow::Result;
use cli_lib::args::Args;
use cli_lib::config::Settings;
use cli_lib::run;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; per-index narration goes to stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse_or_exit();
    let settings = Settings::resolve(&args)?;

    let start = Instant::now();
    let summary = run::run(&settings).await?;
    run::print_summary(&summary, settings.mode, start.elapsed());

    Ok(())
}
