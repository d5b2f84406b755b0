//! index-reaper command-line front end

pub mod args;
pub mod config;
pub mod console;
pub mod run;
pub mod util;

/// Tracing target for run orchestration events.
pub const TRACING_TARGET: &str = "index_reaper";
