//! End-to-end tests for the index-reaper binary
//!
//! These never reach a live cluster: they cover argument handling and the
//! failure path when the cluster cannot be contacted.

mod common;

use anyhow::Result;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_missing_policy_is_a_usage_error() -> Result<()> {
    let dir = TempDir::new()?;

    let result = reaper!(dir.path(), "--host", "127.0.0.1").assert_exit_code(2)?;

    assert!(result.contains_stderr("Invalid arguments"));
    assert!(result.contains_stderr("--days-to-keep"));
    assert!(result.contains_stderr("Number of days to keep"));
    assert!(result.contains_stderr("Usage"));
    assert!(result.stdout.is_empty());
    Ok(())
}

#[test]
fn test_disk_budget_cannot_be_combined_with_windows() -> Result<()> {
    let dir = TempDir::new()?;

    let result = reaper!(dir.path(), "-g", "10", "-d", "7").assert_exit_code(2)?;

    assert!(result.contains_stderr("cannot be used with"));
    Ok(())
}

#[test]
fn test_zero_day_window_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    reaper!(dir.path(), "--days-to-keep", "0").assert_exit_code(2)?;
    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    let dir = TempDir::new()?;

    let result = reaper!(dir.path(), "--version").assert_success()?;

    assert!(result.contains_stdout(concat!("index-reaper ", env!("CARGO_PKG_VERSION"))));
    Ok(())
}

#[test]
fn test_short_version_flag() -> Result<()> {
    let dir = TempDir::new()?;

    let result = reaper!(dir.path(), "-v").assert_success()?;

    assert!(result.contains_stdout(concat!("index-reaper ", env!("CARGO_PKG_VERSION"))));
    Ok(())
}

#[test]
fn test_help_lists_flags() -> Result<()> {
    let dir = TempDir::new()?;

    let result = reaper!(dir.path(), "--help").assert_success()?;

    for flag in [
        "--host",
        "--port",
        "--timeout",
        "--prefix",
        "--separator",
        "--hours-to-keep",
        "--days-to-keep",
        "--disk-space-to-keep",
        "--dry-run",
    ] {
        assert!(result.contains_stdout(flag), "missing {flag} in help");
    }
    Ok(())
}

#[test]
fn test_unreachable_cluster_fails_the_run() -> Result<()> {
    let dir = TempDir::new()?;

    // Nothing listens on port 1
    let result = reaper!(
        dir.path(),
        "--host",
        "127.0.0.1",
        "--port",
        "1",
        "-t",
        "5",
        "-d",
        "7",
        "--dry-run"
    )
    .assert_exit_code(1)?;

    assert!(result.contains_stdout("Deleting daily indices older than 7 days."));
    assert!(result.contains_stderr("Failed to list indices"));
    assert!(result.duration < Duration::from_secs(30));
    Ok(())
}

#[test]
fn test_missing_config_file() -> Result<()> {
    let dir = TempDir::new()?;

    let result = reaper!(dir.path(), "-c", "nope.toml", "-d", "7").assert_exit_code(1)?;

    assert!(result.contains_stderr("Failed to read config file"));
    Ok(())
}

#[test]
fn test_invalid_config_value() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("reaper.toml"), "[indices]\nseparator = \"\"\n")?;

    let result = reaper!(dir.path(), "-c", "reaper.toml", "-d", "7")
        .env("RUST_LOG", "off")
        .assert_exit_code(1)?;

    assert!(result.contains_stderr("Invalid configuration"));
    Ok(())
}
