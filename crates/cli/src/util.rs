//! Shared formatting helpers for console output

use chrono::TimeDelta;

const GB: f64 = (1u64 << 30) as f64;

/// Format a duration as `D days, H:MM:SS` (days omitted when zero)
pub fn format_duration(delta: TimeDelta) -> String {
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let total = delta.num_seconds().unsigned_abs();

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    match days {
        0 => format!("{sign}{hours}:{minutes:02}:{seconds:02}"),
        1 => format!("{sign}1 day, {hours}:{minutes:02}:{seconds:02}"),
        _ => format!("{sign}{days} days, {hours}:{minutes:02}:{seconds:02}"),
    }
}

/// Format a byte count in GB (2^30 bytes) with three decimals
pub fn format_gb(bytes: u64) -> String {
    format!("{:.3} GB", bytes as f64 / GB)
}

/// Format wall-clock run time, e.g. `0:00:01.234`
pub fn format_elapsed(elapsed: std::time::Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{}:{:02}:{:02}.{:03}",
        secs / 3_600,
        (secs % 3_600) / 60,
        secs % 60,
        elapsed.subsec_millis()
    )
}
