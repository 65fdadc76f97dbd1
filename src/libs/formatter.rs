//! Timestamp and duration formatting for console output.
//!
//! ## Format Specifications
//!
//! - Timestamps: `YYYY-MM-DD HH:MM:SS`, local wall-clock time
//! - Missing end time of an open session: `None`
//! - Report totals: `Xh Ym`, whole hours and whole minutes. Leftover seconds
//!   are discarded, never rounded.
//!
//! ### Examples
//! - 5400 seconds → "1h 30m"
//! - 59 seconds → "0h 0m"
//! - 90061 seconds → "25h 1m"

use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder shown for the end of a session that is still running.
pub const OPEN_END: &str = "None";

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_end(end: Option<&NaiveDateTime>) -> String {
    end.map(format_timestamp).unwrap_or_else(|| OPEN_END.to_string())
}

/// Formats a total number of seconds as `Xh Ym`.
pub fn format_total(total_seconds: i64) -> String {
    // Clock adjustments can leave end before start; never show a negative total.
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let mins = total_seconds % 3600 / 60;
    format!("{}h {}m", hours, mins)
}
