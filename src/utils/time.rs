//! Time utilities: parsing HH:MM, minute differences, hour formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Signed difference `end - start` in minutes (no day rollover).
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

pub fn format_time(t: Option<NaiveTime>) -> String {
    t.map(|v| v.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Clock argument of `add`: absent keeps the stored value, an empty string
/// clears it, anything else must be `HH:MM`.
pub fn parse_clock_edit(input: Option<&String>) -> AppResult<Option<Option<NaiveTime>>> {
    match input {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(Some(None)),
        Some(s) => {
            let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
            Ok(Some(Some(t)))
        }
    }
}
