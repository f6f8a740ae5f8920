//! Formatting utilities used for CLI and export outputs.

use chrono::{Datelike, NaiveDate, Weekday};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Hours with two decimals and an `h` suffix (e.g. `8.00h`).
pub fn fmt_hours(h: f64) -> String {
    format!("{:.2}h", h)
}

/// Same as `fmt_hours`, but a day without positive hours renders as "-".
pub fn fmt_day_hours(h: Option<f64>) -> String {
    match h {
        Some(v) if v != 0.0 => fmt_hours(v),
        _ => "-".to_string(),
    }
}

const WEEK_LABELS: [&str; 6] = [
    "First week",
    "Second week",
    "Third week",
    "Fourth week",
    "Fifth week",
    "Sixth week",
];

/// Ordinal label for the n-th (0-based) week bucket of a month.
pub fn week_label(index: usize) -> String {
    WEEK_LABELS
        .get(index)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Week {}", index + 1))
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("?")
}

pub fn weekday_short(d: &NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub fn is_weekend(d: &NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}
