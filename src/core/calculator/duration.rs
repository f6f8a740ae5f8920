//! Worked time of a single day from its (up to four) clock readings.

use crate::utils::time::minutes_between;
use chrono::NaiveTime;

/// Net worked minutes for a day.
///
/// - entry or exit missing → 0
/// - both lunch readings present → lunch span is deducted
/// - a single lunch reading is ignored
///
/// No day rollover: an exit earlier than the entry yields a negative value.
pub fn worked_minutes(
    entry: Option<NaiveTime>,
    exit: Option<NaiveTime>,
    lunch_exit: Option<NaiveTime>,
    lunch_return: Option<NaiveTime>,
) -> i64 {
    let (Some(start), Some(end)) = (entry, exit) else {
        return 0;
    };

    let mut total = minutes_between(start, end);

    if let (Some(out), Some(back)) = (lunch_exit, lunch_return) {
        total -= minutes_between(out, back);
    }

    total
}

/// `worked_minutes` expressed in hours.
pub fn compute_worked_hours(
    entry: Option<NaiveTime>,
    exit: Option<NaiveTime>,
    lunch_exit: Option<NaiveTime>,
    lunch_return: Option<NaiveTime>,
) -> f64 {
    worked_minutes(entry, exit, lunch_exit, lunch_return) as f64 / 60.0
}
