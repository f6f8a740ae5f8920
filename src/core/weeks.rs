//! Split a calendar month into Monday-starting week buckets.

use crate::errors::AppResult;
use crate::utils::date::{first_of_month, last_of_month};
use chrono::{Datelike, Duration, NaiveDate};

pub type WeekBucket = Vec<NaiveDate>;

/// Monday-starting weeks of `month`, clipped to the month.
///
/// The first bucket starts at the Monday on/before the 1st and the last ends
/// at the Sunday on/after the last day; days outside the month are dropped.
/// Buckets are chronological, never empty and at most 6.
pub fn partition_month(year: i32, month: u32) -> AppResult<Vec<WeekBucket>> {
    let first = first_of_month(year, month)?;
    let last = last_of_month(year, month)?;

    let mut weeks = Vec::new();
    let mut week_start = first - Duration::days(first.weekday().num_days_from_monday() as i64);

    while week_start <= last {
        let bucket: WeekBucket = week_start
            .iter_days()
            .take(7)
            .filter(|d| *d >= first && *d <= last)
            .collect();

        if !bucket.is_empty() {
            weeks.push(bucket);
        }

        week_start += Duration::days(7);
    }

    Ok(weeks)
}
