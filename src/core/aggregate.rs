//! Monthly roll-up of time entries: totals, worked days, weekly subtotals
//! and the full per-week timesheet view.

use crate::core::weeks::partition_month;
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::utils::date::{first_of_month, last_of_month};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyTotals {
    pub total_hours: f64,
    pub total_overtime: f64,
    pub days_worked: u32,
}

/// Sum hours and overtime, and count days with positive hours.
///
/// Values are accumulated in (date, user) order so the floating-point result
/// is the same whatever order the entries arrive in.
pub fn aggregate(entries: &[TimeEntry]) -> MonthlyTotals {
    let mut sorted: Vec<&TimeEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        a.entry_date
            .cmp(&b.entry_date)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    sorted
        .into_iter()
        .fold(MonthlyTotals::default(), |mut acc, e| {
            acc.total_hours += e.total_hours;
            acc.total_overtime += e.overtime_hours;
            if e.is_worked() {
                acc.days_worked += 1;
            }
            acc
        })
}

/// Sum of `total_hours` for the entries falling on the bucket's dates.
pub fn week_subtotal(bucket: &[NaiveDate], entries: &[TimeEntry]) -> f64 {
    bucket
        .iter()
        .flat_map(|d| entries.iter().filter(move |e| e.entry_date == *d))
        .map(|e| e.total_hours)
        .sum()
}

/// One calendar day of the timesheet; `entry` is `None` when nothing was recorded.
#[derive(Debug, Clone, Serialize)]
pub struct DayRow {
    pub date: NaiveDate,
    pub entry: Option<TimeEntry>,
}

impl DayRow {
    pub fn hours(&self) -> Option<f64> {
        self.entry.as_ref().map(|e| e.total_hours)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekView {
    pub days: Vec<DayRow>,
    pub subtotal: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimesheetView {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<WeekView>,
    pub totals: MonthlyTotals,
}

impl TimesheetView {
    pub fn days(&self) -> impl Iterator<Item = &DayRow> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }
}

/// Entries restricted to the given month.
pub fn entries_in_month(year: i32, month: u32, entries: &[TimeEntry]) -> AppResult<Vec<TimeEntry>> {
    let first = first_of_month(year, month)?;
    let last = last_of_month(year, month)?;

    Ok(entries
        .iter()
        .filter(|e| e.entry_date >= first && e.entry_date <= last)
        .cloned()
        .collect())
}

/// Full month view: week buckets with their day rows and subtotals, plus
/// the monthly totals. Entries outside the month are ignored.
pub fn build_timesheet(year: i32, month: u32, entries: &[TimeEntry]) -> AppResult<TimesheetView> {
    let in_month = entries_in_month(year, month, entries)?;
    let by_date: HashMap<NaiveDate, &TimeEntry> =
        in_month.iter().map(|e| (e.entry_date, e)).collect();

    let weeks = partition_month(year, month)?
        .into_iter()
        .map(|bucket| {
            let subtotal = week_subtotal(&bucket, &in_month);
            let days = bucket
                .into_iter()
                .map(|date| DayRow {
                    date,
                    entry: by_date.get(&date).map(|e| (*e).clone()),
                })
                .collect();
            WeekView { days, subtotal }
        })
        .collect();

    Ok(TimesheetView {
        year,
        month,
        weeks,
        totals: aggregate(&in_month),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u32, hours: f64, overtime: f64) -> TimeEntry {
        let mut e = TimeEntry::blank("u1", NaiveDate::from_ymd_opt(2025, 7, day).unwrap());
        e.total_hours = hours;
        e.overtime_hours = overtime;
        e
    }

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(
            aggregate(&[]),
            MonthlyTotals {
                total_hours: 0.0,
                total_overtime: 0.0,
                days_worked: 0
            }
        );
    }

    #[test]
    fn zero_and_negative_days_are_not_worked() {
        let entries = vec![entry(1, 8.0, 0.0), entry(2, 0.0, 0.0), entry(3, -2.0, 0.0)];
        let totals = aggregate(&entries);
        assert_eq!(totals.days_worked, 1);
        assert_eq!(totals.total_hours, 6.0);
    }

    #[test]
    fn order_does_not_matter() {
        let a = vec![entry(1, 7.1, 0.0), entry(2, 8.3, 0.3), entry(3, 9.7, 1.7)];
        let mut b = a.clone();
        b.reverse();
        assert_eq!(aggregate(&a), aggregate(&b));
    }

    #[test]
    fn weekly_subtotals_add_up_to_month_total() {
        let entries = vec![
            entry(1, 8.0, 0.0),
            entry(4, 9.5, 1.5),
            entry(7, 8.25, 0.25),
            entry(19, 4.0, 0.0),
            entry(31, 10.0, 2.0),
        ];
        let view = build_timesheet(2025, 7, &entries).unwrap();
        let sum: f64 = view.weeks.iter().map(|w| w.subtotal).sum();

        assert_eq!(sum, aggregate(&entries).total_hours);
        assert_eq!(view.weeks[0].subtotal, 17.5);
        assert_eq!(view.days().count(), 31);
        assert_eq!(view.days().filter(|d| d.entry.is_some()).count(), 5);
    }

    #[test]
    fn entries_outside_month_are_ignored() {
        let mut other = entry(1, 8.0, 0.0);
        other.entry_date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();

        let view = build_timesheet(2025, 7, &[entry(2, 6.0, 0.0), other]).unwrap();
        assert_eq!(view.totals.total_hours, 6.0);
        assert_eq!(view.totals.days_worked, 1);
    }
}
