use crate::core::aggregate::TimesheetView;
use crate::core::holidays::HolidayAnnotator;
use crate::utils::formatting::weekday_short;
use crate::utils::time::format_time;
use serde::Serialize;

/// Flat per-day row of a monthly timesheet (CSV / JSON / PDF).
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub weekday: String,
    pub entry: String,
    pub lunch_exit: String,
    pub lunch_return: String,
    pub exit: String,
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub holiday: bool,
    pub notes: String,
}

pub(crate) fn build_rows(view: &TimesheetView, markers: &HolidayAnnotator) -> Vec<DayExport> {
    view.days()
        .map(|day| {
            let e = day.entry.as_ref();
            DayExport {
                date: day.date.format("%Y-%m-%d").to_string(),
                weekday: weekday_short(&day.date).to_string(),
                entry: format_time(e.and_then(|x| x.entry_time)),
                lunch_exit: format_time(e.and_then(|x| x.lunch_exit_time)),
                lunch_return: format_time(e.and_then(|x| x.lunch_return_time)),
                exit: format_time(e.and_then(|x| x.exit_time)),
                total_hours: e.map(|x| x.total_hours).unwrap_or(0.0),
                overtime_hours: e.map(|x| x.overtime_hours).unwrap_or(0.0),
                holiday: markers.is_holiday(&day.date),
                notes: e.and_then(|x| x.notes.clone()).unwrap_or_default(),
            }
        })
        .collect()
}
