use crate::core::aggregate::TimesheetView;
use crate::core::holidays::HolidayAnnotator;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::company_settings::CompanySettings;
use crate::models::user::UserProfile;
use crate::ui::messages::info;
use crate::utils::formatting::{fmt_day_hours, fmt_hours, month_name, week_label, weekday_short};
use crate::utils::time::format_time;
use std::path::Path;

const HEADERS: [&str; 7] = ["Date", "Day", "Entry", "Lunch out", "Lunch in", "Exit", "Total"];

/// Timesheet document: header block, one table per week with its
/// subtotal, monthly totals at the end.
pub(crate) fn export_pdf(
    view: &TimesheetView,
    markers: &HolidayAnnotator,
    user: &UserProfile,
    settings: &CompanySettings,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let period = format!("{} {}", month_name(view.month), view.year);
    let mut pdf = PdfManager::new(&format!("Timesheet {} - {}", user.name, period));

    pdf.title("Timesheet");
    pdf.line(&format!("Name: {}", user.name));
    pdf.line(&format!(
        "Company: {}",
        settings.company_name.as_deref().unwrap_or("")
    ));
    pdf.line(&format!("NIF: {}", settings.company_nif.as_deref().unwrap_or("")));
    pdf.line(&format!("Month/Year: {}", period));

    for (i, week) in view.weeks.iter().enumerate() {
        pdf.spacer(10.0);
        pdf.line(&week_label(i));

        let rows: Vec<Vec<String>> = week
            .days
            .iter()
            .map(|d| {
                let e = d.entry.as_ref();
                let mut day = weekday_short(&d.date).to_string();
                if markers.is_holiday(&d.date) {
                    day.push_str(" (H)");
                }
                vec![
                    d.date.format("%d/%m").to_string(),
                    day,
                    format_time(e.and_then(|x| x.entry_time)),
                    format_time(e.and_then(|x| x.lunch_exit_time)),
                    format_time(e.and_then(|x| x.lunch_return_time)),
                    format_time(e.and_then(|x| x.exit_time)),
                    fmt_day_hours(d.hours()),
                ]
            })
            .collect();

        let mut footer = vec![String::new(); HEADERS.len()];
        footer[0] = "Weekly total".to_string();
        footer[HEADERS.len() - 1] = fmt_hours(week.subtotal);

        pdf.table(&HEADERS, &rows, Some(footer));
    }

    pdf.spacer(14.0);
    pdf.line(&format!("Monthly total: {}", fmt_hours(view.totals.total_hours)));
    pdf.line(&format!("Overtime: {}", fmt_hours(view.totals.total_overtime)));
    pdf.line(&format!("Days worked: {}", view.totals.days_worked));

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
