use crate::core::aggregate::{MonthlyTotals, build_timesheet};
use crate::core::holidays::HolidayAnnotator;
use crate::core::submission::SubmissionLogic;
use crate::db::entries::load_month;
use crate::db::holidays::holiday_dates_between;
use crate::db::log::ttlog_soft;
use crate::db::settings::load_settings;
use crate::db::timesheets::{load_timesheet, set_pdf_url};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DayExport, build_rows};
use crate::export::pdf_export::export_pdf;
use crate::models::user::UserProfile;
use crate::utils::date::{first_of_month, last_of_month};
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

/// JSON document: header, day rows, weekly subtotals and totals.
#[derive(Serialize)]
struct TimesheetDocument<'a> {
    user_id: &'a str,
    user_name: &'a str,
    company_name: Option<String>,
    company_nif: Option<String>,
    month: u32,
    year: i32,
    days: Vec<DayExport>,
    weekly_subtotals: Vec<f64>,
    totals: MonthlyTotals,
}

/// High-level logic for the export command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the monthly timesheet of `user`.
    ///
    /// - `file` must be absolute; an existing file needs `force`
    /// - after a PDF export, the timesheet row records `pdf_url`
    pub fn export(
        conn: &Connection,
        user: &UserProfile,
        year: i32,
        month: u32,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let entries = load_month(conn, &user.id, year, month)?;
        let view = build_timesheet(year, month, &entries)?;

        let holidays = holiday_dates_between(
            conn,
            &first_of_month(year, month)?,
            &last_of_month(year, month)?,
        )?;
        let markers = HolidayAnnotator::new(holidays, entries.iter().map(|e| e.entry_date));
        let settings = load_settings(conn)?;

        match format {
            ExportFormat::Csv => export_csv(&build_rows(&view, &markers), path)?,
            ExportFormat::Json => {
                let doc = TimesheetDocument {
                    user_id: &user.id,
                    user_name: &user.name,
                    company_name: settings.company_name.clone(),
                    company_nif: settings.company_nif.clone(),
                    month,
                    year,
                    days: build_rows(&view, &markers),
                    weekly_subtotals: view.weeks.iter().map(|w| w.subtotal).collect(),
                    totals: view.totals,
                };
                export_json(&doc, path)?
            }
            ExportFormat::Pdf => {
                export_pdf(&view, &markers, user, &settings, path)?;

                let ts = match load_timesheet(conn, &user.id, year, month)? {
                    Some(ts) => ts,
                    None => SubmissionLogic::prepare_draft(conn, &user.id, year, month)?.0,
                };
                set_pdf_url(conn, ts.id, &format!("file://{}", path.display()))?;
            }
        }

        ttlog_soft(
            conn,
            "export",
            &format!("{:04}-{:02}", year, month),
            &format!("{} → {}", format.as_str(), path.display()),
        );

        Ok(())
    }
}
