use crate::core::aggregate::MonthlyTotals;
use crate::db::{conversion_error, map_conflict};
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::{MonthlyTimesheet, TimesheetStatus};
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<MonthlyTimesheet> {
    let status_str: String = row.get("status")?;
    let status = TimesheetStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_error(
            6,
            AppError::Other(format!("Invalid timesheet status: {}", status_str)),
        )
    })?;

    let submitted_at = match row.get::<_, Option<String>>("submitted_at")? {
        Some(raw) => Some(
            DateTime::parse_from_rfc3339(&raw)
                .map(|dt| dt.with_timezone(&Local))
                .map_err(|_| conversion_error(7, AppError::InvalidDate(raw.clone())))?,
        ),
        None => None,
    };

    Ok(MonthlyTimesheet {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        month: row.get("month")?,
        year: row.get("year")?,
        total_hours: row.get("total_hours")?,
        total_overtime: row.get("total_overtime")?,
        status,
        submitted_at,
        pdf_url: row.get("pdf_url")?,
    })
}

pub fn load_timesheet(
    conn: &Connection,
    user_id: &str,
    year: i32,
    month: u32,
) -> AppResult<Option<MonthlyTimesheet>> {
    let ts = conn
        .query_row(
            "SELECT id, user_id, month, year, total_hours, total_overtime,
                    status, submitted_at, pdf_url
             FROM timesheets WHERE user_id = ?1 AND month = ?2 AND year = ?3",
            params![user_id, month, year],
            map_row,
        )
        .optional()?;
    Ok(ts)
}

/// Create the draft for (user, month, year) or refresh its totals.
///
/// A submitted timesheet is left untouched: its totals are frozen.
pub fn upsert_draft(
    conn: &Connection,
    user_id: &str,
    year: i32,
    month: u32,
    totals: &MonthlyTotals,
) -> AppResult<MonthlyTimesheet> {
    conn.execute(
        "INSERT INTO timesheets (user_id, month, year, total_hours, total_overtime, status)
         VALUES (?1, ?2, ?3, ?4, ?5, 'draft')
         ON CONFLICT(user_id, month, year) DO UPDATE SET
            total_hours    = excluded.total_hours,
            total_overtime = excluded.total_overtime
         WHERE timesheets.status = 'draft'",
        params![user_id, month, year, totals.total_hours, totals.total_overtime],
    )
    .map_err(|e| map_conflict(e, &format!("timesheet {:04}-{:02}", year, month)))?;

    load_timesheet(conn, user_id, year, month)?
        .ok_or_else(|| AppError::TimesheetNotFound(format!("{:04}-{:02}", year, month)))
}

/// Conditional `draft → submitted` write. Returns the number of rows changed
/// (0 when someone else submitted first).
pub fn set_submitted(conn: &Connection, id: i64, submitted_at: &DateTime<Local>) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE timesheets SET status = 'submitted', submitted_at = ?1
         WHERE id = ?2 AND status = 'draft'",
        params![submitted_at.to_rfc3339(), id],
    )?;
    Ok(n)
}

pub fn set_pdf_url(conn: &Connection, id: i64, url: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE timesheets SET pdf_url = ?1 WHERE id = ?2",
        params![url, id],
    )?;
    Ok(())
}

/// Stored timesheets, newest period first (`year DESC, month DESC`).
///
/// `user_id = None` lists every user; ties within a period are ordered by user.
pub fn list_timesheets(conn: &Connection, user_id: Option<&str>) -> AppResult<Vec<MonthlyTimesheet>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, user_id, month, year, total_hours, total_overtime,
                status, submitted_at, pdf_url
         FROM timesheets
         WHERE ?1 IS NULL OR user_id = ?1
         ORDER BY year DESC, month DESC, user_id ASC",
    )?;

    let rows = stmt.query_map(params![user_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
