use crate::db::{conversion_error, map_conflict};
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;
use crate::utils::date::{first_of_month, last_of_month};
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_COLUMNS: &str = "id, user_id, entry_date, entry_time, lunch_exit_time,
     lunch_return_time, exit_time, total_hours, overtime_hours, notes";

fn time_to_db(t: Option<NaiveTime>) -> Option<String> {
    t.map(|v| v.format("%H:%M").to_string())
}

fn time_from_db(idx: usize, raw: Option<String>) -> rusqlite::Result<Option<NaiveTime>> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveTime::parse_from_str(&s, "%H:%M")
            .map(Some)
            .map_err(|_| conversion_error(idx, AppError::InvalidTime(s.clone()))),
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<TimeEntry> {
    let date_str: String = row.get("entry_date")?;
    let entry_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    Ok(TimeEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        entry_date,
        entry_time: time_from_db(3, row.get("entry_time")?)?,
        lunch_exit_time: time_from_db(4, row.get("lunch_exit_time")?)?,
        lunch_return_time: time_from_db(5, row.get("lunch_return_time")?)?,
        exit_time: time_from_db(6, row.get("exit_time")?)?,
        total_hours: row.get::<_, Option<f64>>("total_hours")?.unwrap_or(0.0),
        overtime_hours: row.get::<_, Option<f64>>("overtime_hours")?.unwrap_or(0.0),
        notes: row.get("notes")?,
    })
}

/// Insert or update the entry for `(user_id, entry_date)` in one statement.
///
/// The `UNIQUE(user_id, entry_date)` constraint is the arbiter: two concurrent
/// saves for the same day end up as one row, last writer wins.
pub fn upsert_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<TimeEntry> {
    let now = Local::now().to_rfc3339();

    let id: i64 = conn
        .query_row(
            "INSERT INTO time_entries (
                user_id, entry_date, entry_time, lunch_exit_time, lunch_return_time,
                exit_time, total_hours, overtime_hours, notes, created_at, updated_at
             )
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)
             ON CONFLICT(user_id, entry_date) DO UPDATE SET
                entry_time        = excluded.entry_time,
                lunch_exit_time   = excluded.lunch_exit_time,
                lunch_return_time = excluded.lunch_return_time,
                exit_time         = excluded.exit_time,
                total_hours       = excluded.total_hours,
                overtime_hours    = excluded.overtime_hours,
                notes             = excluded.notes,
                updated_at        = excluded.updated_at
             RETURNING id",
            params![
                entry.user_id,
                entry.date_str(),
                time_to_db(entry.entry_time),
                time_to_db(entry.lunch_exit_time),
                time_to_db(entry.lunch_return_time),
                time_to_db(entry.exit_time),
                entry.total_hours,
                entry.overtime_hours,
                entry.notes,
                now,
            ],
            |row| row.get(0),
        )
        .map_err(|e| map_conflict(e, &format!("time entry {}", entry.date_str())))?;

    Ok(TimeEntry {
        id,
        ..entry.clone()
    })
}

pub fn load_entry(conn: &Connection, user_id: &str, date: &NaiveDate) -> AppResult<Option<TimeEntry>> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM time_entries WHERE user_id = ?1 AND entry_date = ?2"
    );
    let mut stmt = conn.prepare(&sql)?;

    let entry = stmt
        .query_row(params![user_id, date.format("%Y-%m-%d").to_string()], map_row)
        .optional()?;

    Ok(entry)
}

pub fn load_entries_between(
    conn: &Connection,
    user_id: &str,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<TimeEntry>> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM time_entries
         WHERE user_id = ?1 AND entry_date >= ?2 AND entry_date <= ?3
         ORDER BY entry_date ASC"
    );
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map(
        params![
            user_id,
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_month(conn: &Connection, user_id: &str, year: i32, month: u32) -> AppResult<Vec<TimeEntry>> {
    let from = first_of_month(year, month)?;
    let to = last_of_month(year, month)?;
    load_entries_between(conn, user_id, &from, &to)
}
