use crate::db::conversion_error;
use crate::errors::{AppError, AppResult};
use crate::models::holiday::Holiday;
use chrono::NaiveDate;
use rusqlite::{Connection, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<Holiday> {
    let raw: String = row.get(0)?;
    let holiday_date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(raw.clone())))?;

    Ok(Holiday {
        holiday_date,
        description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
    })
}

/// Add a holiday; re-adding an existing date only updates its description.
pub fn add_holiday(conn: &Connection, h: &Holiday) -> AppResult<()> {
    conn.execute(
        "INSERT INTO holidays (holiday_date, description) VALUES (?1, ?2)
         ON CONFLICT(holiday_date) DO UPDATE SET description = excluded.description",
        params![h.holiday_date.format("%Y-%m-%d").to_string(), h.description],
    )?;
    Ok(())
}

/// Returns false when the date was not a holiday.
pub fn delete_holiday(conn: &Connection, date: &NaiveDate) -> AppResult<bool> {
    let n = conn.execute(
        "DELETE FROM holidays WHERE holiday_date = ?1",
        [date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n > 0)
}

pub fn list_holidays(conn: &Connection) -> AppResult<Vec<Holiday>> {
    let mut stmt =
        conn.prepare("SELECT holiday_date, description FROM holidays ORDER BY holiday_date")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn holiday_dates_between(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn.prepare(
        "SELECT holiday_date, description FROM holidays
         WHERE holiday_date >= ?1 AND holiday_date <= ?2
         ORDER BY holiday_date",
    )?;
    let rows = stmt.query_map(
        [
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?.holiday_date);
    }
    Ok(out)
}
