use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `YYYY-MM-DD` argument, defaulting to `fallback`.
pub fn parse_date_or(s: Option<&String>, fallback: NaiveDate) -> AppResult<NaiveDate> {
    match s {
        Some(v) => parse_date(v).ok_or_else(|| AppError::InvalidDate(v.to_string())),
        None => Ok(fallback),
    }
}

/// Parse `YYYY-MM` into `(year, month)`.
pub fn parse_month(p: &str) -> AppResult<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", p.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(p.to_string()))?;
    Ok((d.year(), d.month()))
}

/// Parse an optional `YYYY-MM` argument, defaulting to the current month.
pub fn resolve_month(p: Option<&String>) -> AppResult<(i32, u32)> {
    match p {
        Some(v) => parse_month(v),
        None => {
            let t = today();
            Ok((t.year(), t.month()))
        }
    }
}

pub fn first_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidMonth(format!("{:04}-{:02}", year, month)))
}

pub fn last_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next.and_then(|d| d.pred_opt())
        .ok_or_else(|| AppError::InvalidDate(first.to_string()))
}

pub fn all_days_of_month(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    let first = first_of_month(year, month)?;
    let last = last_of_month(year, month)?;

    Ok(first.iter_days().take_while(|d| *d <= last).collect())
}
