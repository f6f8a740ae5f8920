use crate::core::calculator::{compute_overtime, compute_worked_hours};
use crate::core::editability::ensure_editable;
use crate::db::entries::{load_entry, upsert_entry};
use crate::db::log::ttlog_soft;
use crate::db::settings::load_settings;
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::{EntryInput, TimeEntry};
use crate::utils::time::minutes_between;
use chrono::NaiveDate;
use rusqlite::Connection;

/// High-level business logic for saving a day.
pub struct EntryLogic;

impl EntryLogic {
    /// Derive hours and overtime from the clock fields of `entry`.
    ///
    /// A negative worked time (exit before entry) is rejected here: the
    /// calculator reports it, the save path refuses it.
    pub fn recompute(mut entry: TimeEntry, standard_hours_per_day: f64) -> AppResult<TimeEntry> {
        if let (Some(out), Some(back)) = (entry.lunch_exit_time, entry.lunch_return_time)
            && minutes_between(out, back) < 0
        {
            return Err(AppError::InvalidTime(format!(
                "lunch return {} is earlier than lunch exit {}",
                back.format("%H:%M"),
                out.format("%H:%M")
            )));
        }

        let hours = compute_worked_hours(
            entry.entry_time,
            entry.exit_time,
            entry.lunch_exit_time,
            entry.lunch_return_time,
        );

        if hours < 0.0 {
            return Err(AppError::InvalidTime(
                "exit time is earlier than entry time (overnight shifts are not supported)".into(),
            ));
        }

        entry.total_hours = hours;
        entry.overtime_hours = compute_overtime(hours, standard_hours_per_day);
        Ok(entry)
    }

    /// Create or update the entry of `user_id` for `date`.
    ///
    /// - `date` must be `today`
    /// - provided fields override the stored ones, others are kept
    /// - totals are recomputed with the current standard day
    /// - the write is a single atomic upsert keyed by (user, date)
    pub fn save(
        conn: &Connection,
        user_id: &str,
        date: NaiveDate,
        today: NaiveDate,
        input: &EntryInput,
    ) -> AppResult<(TimeEntry, bool)> {
        ensure_editable(date, today)?;

        if input.is_empty() {
            return Err(AppError::InvalidTime(
                "Nothing to do: specify at least one of --in, --lunch-out, --lunch-in, --out, --notes."
                    .into(),
            ));
        }

        let existing = load_entry(conn, user_id, &date)?;
        let is_update = existing.is_some();
        let base = existing.unwrap_or_else(|| TimeEntry::blank(user_id, date));

        let settings = load_settings(conn)?;
        let entry = Self::recompute(input.merge_into(base), settings.standard_hours_per_day)?;
        let saved = upsert_entry(conn, &entry)?;

        ttlog_soft(
            conn,
            if is_update { "edit" } else { "add" },
            &saved.date_str(),
            &format!(
                "{:.2}h worked, {:.2}h overtime",
                saved.total_hours, saved.overtime_hours
            ),
        );

        Ok((saved, is_update))
    }
}
