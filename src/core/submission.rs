use crate::core::aggregate::{MonthlyTotals, aggregate};
use crate::db::entries::load_month;
use crate::db::log::ttlog;
use crate::db::timesheets::{load_timesheet, set_submitted, upsert_draft};
use crate::errors::{AppError, AppResult};
use crate::models::notification::NotificationRequest;
use crate::models::timesheet::MonthlyTimesheet;
use crate::models::user::UserProfile;
use crate::notify::Notifier;
use chrono::{DateTime, Local};
use rusqlite::Connection;

/// Monthly timesheet preparation and submission.
pub struct SubmissionLogic;

impl SubmissionLogic {
    /// Aggregate the month's entries and store them as the draft.
    ///
    /// Returns the stored timesheet (which may already be `submitted`, in
    /// which case its frozen totals are returned unchanged).
    pub fn prepare_draft(
        conn: &Connection,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> AppResult<(MonthlyTimesheet, MonthlyTotals)> {
        let entries = load_month(conn, user_id, year, month)?;
        let totals = aggregate(&entries);
        let ts = upsert_draft(conn, user_id, year, month, &totals)?;
        Ok((ts, totals))
    }

    /// Submit the draft for (user, month, year) and notify.
    ///
    /// Status change and notification form one unit: the status update runs
    /// inside a transaction that is only committed once the notifier has
    /// accepted the message. On any error the timesheet stays `draft`.
    pub fn submit(
        conn: &mut Connection,
        notifier: &dyn Notifier,
        user: &UserProfile,
        year: i32,
        month: u32,
        now: DateTime<Local>,
    ) -> AppResult<MonthlyTimesheet> {
        let period = format!("{:04}-{:02}", year, month);
        let tx = conn.transaction()?;

        // 1️⃣ precondition: a draft exists
        let mut ts = load_timesheet(&tx, &user.id, year, month)?
            .ok_or_else(|| AppError::TimesheetNotFound(period.clone()))?;

        ts.mark_submitted(now)?;

        // 2️⃣ conditional write: only a draft row can flip
        if set_submitted(&tx, ts.id, &now)? == 0 {
            return Err(AppError::Conflict(format!(
                "timesheet {} changed while submitting",
                period
            )));
        }

        // 3️⃣ audit line, still inside the transaction
        ttlog(
            &tx,
            "submit",
            &period,
            &format!(
                "Timesheet #{} submitted ({:.2}h, {:.2}h overtime)",
                ts.id, ts.total_hours, ts.total_overtime
            ),
        )?;

        // 4️⃣ notification; an error drops `tx` and rolls everything back.
        // Nothing fallible may run between notify and commit.
        let request = NotificationRequest {
            timesheet_id: ts.id,
            user_email: user.email.clone(),
            user_name: user.name.clone(),
            month: ts.month,
            year: ts.year,
            total_hours: ts.total_hours,
            total_overtime: ts.total_overtime,
        };
        notifier.notify(&request)?;

        tx.commit()?;
        Ok(ts)
    }
}
