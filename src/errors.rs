//! Unified application error type.
//! All modules (db, core, cli, notify, export) return AppError so that the
//! caller always gets one error taxonomy: validation, consistency and
//! collaborator failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month: {0} (expected YYYY-MM with month 1..12)")]
    InvalidMonth(String),

    #[error("Invalid standard hours per day: {0}")]
    InvalidHours(String),

    #[error("Cannot record future days ({0})")]
    FutureDay(String),

    #[error("Can only record on the current day ({0})")]
    PastDay(String),

    // ---------------------------
    // Consistency errors
    // ---------------------------
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Timesheet for {0} has already been submitted")]
    AlreadySubmitted(String),

    #[error("No timesheet found for {0}")]
    TimesheetNotFound(String),

    // ---------------------------
    // Collaborator failures
    // ---------------------------
    #[error("Notification failed: {0}")]
    Notification(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors the user can fix by changing the input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::InvalidMonth(_)
                | AppError::InvalidHours(_)
                | AppError::FutureDay(_)
                | AppError::PastDay(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
