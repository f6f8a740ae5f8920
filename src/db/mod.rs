pub mod entries;
pub mod holidays;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod settings;
pub mod timesheets;

use crate::errors::AppError;
use rusqlite::ErrorCode;

/// Turn a constraint violation into `AppError::Conflict`, anything else into `AppError::Db`.
pub(crate) fn map_conflict(e: rusqlite::Error, what: &str) -> AppError {
    match e.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => AppError::Conflict(format!("{what}: {e}")),
        _ => AppError::Db(e),
    }
}

/// Wrap a parse failure of a stored TEXT column so it surfaces through rusqlite.
pub(crate) fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}
