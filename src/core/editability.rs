//! Which calendar dates may be created or modified.
//!
//! Only "today" is editable. The reference date is always passed in by the
//! caller, so the rule stays a pure function of `(date, today)`.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Future,
    Today,
    Past,
}

impl DayState {
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        match date.cmp(&today) {
            Ordering::Greater => DayState::Future,
            Ordering::Equal => DayState::Today,
            Ordering::Less => DayState::Past,
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, DayState::Today)
    }
}

pub fn is_editable(date: NaiveDate, today: NaiveDate) -> bool {
    DayState::classify(date, today).is_editable()
}

/// Reject any date other than `today` with a state-specific message.
pub fn ensure_editable(date: NaiveDate, today: NaiveDate) -> AppResult<()> {
    match DayState::classify(date, today) {
        DayState::Today => Ok(()),
        DayState::Future => Err(AppError::FutureDay(date.to_string())),
        DayState::Past => Err(AppError::PastDay(date.to_string())),
    }
}
