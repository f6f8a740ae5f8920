use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimesheetStatus {
    Draft,
    Submitted,
}

impl TimesheetStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TimesheetStatus::Draft => "draft",
            TimesheetStatus::Submitted => "submitted",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(TimesheetStatus::Draft),
            "submitted" => Some(TimesheetStatus::Submitted),
            _ => None,
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, TimesheetStatus::Draft)
    }
}

/// Monthly summary of a user's entries.
///
/// Lifecycle: `draft` → `submitted`, exactly once. There is no way back.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyTimesheet {
    pub id: i64,
    pub user_id: String,
    pub month: u32,
    pub year: i32,
    pub total_hours: f64,
    pub total_overtime: f64,
    pub status: TimesheetStatus,
    pub submitted_at: Option<DateTime<Local>>,
    pub pdf_url: Option<String>,
}

impl MonthlyTimesheet {
    /// "YYYY-MM" label used in messages and errors.
    pub fn period(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// One-way transition `draft → submitted`, stamping `submitted_at`.
    pub fn mark_submitted(&mut self, now: DateTime<Local>) -> AppResult<()> {
        if !self.status.is_draft() {
            return Err(AppError::AlreadySubmitted(self.period()));
        }
        self.status = TimesheetStatus::Submitted;
        self.submitted_at = Some(now);
        Ok(())
    }
}
