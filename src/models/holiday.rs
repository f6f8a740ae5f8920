use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Holiday {
    pub holiday_date: NaiveDate,
    pub description: String, // display only
}
