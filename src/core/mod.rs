pub mod aggregate;
pub mod calculator;
pub mod editability;
pub mod entry;
pub mod holidays;
pub mod log;
pub mod submission;
pub mod weeks;
