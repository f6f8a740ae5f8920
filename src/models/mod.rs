pub mod company_settings;
pub mod holiday;
pub mod notification;
pub mod time_entry;
pub mod timesheet;
pub mod user;
