pub mod add;
pub mod calendar;
pub mod config;
pub mod db;
pub mod export;
pub mod holiday;
pub mod init;
pub mod log;
pub mod settings;
pub mod show;
pub mod stats;
pub mod submit;
pub mod timesheet;
