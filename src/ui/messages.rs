//! User-facing status lines (stdout for progress, stderr for errors).

use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Honors the `NO_COLOR` convention.
fn styled(color: &str, icon: &str, msg: &dyn fmt::Display) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        format!("{} {}", icon, msg)
    } else {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", styled(CYAN, ICON_INFO, &msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", styled(GREEN, ICON_OK, &msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", styled(YELLOW, ICON_WARN, &msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(RED, ICON_ERR, &msg));
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}== {} =={}", CYAN, BOLD, msg, RESET);
}
