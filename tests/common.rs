#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheet::core::entry::EntryLogic;
use rtimesheet::db::entries::upsert_entry;
use rtimesheet::db::holidays::add_holiday;
use rtimesheet::db::pool::DbPool;
use rtimesheet::models::holiday::Holiday;
use rtimesheet::models::time_entry::TimeEntry;
use rtimesheet::utils::date::parse_date;
use rtimesheet::utils::formatting::is_weekend;
use rtimesheet::utils::time::parse_time;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const USER: &str = "ana";

/// The binary, isolated from the user's configuration and colours.
pub fn rts() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimesheet");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty directory inside tempdir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Store a day directly, bypassing the "today only" rule of the CLI.
pub fn seed_entry(conn: &Connection, user: &str, date: &str, times: [&str; 4]) -> TimeEntry {
    let mut e = TimeEntry::blank(user, parse_date(date).expect("valid date"));
    e.entry_time = parse_time(times[0]);
    e.lunch_exit_time = parse_time(times[1]);
    e.lunch_return_time = parse_time(times[2]);
    e.exit_time = parse_time(times[3]);

    let e = EntryLogic::recompute(e, 8.0).expect("recompute");
    upsert_entry(conn, &e).expect("upsert entry")
}

/// July 2025: every weekday worked 8h, except 2025-07-25 (holiday, no
/// entry) and 2025-07-31 (10h). Totals: 178h, 2h overtime, 22 days.
pub fn seed_july_2025(conn: &Connection, user: &str) {
    add_holiday(
        conn,
        &Holiday {
            holiday_date: parse_date("2025-07-25").expect("valid date"),
            description: "Company day".into(),
        },
    )
    .expect("add holiday");

    for day in 1..=31 {
        let date = format!("2025-07-{:02}", day);
        let d = parse_date(&date).expect("valid date");
        if is_weekend(&d) || day == 25 {
            continue;
        }

        if day == 31 {
            seed_entry(conn, user, &date, ["08:00", "12:00", "13:00", "19:00"]);
        } else {
            seed_entry(conn, user, &date, ["09:00", "12:00", "13:00", "18:00"]);
        }
    }
}

/// Initialize a DB file through the library and seed July 2025
pub fn init_db_with_july(db_path: &str) {
    let pool = DbPool::new(db_path).expect("open db");
    seed_july_2025(&pool.conn, USER);
}
