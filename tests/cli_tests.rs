use predicates::str::contains;
use std::fs;

mod common;
use common::{USER, init_db_with_july, rts, setup_test_db, temp_dir};

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    rts()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"));
}

#[test]
fn test_add_today_and_update() {
    let db_path = setup_test_db("cli_add_today");

    rts()
        .args([
            "--db", &db_path, "--test", "--user", USER, "add", "--in", "09:00", "--lunch-out",
            "12:30", "--lunch-in", "13:30", "--out", "18:30",
        ])
        .assert()
        .success()
        .stdout(contains("recorded"))
        .stdout(contains("8.50h"))
        .stdout(contains("0.50h"));

    // only the exit changes, the rest is kept
    rts()
        .args(["--db", &db_path, "--test", "--user", USER, "add", "--out", "17:00"])
        .assert()
        .success()
        .stdout(contains("updated"))
        .stdout(contains("7.00h"));

    rts()
        .args(["--db", &db_path, "--test", "--user", USER, "show", "--date", &today()])
        .assert()
        .success()
        .stdout(contains("09:00"))
        .stdout(contains("17:00"));
}

#[test]
fn test_add_rejects_other_days() {
    let db_path = setup_test_db("cli_add_other_days");

    rts()
        .args(["--db", &db_path, "--test", "add", "--date", "2020-01-02", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Can only record on the current day"));

    rts()
        .args(["--db", &db_path, "--test", "add", "--date", "2999-01-02", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Cannot record future days"));
}

#[test]
fn test_add_rejects_bad_input() {
    let db_path = setup_test_db("cli_add_bad_input");

    rts()
        .args(["--db", &db_path, "--test", "add"])
        .assert()
        .failure()
        .stderr(contains("Nothing to do"));

    rts()
        .args(["--db", &db_path, "--test", "add", "--in", "9h"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    rts()
        .args(["--db", &db_path, "--test", "add", "--in", "18:00", "--out", "09:00"])
        .assert()
        .failure()
        .stderr(contains("exit time is earlier than entry time"));
}

#[test]
fn test_timesheet_and_stats_for_july() {
    let db_path = setup_test_db("cli_timesheet_july");
    init_db_with_july(&db_path);

    rts()
        .args(["--db", &db_path, "--test", "--user", USER, "timesheet", "--month", "2025-07"])
        .assert()
        .success()
        .stdout(contains("First week"))
        .stdout(contains("Fifth week"))
        .stdout(contains("Subtotal: 34.00h"))
        .stdout(contains("Total hours    : 178.00h"))
        .stdout(contains("Days worked    : 22"));

    rts()
        .args(["--db", &db_path, "--test", "--user", USER, "stats", "--month", "2025-07"])
        .assert()
        .success()
        .stdout(contains("178.00h"))
        .stdout(contains("2.00h"))
        .stdout(contains("22"));

    rts()
        .args(["--db", &db_path, "--test", "--user", "nobody", "stats", "--month", "2025-07"])
        .assert()
        .success()
        .stdout(contains("0.00h"));
}

#[test]
fn test_invalid_month_is_rejected() {
    let db_path = setup_test_db("cli_invalid_month");

    rts()
        .args(["--db", &db_path, "--test", "timesheet", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_holidays_and_calendar() {
    let db_path = setup_test_db("cli_holidays");

    rts()
        .args([
            "--db", &db_path, "--test", "holiday", "--add", "2025-12-25", "--description",
            "Christmas",
        ])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "--test", "holiday", "--list"])
        .assert()
        .success()
        .stdout(contains("2025-12-25"))
        .stdout(contains("Christmas"));

    rts()
        .args(["--db", &db_path, "--test", "calendar", "--month", "2025-12"])
        .assert()
        .success()
        .stdout(contains("December 2025"))
        .stdout(contains("Mo  Tu  We"));

    rts()
        .args(["--db", &db_path, "--test", "holiday", "--del", "2025-12-25"])
        .assert()
        .success()
        .stdout(contains("removed"));
}

#[test]
fn test_settings_validate_standard_day() {
    let db_path = setup_test_db("cli_settings");

    rts()
        .args(["--db", &db_path, "--test", "settings", "--hours", "7.5", "--name", "Acme"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "--test", "settings", "--print"])
        .assert()
        .success()
        .stdout(contains("7.50h"))
        .stdout(contains("Acme"));

    rts()
        .args(["--db", &db_path, "--test", "settings", "--hours", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid standard hours per day"));
}

#[test]
fn test_submit_queues_notice_once() {
    let home = temp_dir("cli_submit_home");
    let spool = home.join("outbox");
    let db_path = setup_test_db("cli_submit");
    init_db_with_july(&db_path);

    let conf_dir = home.join(".rtimesheet");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("rtimesheet.conf"),
        format!(
            "database: {}\nuser_id: {}\nuser_name: Ana Silva\nuser_email: ana@example.com\n\
             mail_from: timesheet@acme.test\nmail_to: hr@acme.test\nmail_spool: {}\n",
            db_path,
            USER,
            spool.display()
        ),
    )
    .unwrap();

    rts()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["submit", "--month", "2025-07"])
        .assert()
        .success()
        .stdout(contains("submitted"));

    let files: Vec<_> = fs::read_dir(&spool).unwrap().collect();
    assert_eq!(files.len(), 1);
    let eml = fs::read_to_string(files[0].as_ref().unwrap().path()).unwrap();
    assert!(eml.contains("Total hours: 178.00h"));

    rts()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["submit", "--month", "2025-07"])
        .assert()
        .failure()
        .stderr(contains("already been submitted"));

    assert_eq!(fs::read_dir(&spool).unwrap().count(), 1);

    rts()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["timesheet", "--month", "2025-07"])
        .assert()
        .success()
        .stdout(contains("Status         : submitted"));
}

#[test]
fn test_timesheet_list_newest_first() {
    use rtimesheet::core::submission::SubmissionLogic;
    use rtimesheet::db::pool::DbPool;

    let db_path = setup_test_db("cli_timesheet_list");
    init_db_with_july(&db_path);
    {
        let pool = DbPool::new(&db_path).unwrap();
        SubmissionLogic::prepare_draft(&pool.conn, USER, 2025, 7).unwrap();
        SubmissionLogic::prepare_draft(&pool.conn, USER, 2025, 6).unwrap();
        SubmissionLogic::prepare_draft(&pool.conn, "bruno", 2025, 8).unwrap();
    }

    let out = rts()
        .args(["--db", &db_path, "--test", "--user", USER, "timesheet", "--list"])
        .assert()
        .success()
        .stdout(contains("178.00h"))
        .stdout(contains("draft"))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let july = text.find("July 2025").unwrap();
    let june = text.find("June 2025").unwrap();
    assert!(july < june);
    assert!(!text.contains("bruno"));

    rts()
        .args(["--db", &db_path, "--test", "--user", USER, "timesheet", "--list", "--all"])
        .assert()
        .success()
        .stdout(contains("bruno"))
        .stdout(contains("August 2025"));

    rts()
        .args(["--db", &db_path, "--test", "timesheet", "--all"])
        .assert()
        .failure();
}

#[test]
fn test_add_empty_value_clears_one_field() {
    let db_path = setup_test_db("cli_add_clear_field");

    rts()
        .args([
            "--db", &db_path, "--test", "--user", USER, "add", "--in", "09:00", "--out", "17:00",
        ])
        .assert()
        .success()
        .stdout(contains("8.00h"));

    rts()
        .args(["--db", &db_path, "--test", "--user", USER, "add", "--out", ""])
        .assert()
        .success()
        .stdout(contains("updated"))
        .stdout(contains("09:00 → -"))
        .stdout(contains("worked 0.00h"));
}

#[test]
fn test_config_check_reports_added_keys_once() {
    let home = temp_dir("cli_config_check_home");
    let conf_dir = home.join(".rtimesheet");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(conf_dir.join("rtimesheet.conf"), "user_name: Ana Silva\n").unwrap();

    let out = rts()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("mail_spool").count(), 1);
    assert_eq!(text.lines().count(), 1);

    let saved = fs::read_to_string(conf_dir.join("rtimesheet.conf")).unwrap();
    assert!(saved.contains("user_name: Ana Silva"));
    assert!(saved.contains("mail_spool:"));
}
