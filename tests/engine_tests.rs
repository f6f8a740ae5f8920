mod common;

use common::{USER, seed_entry, seed_july_2025, temp_dir};
use rtimesheet::core::aggregate::build_timesheet;
use rtimesheet::core::submission::SubmissionLogic;
use rtimesheet::core::weeks::partition_month;
use rtimesheet::db::entries::load_month;
use rtimesheet::db::pool::DbPool;
use rtimesheet::db::timesheets::load_timesheet;
use rtimesheet::errors::AppError;
use rtimesheet::models::timesheet::TimesheetStatus;
use rtimesheet::models::user::UserProfile;
use rtimesheet::notify::SpoolNotifier;
use chrono::Local;
use std::fs;

fn ana() -> UserProfile {
    UserProfile {
        id: USER.into(),
        name: "Ana Silva".into(),
        email: "ana@example.com".into(),
    }
}

#[test]
fn test_july_2025_month_view() {
    let pool = DbPool::in_memory().unwrap();
    seed_july_2025(&pool.conn, USER);

    let entries = load_month(&pool.conn, USER, 2025, 7).unwrap();
    assert_eq!(entries.len(), 22);

    let view = build_timesheet(2025, 7, &entries).unwrap();
    let sizes: Vec<usize> = view.weeks.iter().map(|w| w.days.len()).collect();
    assert_eq!(sizes, vec![6, 7, 7, 7, 4]);

    assert_eq!(view.totals.total_hours, 178.0);
    assert_eq!(view.totals.total_overtime, 2.0);
    assert_eq!(view.totals.days_worked, 22);

    // Tue 1 .. Sun 6: four worked weekdays
    assert_eq!(view.weeks[0].subtotal, 32.0);
    // Mon 21 .. Sun 27 without the holiday on Friday
    assert_eq!(view.weeks[3].subtotal, 32.0);
    // Mon 28 .. Thu 31, the last one with 10h
    assert_eq!(view.weeks[4].subtotal, 34.0);

    let sum: f64 = view.weeks.iter().map(|w| w.subtotal).sum();
    assert_eq!(sum, view.totals.total_hours);
}

#[test]
fn test_other_users_are_not_mixed_in() {
    let pool = DbPool::in_memory().unwrap();
    seed_july_2025(&pool.conn, USER);
    seed_entry(&pool.conn, "bruno", "2025-07-02", ["09:00", "", "", "13:00"]);

    let mine = load_month(&pool.conn, USER, 2025, 7).unwrap();
    let theirs = load_month(&pool.conn, "bruno", 2025, 7).unwrap();

    assert_eq!(mine.len(), 22);
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0].total_hours, 4.0);
}

#[test]
fn test_partition_covers_every_month_once() {
    for year in [2024, 2025] {
        for month in 1..=12 {
            let buckets = partition_month(year, month).unwrap();
            let days: Vec<_> = buckets.iter().flatten().collect();
            let mut sorted = days.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(days.len(), sorted.len());
            assert!(buckets.len() >= 4 && buckets.len() <= 6);
        }
    }
}

#[test]
fn test_submit_writes_notice_and_freezes_totals() {
    let mut pool = DbPool::in_memory().unwrap();
    seed_july_2025(&pool.conn, USER);
    let spool = temp_dir("engine_submit_spool");

    let (draft, totals) = SubmissionLogic::prepare_draft(&pool.conn, USER, 2025, 7).unwrap();
    assert_eq!(draft.status, TimesheetStatus::Draft);
    assert_eq!(totals.total_hours, 178.0);

    let notifier = SpoolNotifier::new(&spool, "timesheet@acme.test", "hr@acme.test");
    let ts = SubmissionLogic::submit(&mut pool.conn, &notifier, &ana(), 2025, 7, Local::now())
        .unwrap();
    assert_eq!(ts.status, TimesheetStatus::Submitted);
    assert!(ts.submitted_at.is_some());

    let files: Vec<_> = fs::read_dir(&spool).unwrap().collect();
    assert_eq!(files.len(), 1);

    let eml = fs::read_to_string(files[0].as_ref().unwrap().path()).unwrap();
    assert!(eml.contains("Subject: Timesheet - Ana Silva - July 2025"));
    assert!(eml.contains("To: hr@acme.test"));
    assert!(eml.contains("Total hours: 178.00h"));
    assert!(eml.contains("Overtime:    2.00h"));

    // late entry: the submitted totals stay as they were
    seed_entry(&pool.conn, USER, "2025-07-25", ["09:00", "", "", "13:00"]);
    let (again, _) = SubmissionLogic::prepare_draft(&pool.conn, USER, 2025, 7).unwrap();
    assert_eq!(again.status, TimesheetStatus::Submitted);
    assert_eq!(again.total_hours, 178.0);

    let err = SubmissionLogic::submit(&mut pool.conn, &notifier, &ana(), 2025, 7, Local::now())
        .unwrap_err();
    assert!(matches!(err, AppError::AlreadySubmitted(_)));
    assert_eq!(fs::read_dir(&spool).unwrap().count(), 1);
}

#[test]
fn test_unwritable_spool_keeps_draft() {
    let mut pool = DbPool::in_memory().unwrap();
    seed_july_2025(&pool.conn, USER);
    SubmissionLogic::prepare_draft(&pool.conn, USER, 2025, 7).unwrap();

    // a regular file where the spool directory should be
    let blocker = temp_dir("engine_spool_blocked").join("outbox");
    fs::write(&blocker, b"not a directory").unwrap();

    let notifier = SpoolNotifier::new(&blocker, "a@b", "c@d");
    let err = SubmissionLogic::submit(&mut pool.conn, &notifier, &ana(), 2025, 7, Local::now())
        .unwrap_err();
    assert!(matches!(err, AppError::Notification(_)));

    let ts = load_timesheet(&pool.conn, USER, 2025, 7).unwrap().unwrap();
    assert_eq!(ts.status, TimesheetStatus::Draft);
}
