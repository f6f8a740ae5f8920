use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// A schema step, applied once and recorded in the `log` table as
/// `migration_applied` with the version as target.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250701_0001_create_time_entries",
        description: "Created time_entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id            TEXT NOT NULL,
            entry_date         TEXT NOT NULL,
            entry_time         TEXT,
            lunch_exit_time    TEXT,
            lunch_return_time  TEXT,
            exit_time          TEXT,
            total_hours        REAL NOT NULL DEFAULT 0,
            overtime_hours     REAL NOT NULL DEFAULT 0 CHECK(overtime_hours >= 0),
            notes              TEXT,
            created_at         TEXT NOT NULL,
            UNIQUE(user_id, entry_date)
        );

        CREATE INDEX IF NOT EXISTS idx_time_entries_user_date ON time_entries(user_id, entry_date);
        "#,
    },
    Migration {
        version: "20250701_0002_create_company_settings",
        description: "Created company_settings table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS company_settings (
            id                      INTEGER PRIMARY KEY CHECK(id = 1),
            standard_hours_per_day  REAL NOT NULL DEFAULT 8,
            company_name            TEXT,
            company_nif             TEXT
        );

        INSERT OR IGNORE INTO company_settings (id, standard_hours_per_day) VALUES (1, 8);
        "#,
    },
    Migration {
        version: "20250701_0003_create_holidays",
        description: "Created holidays table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS holidays (
            holiday_date  TEXT PRIMARY KEY,
            description   TEXT NOT NULL DEFAULT ''
        );
        "#,
    },
    Migration {
        version: "20250701_0004_create_timesheets",
        description: "Created timesheets table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS timesheets (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id         TEXT NOT NULL,
            month           INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            year            INTEGER NOT NULL,
            total_hours     REAL NOT NULL DEFAULT 0,
            total_overtime  REAL NOT NULL DEFAULT 0,
            status          TEXT NOT NULL DEFAULT 'draft' CHECK(status IN ('draft','submitted')),
            submitted_at    TEXT,
            UNIQUE(user_id, month, year)
        );
        "#,
    },
    Migration {
        version: "20250915_0005_add_timesheet_pdf_url",
        description: "Added pdf_url to timesheets",
        sql: "ALTER TABLE timesheets ADD COLUMN pdf_url TEXT;",
    },
    Migration {
        version: "20250915_0006_add_entry_updated_at",
        description: "Added updated_at to time_entries",
        sql: "ALTER TABLE time_entries ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
    },
];

/// Ensure that the `log` table exists: it also stores the migration ledger.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let batch = format!(
        "BEGIN;\n{}\nINSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', '{}', '{}');\nCOMMIT;",
        m.sql, m.version, m.description
    );

    if let Err(e) = conn.execute_batch(&batch) {
        // leave the connection usable after a failed step
        let _ = conn.execute_batch("ROLLBACK;");
        return Err(AppError::Migration(format!("{}: {}", m.version, e)));
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()` every time a database is opened;
/// already-applied steps are skipped. Returns how many steps ran.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        applied += 1;
    }

    if applied > 0 {
        success(format!("Database schema updated ({} migration(s) applied).", applied));
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);

        let hours: f64 = conn
            .query_row(
                "SELECT standard_hours_per_day FROM company_settings WHERE id = 1",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(hours, 8.0);
    }
}
