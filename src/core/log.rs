use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 40;

fn strip_ansi(s: &str) -> String {
    // constant pattern, cannot fail to compile
    let re = Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex");
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for an operation of the internal log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "edit" => Colour::Yellow,
        "submit" => Colour::Cyan,
        "holiday" | "settings" => Colour::Blue,
        "export" => Colour::White,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(conn: &Connection, limit: Option<usize>) -> AppResult<Vec<LogRow>> {
        let mut stmt = conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id DESC LIMIT ?1",
        )?;

        let lim = limit.map(|l| l as i64).unwrap_or(-1);
        let rows = stmt.query_map([lim], |row| {
            Ok(LogRow {
                id: row.get(0)?,
                date: row.get(1)?,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        entries.reverse();
        Ok(entries)
    }

    pub fn print_log(conn: &Connection, limit: Option<usize>) -> AppResult<()> {
        let entries = Self::load(conn, limit)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(e.date.clone());

            let mut op_target = color_for_operation(&e.operation)
                .paint(e.operation.as_str())
                .to_string();
            if !e.target.is_empty() {
                op_target.push_str(&format!(" ({})", e.target));
            }

            // padding computed on the visible text only
            let visible = strip_ansi(&op_target).chars().count();
            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(visible));

            println!(
                "{:>id_w$}: {:<19} | {}{} => {}",
                e.id,
                date,
                op_target,
                padding,
                e.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
