use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{TimesheetView, WeekView, build_timesheet};
use crate::db::entries::load_month;
use crate::db::pool::DbPool;
use crate::db::timesheets::{list_timesheets, load_timesheet};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::{bold, fmt_day_hours, fmt_hours, month_name, week_label, weekday_short};
use crate::utils::table::Table;
use crate::utils::time::format_time;

const HEADERS: [&str; 8] = [
    "Date", "Day", "In", "Lunch out", "Lunch in", "Out", "Hours", "Overtime",
];

/// Weekly timesheet of a month, with per-week subtotals and monthly totals,
/// or (`--list`) the stored timesheets.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timesheet { month, list, all } = cmd {
        if *list {
            let user = if *all { None } else { Some(cfg.user_id.as_str()) };
            let pool = DbPool::new(&cfg.database)?;
            return print_list(&pool, user);
        }

        let (year, m) = date::resolve_month(month.as_ref())?;

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_month(&pool.conn, &cfg.user_id, year, m)?;
        let view = build_timesheet(year, m, &entries)?;

        header(format!("Timesheet {} {} ({})", month_name(m), year, cfg.user_name));

        for (i, week) in view.weeks.iter().enumerate() {
            println!("\n{}", bold(&week_label(i)));
            print!("{}", render_week(week));
            println!("Subtotal: {}", fmt_hours(week.subtotal));
        }

        print_totals(&view);

        if let Some(ts) = load_timesheet(&pool.conn, &cfg.user_id, year, m)? {
            println!("Status         : {}", ts.status.to_db_str());
        }
    }

    Ok(())
}

fn render_week(week: &WeekView) -> String {
    let mut table = Table::with_headers(&HEADERS);

    for day in &week.days {
        let e = day.entry.as_ref();
        table.add_row(vec![
            day.date.format("%Y-%m-%d").to_string(),
            weekday_short(&day.date).to_string(),
            format_time(e.and_then(|e| e.entry_time)),
            format_time(e.and_then(|e| e.lunch_exit_time)),
            format_time(e.and_then(|e| e.lunch_return_time)),
            format_time(e.and_then(|e| e.exit_time)),
            fmt_day_hours(day.hours()),
            fmt_day_hours(e.map(|e| e.overtime_hours)),
        ]);
    }

    table.render()
}

fn print_totals(view: &TimesheetView) {
    println!();
    println!("Total hours    : {}", fmt_hours(view.totals.total_hours));
    println!("Total overtime : {}", fmt_hours(view.totals.total_overtime));
    println!("Days worked    : {}", view.totals.days_worked);
}

/// One row per stored timesheet: user, period, totals, status, submission time, PDF.
fn print_list(pool: &DbPool, user: Option<&str>) -> AppResult<()> {
    let timesheets = list_timesheets(&pool.conn, user)?;
    if timesheets.is_empty() {
        info("No timesheets stored yet.");
        return Ok(());
    }

    let mut table = Table::with_headers(&[
        "User", "Period", "Hours", "Overtime", "Status", "Submitted at", "PDF",
    ]);
    for ts in &timesheets {
        table.add_row(vec![
            ts.user_id.clone(),
            format!("{} {}", month_name(ts.month), ts.year),
            fmt_hours(ts.total_hours),
            fmt_hours(ts.total_overtime),
            ts.status.to_db_str().to_string(),
            ts.submitted_at
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            ts.pdf_url.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
