use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::time_entry::EntryInput;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::fmt_hours;
use crate::utils::time::{format_time, parse_clock_edit};

/// Record or update the clock times of a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        lunch_out,
        lunch_in,
        end,
        notes,
        clear_lunch,
    } = cmd
    {
        let today = date::today();
        let day = date::parse_date_or(date.as_ref(), today)?;

        let input = EntryInput {
            entry_time: parse_clock_edit(start.as_ref())?,
            lunch_exit_time: parse_clock_edit(lunch_out.as_ref())?,
            lunch_return_time: parse_clock_edit(lunch_in.as_ref())?,
            exit_time: parse_clock_edit(end.as_ref())?,
            notes: notes.clone(),
            clear_lunch: *clear_lunch,
        };

        let pool = DbPool::new(&cfg.database)?;
        let (entry, updated) = EntryLogic::save(&pool.conn, &cfg.user_id, day, today, &input)?;

        let verb = if updated { "updated" } else { "recorded" };
        success(format!(
            "Day {} {}: {} → {} (lunch {}–{}), worked {}, overtime {}",
            entry.date_str(),
            verb,
            format_time(entry.entry_time),
            format_time(entry.exit_time),
            format_time(entry.lunch_exit_time),
            format_time(entry.lunch_return_time),
            fmt_hours(entry.total_hours),
            fmt_hours(entry.overtime_hours),
        ));
    }

    Ok(())
}
