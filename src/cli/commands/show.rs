use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editability::DayState;
use crate::db::entries::load_entry;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET, color_for_overtime};
use crate::utils::date;
use crate::utils::formatting::{fmt_hours, weekday_short};
use crate::utils::time::format_time;

const NOTES_WIDTH: usize = 60;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let today = date::today();
        let day = date::parse_date_or(date.as_ref(), today)?;

        let pool = DbPool::new(&cfg.database)?;
        let state = DayState::classify(day, today);

        header(format!("{} {}", weekday_short(&day), day.format("%Y-%m-%d")));

        let Some(e) = load_entry(&pool.conn, &cfg.user_id, &day)? else {
            info("No entry recorded for this day.");
            return Ok(());
        };

        println!("In          : {}", format_time(e.entry_time));
        println!("Lunch out   : {}", format_time(e.lunch_exit_time));
        println!("Lunch in    : {}", format_time(e.lunch_return_time));
        println!("Out         : {}", format_time(e.exit_time));
        println!("Worked      : {}", fmt_hours(e.total_hours));
        println!(
            "Overtime    : {}{}{}",
            color_for_overtime(e.overtime_hours),
            fmt_hours(e.overtime_hours),
            RESET
        );

        if let Some(notes) = &e.notes {
            println!("Notes       :");
            for line in textwrap::wrap(notes, NOTES_WIDTH) {
                println!("  {}", line);
            }
        }

        if !state.is_editable() {
            println!("{}(read-only){}", GREY, RESET);
        }
    }

    Ok(())
}
