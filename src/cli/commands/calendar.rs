use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::holidays::HolidayAnnotator;
use crate::core::weeks::partition_month;
use crate::db::entries::load_month;
use crate::db::holidays::holiday_dates_between;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, MAGENTA, RESET};
use crate::utils::date::{self, first_of_month, last_of_month};
use crate::utils::formatting::{is_weekend, month_name};
use chrono::{Datelike, NaiveDate};

/// Monday-first month grid: holidays in magenta, recorded days in green.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let (year, m) = date::resolve_month(month.as_ref())?;

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_month(&pool.conn, &cfg.user_id, year, m)?;
        let holidays = holiday_dates_between(
            &pool.conn,
            &first_of_month(year, m)?,
            &last_of_month(year, m)?,
        )?;
        let markers = HolidayAnnotator::new(holidays, entries.iter().map(|e| e.entry_date));

        header(format!("{} {}", month_name(m), year));
        println!(" Mo  Tu  We  Th  Fr  Sa  Su");

        for bucket in partition_month(year, m)? {
            let Some(first) = bucket.first() else {
                continue;
            };

            let mut line = "    ".repeat(first.weekday().num_days_from_monday() as usize);
            for d in &bucket {
                line.push_str(&cell(d, &markers));
            }
            println!("{}", line.trim_end());
        }

        println!(
            "\n{}■{} recorded  {}■{} holiday  {}■{} weekend",
            GREEN, RESET, MAGENTA, RESET, GREY, RESET
        );
    }

    Ok(())
}

fn cell(d: &NaiveDate, markers: &HolidayAnnotator) -> String {
    let color = if markers.is_holiday(d) {
        MAGENTA
    } else if markers.has_entry(d) {
        GREEN
    } else if is_weekend(d) {
        GREY
    } else {
        RESET
    };

    format!(" {}{:>2}{} ", color, d.day(), RESET)
}
