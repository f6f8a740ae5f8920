use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::aggregate;
use crate::db::entries::load_month;
use crate::db::pool::DbPool;
use crate::db::settings::load_settings;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_overtime};
use crate::utils::date;
use crate::utils::formatting::{fmt_hours, month_name, pad_right};

const LABEL_W: usize = 16;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { month } = cmd {
        let (year, m) = date::resolve_month(month.as_ref())?;

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_month(&pool.conn, &cfg.user_id, year, m)?;
        let totals = aggregate(&entries);
        let settings = load_settings(&pool.conn)?;

        let average = if totals.days_worked > 0 {
            totals.total_hours / totals.days_worked as f64
        } else {
            0.0
        };

        header(format!("{} {}", month_name(m), year));
        println!("{}: {}", pad_right("Total hours", LABEL_W), fmt_hours(totals.total_hours));
        println!(
            "{}: {}{}{}",
            pad_right("Total overtime", LABEL_W),
            color_for_overtime(totals.total_overtime),
            fmt_hours(totals.total_overtime),
            RESET
        );
        println!("{}: {}", pad_right("Days worked", LABEL_W), totals.days_worked);
        println!("{}: {}", pad_right("Average per day", LABEL_W), fmt_hours(average));
        println!(
            "{}: {}",
            pad_right("Standard day", LABEL_W),
            fmt_hours(settings.standard_hours_per_day)
        );
    }

    Ok(())
}
