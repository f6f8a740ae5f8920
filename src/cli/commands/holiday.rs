use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::holidays::{add_holiday, delete_holiday, list_holidays};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::holiday::Holiday;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_date;
use crate::utils::formatting::weekday_short;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Holiday {
        add,
        description,
        del,
        list,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(d) = add {
            let date = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            let h = Holiday {
                holiday_date: date,
                description: description.clone().unwrap_or_default(),
            };
            add_holiday(&pool.conn, &h)?;
            ttlog_soft(&pool.conn, "holiday", d, &format!("added '{}'", h.description));
            success(format!("Holiday {} saved.", date));
        }

        if let Some(d) = del {
            let date = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            if delete_holiday(&pool.conn, &date)? {
                ttlog_soft(&pool.conn, "holiday", d, "removed");
                success(format!("Holiday {} removed.", date));
            } else {
                warning(format!("No holiday on {}.", date));
            }
        }

        if *list || (add.is_none() && del.is_none()) {
            let holidays = list_holidays(&pool.conn)?;
            if holidays.is_empty() {
                info("No holidays defined.");
                return Ok(());
            }

            let mut table = Table::with_headers(&["Date", "Day", "Description"]);
            for h in holidays {
                table.add_row(vec![
                    h.holiday_date.to_string(),
                    weekday_short(&h.holiday_date).to_string(),
                    h.description,
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
