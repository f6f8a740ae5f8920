use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::settings::{load_settings, save_settings};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::fmt_hours;

/// View or change the company settings.
///
/// A new standard day only affects entries saved afterwards; stored
/// overtime is not recomputed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        hours,
        name,
        nif,
        print,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let mut settings = load_settings(&pool.conn)?;
        let changed = hours.is_some() || name.is_some() || nif.is_some();

        if let Some(h) = hours {
            settings.standard_hours_per_day = *h;
        }
        if let Some(n) = name {
            settings.company_name = Some(n.clone()).filter(|s| !s.trim().is_empty());
        }
        if let Some(n) = nif {
            settings.company_nif = Some(n.clone()).filter(|s| !s.trim().is_empty());
        }

        if changed {
            save_settings(&pool.conn, &settings)?;
            ttlog_soft(
                &pool.conn,
                "settings",
                "company_settings",
                &format!("standard day {}", fmt_hours(settings.standard_hours_per_day)),
            );
            success("Settings saved.");
        }

        if *print || !changed {
            println!("Standard day : {}", fmt_hours(settings.standard_hours_per_day));
            println!(
                "Company      : {}",
                settings.company_name.as_deref().unwrap_or("-")
            );
            println!(
                "Tax number   : {}",
                settings.company_nif.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}
