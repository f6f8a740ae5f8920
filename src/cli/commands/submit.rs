use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submission::SubmissionLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::notify::spool::SpoolNotifier;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_month;
use crate::utils::formatting::fmt_hours;
use chrono::Local;

/// Freeze the month's totals and notify HR.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit { month } = cmd {
        let (year, m) = parse_month(month)?;
        let user = cfg.user();

        let mut pool = DbPool::new(&cfg.database)?;
        let (draft, totals) = SubmissionLogic::prepare_draft(&pool.conn, &user.id, year, m)?;

        info(format!(
            "Timesheet {}: {} worked, {} overtime, {} day(s)",
            draft.period(),
            fmt_hours(totals.total_hours),
            fmt_hours(totals.total_overtime),
            totals.days_worked
        ));

        let notifier = SpoolNotifier::new(cfg.spool_dir(), &cfg.mail_from, &cfg.mail_to);
        let ts = pool.with_conn(|conn| {
            SubmissionLogic::submit(conn, &notifier, &user, year, m, Local::now())
        })?;

        success(format!(
            "Timesheet {} submitted; notification queued in {}",
            ts.period(),
            notifier.dir.display()
        ));
    }

    Ok(())
}
