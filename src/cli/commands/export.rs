use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::logic::ExportLogic;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        month,
        format,
        file,
        force,
    } = cmd
    {
        let (year, m) = date::resolve_month(month.as_ref())?;
        let pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&pool.conn, &cfg.user(), year, m, *format, file, *force)?;
    }
    Ok(())
}
