use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, limit } = cmd
        && (*print || limit.is_some())
    {
        let pool = DbPool::new(&cfg.database)?;
        LogLogic::print_log(&pool.conn, *limit)?;
    }

    Ok(())
}
