use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rTimesheet…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", cfg.database);

    let pool = DbPool::new(&cfg.database)?;
    ttlog_soft(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", cfg.database),
    );

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
