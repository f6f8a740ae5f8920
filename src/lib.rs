//! rTimesheet library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod notify;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(cmd, cfg),
        Commands::Db { .. } => commands::db::handle(cmd, cfg),
        Commands::Add { .. } => commands::add::handle(cmd, cfg),
        Commands::Show { .. } => commands::show::handle(cmd, cfg),
        Commands::Calendar { .. } => commands::calendar::handle(cmd, cfg),
        Commands::Timesheet { .. } => commands::timesheet::handle(cmd, cfg),
        Commands::Stats { .. } => commands::stats::handle(cmd, cfg),
        Commands::Submit { .. } => commands::submit::handle(cmd, cfg),
        Commands::Holiday { .. } => commands::holiday::handle(cmd, cfg),
        Commands::Settings { .. } => commands::settings::handle(cmd, cfg),
        Commands::Export { .. } => commands::export::handle(cmd, cfg),
        Commands::Log { .. } => commands::log::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // test mode never reads the user's config file
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(user) = &cli.user {
        cfg.user_id = user.clone();
    }

    dispatch(&cli, &cfg)
}
