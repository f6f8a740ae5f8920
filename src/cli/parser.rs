use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily clock-in/clock-out times, compute overtime and submit monthly timesheets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as another user id (overrides `user_id` from the config file)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Add missing keys to the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity check)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,
    },

    /// Record or update today's clock times
    Add {
        /// Day to record (YYYY-MM-DD); only today is accepted
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "in", help = "Clock-in time (HH:MM, empty string clears it)")]
        start: Option<String>,

        #[arg(long = "lunch-out", help = "Lunch exit time (HH:MM, empty string clears it)")]
        lunch_out: Option<String>,

        #[arg(long = "lunch-in", help = "Lunch return time (HH:MM, empty string clears it)")]
        lunch_in: Option<String>,

        #[arg(long = "out", help = "Clock-out time (HH:MM, empty string clears it)")]
        end: Option<String>,

        #[arg(long = "notes", help = "Free-text notes (empty string clears them)")]
        notes: Option<String>,

        #[arg(long = "clear-lunch", help = "Remove both lunch times")]
        clear_lunch: bool,
    },

    /// Show the entry of a day
    Show {
        #[arg(long = "date", help = "Day to show (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Month calendar with recorded days and holidays
    Calendar {
        #[arg(long, short, help = "Month (YYYY-MM, default current)")]
        month: Option<String>,
    },

    /// Weekly timesheet with subtotals and monthly totals
    Timesheet {
        #[arg(long, short, help = "Month (YYYY-MM, default current)")]
        month: Option<String>,

        #[arg(long = "list", conflicts_with = "month", help = "List stored timesheets, newest first")]
        list: bool,

        #[arg(long = "all", requires = "list", help = "With --list: every user, not only the current one")]
        all: bool,
    },

    /// Monthly summary: total hours, overtime, days worked
    Stats {
        #[arg(long, short, help = "Month (YYYY-MM, default current)")]
        month: Option<String>,
    },

    /// Submit the monthly timesheet and notify HR
    Submit {
        #[arg(long, short, help = "Month to submit (YYYY-MM)")]
        month: String,
    },

    /// Manage holidays
    Holiday {
        #[arg(long = "add", value_name = "DATE", help = "Mark a date as holiday")]
        add: Option<String>,

        #[arg(long = "description", requires = "add")]
        description: Option<String>,

        #[arg(long = "del", value_name = "DATE", help = "Remove a holiday")]
        del: Option<String>,

        #[arg(long = "list", help = "List all holidays")]
        list: bool,
    },

    /// View or change company settings
    Settings {
        #[arg(long = "hours", help = "Standard hours per day")]
        hours: Option<f64>,

        #[arg(long = "name", help = "Company name")]
        name: Option<String>,

        #[arg(long = "nif", help = "Company tax number")]
        nif: Option<String>,

        #[arg(long = "print", help = "Print the current settings")]
        print: bool,
    },

    /// Export a monthly timesheet
    Export {
        #[arg(long, short, help = "Month (YYYY-MM, default current)")]
        month: Option<String>,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "limit", help = "Only the last N rows")]
        limit: Option<usize>,
    },
}
