use clap::{Parser, Subcommand};

/// Command-line interface definition for agricensus
/// CLI shell around the agricultural census collection core (SQLite)
#[derive(Parser)]
#[command(
    name = "agricensus",
    version = env!("CARGO_PKG_VERSION"),
    about = "Agricultural census survey collection: section forms, validation and progress over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Register a new holder (survey respondent)
    Register {
        #[arg(long, help = "Holder (farm operator) name")]
        name: String,

        #[arg(long, default_value = "", help = "Holding location")]
        location: String,

        #[arg(long, help = "Owning user account id, if any")]
        owner: Option<i64>,
    },

    /// List holders with their survey progress
    Holders,

    /// Create holder records for user accounts with the Holder role
    Backfill,

    /// Show a holder's per-section progress
    Status {
        /// Holder id
        holder: i64,
    },

    /// Show where a holder's survey should resume
    Resume {
        /// Holder id
        holder: i64,
    },

    /// Load a section's current rows (existing data or defaults)
    Load {
        /// Holder id
        holder: i64,

        #[arg(long, help = "Section number (1-5)")]
        section: u32,

        #[arg(long, help = "Print raw row JSON instead of the form plan")]
        json: bool,
    },

    /// Record a single Holding Labour answer (one question at a time)
    Answer {
        /// Holder id
        holder: i64,

        #[arg(long, help = "Labour question number (2-7)")]
        question: u32,

        #[arg(long, default_value_t = 0, help = "Male count (questions 2-4)")]
        male: i64,

        #[arg(long, default_value_t = 0, help = "Female count (questions 2-4)")]
        female: i64,

        #[arg(long, help = "Yes / No / Not Applicable (questions 5-7)")]
        response: Option<String>,
    },

    /// Save a section submission from a JSON file
    Save {
        /// Holder id
        holder: i64,

        #[arg(long, help = "Section number (2-5)")]
        section: u32,

        #[arg(long, value_name = "FILE", help = "JSON file with the section rows")]
        file: String,

        #[arg(long, help = "Also mark the section complete on success")]
        complete: bool,
    },

    /// Mark a section complete for a holder
    Complete {
        /// Holder id
        holder: i64,

        #[arg(long, help = "Section number (1-5)")]
        section: u32,
    },
}
