use crate::export::ExportFormat;
use crate::source::SourceKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ecocharge
#[derive(Parser)]
#[command(
    name = "ecocharge",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record commute patterns and view low-emission EV charging windows versus gaps",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print diagnostic logs (same as RUST_LOG=debug)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a recurring commute
    Add {
        #[arg(long = "user", help = "User id (defaults to `default_user` from config)")]
        user: Option<String>,

        #[arg(long = "name", help = "Commute name, e.g. \"Home → Office\"")]
        name: String,

        #[arg(long = "round-trip", help = "The commute is a round trip")]
        round_trip: bool,

        #[arg(
            long = "usage",
            required = true,
            num_args = 1..,
            help = "Usage entries as DAY@HH:MM[-HH:MM], e.g. MON@08:00-08:45"
        )]
        usage: Vec<String>,

        #[arg(long = "distance", default_value_t = 0.0, help = "Approximate distance in km")]
        distance: f64,

        #[arg(long = "duration", default_value_t = 0.0, help = "Approximate duration in minutes")]
        duration: f64,

        #[arg(long = "traffic", default_value = "LOW", help = "Traffic level: LOW, MEDIUM, HIGH")]
        traffic: String,
    },

    /// List recorded commutes
    List {
        #[arg(long = "user", help = "Only commutes of this user")]
        user: Option<String>,

        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Delete a commute by id
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show the charging timeline: available windows and gaps, per day
    Schedule {
        #[arg(long = "user", help = "User id (defaults to `default_user` from config)")]
        user: Option<String>,

        #[arg(long = "source", value_enum, help = "Schedule source (overrides config)")]
        source: Option<SourceKind>,

        #[arg(long = "file", value_name = "FILE", help = "JSON schedule file (file source)")]
        file: Option<String>,

        #[arg(long = "url", value_name = "URL", help = "Backend base URL (http source)")]
        url: Option<String>,

        #[arg(long = "leading-gap", help = "Count midnight → first window as a gap")]
        leading_gap: bool,

        #[arg(long = "summary", help = "Show per-day totals")]
        summary: bool,

        #[arg(long = "json", help = "Print the timeline as JSON")]
        json: bool,

        #[arg(long = "no-color", help = "Disable colored output")]
        no_color: bool,

        #[arg(long = "export", value_name = "FILE", help = "Also export the timeline to FILE")]
        export: Option<String>,

        #[arg(long = "format", value_enum, default_value = "csv", requires = "export")]
        format: ExportFormat,

        #[arg(long = "force", short = 'f', requires = "export", help = "Overwrite FILE")]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
