use clap::{Parser, Subcommand};

/// Command-line interface definition for pickupwindow
/// Compute pickup dates and bookable time slots for order-ahead meals
#[derive(Parser)]
#[command(
    name = "pickupwindow",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pickup-window planner: offered pickup dates, ordering deadlines and time slots",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple shops)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging on stderr (otherwise PICKUPWINDOW_LOG, default "warn")
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration and a sample weekly schedule
    Init {
        /// Overwrite existing files
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        /// Print the current configuration as YAML
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// List the two offered pickup dates and their ordering deadlines
    Dates {
        /// Evaluate at this local time instead of now (YYYY-MM-DDTHH:MM)
        #[arg(long, value_name = "DATETIME")]
        now: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List bookable time slots for a weekday or a date
    Slots {
        /// Weekday name (e.g. "monday") or date (YYYY-MM-DD)
        day: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show and validate the weekly operating schedule
    Schedule {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check a pickup date with the deadline validator and pick a time
    Book {
        /// Pickup date (YYYY-MM-DD); must be one of the offered dates
        #[arg(long)]
        date: String,

        /// Pickup time (HH:MM); when omitted the available slots are listed
        #[arg(long)]
        time: Option<String>,

        /// Evaluate at this local time instead of now (YYYY-MM-DDTHH:MM)
        #[arg(long, value_name = "DATETIME")]
        now: Option<String>,
    },
}
