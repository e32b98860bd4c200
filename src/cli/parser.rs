use crate::export::RenderFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tripsheet
/// CLI client for a trip-planning backend: plan trips and render daily log sheets
#[derive(Parser)]
#[command(
    name = "tripsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan a trip against a planning backend and render FMCSA-style daily log sheets",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL (useful for tests or staging backends)
    #[arg(global = true, long = "backend-url")]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default config file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Plan a trip: one request to the backend, summary on stdout
    Plan {
        /// Current location (free-form address)
        #[arg(long, value_name = "ADDRESS")]
        current: String,

        /// Pickup location (free-form address)
        #[arg(long, value_name = "ADDRESS")]
        pickup: String,

        /// Dropoff location (free-form address)
        #[arg(long, value_name = "ADDRESS")]
        dropoff: String,

        /// Hours already used in the current 8-day cycle (0-70)
        #[arg(long = "cycle-used", value_name = "HOURS")]
        cycle_used: f64,

        /// Save the raw trip result as JSON
        #[arg(long, value_name = "FILE")]
        save: Option<String>,

        /// Render all daily log sheets into this directory
        #[arg(long, value_name = "DIR")]
        logs: Option<String>,

        /// Log sheet format (with --logs)
        #[arg(long, value_enum, default_value = "svg")]
        format: RenderFormat,

        /// Write the route and rest stops as GeoJSON
        #[arg(long, value_name = "FILE")]
        geojson: Option<String>,

        /// Calendar date of day 1 (YYYY-MM-DD, default: today)
        #[arg(long = "start-date", value_name = "DATE")]
        start_date: Option<String>,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Render log sheets from a saved trip result
    Render {
        /// Trip result JSON file (from `plan --save`)
        #[arg(long, value_name = "FILE")]
        input: String,

        /// Output directory for the rendered sheets
        #[arg(long = "out-dir", value_name = "DIR")]
        out_dir: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "svg")]
        format: RenderFormat,

        /// Render only this day (1-based)
        #[arg(long, value_name = "N")]
        day: Option<usize>,

        /// Calendar date of day 1 (YYYY-MM-DD)
        #[arg(long = "start-date", value_name = "DATE")]
        start_date: Option<String>,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
