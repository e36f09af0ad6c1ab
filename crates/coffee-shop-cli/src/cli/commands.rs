use clap::Subcommand;
use coffee_shop_common::config::ExportFormat;
use std::path::PathBuf;

/// Main CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved environment settings
    Show {
        /// Output format as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a single setting
    Get {
        /// Setting key, e.g. apiServerUrl or auth0.clientId
        key: String,

        /// Output format as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that every setting is present and well-formed
    Validate {
        /// Output format as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the settings for the front-end build
    Export {
        /// Output format (ts, json or toml)
        #[arg(short, long, default_value = "ts")]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a starter TOML file with the profile defaults
    Generate,
}
