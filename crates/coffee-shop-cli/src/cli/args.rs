use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{OffLevel, Verbosity};
use coffee_shop_common::config::LoadOptions;
use coffee_shop_common::Environment;
use std::path::PathBuf;

/// Coffee Shop environment tool - per-deployment front-end settings
#[derive(Parser, Debug)]
#[command(
    name = "coffee-shop-env",
    author = "Coffee Shop Team",
    version,
    about = "Inspect, validate and export Coffee Shop environment settings",
    long_about = "Inspect, validate and export the environment record the Coffee Shop front-end is built with.

Settings are layered: compiled defaults for the selected profile, then a TOML
file, then COFFEE_SHOP_* environment variables (nested keys use '__', e.g.
COFFEE_SHOP_AUTH0__CLIENT_ID).

EXAMPLES:
  coffee-shop-env show                          # Show resolved settings
  coffee-shop-env get auth0.clientId            # Print a single value
  coffee-shop-env validate --profile production # Check production settings
  coffee-shop-env export -o src/environments/environment.ts
  coffee-shop-env generate > coffee-shop.toml   # Write a starter file"
)]
pub struct Args {
    /// Configuration file path (defaults to ./coffee-shop.toml or the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Deployment profile (development or production); falls back to COFFEE_SHOP_PROFILE
    #[arg(short, long, global = true)]
    pub profile: Option<Environment>,

    #[command(flatten)]
    pub verbosity: Verbosity<OffLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Loader options derived from the global flags
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_path: self.config.clone(),
            require_file: self.config.is_some(),
            environment: self.profile,
            ..LoadOptions::default()
        }
    }

    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let options = self.load_options();

        match self.command {
            Commands::Show { json } => handlers::config::handle_show(options, json).await,
            Commands::Get { key, json } => handlers::config::handle_get(options, &key, json).await,
            Commands::Validate { json } => handlers::config::handle_validate(options, json).await,
            Commands::Generate => handlers::config::handle_generate(options).await,
            Commands::Export { format, output } => {
                handlers::export::handle_export(options, format, output).await
            }
        }
    }
}
