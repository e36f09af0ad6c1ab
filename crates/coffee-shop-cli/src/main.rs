//! Main entry point for the Coffee Shop environment CLI

use clap::Parser;
use coffee_shop_cli::cli::Args;
use color_eyre::eyre::{eyre, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Disable location display (file paths and line numbers)
    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    // Logging stays off unless requested with -v or RUST_LOG
    let binary_name = env!("CARGO_BIN_NAME").replace('-', "_");
    let default_filter = format!("{binary_name}=info,coffee_shop_cli=info,coffee_shop_common=info");
    coffee_shop_common::logging::init_cli_logging(&args.verbosity, &default_filter)
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    Ok(args.run().await?)
}
