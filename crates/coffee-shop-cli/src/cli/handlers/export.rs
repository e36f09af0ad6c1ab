//! Export command handler

use crate::error::Result;
use crate::output::{compress_path, print_success};
use coffee_shop_common::config::{load_config_with_options, render, ExportFormat, LoadOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle the `export` command - render the settings for the build
pub async fn handle_export(
    options: LoadOptions,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_with_options(options)?;
    let rendered = render(&config, format)?;

    match output {
        Some(path) => {
            write_export(&path, &rendered).await?;
            print_success(&format!(
                "Exported {} environment to {}",
                config.environment(),
                compress_path(&path)
            ));
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Write rendered settings, creating parent directories as needed
pub async fn write_export(path: &Path, contents: &str) -> Result<()> {
    debug!("Writing export to: {}", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, contents).await?;

    info!("Export written to {}", path.display());
    Ok(())
}
