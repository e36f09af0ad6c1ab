//! Inspection and validation command handlers

use crate::error::Result;
use crate::output::{json_output, print_info, print_success, table_output};
use coffee_shop_common::config::{load_config_with_options, render, ExportFormat, LoadOptions};
use coffee_shop_common::EnvironmentConfig;
use serde::Serialize;
use tracing::debug;

/// Handle the `show` command - display every resolved setting
pub async fn handle_show(options: LoadOptions, json: bool) -> Result<()> {
    let config = load_config_with_options(options)?;

    if json {
        json_output(&config.to_frontend())?;
    } else {
        print_info(&format!("Environment: {}", config.environment()));
        table_output::display_environment(&config);
    }

    Ok(())
}

/// Handle the `get` command - print a single setting
pub async fn handle_get(options: LoadOptions, key: &str, json: bool) -> Result<()> {
    let config = load_config_with_options(options)?;
    let value = config.get(key)?;
    debug!("Resolved {} from {} environment", key, config.environment());

    if json {
        json_output(&serde_json::json!({ "key": key, "value": value }))?;
    } else {
        println!("{value}");
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    valid: bool,
    environment: String,
    tenant_domain: String,
}

/// Handle the `validate` command - load and check the settings
///
/// Loading already validates; any failure propagates as the command error.
pub async fn handle_validate(options: LoadOptions, json: bool) -> Result<()> {
    let config = load_config_with_options(options)?;

    if json {
        json_output(&ValidationReport {
            valid: true,
            environment: config.environment().to_string(),
            tenant_domain: config.auth0.tenant_domain(),
        })?;
    } else {
        print_success(&format!(
            "{} environment configuration is valid",
            config.environment()
        ));
        print_info(&format!("Auth0 tenant: {}", config.auth0.tenant_domain()));
    }

    Ok(())
}

/// Handle the `generate` command - print the profile defaults as TOML
pub async fn handle_generate(options: LoadOptions) -> Result<()> {
    let environment = options.resolve_environment()?;
    let config = EnvironmentConfig::for_environment(environment);
    print!("{}", render(&config, ExportFormat::Toml)?);
    Ok(())
}
