//! # Configuration Loader
//!
//! Figment-based loading of the environment record with layered support:
//! 1. Compiled defaults for the selected deployment environment
//! 2. A TOML configuration file
//! 3. Environment variable overrides
//!
//! The loaded record is validated before it is handed out.

use super::environment::{Environment, EnvironmentConfig};
use crate::error::ConfigurationError;
use etcetera::{choose_base_strategy, BaseStrategy};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default configuration file name in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "coffee-shop.toml";

/// Environment variable prefix for Coffee Shop settings
pub const DEFAULT_ENV_PREFIX: &str = "COFFEE_SHOP";

/// Control variables read under the prefix that are not record fields
const CONTROL_KEYS: [&str; 2] = ["PROFILE", "CONFIG_PATH"];

/// String fields as `(variable suffix, key path)`; their raw text is kept
const STRING_FIELDS: [(&str, &str); 5] = [
    ("API_SERVER_URL", "api_server_url"),
    ("AUTH0__URL", "auth0.url"),
    ("AUTH0__AUDIENCE", "auth0.audience"),
    ("AUTH0__CLIENT_ID", "auth0.client_id"),
    ("AUTH0__CALLBACK_URL", "auth0.callback_url"),
];

const BOOL_FIELDS: [&str; 1] = ["PRODUCTION"];

/// Configuration loader trait
///
/// Provides a standardized interface for loading configuration with layered
/// support (defaults, files, environment variables).
pub trait ConfigLoader<C: DeserializeOwned + Send + Sync> {
    /// Load configuration with optional path override
    fn load(path_override: Option<PathBuf>) -> Result<C, ConfigurationError>;

    /// Load configuration from specific file, which must exist
    fn load_from_file(path: &Path) -> Result<C, ConfigurationError>;

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut C, prefix: &str) -> Result<(), ConfigurationError>;
}

/// Configuration loading options
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Optional path to configuration file
    pub config_path: Option<PathBuf>,
    /// Environment variable prefix
    pub env_prefix: String,
    /// Whether configuration file is required
    pub require_file: bool,
    /// Deployment environment whose defaults seed the record
    pub environment: Option<Environment>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            require_file: false,
            environment: None,
        }
    }
}

impl LoadOptions {
    /// Resolve the deployment environment, falling back to `{PREFIX}_PROFILE`
    pub fn resolve_environment(&self) -> Result<Environment, ConfigurationError> {
        if let Some(environment) = self.environment {
            return Ok(environment);
        }
        match std::env::var(format!("{}_PROFILE", self.env_prefix)) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Environment::default()),
        }
    }
}

impl ConfigLoader<EnvironmentConfig> for EnvironmentConfig {
    fn load(path_override: Option<PathBuf>) -> Result<EnvironmentConfig, ConfigurationError> {
        load_config_with_options(LoadOptions {
            config_path: path_override,
            ..LoadOptions::default()
        })
    }

    fn load_from_file(path: &Path) -> Result<EnvironmentConfig, ConfigurationError> {
        load_config_with_options(LoadOptions {
            config_path: Some(path.to_path_buf()),
            require_file: true,
            ..LoadOptions::default()
        })
    }

    fn apply_env_overrides(
        config: &mut EnvironmentConfig,
        prefix: &str,
    ) -> Result<(), ConfigurationError> {
        debug!(
            "Applying environment variable overrides with prefix: {}",
            prefix
        );

        warn_unrecognized_env_keys(prefix);
        let figment = merge_env(Figment::from(Serialized::defaults(config.clone())), prefix);

        *config = figment
            .extract()
            .map_err(|err| ConfigurationError::ParseError {
                details: format!("Failed to apply environment overrides: {err}"),
            })?;

        Ok(())
    }
}

/// Load the record with default options
pub fn load_config() -> Result<EnvironmentConfig, ConfigurationError> {
    load_config_with_options(LoadOptions::default())
}

/// Load the record with custom options
pub fn load_config_with_options(
    options: LoadOptions,
) -> Result<EnvironmentConfig, ConfigurationError> {
    let environment = options.resolve_environment()?;
    info!("Loading {} environment configuration", environment);

    let mut figment =
        Figment::from(Serialized::defaults(EnvironmentConfig::for_environment(environment)));

    let config_path = determine_config_path(options.config_path, &options.env_prefix)?;

    if let Some(path) = &config_path {
        if path.exists() {
            info!("Loading configuration from file: {}", path.display());
            figment = add_file_provider(figment, path)?;
        } else if options.require_file {
            return Err(ConfigurationError::FileNotFound {
                path: path.display().to_string(),
            });
        } else {
            warn!(
                "Configuration file not found: {} (using defaults)",
                path.display()
            );
        }
    }

    debug!(
        "Loading environment variables with prefix: {}",
        options.env_prefix
    );
    warn_unrecognized_env_keys(&options.env_prefix);
    figment = merge_env(figment, &options.env_prefix);

    let config: EnvironmentConfig =
        figment
            .extract()
            .map_err(|err| ConfigurationError::ParseError {
                details: format!("Failed to parse configuration: {err}"),
            })?;

    config.validate()?;

    debug!(
        "Configuration loaded from {} sources",
        figment.metadata().count()
    );
    Ok(config)
}

/// Merge `{prefix}_*` overrides, keeping the exact text of string fields
fn merge_env(figment: Figment, prefix: &str) -> Figment {
    let mut figment = figment.merge(
        Env::prefixed(&format!("{prefix}_"))
            .split("__")
            .ignore(&CONTROL_KEYS),
    );

    for (suffix, key) in STRING_FIELDS {
        if let Ok(raw) = std::env::var(format!("{prefix}_{suffix}")) {
            figment = figment.merge(Serialized::default(key, raw));
        }
    }

    figment
}

/// Variables under the prefix that name neither a field nor a control key
pub fn unrecognized_env_keys(prefix: &str) -> Vec<String> {
    let lead = format!("{prefix}_");
    let mut unknown: Vec<String> = std::env::vars()
        .filter_map(|(name, _)| {
            let suffix = name.strip_prefix(&lead)?.to_uppercase();
            let known = CONTROL_KEYS.contains(&suffix.as_str())
                || BOOL_FIELDS.contains(&suffix.as_str())
                || STRING_FIELDS.iter().any(|(field, _)| *field == suffix);
            (!known).then_some(name)
        })
        .collect();
    unknown.sort();
    unknown
}

fn warn_unrecognized_env_keys(prefix: &str) {
    for name in unrecognized_env_keys(prefix) {
        warn!(
            "Ignoring {}: not a configuration field (nested keys use '__', e.g. {}_AUTH0__CLIENT_ID)",
            name, prefix
        );
    }
}

/// Determine configuration file path with fallback logic
fn determine_config_path(
    override_path: Option<PathBuf>,
    env_prefix: &str,
) -> Result<Option<PathBuf>, ConfigurationError> {
    if let Some(path) = override_path {
        return Ok(Some(path));
    }

    if let Ok(env_path) = std::env::var(format!("{env_prefix}_CONFIG_PATH")) {
        let path = PathBuf::from(env_path);
        debug!("Using config path from environment: {}", path.display());
        return Ok(Some(path));
    }

    let current_dir_config = PathBuf::from(DEFAULT_CONFIG_FILE);
    if current_dir_config.exists() {
        debug!(
            "Found config file in current directory: {}",
            current_dir_config.display()
        );
        return Ok(Some(current_dir_config));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            debug!("Found config file at: {}", user_config.display());
            return Ok(Some(user_config));
        }
    }

    debug!("No configuration file found, using defaults");
    Ok(None)
}

/// Per-user configuration file, e.g. `~/.config/coffee-shop/environment.toml`
pub fn user_config_path() -> Option<PathBuf> {
    choose_base_strategy()
        .ok()
        .map(|strategy| strategy.config_dir().join("coffee-shop").join("environment.toml"))
}

/// Add file provider to figment based on file extension
fn add_file_provider(figment: Figment, path: &Path) -> Result<Figment, ConfigurationError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("toml");

    match extension.to_lowercase().as_str() {
        "toml" => Ok(figment.merge(Toml::file(path))),
        _ => Err(ConfigurationError::ParseError {
            details: format!(
                "Unsupported configuration file format: {extension} (supported: toml)"
            ),
        }),
    }
}

/// Validate configuration file existence and format
pub fn validate_config_file(path: &Path) -> Result<(), ConfigurationError> {
    if !path.exists() {
        return Err(ConfigurationError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    match extension.to_lowercase().as_str() {
        "toml" => Ok(()),
        _ => Err(ConfigurationError::ParseError {
            details: format!(
                "Unsupported configuration file format: {extension} (supported: toml)"
            ),
        }),
    }
}
