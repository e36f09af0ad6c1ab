//! Process-wide environment record.
//!
//! Set once during startup and read-only afterwards. Reads before `init`
//! fall back to the compiled development defaults.

use super::environment::EnvironmentConfig;
use crate::error::ConfigurationError;
use once_cell::sync::OnceCell;
use tracing::debug;

static ENVIRONMENT: OnceCell<EnvironmentConfig> = OnceCell::new();

/// Install the process-wide record
pub fn init(config: EnvironmentConfig) -> Result<&'static EnvironmentConfig, ConfigurationError> {
    let installed = ENVIRONMENT
        .try_insert(config)
        .map_err(|_| ConfigurationError::AlreadyInitialized)?;
    debug!("Installed {} environment configuration", installed.environment());
    Ok(installed)
}

/// The process-wide record
pub fn get() -> &'static EnvironmentConfig {
    ENVIRONMENT.get_or_init(EnvironmentConfig::default)
}

pub fn is_initialized() -> bool {
    ENVIRONMENT.get().is_some()
}
