//! Error types for the Coffee Shop environment CLI

use thiserror::Error;

/// CLI error type with minimal variants
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading, validating or rendering the environment record failed
    #[error(transparent)]
    Config(#[from] coffee_shop_common::ConfigurationError),

    /// Writing exported files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
