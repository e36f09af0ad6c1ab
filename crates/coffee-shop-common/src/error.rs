//! # Error Types
//!
//! Errors raised by the consumers of the environment record: the loader,
//! validation and the process-wide instance. Reading a field of a loaded
//! record never fails.

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    /// Missing or empty required value
    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for {key}: {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// Lookup of a key the record does not declare
    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    /// The process-wide record was already set
    #[error("Environment configuration is already initialized")]
    AlreadyInitialized,
}

impl ConfigurationError {
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingRequired { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigurationError::invalid_value("apiServerUrl", "ftp://x", "unsupported scheme");
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for apiServerUrl: ftp://x (unsupported scheme)"
        );

        let err = ConfigurationError::missing("auth0.clientId");
        assert_eq!(err.to_string(), "Missing required configuration: auth0.clientId");
    }
}
