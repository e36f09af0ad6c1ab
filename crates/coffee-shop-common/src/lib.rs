//! # Coffee Shop Common
//!
//! Deployment environment configuration for the Coffee Shop front-end:
//! the immutable settings record, compiled-in defaults, layered loading,
//! rendering for the build and logging setup shared by the tooling.

pub mod auth_constants;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{Auth0Config, Environment, EnvironmentConfig};
pub use error::ConfigurationError;
