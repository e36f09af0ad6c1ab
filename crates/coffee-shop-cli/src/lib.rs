//! # Coffee Shop Environment CLI
//!
//! Command-line access to the Coffee Shop deployment environment record,
//! used by build tooling to select and export per-environment settings.
//!
//! ## Architecture
//!
//! - Clap-based argument parsing with derive macros
//! - Handler-based command processing
//! - Loading and rendering delegated to `coffee-shop-common`

pub mod cli;
pub mod error;
pub mod output;

pub use cli::*;
pub use error::*;
