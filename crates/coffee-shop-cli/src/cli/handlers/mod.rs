//! Command handlers for the Coffee Shop environment CLI

pub mod config;
pub mod export;
