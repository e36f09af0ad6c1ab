//! # Configuration
//!
//! The environment record, its layered loader, renderers for the front-end
//! build and the process-wide instance.

pub mod environment;
pub mod global;
pub mod loader;
pub mod render;

pub use environment::{
    Auth0Config, Environment, EnvironmentConfig, FrontendAuth0, FrontendEnvironment, FRONTEND_KEYS,
};
pub use loader::{
    load_config, load_config_with_options, unrecognized_env_keys, user_config_path,
    validate_config_file, ConfigLoader, LoadOptions, DEFAULT_CONFIG_FILE, DEFAULT_ENV_PREFIX,
};
pub use render::{render, render_typescript, ExportFormat};
