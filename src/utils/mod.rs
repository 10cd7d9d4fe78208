//! Shared utilities.

/// TOML configuration loading and env-var secret resolution.
pub mod config;

pub use config::{ConfigError, VegaConfig};
