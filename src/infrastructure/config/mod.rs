//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment: YAML files, environment overrides
//! and validation of the merged result.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, CONFIG_DIR, ENV_PREFIX};
