use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project-local configuration directory.
pub const CONFIG_DIR: &str = ".storefront-gateway";

/// Prefix for environment overrides, nested with `__`.
pub const ENV_PREFIX: &str = "STOREFRONT_GATEWAY_";

const MAX_TIMEOUT_SECS: u64 = 300;

/// Configuration error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid port: 0. Must be between 1 and 65535")]
    InvalidPort,

    #[error("Server host cannot be empty")]
    EmptyHost,

    #[error("Invalid upstream timeout: {0}s. Must be between 1 and {MAX_TIMEOUT_SECS}")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .storefront-gateway/config.yaml
    /// 3. .storefront-gateway/local.yaml (optional overrides)
    /// 4. STOREFRONT_GATEWAY_* environment variables
    /// 5. PORT, which sets server.port for container platforms
    pub fn load() -> Result<Config> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(format!("{CONFIG_DIR}/config.yaml")))
            .merge(Yaml::file(format!("{CONFIG_DIR}/local.yaml")));

        Self::finish(figment).context("Failed to extract configuration from figment")
    }

    /// Load configuration from a specific file, still honoring environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path));

        Self::finish(figment).with_context(|| format!("Failed to load config from {}", path.display()))
    }

    /// Load from `path` when given, otherwise from the project directory
    pub fn load_with_override(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    fn finish(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
            .extract()?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if config.server.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        if config.upstream.timeout_secs == 0 || config.upstream.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout(config.upstream.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
