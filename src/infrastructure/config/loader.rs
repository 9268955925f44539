use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Prefix for environment overrides, e.g. `ADD_TO_PROJECT_TIMEOUT_SECS`.
pub const ENV_PREFIX: &str = "ADD_TO_PROJECT_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid api_url: {0}. Must be an http(s) URL")]
    InvalidApiUrl(String),

    #[error("Invalid graphql_url: {0}. Must be an http(s) URL")]
    InvalidGraphqlUrl(String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("user_agent cannot be empty")]
    EmptyUserAgent,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `GITHUB_API_URL`, set by the runner (differs on GitHub Enterprise Server)
    /// 3. The YAML file at `path`, when given
    /// 4. Environment variables (`ADD_TO_PROJECT_*`, `__` separates nesting)
    ///
    /// `graphql_url` has no runner layer; unset, it is derived from `api_url`.
    ///
    /// `RUNNER_DEBUG=1` (step debug logging) raises the log level to `debug`.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(
                Env::raw()
                    .only(&["GITHUB_API_URL"])
                    .map(|_| "api_url".into()),
            );

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let mut config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        if std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1") {
            config.logging.level = "debug".to_string();
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if !is_http_url(&config.api_url) {
            return Err(ConfigError::InvalidApiUrl(config.api_url.clone()));
        }

        if let Some(url) = config.graphql_url.as_ref().filter(|u| !is_http_url(u)) {
            return Err(ConfigError::InvalidGraphqlUrl(url.clone()));
        }

        if config.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if config.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
