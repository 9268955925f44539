use serde::{Deserialize, Serialize};

/// Runtime settings for add-to-project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Base URL of the GitHub REST API (`GITHUB_API_URL` on runners)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// GraphQL endpoint; derived from `api_url` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphql_url: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("add-to-project/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            graphql_url: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// GraphQL endpoint requests are posted to.
    ///
    /// An explicit `graphql_url` wins. Otherwise a GitHub Enterprise Server
    /// REST base (`https://host/api/v3`) maps to `https://host/api/graphql`,
    /// and any other base gets `/graphql` appended.
    pub fn graphql_endpoint(&self) -> String {
        if let Some(url) = &self.graphql_url {
            return url.trim_end_matches('/').to_string();
        }
        let base = self.api_url.trim_end_matches('/');
        match base.strip_suffix("/api/v3") {
            Some(host) => format!("{host}/api/graphql"),
            None => format!("{base}/graphql"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, pretty or compact
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    #[default]
    Compact,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}
