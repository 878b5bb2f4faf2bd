//! Server configuration
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. Compiled defaults ([`Config::default`])
//! 2. An optional `storefront.{toml,yaml,json}` file, or the file named by
//!    `STOREFRONT_CONFIG`
//! 3. Environment variables prefixed `STOREFRONT__`, with `__` between
//!    sections and keys (`STOREFRONT__SERVER__PORT=8080`)
//!
//! A `.env` file in the working directory is loaded first, so its entries
//! behave like real environment variables.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

const CONFIG_PATH_ENV: &str = "STOREFRONT_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "storefront";
const ENV_PREFIX: &str = "STOREFRONT";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub search: SearchConfig,
    pub mock: MockConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. Empty means no CORS headers are emitted.
    pub cors_origins: Vec<String>,
    /// Requests still running after this long are answered with 408.
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            request_timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for this crate when `RUST_LOG` is unset
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// daily, hourly, minutely or never
    pub file_rotation: String,
    pub service_name: String,
    pub deployment_environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "storefront".to_string(),
            file_rotation: "daily".to_string(),
            service_name: "storefront-server".to_string(),
            deployment_environment: "development".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_limit: usize,
    pub max_limit: usize,
    pub min_query_length: usize,
    pub max_query_length: usize,
    /// Fall back to substring matching when no keyword matches exactly
    pub fuzzy_matching: bool,
    pub suggestions_default_limit: usize,
    pub suggestions_max_limit: usize,
    pub suggestions_min_query_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        use storefront_models::query;

        Self {
            default_limit: query::DEFAULT_LIMIT,
            max_limit: query::MAX_LIMIT,
            min_query_length: query::QUERY_MIN_LENGTH,
            max_query_length: query::QUERY_MAX_LENGTH,
            fuzzy_matching: true,
            suggestions_default_limit: query::SUGGESTIONS_DEFAULT_LIMIT,
            suggestions_max_limit: query::SUGGESTIONS_MAX_LIMIT,
            suggestions_min_query_length: query::SUGGESTIONS_MIN_QUERY_LENGTH,
        }
    }
}

/// Behaviour of the mock product repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
    pub error_simulation_enabled: bool,
    /// Fraction of calls that fail when error simulation is enabled
    pub error_probability: f64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: 200,
            delay_max_ms: 800,
            error_simulation_enabled: false,
            error_probability: 0.05,
        }
    }
}

impl Config {
    /// Load configuration from defaults, the optional config file and the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let file_source = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => config::File::with_name(&path).required(true),
            Err(_) => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject settings that cannot work together.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.host.trim().is_empty() {
            return Err("server.host cannot be empty".to_string());
        }
        if self.server.request_timeout_seconds == 0 {
            return Err("server.request_timeout_seconds must be greater than 0".to_string());
        }

        let search = &self.search;
        if search.max_limit == 0 {
            return Err("search.max_limit must be greater than 0".to_string());
        }
        if search.default_limit == 0 || search.default_limit > search.max_limit {
            return Err(format!(
                "search.default_limit must be between 1 and search.max_limit ({})",
                search.max_limit
            ));
        }
        if search.min_query_length == 0 || search.min_query_length > search.max_query_length {
            return Err(
                "search.min_query_length must be between 1 and search.max_query_length"
                    .to_string(),
            );
        }
        if search.suggestions_max_limit == 0 {
            return Err("search.suggestions_max_limit must be greater than 0".to_string());
        }
        if search.suggestions_default_limit == 0
            || search.suggestions_default_limit > search.suggestions_max_limit
        {
            return Err(format!(
                "search.suggestions_default_limit must be between 1 and search.suggestions_max_limit ({})",
                search.suggestions_max_limit
            ));
        }
        if search.suggestions_min_query_length > search.max_query_length {
            return Err(
                "search.suggestions_min_query_length cannot exceed search.max_query_length"
                    .to_string(),
            );
        }

        let mock = &self.mock;
        if mock.delay_min_ms > mock.delay_max_ms {
            return Err(format!(
                "mock.delay_min_ms ({}) cannot exceed mock.delay_max_ms ({})",
                mock.delay_min_ms, mock.delay_max_ms
            ));
        }
        if !(0.0..=1.0).contains(&mock.error_probability) {
            return Err("mock.error_probability must be between 0 and 1".to_string());
        }

        match self.logging.file_rotation.as_str() {
            "daily" | "hourly" | "minutely" | "never" => {}
            other => {
                return Err(format!(
                    "logging.file_rotation must be daily, hourly, minutely or never (got {other})"
                ))
            }
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server.host '{}': {e}", self.server.host))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
