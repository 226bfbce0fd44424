use config::ConfigError;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::SharedError;

pub const DEFAULT_CONFIG_FILE: &str = "catalog_application/config.yaml";
pub const DEFAULT_ENV_PREFIX: &str = "CATALOG";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApplicationConfiguration {
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub base_path: Option<String>,
    pub cors_enabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ApplicationConfiguration {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            host: default_host(),
            port: default_port(),
            base_path: None,
            cors_enabled: None,
        }
    }
}

impl ApplicationConfiguration {
    /// Loads the configuration from `catalog_application/config.yaml` (if present) and `CATALOG__*` environment
    /// variables, in that order of precedence.
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::load(DEFAULT_CONFIG_FILE, DEFAULT_ENV_PREFIX)
    }

    /// Loads the configuration from an optional file and environment variables starting with `env_prefix`. Nested
    /// keys are separated with `__`, e.g. `CATALOG__PORT`.
    pub fn load(config_file: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        // NOTE: not visible on startup, the subscriber is only installed once `log_format` is known.
        info!("Loading application configuration ...");

        let config = config::Config::builder()
            .add_source(config::File::with_name(config_file).required(false))
            .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
            .build()?;

        config.try_deserialize().inspect(|config: &ApplicationConfiguration| {
            info!("Configuration loaded successfully");
            debug!("{:#?}", config);
        })
    }

    pub fn cors_enabled(&self) -> bool {
        self.cors_enabled.unwrap_or(false)
    }

    /// Returns the base path with a leading `/` and without a trailing one, or `None` when routes should be mounted
    /// at the root.
    pub fn base_path(&self) -> Option<String> {
        self.base_path
            .as_deref()
            .map(|base_path| base_path.trim_matches('/'))
            .filter(|base_path| !base_path.is_empty())
            .map(|base_path| format!("/{base_path}"))
    }

    pub fn socket_addr(&self) -> Result<std::net::SocketAddr, SharedError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| SharedError::InvalidSocketAddress(addr))
    }
}
