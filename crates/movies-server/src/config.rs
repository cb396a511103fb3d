//! Startup configuration read from environment variables.

use movies_storage::IdStrategy;
use thiserror::Error;

pub const HOST_VAR: &str = "MOVIES_HOST";
pub const PORT_VAR: &str = "MOVIES_PORT";
pub const ID_STRATEGY_VAR: &str = "MOVIES_ID_STRATEGY";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Errors from reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MOVIES_PORT must be a port number, got '{0}'")]
    InvalidPort(String),

    #[error("MOVIES_ID_STRATEGY: {0}")]
    InvalidIdStrategy(#[from] movies_storage::StorageError),
}

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub id_strategy: IdStrategy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the process environment. Unset variables take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(strategy) = lookup(ID_STRATEGY_VAR) {
            config.id_strategy = strategy.parse()?;
        }

        Ok(config)
    }

    /// The `host:port` string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
