//! Web server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use bookstore_db::DbConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file
    pub database_path: String,

    /// Pool size (default: 10)
    pub db_max_connections: u32,

    /// Seconds a request waits for a pooled connection
    pub db_acquire_timeout_secs: u64,

    /// Fallback log filter when RUST_LOG is unset
    pub log_level: String,
}

impl WebConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let config = WebConfig {
            host: var("BOOKSTORE_HOST", "0.0.0.0"),

            port: var("BOOKSTORE_PORT", "55902")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BOOKSTORE_PORT".to_string()))?,

            database_path: var("DATABASE_PATH", "./bookstore.db"),

            db_max_connections: var("DB_MAX_CONNECTIONS", "10")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,

            db_acquire_timeout_secs: var("DB_ACQUIRE_TIMEOUT_SECS", "30")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_ACQUIRE_TIMEOUT_SECS".to_string()))?,

            log_level: var("LOG_LEVEL", "info"),
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        if config.database_path.trim().is_empty() {
            return Err(ConfigError::MissingRequired("DATABASE_PATH".to_string()));
        }

        Ok(config)
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BOOKSTORE_HOST".to_string()))
    }

    /// Pool settings for [`bookstore_db::Database::new`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .max_connections(self.db_max_connections)
            .acquire_timeout(Duration::from_secs(self.db_acquire_timeout_secs))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_with(vars: &[(&str, &str)]) -> Result<WebConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WebConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load_with(&[]).unwrap();

        assert_eq!(config.port, 55902);
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.database_path, "./bookstore.db");
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:55902");

        let db = config.db_config();
        assert_eq!(db.max_connections, 10);
        assert_eq!(db.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = load_with(&[
            ("BOOKSTORE_HOST", "127.0.0.1"),
            ("BOOKSTORE_PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "4"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.db_config().max_connections, 4);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load_with(&[("BOOKSTORE_PORT", "not-a-port")]),
            Err(ConfigError::InvalidValue(name)) if name == "BOOKSTORE_PORT"
        ));
        assert!(matches!(
            load_with(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidValue(_))
        ));
    }
}
