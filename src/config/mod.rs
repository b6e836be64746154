//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use roster_core::config::Config;
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     database_url: "https://roster-demo.firebaseio.com".to_string(),
//!     log_level: "info".to_string(),
//!     request_timeout_ms: 10_000,
//! };
//!
//! let store_config = config.store_config();
//! assert_eq!(store_config.timeout_ms, 10_000);
//! ```

mod validation;

pub use validation::{validate_config, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};

use crate::error::ConfigError;
use crate::store::StoreConfig;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Application configuration.
///
/// This struct holds all configuration values for the roster core.
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the realtime database.
    pub database_url: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ROSTER_DATABASE_URL`: base URL of the realtime database
    ///
    /// Optional environment variables (with defaults):
    /// - `LOG_LEVEL`: logging level (default: `info`)
    /// - `REQUEST_TIMEOUT_MS`: request timeout (default: `10000`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `ROSTER_DATABASE_URL` is missing
    /// - `REQUEST_TIMEOUT_MS` is not a valid positive integer
    /// - Any value fails validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let database_url =
            std::env::var("ROSTER_DATABASE_URL").map_err(|_| ConfigError::MissingRequired {
                var: "ROSTER_DATABASE_URL".into(),
            })?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let request_timeout_ms = parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;

        let config = Self {
            database_url,
            log_level,
            request_timeout_ms,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Project this configuration into a [`StoreConfig`] for the client.
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.database_url).with_timeout_ms(self.request_timeout_ms)
    }
}

/// Parse an optional `u64` environment variable with a default.
fn parse_env_u64(var: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            var: var.into(),
            reason: format!("'{value}' is not a positive integer"),
        }),
        Err(_) => Ok(default),
    }
}
