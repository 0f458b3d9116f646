//! Configuration management for the article search server.
//!
//! Configuration comes from environment variables. A `.env` file is read if
//! present; `dotenvy` never writes to stdout, which MCP uses for
//! communication.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the article search server.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON corpus file; the built-in sample corpus is used when unset
    pub corpus_path: Option<PathBuf>,

    /// Result cache TTL in seconds (default: 300, 0 disables caching)
    pub cache_ttl_secs: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ARTICLE_CORPUS_PATH`: JSON corpus file (must not be blank when set)
    /// - `SEARCH_CACHE_TTL_SECS`: Result cache TTL in seconds (default: 300)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let corpus_path = match env::var("ARTICLE_CORPUS_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ARTICLE_CORPUS_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => None,
        };

        let cache_ttl_secs = Self::parse_env_u64("SEARCH_CACHE_TTL_SECS", 300)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            corpus_path,
            cache_ttl_secs,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            corpus_path: None,
            cache_ttl_secs: 300,
            log_level: "error".to_string(),
        }
    }
}
