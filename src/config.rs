//! Configuration management for the feedback client.
//!
//! Values come from environment variables, with an optional `.env` file
//! loaded first.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Base URL of the public API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.clarifai.com";

/// Configuration for the feedback client.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL
    pub api_base_url: String,

    /// API key for authentication
    pub api_key: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CLARIFAI_API_KEY`: API key for authentication
    ///
    /// Optional environment variables:
    /// - `CLARIFAI_API_BASE_URL`: Base URL (default: `https://api.clarifai.com`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let api_key = env::var("CLARIFAI_API_KEY")
            .map_err(|_| ConfigError::MissingVar("CLARIFAI_API_KEY".to_string()))?;

        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CLARIFAI_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let api_base_url = env::var("CLARIFAI_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CLARIFAI_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_base_url,
            api_key,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
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
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: String::new(),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
