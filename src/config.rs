//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored when present, via `dotenvy`, which
//! never prints to stdout (the REPL owns stdout).

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: upcoming-birthday window in days, 1-365
    ///   (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if it exists, but don't fail if it doesn't.
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_i64("BIRTHDAY_WINDOW_DAYS", 7)?;

        if !(1..=365).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 1 and 365".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            birthday_window_days: 7,
            log_level: "error".to_string(),
        }
    }
}
