//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Records shown per page when nothing else is configured.
pub const DEFAULT_RECORDS_PER_PAGE: usize = 3;

/// Configuration for the address book and its demo binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Records per page for paginated listing (default: 3)
    pub records_per_page: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_RECORDS_PER_PAGE`: Records per page (default: 3, minimum 1)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not.
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let records_per_page =
            Self::parse_page_size("ADDRESS_BOOK_RECORDS_PER_PAGE", DEFAULT_RECORDS_PER_PAGE)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            records_per_page,
            log_level,
        })
    }

    /// Read a page size (at least 1) from `var_name`, or `default` when unset.
    fn parse_page_size(var_name: &str, default: usize) -> ConfigResult<usize> {
        let Ok(raw) = env::var(var_name) else {
            return Ok(default);
        };
        match raw.trim().parse::<usize>() {
            Ok(size) if size >= 1 => Ok(size),
            _ => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number of at least 1, got: {:?}", raw),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            records_per_page: DEFAULT_RECORDS_PER_PAGE,
            log_level: "error".to_string(),
        }
    }
}
