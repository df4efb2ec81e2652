//! Configuration management.
//!
//! Settings come from environment variables, with an optional `.env` file
//! loaded first. Every setting has a default, so an empty environment is a
//! valid configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Runtime configuration for searches and schema export.
#[derive(Debug, Clone)]
pub struct Config {
    /// Page size used when a caller asks for page size 0 (default: 20)
    pub default_page_size: usize,

    /// Upper bound applied to requested page sizes (default: 100)
    pub max_page_size: usize,

    /// Directory the schema exporter writes into (default: "schemas")
    pub schema_output_dir: PathBuf,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_DEFAULT_PAGE_SIZE`: Default page size (default: 20)
    /// - `CONTACT_MAX_PAGE_SIZE`: Maximum page size (default: 100)
    /// - `CONTACT_SCHEMA_OUTPUT_DIR`: Schema output directory (default: "schemas")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let default_page_size =
            Self::parse_env_usize("CONTACT_DEFAULT_PAGE_SIZE", defaults.default_page_size)?;
        let max_page_size =
            Self::parse_env_usize("CONTACT_MAX_PAGE_SIZE", defaults.max_page_size)?;

        if default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_DEFAULT_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        if max_page_size < default_page_size {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_MAX_PAGE_SIZE".to_string(),
                reason: format!(
                    "Must be at least CONTACT_DEFAULT_PAGE_SIZE ({}), got: {}",
                    default_page_size, max_page_size
                ),
            });
        }

        let schema_output_dir = match env::var("CONTACT_SCHEMA_OUTPUT_DIR") {
            Ok(dir) if dir.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_SCHEMA_OUTPUT_DIR".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(dir) => PathBuf::from(dir),
            Err(_) => defaults.schema_output_dir,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            default_page_size,
            max_page_size,
            schema_output_dir,
            log_level,
        })
    }

    /// Turn a requested page size into the one actually used.
    ///
    /// 0 means "no preference" and maps to the default; anything above the
    /// maximum is clamped.
    pub fn resolve_page_size(&self, requested: usize) -> usize {
        if requested == 0 {
            return self.default_page_size;
        }
        requested.min(self.max_page_size)
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
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
            default_page_size: 20,
            max_page_size: 100,
            schema_output_dir: PathBuf::from("schemas"),
            log_level: "info".to_string(),
        }
    }
}
