//! Error types for the contact schema crate.
//!
//! Domain validation failures live in [`crate::domain::ValidationError`];
//! this module covers configuration and schema export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while writing JSON Schema files.
#[derive(Error, Debug)]
pub enum SchemaExportError {
    /// Failed to create the output directory or write a file
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to render a schema as JSON
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SchemaExportError
pub type SchemaExportResult<T> = Result<T, SchemaExportError>;
