//! contact-schema - JSON Schema exporter
//!
//! Writes the JSON Schema of every contact shape to a directory, for projects
//! that copy the contract instead of depending on the crate.
//!
//! Usage: `contact-schema [OUTPUT_DIR]`. Without an argument the directory
//! comes from `CONTACT_SCHEMA_OUTPUT_DIR` (default: `schemas`).

use anyhow::{Context, Result};
use contact_schema::schema::export_schemas;
use contact_schema::Config;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so stdout stays clean for scripting
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.schema_output_dir.clone());

    info!("Exporting contact schemas to {}", output_dir.display());

    match export_schemas(&output_dir) {
        Ok(paths) => {
            for path in &paths {
                info!("  wrote {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            error!("Schema export failed: {}", e);
            Err(e.into())
        }
    }
}
