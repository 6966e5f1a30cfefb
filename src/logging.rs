//! Structured logging setup
//!
//! The TUI owns stdout, so log output goes to a file under the config
//! directory. `RUST_LOG` wins over the configured level.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{RighterPaths, Settings};
use crate::error::{RighterError, RighterResult};

/// Build the filter from `RUST_LOG`, falling back to the configured level
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            default_level
        ))
    })
}

/// Install the global subscriber writing to the log file
///
/// Returns the path being written to.
pub fn init(paths: &RighterPaths, settings: &Settings) -> RighterResult<PathBuf> {
    paths.ensure_directories()?;

    let log_path = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| RighterError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::registry()
        .with(env_filter(&settings.log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| RighterError::Config(format!("Failed to initialise logging: {}", e)))?;

    Ok(log_path)
}
