//! Path management for Resume Righter
//!
//! Provides XDG-compliant path resolution for configuration and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `RESUME_RIGHTER_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/resume-righter` or `~/.config/resume-righter`
//! 3. Windows: `%APPDATA%\resume-righter`

use std::path::PathBuf;

use crate::error::RighterError;

/// Environment variable that overrides the base directory
pub const CONFIG_DIR_ENV: &str = "RESUME_RIGHTER_CONFIG_DIR";

/// Manages all paths used by Resume Righter
#[derive(Debug, Clone)]
pub struct RighterPaths {
    /// Base directory for all Resume Righter files
    base_dir: PathBuf,
}

impl RighterPaths {
    /// Create a new RighterPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration directory can be determined.
    pub fn new() -> Result<Self, RighterError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RighterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/resume-righter/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the log directory (~/.config/resume-righter/logs/)
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the path to the application log
    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join("resume-righter.log")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), RighterError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RighterError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| RighterError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RighterError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("resume-righter"));
    }

    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("resume-righter"))
        .ok_or_else(|| RighterError::Config("Could not determine home directory".into()))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RighterError> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("resume-righter"))
        .ok_or_else(|| RighterError::Config("Could not determine APPDATA directory".into()))
}
