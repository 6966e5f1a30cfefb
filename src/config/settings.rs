//! User settings for Resume Righter
//!
//! Manages the backend location, anti-forgery token, download directory,
//! request timeout and log level.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::RighterPaths;
use crate::error::RighterError;

/// User settings for Resume Righter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Root URL of the validation/generation service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fixed anti-forgery token; fetched from the index page when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,

    /// Where generated documents are written (current directory when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,

    /// Per-request timeout in seconds; no timeout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Default log filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            base_url: default_base_url(),
            csrf_token: None,
            download_dir: None,
            request_timeout_secs: None,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &RighterPaths) -> Result<Self, RighterError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                RighterError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RighterError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RighterPaths) -> Result<(), RighterError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            RighterError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Directory that receives downloaded documents
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Apply command-line/environment overrides without persisting them
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        csrf_token: Option<String>,
        download_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if csrf_token.is_some() {
            self.csrf_token = csrf_token;
        }
        if download_dir.is_some() {
            self.download_dir = download_dir;
        }
        self
    }
}
