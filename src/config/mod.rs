//! Configuration module for Resume Righter
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RighterPaths;
pub use settings::Settings;
