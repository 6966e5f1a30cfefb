//! Resume Righter - terminal wizard that tailors a resume to a job posting
//!
//! The wizard walks the user through uploading a resume, giving a job
//! posting URL and optional special considerations. Each input is checked
//! by a remote service before the wizard moves on, and the final step
//! downloads the rewritten resume.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `api`: Backend trait and its HTTP client
//! - `wizard`: Step sequence, session state and the controller
//! - `tui`: Full-screen terminal front-end
//! - `console`: Line-mode front-end
//! - `logging`: File-backed tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use resume_righter::api::HttpBackend;
//! use resume_righter::config::{RighterPaths, Settings};
//! use resume_righter::wizard::WizardController;
//!
//! let paths = RighterPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let controller = WizardController::new(HttpBackend::new(&settings)?);
//! resume_righter::tui::run_tui(controller, settings.download_dir()).await?;
//! ```

pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod tui;
pub mod wizard;

pub use error::{RighterError, RighterResult};
