//! Resume tailoring wizard
//!
//! The step sequence, the session it fills in, and the controller that moves
//! between steps. Display is abstracted behind [`Renderer`] so the same
//! controller drives the TUI, the console front-end and tests.

pub mod controller;
pub mod download;
pub mod renderer;
pub mod session;
pub mod steps;

pub use controller::{WizardController, WizardPhase};
pub use download::{save_document, DOWNLOAD_FILENAME};
pub use renderer::{InputWidget, MessageKind, RecordingRenderer, Renderer};
pub use session::{MissingInput, SessionState};
pub use steps::{Step, StepKind, STEPS};
