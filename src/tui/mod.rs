//! Terminal User Interface module
//!
//! Full-screen front-end for the wizard: a scrolling message log above a
//! single input line that acts as text field or file picker.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::{Action, App, Screen};
pub use terminal::run_tui;
