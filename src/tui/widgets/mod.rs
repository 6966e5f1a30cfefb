//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod input;
pub mod message_log;

pub use input::TextInput;
pub use message_log::{LogEntry, MessageLog, MessageLogWidget};
