//! Display surface used by the wizard
//!
//! The controller never touches the terminal directly. It reports messages,
//! toggles the input widget and hands over the generated document through
//! this trait.

use std::path::PathBuf;

use crate::error::RighterResult;

/// Kind of line appended to the message log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// A step's prompt
    Prompt,
    /// Neutral information
    Info,
    /// An input was accepted or the document was delivered
    Success,
    /// Rejections and failures
    Error,
}

/// Which input widget is active
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputWidget {
    #[default]
    Hidden,
    TextField,
    FilePicker { accept: String },
}

/// Display capability the wizard drives
pub trait Renderer {
    /// Append a line to the message log and scroll to it
    fn append(&mut self, kind: MessageKind, text: &str);

    /// Show the given input widget (or hide input entirely)
    fn show_input(&mut self, widget: InputWidget);

    /// Empty the active input widget
    fn clear_input(&mut self);

    /// Hand the generated document to the user; returns where it went
    fn deliver_download(&mut self, filename: &str, document: &[u8]) -> RighterResult<PathBuf>;
}

/// Renderer that keeps everything in memory
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub messages: Vec<(MessageKind, String)>,
    pub widget: InputWidget,
    pub clears: usize,
    pub downloads: Vec<(String, Vec<u8>)>,
    /// When set, `deliver_download` fails with this message
    pub fail_downloads: Option<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every message, in order
    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(|(_, t)| t.as_str()).collect()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.messages.last().map(|(_, t)| t.as_str())
    }

    pub fn contains(&self, text: &str) -> bool {
        self.messages.iter().any(|(_, t)| t == text)
    }
}

impl Renderer for RecordingRenderer {
    fn append(&mut self, kind: MessageKind, text: &str) {
        self.messages.push((kind, text.to_string()));
    }

    fn show_input(&mut self, widget: InputWidget) {
        self.widget = widget;
    }

    fn clear_input(&mut self) {
        self.clears += 1;
    }

    fn deliver_download(&mut self, filename: &str, document: &[u8]) -> RighterResult<PathBuf> {
        if let Some(reason) = &self.fail_downloads {
            return Err(crate::error::RighterError::Download(reason.clone()));
        }
        self.downloads.push((filename.to_string(), document.to_vec()));
        Ok(PathBuf::from(filename))
    }
}
