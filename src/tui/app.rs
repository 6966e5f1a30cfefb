//! Application state for the TUI
//!
//! [`Screen`] is the display surface the wizard draws on; [`App`] pairs it
//! with the controller and the loop's own flags.

use std::path::PathBuf;

use crate::api::Backend;
use crate::error::RighterResult;
use crate::wizard::{
    save_document, InputWidget, MessageKind, Renderer, WizardController, WizardPhase,
};

use super::widgets::{LogEntry, MessageLog, TextInput};

/// Everything the wizard has put on screen
#[derive(Debug)]
pub struct Screen {
    /// Message history
    pub log: MessageLog,

    /// The single input line
    pub input: TextInput,

    /// Which widget the input line currently acts as
    pub widget: InputWidget,

    /// Where downloads are written
    download_dir: PathBuf,

    /// Path of the last delivered document
    pub last_download: Option<PathBuf>,
}

impl Screen {
    pub fn new(download_dir: PathBuf) -> Self {
        Self {
            log: MessageLog::new(),
            input: TextInput::new(),
            widget: InputWidget::Hidden,
            download_dir,
            last_download: None,
        }
    }

    /// Whether the input line is visible
    pub fn input_visible(&self) -> bool {
        self.widget != InputWidget::Hidden
    }
}

impl Renderer for Screen {
    fn append(&mut self, kind: MessageKind, text: &str) {
        self.log.push(LogEntry::new(kind, text));
    }

    fn show_input(&mut self, widget: InputWidget) {
        let (label, placeholder) = match &widget {
            InputWidget::Hidden => ("", String::new()),
            InputWidget::TextField => ("", String::new()),
            InputWidget::FilePicker { accept } => ("Resume file", format!("path to {}", accept)),
        };
        // Text survives a re-show of the same widget, not a switch
        let content = if widget == self.widget {
            self.input.value().to_string()
        } else {
            String::new()
        };
        self.input = TextInput::new()
            .label(label)
            .placeholder(placeholder)
            .focused(widget != InputWidget::Hidden)
            .content(content);
        self.widget = widget;
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn deliver_download(&mut self, filename: &str, document: &[u8]) -> RighterResult<PathBuf> {
        let path = save_document(&self.download_dir, filename, document)?;
        self.last_download = Some(path.clone());
        Ok(path)
    }
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Enter on the text field
    SubmitText(String),
    /// Enter on the file picker
    SubmitFile(String),
}

/// Main application state
pub struct App<B> {
    /// The wizard being driven
    pub controller: WizardController<B>,

    /// Display surface
    pub screen: Screen,

    /// Whether the app should quit
    pub should_quit: bool,

    /// A request is in flight
    pub busy: bool,
}

impl<B: Backend> App<B> {
    /// Create a new App instance
    pub fn new(controller: WizardController<B>, download_dir: PathBuf) -> Self {
        Self {
            controller,
            screen: Screen::new(download_dir),
            should_quit: false,
            busy: false,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Render the opening steps
    pub async fn start(&mut self) {
        self.controller.start(&mut self.screen).await;
    }

    /// Carry out a submit action against the wizard
    pub async fn perform(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.quit(),
            Action::SubmitText(text) => {
                self.controller.handle_enter(&mut self.screen, &text).await;
            }
            Action::SubmitFile(path) => {
                self.controller.handle_file_path(&mut self.screen, &path).await;
            }
        }
    }

    /// Short status text for the status bar
    pub fn status(&self) -> String {
        if self.busy {
            return "Working...".to_string();
        }
        match self.controller.phase() {
            WizardPhase::Running => String::new(),
            WizardPhase::AwaitingInput => match self.screen.widget {
                InputWidget::FilePicker { .. } => "Type a file path, Enter to upload".into(),
                _ => "Enter to submit".into(),
            },
            WizardPhase::Halted => "Stopped".into(),
            WizardPhase::Finished => match &self.screen.last_download {
                Some(path) => format!("Saved {}", path.display()),
                None => "Done".into(),
            },
        }
    }

    /// 1-based step number for display
    pub fn step_label(&self) -> String {
        let total = self.controller.step_count();
        let current = (self.controller.cursor() + 1).min(total);
        format!("Step {}/{}", current, total)
    }
}
