//! Layout definitions for the TUI
//!
//! Title line, message log, input line, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title line
    pub title: Rect,
    /// Message log
    pub log: Rect,
    /// Bordered input line
    pub input: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(3),    // Log
                Constraint::Length(3), // Input with border
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            title: chunks[0],
            log: chunks[1],
            input: chunks[2],
            status_bar: chunks[3],
        }
    }
}
