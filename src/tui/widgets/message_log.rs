//! Scrolling message log
//!
//! Holds the wizard's output lines and renders the tail of them. New lines
//! always scroll the log back to the bottom.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::wizard::MessageKind;

/// Display style for a message kind
pub fn kind_style(kind: MessageKind) -> Style {
    match kind {
        MessageKind::Prompt => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        MessageKind::Info => Style::default().fg(Color::Blue),
        MessageKind::Success => Style::default().fg(Color::LightGreen),
        MessageKind::Error => Style::default().fg(Color::Red),
    }
}

/// One line of wizard output
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub kind: MessageKind,
    pub text: String,
    pub at: DateTime<Local>,
}

impl LogEntry {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            at: Local::now(),
        }
    }

    fn line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                self.at.format("[%H:%M:%S] ").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(self.text.clone(), kind_style(self.kind)),
        ])
    }
}

/// Message history plus scroll position
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Vec<LogEntry>,
    /// Rows scrolled up from the bottom; 0 follows new output
    offset: usize,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and jump to the bottom
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
        self.scroll_to_end();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_following(&self) -> bool {
        self.offset == 0
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_add(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_to_end(&mut self) {
        self.offset = 0;
    }

    /// Keep the offset within what can actually be scrolled
    pub fn clamp_offset(&mut self, max: usize) {
        self.offset = self.offset.min(max);
    }

    /// Every entry as a wrapping paragraph, without a border
    pub fn paragraph(&self) -> Paragraph<'static> {
        let lines: Vec<Line<'static>> = self.entries.iter().map(LogEntry::line).collect();
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }

    /// Rows the log occupies once wrapped to `width` columns
    pub fn row_count(&self, width: u16) -> usize {
        if self.entries.is_empty() || width == 0 {
            return 0;
        }
        self.paragraph().line_count(width)
    }
}

/// Widget rendering the visible part of a [`MessageLog`]
pub struct MessageLogWidget<'a> {
    paragraph: Paragraph<'static>,
    /// First wrapped row to show
    top: u16,
    scrolled: bool,
    title: &'a str,
}

impl<'a> MessageLogWidget<'a> {
    /// Lay out `log` for `area`, clamping its scroll offset
    pub fn new(log: &mut MessageLog, area: Rect, title: &'a str) -> Self {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2) as usize;

        let rows = log.row_count(inner_width);
        let max_offset = rows.saturating_sub(inner_height);
        log.clamp_offset(max_offset);
        let top = (max_offset - log.offset()).min(u16::MAX as usize) as u16;

        Self {
            paragraph: log.paragraph(),
            top,
            scrolled: !log.is_following(),
            title,
        }
    }
}

impl<'a> Widget for MessageLogWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.scrolled {
            format!(" {} (scrolled, End to follow) ", self.title)
        } else {
            format!(" {} ", self.title)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(title);

        self.paragraph
            .block(block)
            .scroll((self.top, 0))
            .render(area, buf);
    }
}
