//! Status bar view
//!
//! Shows the current step, what the wizard is waiting on, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::api::Backend;
use crate::tui::app::App;
use crate::wizard::WizardPhase;

/// Render the status bar
pub fn render<B: Backend>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.step_label()),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    let status = app.status();
    if !status.is_empty() {
        let color = if app.busy {
            Color::Yellow
        } else {
            match app.controller.phase() {
                WizardPhase::Halted => Color::Red,
                WizardPhase::Finished => Color::Green,
                _ => Color::White,
            }
        };
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(status, Style::default().fg(color)));
    }

    let hints = if app.screen.input_visible() {
        " Enter:Submit  PgUp/PgDn:Scroll  Esc:Quit "
    } else {
        " PgUp/PgDn:Scroll  q:Quit "
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
