//! TUI Views module
//!
//! Draws the title, the message log, the input line and the status bar.

pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::Backend;
use crate::wizard::InputWidget;

use super::app::App;
use super::layout::AppLayout;
use super::widgets::MessageLogWidget;

/// Render the entire application
pub fn render<B: Backend>(frame: &mut Frame, app: &mut App<B>) {
    let layout = AppLayout::new(frame.area());

    render_title(frame, layout.title);

    let log = MessageLogWidget::new(&mut app.screen.log, layout.log, "Resume Righter");
    frame.render_widget(log, layout.log);

    render_input(frame, app, layout.input);

    status_bar::render(frame, app, layout.status_bar);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " Resume Righter ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " tailor a resume to a job posting",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// The input line, or an empty frame while input is hidden
fn render_input<B: Backend>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let title = match app.screen.widget {
        InputWidget::Hidden => " Input ",
        InputWidget::TextField => " Your answer ",
        InputWidget::FilePicker { .. } => " Upload ",
    };
    let border = if app.screen.input_visible() && !app.busy {
        Color::Green
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.screen.input_visible() {
        let mut input = app.screen.input.clone();
        input.focused = !app.busy;
        frame.render_widget(input, inner);
    }
}
