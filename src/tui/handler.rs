//! Event handler for the TUI
//!
//! Maps key presses onto the screen's input line and log. Anything that
//! needs the backend comes back as an [`Action`] for the run loop to await.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::wizard::InputWidget;

use super::app::{Action, Screen};
use super::event::Event;

/// Rows moved per PageUp/PageDown
const PAGE_ROWS: usize = 10;

/// Handle an incoming event
pub fn handle_event(screen: &mut Screen, event: Event) -> Action {
    match event {
        Event::Key(key) => handle_key_event(screen, key),
        Event::Paste(text) => {
            if screen.input_visible() {
                screen.input.insert_str(&text);
            }
            Action::None
        }
        Event::Resize(_, _) | Event::Tick => Action::None,
    }
}

/// Handle a key event
pub fn handle_key_event(screen: &mut Screen, key: KeyEvent) -> Action {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // Log scrolling works whether or not input is shown
    match key.code {
        KeyCode::Esc => return Action::Quit,
        KeyCode::PageUp => {
            screen.log.scroll_up(PAGE_ROWS);
            return Action::None;
        }
        KeyCode::PageDown => {
            screen.log.scroll_down(PAGE_ROWS);
            return Action::None;
        }
        KeyCode::Up => {
            screen.log.scroll_up(1);
            return Action::None;
        }
        KeyCode::Down => {
            screen.log.scroll_down(1);
            return Action::None;
        }
        _ => {}
    }

    if !screen.input_visible() {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
            KeyCode::End => {
                screen.log.scroll_to_end();
                Action::None
            }
            _ => Action::None,
        };
    }

    handle_editing_key(screen, key)
}

/// Handle keys while the input line is active
fn handle_editing_key(screen: &mut Screen, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => {
            let value = screen.input.value().to_string();
            match screen.widget {
                InputWidget::FilePicker { .. } => Action::SubmitFile(value),
                _ => Action::SubmitText(value),
            }
        }
        KeyCode::Char(c) => {
            screen.input.insert(c);
            Action::None
        }
        KeyCode::Backspace => {
            screen.input.backspace();
            Action::None
        }
        KeyCode::Delete => {
            screen.input.delete();
            Action::None
        }
        KeyCode::Left => {
            screen.input.move_left();
            Action::None
        }
        KeyCode::Right => {
            screen.input.move_right();
            Action::None
        }
        KeyCode::Home => {
            screen.input.move_start();
            Action::None
        }
        KeyCode::End => {
            screen.input.move_end();
            screen.log.scroll_to_end();
            Action::None
        }
        _ => Action::None,
    }
}
