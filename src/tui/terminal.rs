//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::path::PathBuf;

use crate::api::Backend;
use crate::error::{RighterError, RighterResult};
use crate::wizard::WizardController;

use super::app::{Action, App};
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn tui_error(context: &str, err: io::Error) -> RighterError {
    RighterError::Tui(format!("{}: {}", context, err))
}

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> RighterResult<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(|e| tui_error("Failed to enable raw mode", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .map_err(|e| tui_error("Failed to enter alternate screen", e))?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| tui_error("Failed to create terminal", e))
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> RighterResult<()> {
    disable_raw_mode().map_err(|e| tui_error("Failed to disable raw mode", e))?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)
        .map_err(|e| tui_error("Failed to leave alternate screen", e))?;
    Ok(())
}

/// Run the wizard in the terminal until it is quit
///
/// Returns the path of the saved document, if one was generated.
pub async fn run_tui<B: Backend>(
    controller: WizardController<B>,
    download_dir: PathBuf,
) -> RighterResult<Option<PathBuf>> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(controller, download_dir);

    let outcome = event_loop(&mut terminal, &mut app).await;

    restore_terminal()?;
    outcome?;

    Ok(app.screen.last_download.clone())
}

fn draw<B: Backend>(terminal: &mut Tui, app: &mut App<B>) -> RighterResult<()> {
    terminal
        .draw(|frame| super::views::render(frame, app))
        .map_err(|e| tui_error("Failed to draw", e))?;
    Ok(())
}

async fn event_loop<B: Backend>(terminal: &mut Tui, app: &mut App<B>) -> RighterResult<()> {
    app.start().await;

    let mut events = EventHandler::default();

    loop {
        draw(terminal, app)?;

        let Some(event) = events.next().await else {
            tracing::warn!("terminal event stream ended");
            break;
        };

        match handle_event(&mut app.screen, event) {
            Action::None => {}
            Action::Quit => app.quit(),
            action => {
                // Show the busy state before the request goes out
                app.busy = true;
                draw(terminal, app)?;
                app.perform(action).await;
                app.busy = false;

                // Keys typed during the request belonged to the old step
                let discarded = events.discard_pending();
                if discarded > 0 {
                    tracing::debug!(discarded, "Dropped input typed while busy");
                }
            }
        }

        if app.should_quit {
            tracing::info!(session = %app.controller.session().id(), "quit requested");
            break;
        }
    }

    Ok(())
}
