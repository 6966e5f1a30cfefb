//! Event handling for the TUI
//!
//! Terminal events are read on a dedicated thread and forwarded over a tokio
//! channel, so the run loop can await them alongside backend requests.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Bracketed paste
    Paste(String),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                            Ok(CrosstermEvent::Paste(text)) => Some(Event::Paste(text)),
                            Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                            Ok(_) => None,
                            Err(e) => {
                                tracing::error!(error = %e, "failed to read terminal event");
                                return;
                            }
                        };
                        if let Some(ev) = forwarded {
                            if sender.send(ev).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "failed to poll terminal events");
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver }
    }

    #[cfg(test)]
    fn from_receiver(receiver: mpsc::UnboundedReceiver<Event>) -> Self {
        Self { receiver }
    }

    /// Wait for the next event; `None` once the reader thread has stopped
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Drop input typed while a request was in flight
    ///
    /// Returns how many key and paste events were thrown away.
    pub fn discard_pending(&mut self) -> usize {
        let mut discarded = 0;
        while let Ok(event) = self.receiver.try_recv() {
            if matches!(event, Event::Key(_) | Event::Paste(_)) {
                discarded += 1;
            }
        }
        discarded
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
