//! Event handling for the TUI application.
//!
//! This module provides keyboard and terminal event handling using crossterm.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Terminal events that the dialog reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Poll timeout with nothing to do
    Tick,
    /// Terminal resize event
    Resize(u16, u16),
}

/// Event handler that polls for terminal events.
pub struct EventHandler {
    /// How long a single poll waits before reporting a tick
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event.
    ///
    /// Key releases and repeats reported by some terminals are folded into
    /// `Tick` so every keystroke is handled once.
    pub fn next(&self) -> std::io::Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}
