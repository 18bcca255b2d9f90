//! UI Components for userinfo-tui.
//!
//! This module provides the dialog components with a common interface.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

mod form_view;
mod option_dialog;
pub mod styles;

pub use form_view::FormView;
pub use option_dialog::OptionDialogView;

/// Common trait for all UI components.
pub trait Component {
    /// Draw the component within the given area.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Handle keyboard input. Returns true if the event was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;
}

/// Render a test frame and return its rows as plain strings.
#[cfg(test)]
pub(crate) fn render_to_lines(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut Frame),
) -> Vec<String> {
    use ratatui::{Terminal, backend::TestBackend};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}
