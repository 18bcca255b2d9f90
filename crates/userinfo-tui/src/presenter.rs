//! Terminal presenter for the option dialog.
//!
//! Takes over the terminal for the lifetime of one dialog and hands it back
//! before returning, so anything printed afterwards lands on the normal
//! screen.

use std::io;

use userinfo_core::FormError;
use userinfo_core::dialog::{DialogOutcome, DialogPresenter, OptionDialog};
use userinfo_core::panel::FormPanel;

use crate::components::{Component, OptionDialogView};
use crate::error::TuiError;
use crate::event::{Event, EventHandler};
use crate::terminal;

/// Shows the dialog full-screen in the terminal.
pub struct TerminalPresenter {
    events: EventHandler,
}

impl TerminalPresenter {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            events: EventHandler::new(tick_rate_ms),
        }
    }
}

impl DialogPresenter for TerminalPresenter {
    fn show(
        &mut self,
        dialog: &OptionDialog,
        panel: &mut FormPanel,
    ) -> userinfo_core::Result<DialogOutcome> {
        let mut tui = terminal::setup().map_err(presentation_error)?;
        let mut view = OptionDialogView::new(dialog, panel);

        let result = drive(
            &mut view,
            |view| {
                tui.draw(|frame| {
                    let area = frame.area();
                    view.draw(frame, area, true);
                })?;
                Ok(())
            },
            || self.events.next(),
        );

        let shown = tui.show_cursor();
        let restored = terminal::restore();

        let outcome = result.map_err(presentation_error)?;
        shown.and(restored).map_err(presentation_error)?;
        Ok(outcome)
    }
}

/// Redraw and feed events to the view until it resolves.
pub(crate) fn drive(
    view: &mut OptionDialogView<'_>,
    mut draw: impl FnMut(&mut OptionDialogView<'_>) -> io::Result<()>,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> io::Result<DialogOutcome> {
    loop {
        draw(view)?;

        match next_event()? {
            Event::Key(key) => {
                view.handle_key(key);
            }
            Event::Resize(width, height) => {
                log::trace!("terminal resized to {}x{}", width, height);
            }
            Event::Tick => {}
        }

        if let Some(outcome) = view.outcome() {
            return Ok(outcome);
        }
    }
}

fn presentation_error(err: io::Error) -> FormError {
    TuiError::from(err).into()
}
