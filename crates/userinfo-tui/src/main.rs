//! userinfo - terminal dialog that collects user information
//!
//! Shows a modal form with six fields and prints the values on Submit.

mod action;
mod app;
mod components;
mod error;
mod event;
mod layout;
mod presenter;
mod terminal;

use std::io;

use action::AppAction;
use app::App;
use error::TuiResult;
use presenter::TerminalPresenter;

/// Poll interval while waiting for keystrokes.
const TICK_RATE_MS: u64 = 250;

#[tokio::main(flavor = "current_thread")]
async fn main() -> TuiResult<()> {
    terminal::install_panic_hook();

    let mut app = App::new(TerminalPresenter::new(TICK_RATE_MS), io::stdout());

    // The dialog is the first unit of work on the loop.
    app.schedule(AppAction::ShowDialog);
    let result = app.run().await;

    // Report errors
    if let Err(ref err) = result {
        eprintln!("Application error: {}", err);
    }

    result
}
