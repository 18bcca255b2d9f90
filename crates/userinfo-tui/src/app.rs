//! Application state and the UI action loop.
//!
//! Work reaches the loop as [`AppAction`]s on an unbounded channel. Each
//! action runs to completion before the next one is taken, so the dialog
//! scheduled at startup blocks the loop until it is dismissed.

use std::io::Write;

use tokio::sync::mpsc;
use userinfo_core::dialog::DialogPresenter;
use userinfo_core::runner::DialogRunner;

use crate::action::AppAction;
use crate::error::TuiResult;

/// The main application state.
pub struct App<P, W> {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Shows the dialog and prints the selections
    runner: DialogRunner<P, W>,
    /// Action sender, used to schedule work on the loop
    action_tx: mpsc::UnboundedSender<AppAction>,
    /// Action receiver for processing
    action_rx: mpsc::UnboundedReceiver<AppAction>,
}

impl<P: DialogPresenter, W: Write> App<P, W> {
    /// Create a new application instance.
    pub fn new(presenter: P, output: W) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            runner: DialogRunner::new(presenter, output),
            action_tx,
            action_rx,
        }
    }

    /// Queue an action; it runs after everything already queued.
    pub fn schedule(&self, action: AppAction) {
        let _ = self.action_tx.send(action);
    }

    /// Run the action loop until a `Quit` action is processed.
    pub async fn run(&mut self) -> TuiResult<()> {
        while !self.should_quit {
            match self.action_rx.recv().await {
                Some(action) => self.handle_action(action)?,
                None => break,
            }
        }
        Ok(())
    }

    fn handle_action(&mut self, action: AppAction) -> TuiResult<()> {
        log::debug!("handling action {:?}", action);
        match action {
            AppAction::ShowDialog => {
                match self.runner.run()? {
                    Some(_) => log::info!("user information submitted"),
                    None => log::info!("user information dialog dismissed"),
                }
                self.schedule(AppAction::Quit);
            }
            AppAction::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.runner.into_parts().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::OptionDialogView;
    use crate::event::Event;
    use crate::presenter::drive;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;
    use std::io;
    use userinfo_core::FormError;
    use userinfo_core::dialog::{DialogOutcome, OptionDialog};
    use userinfo_core::panel::FormPanel;

    /// Replays keystrokes through the real dialog view, without a terminal.
    struct KeyScript {
        keys: VecDeque<KeyEvent>,
    }

    impl KeyScript {
        fn new(codes: Vec<KeyCode>) -> Self {
            Self {
                keys: codes
                    .into_iter()
                    .map(|code| KeyEvent::new(code, KeyModifiers::NONE))
                    .collect(),
            }
        }

        fn typing(text: &str) -> Vec<KeyCode> {
            text.chars().map(KeyCode::Char).collect()
        }
    }

    impl DialogPresenter for KeyScript {
        fn show(
            &mut self,
            dialog: &OptionDialog,
            panel: &mut FormPanel,
        ) -> userinfo_core::Result<DialogOutcome> {
            let mut view = OptionDialogView::new(dialog, panel);
            let keys = &mut self.keys;
            drive(
                &mut view,
                |_| Ok(()),
                || {
                    keys.pop_front()
                        .map(Event::Key)
                        .ok_or_else(|| io::Error::other("key script exhausted"))
                },
            )
            .map_err(|e| FormError::Presentation(e.to_string()))
        }
    }

    fn submit_doe_jane() -> Vec<KeyCode> {
        let mut codes = vec![KeyCode::Tab, KeyCode::Tab];
        codes.extend(KeyScript::typing("Doe"));
        codes.push(KeyCode::Tab);
        codes.extend(KeyScript::typing("Jane"));
        codes.push(KeyCode::Enter);
        codes
    }

    #[tokio::test]
    async fn test_scheduled_dialog_submits_and_prints() {
        let mut app = App::new(KeyScript::new(submit_doe_jane()), Vec::new());
        app.schedule(AppAction::ShowDialog);
        app.run().await.unwrap();

        assert!(app.should_quit);
        let output = String::from_utf8(app.into_output()).unwrap();
        assert_eq!(
            output,
            "Selections:\n   Last Name: Doe\n  First Name: Jane\n     Address: \n        City: \n       State: \n         Zip: \n"
        );
    }

    #[tokio::test]
    async fn test_cancel_prints_nothing() {
        let mut codes = vec![KeyCode::Tab, KeyCode::Tab];
        codes.extend(KeyScript::typing("Doe"));
        codes.extend([KeyCode::BackTab, KeyCode::Enter]);

        let mut app = App::new(KeyScript::new(codes), Vec::new());
        app.schedule(AppAction::ShowDialog);
        app.run().await.unwrap();

        assert!(app.into_output().is_empty());
    }

    #[tokio::test]
    async fn test_escape_prints_nothing() {
        let mut app = App::new(
            KeyScript::new(vec![
                KeyCode::Tab,
                KeyCode::Tab,
                KeyCode::Char('x'),
                KeyCode::Esc,
            ]),
            Vec::new(),
        );
        app.schedule(AppAction::ShowDialog);
        app.run().await.unwrap();

        assert!(app.into_output().is_empty());
    }

    #[test]
    fn test_nothing_runs_before_the_loop() {
        let app = App::new(KeyScript::new(vec![KeyCode::Enter]), Vec::new());
        app.schedule(AppAction::ShowDialog);
        assert!(!app.should_quit);
        assert!(app.into_output().is_empty());
    }

    #[tokio::test]
    async fn test_actions_run_in_order() {
        let mut codes = submit_doe_jane();
        codes.push(KeyCode::Esc);
        let mut app = App::new(KeyScript::new(codes), Vec::new());
        app.schedule(AppAction::ShowDialog);
        app.schedule(AppAction::ShowDialog);
        app.run().await.unwrap();

        let output = String::from_utf8(app.into_output()).unwrap();
        assert_eq!(output.matches("Selections:").count(), 1);
    }

    #[tokio::test]
    async fn test_quit_first_skips_dialog() {
        let mut app = App::new(KeyScript::new(vec![]), Vec::new());
        app.schedule(AppAction::Quit);
        app.schedule(AppAction::ShowDialog);
        app.run().await.unwrap();
        assert!(app.into_output().is_empty());
    }

    #[tokio::test]
    async fn test_presenter_failure_stops_the_loop() {
        let mut app = App::new(KeyScript::new(vec![]), Vec::new());
        app.schedule(AppAction::ShowDialog);
        let err = app.run().await.unwrap_err();
        assert!(err.to_string().contains("key script exhausted"));
    }
}
