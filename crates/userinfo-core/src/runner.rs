//! Presents the form and prints what the user submitted.

use std::io::Write;

use crate::Result;
use crate::dialog::{DialogOutcome, DialogPresenter, OptionDialog};
use crate::labels::FieldLabel;
use crate::panel::FormPanel;

/// Header line written before the submitted values.
pub const SELECTIONS_HEADER: &str = "Selections:";

/// Width the labels are right-aligned to in the output.
pub const LABEL_WIDTH: usize = 12;

/// Values read from the form after Submit, in label order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    entries: Vec<(FieldLabel, String)>,
}

impl Submission {
    /// Read every label's value from the panel.
    pub fn from_panel(panel: &FormPanel) -> Self {
        let entries = FieldLabel::ALL
            .into_iter()
            .map(|label| (label, panel.field(label).text().to_string()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(FieldLabel, String)] {
        &self.entries
    }

    pub fn get(&self, label: FieldLabel) -> &str {
        &self.entries[label.index()].1
    }

    /// Write the header and one right-aligned line per label.
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", SELECTIONS_HEADER)?;
        for (label, value) in &self.entries {
            writeln!(out, "{:>width$}: {}", label, value, width = LABEL_WIDTH)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Builds a fresh form, shows it through a presenter and reports the result.
pub struct DialogRunner<P, W> {
    presenter: P,
    output: W,
    dialog: OptionDialog,
}

impl<P: DialogPresenter, W: Write> DialogRunner<P, W> {
    pub fn new(presenter: P, output: W) -> Self {
        Self {
            presenter,
            output,
            dialog: OptionDialog::user_information(),
        }
    }

    /// Show the dialog once.
    ///
    /// Returns the submission when the user chose Submit. Cancel and
    /// dismissal write nothing and return `Ok(None)`.
    pub fn run(&mut self) -> Result<Option<Submission>> {
        let mut panel = FormPanel::new();

        log::debug!("showing dialog '{}'", self.dialog.title);
        let outcome = self.presenter.show(&self.dialog, &mut panel)?;
        log::debug!("dialog closed with {:?}", outcome);

        if !outcome.is_submit() {
            return Ok(None);
        }

        let submission = Submission::from_panel(&panel);
        submission.write_to(&mut self.output)?;
        Ok(Some(submission))
    }

    pub fn dialog(&self) -> &OptionDialog {
        &self.dialog
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Give back the presenter and the output sink.
    pub fn into_parts(self) -> (P, W) {
        (self.presenter, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;

    /// Types the scripted inputs, then resolves with a fixed outcome.
    struct ScriptedPresenter {
        inputs: Vec<(&'static str, &'static str)>,
        outcome: DialogOutcome,
        shown: usize,
    }

    impl DialogPresenter for ScriptedPresenter {
        fn show(&mut self, dialog: &OptionDialog, panel: &mut FormPanel) -> Result<DialogOutcome> {
            assert_eq!(dialog.title, "Get User Information");
            self.shown += 1;
            for (label, text) in &self.inputs {
                let field = panel.field_mut(label.parse()?);
                for c in text.chars() {
                    field.insert_char(c);
                }
            }
            Ok(self.outcome)
        }
    }

    fn scripted(
        inputs: Vec<(&'static str, &'static str)>,
        outcome: DialogOutcome,
    ) -> DialogRunner<ScriptedPresenter, Vec<u8>> {
        let presenter = ScriptedPresenter {
            inputs,
            outcome,
            shown: 0,
        };
        DialogRunner::new(presenter, Vec::new())
    }

    fn output_of(runner: DialogRunner<ScriptedPresenter, Vec<u8>>) -> String {
        let (_, out) = runner.into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_submit_prints_selections() {
        let mut runner = scripted(
            vec![("Last Name", "Doe"), ("First Name", "Jane")],
            DialogOutcome::Selected(0),
        );
        let submission = runner.run().unwrap().unwrap();
        assert_eq!(submission.get(FieldLabel::LastName), "Doe");
        assert_eq!(submission.get(FieldLabel::City), "");

        let expected = "Selections:\n   Last Name: Doe\n  First Name: Jane\n     Address: \n        City: \n       State: \n         Zip: \n";
        assert_eq!(output_of(runner), expected);
    }

    #[test]
    fn test_cancel_prints_nothing() {
        let mut runner = scripted(
            vec![("Last Name", "Doe"), ("Zip", "12345")],
            DialogOutcome::Selected(1),
        );
        assert_eq!(runner.run().unwrap(), None);
        assert_eq!(output_of(runner), "");
    }

    #[test]
    fn test_close_prints_nothing() {
        let mut runner = scripted(vec![("City", "Springfield")], DialogOutcome::Closed);
        assert_eq!(runner.run().unwrap(), None);
        assert_eq!(output_of(runner), "");
    }

    #[test]
    fn test_each_run_starts_with_a_fresh_form() {
        let mut runner = scripted(vec![("State", "IL")], DialogOutcome::Selected(0));
        let first = runner.run().unwrap().unwrap();
        let second = runner.run().unwrap().unwrap();
        assert_eq!(first.get(FieldLabel::State), "IL");
        assert_eq!(second.get(FieldLabel::State), "IL");
        let (presenter, _) = runner.into_parts();
        assert_eq!(presenter.shown, 2);
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let mut runner = scripted(vec![("Address", " 1 Main St ")], DialogOutcome::Selected(0));
        runner.run().unwrap();
        assert!(output_of(runner).contains("     Address:  1 Main St \n"));
    }

    #[test]
    fn test_presenter_error_propagates() {
        struct Failing;
        impl DialogPresenter for Failing {
            fn show(&mut self, _: &OptionDialog, _: &mut FormPanel) -> Result<DialogOutcome> {
                Err(FormError::Presentation("no terminal".to_string()))
            }
        }

        let mut runner = DialogRunner::new(Failing, Vec::new());
        let err = runner.run().unwrap_err();
        assert!(matches!(err, FormError::Presentation(_)));
        assert!(runner.output().is_empty());
    }

    #[test]
    fn test_runner_uses_user_information_dialog() {
        let runner = scripted(vec![], DialogOutcome::Closed);
        assert_eq!(runner.dialog(), &OptionDialog::user_information());
    }
}
