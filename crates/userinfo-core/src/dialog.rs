//! Modal option dialog descriptor and the presenter seam.

use crate::Result;
use crate::panel::FormPanel;

/// Title of the dialog window.
pub const DIALOG_TITLE: &str = "Get User Information";

/// Options offered to the user, in button order.
pub const DIALOG_OPTIONS: [&str; 2] = ["Submit", "Cancel"];

/// Index of the option that confirms the form.
pub const SUBMIT_OPTION: usize = 0;

/// Button set requested from the presenter.
///
/// `Default` means the presenter shows exactly the custom options it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionType {
    #[default]
    Default,
    YesNo,
    YesNoCancel,
    OkCancel,
}

/// Message style, which decides decoration such as an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageType {
    Error,
    Information,
    Warning,
    Question,
    #[default]
    Plain,
}

/// Everything a presenter needs to show the option dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDialog {
    pub title: &'static str,
    pub option_type: OptionType,
    pub message_type: MessageType,
    /// Icon glyph; `None` draws no icon.
    pub icon: Option<&'static str>,
    pub options: Vec<&'static str>,
    /// Option focused when the dialog opens, also triggered by Enter in a field.
    pub initial_option: usize,
}

impl Default for OptionDialog {
    fn default() -> Self {
        Self::user_information()
    }
}

impl OptionDialog {
    /// The "Get User Information" dialog with Submit/Cancel.
    pub fn user_information() -> Self {
        Self {
            title: DIALOG_TITLE,
            option_type: OptionType::Default,
            message_type: MessageType::Plain,
            icon: None,
            options: DIALOG_OPTIONS.to_vec(),
            initial_option: SUBMIT_OPTION,
        }
    }

    /// Label of the option at `index`.
    pub fn option(&self, index: usize) -> Option<&'static str> {
        self.options.get(index).copied()
    }
}

/// How the user left the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// An option button was chosen, by index.
    Selected(usize),
    /// The dialog was dismissed without choosing (Esc, window close).
    Closed,
}

impl DialogOutcome {
    /// Only the Submit option confirms; Cancel and dismissal both abandon.
    pub fn is_submit(self) -> bool {
        self == DialogOutcome::Selected(SUBMIT_OPTION)
    }
}

/// Shows a form inside a modal option dialog.
///
/// Implementations block until the user chooses an option or dismisses the
/// dialog. The panel is edited in place while the dialog is visible.
pub trait DialogPresenter {
    fn show(&mut self, dialog: &OptionDialog, panel: &mut FormPanel) -> Result<DialogOutcome>;
}
