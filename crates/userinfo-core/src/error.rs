use thiserror::Error;

/// Errors raised by the form model and the dialog runner.
#[derive(Error, Debug)]
pub enum FormError {
    /// A label outside the fixed label set was used for a lookup.
    #[error("Unknown field label: {0}")]
    UnknownLabel(String),

    /// Writing the submitted selections failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// The presenter could not show the dialog.
    #[error("Presentation error: {0}")]
    Presentation(String),
}

impl FormError {
    /// Whether this error is the strict label-lookup failure.
    pub fn is_lookup(&self) -> bool {
        matches!(self, FormError::UnknownLabel(_))
    }
}
