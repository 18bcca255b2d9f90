//! Error types for userinfo-tui.

use std::io;
use thiserror::Error;
use userinfo_core::FormError;

/// TUI-specific error type.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal I/O error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Form or dialog error.
    #[error("Form error: {0}")]
    Form(#[from] FormError),
}

/// Result type alias for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

impl From<TuiError> for FormError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Form(inner) => inner,
            TuiError::Terminal(io) => FormError::Presentation(io.to_string()),
        }
    }
}
