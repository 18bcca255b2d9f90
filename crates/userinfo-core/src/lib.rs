//! # userinfo-core
//!
//! Form model and dialog orchestration for the user information dialog.
//!
//! The crate is toolkit independent: it owns the six labeled fields, the
//! grid placement rules, and the runner that prints the submitted values.
//! A [`dialog::DialogPresenter`] implementation (the terminal one lives in
//! `userinfo-tui`) decides how the dialog is actually shown.
//!
//! ```rust,ignore
//! use userinfo_core::prelude::*;
//!
//! let mut runner = DialogRunner::new(presenter, std::io::stdout());
//! runner.run()?;
//! ```
//!
//! ## Modules
//!
//! - [`labels`]: the fixed, ordered field labels
//! - [`field`]: single-line input field
//! - [`layout`]: grid cell constraints
//! - [`panel`]: the form panel (label → field mapping)
//! - [`dialog`]: option dialog descriptor and presenter trait
//! - [`runner`]: dialog runner and selections output
//! - [`error`]: error types

pub use error::FormError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::dialog::{DialogOutcome, DialogPresenter, OptionDialog};
    pub use crate::error::FormError;
    pub use crate::field::InputField;
    pub use crate::labels::FieldLabel;
    pub use crate::layout::{CellConstraint, compute_cell_layout};
    pub use crate::panel::FormPanel;
    pub use crate::runner::{DialogRunner, Submission};
}

pub mod dialog;
pub mod error;
pub mod field;
pub mod labels;
pub mod layout;
pub mod panel;
pub mod runner;

/// Result type alias using [`FormError`].
pub type Result<T> = std::result::Result<T, FormError>;
