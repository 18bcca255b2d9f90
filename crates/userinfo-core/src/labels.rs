//! The fixed, ordered set of field labels.
//!
//! Order matters twice: it is the row index in the form grid and the order
//! in which submitted values are printed.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// One of the six labels naming a collected datum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldLabel {
    LastName,
    FirstName,
    Address,
    City,
    State,
    Zip,
}

impl FieldLabel {
    /// All labels in display and output order.
    pub const ALL: [FieldLabel; 6] = [
        FieldLabel::LastName,
        FieldLabel::FirstName,
        FieldLabel::Address,
        FieldLabel::City,
        FieldLabel::State,
        FieldLabel::Zip,
    ];

    /// Label text as shown in the form and in the output.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldLabel::LastName => "Last Name",
            FieldLabel::FirstName => "First Name",
            FieldLabel::Address => "Address",
            FieldLabel::City => "City",
            FieldLabel::State => "State",
            FieldLabel::Zip => "Zip",
        }
    }

    /// Position in [`FieldLabel::ALL`], which is also the grid row.
    pub fn index(self) -> usize {
        match self {
            FieldLabel::LastName => 0,
            FieldLabel::FirstName => 1,
            FieldLabel::Address => 2,
            FieldLabel::City => 3,
            FieldLabel::State => 4,
            FieldLabel::Zip => 5,
        }
    }

    /// Label at a row, if the row exists.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working for `{:>12}`.
        f.pad(self.as_str())
    }
}

impl FromStr for FieldLabel {
    type Err = FormError;

    /// Exact, case-sensitive match against the label text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| FormError::UnknownLabel(s.to_string()))
    }
}
