//! The form panel: one input field per label, arranged in a two-column grid.

use indexmap::IndexMap;

use crate::Result;
use crate::field::{FIELD_COLUMNS, InputField};
use crate::labels::FieldLabel;
use crate::layout::{CellConstraint, FIELD_COLUMN, LABEL_COLUMN, compute_cell_layout};

/// Title drawn on the panel border.
pub const PANEL_TITLE: &str = "Enter User Information";

/// One grid row: a label and the constraints for its two cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormRow {
    pub label: FieldLabel,
    pub label_cell: CellConstraint,
    pub field_cell: CellConstraint,
}

/// Owns the label → field mapping and the grid placement of each row.
#[derive(Debug, Clone)]
pub struct FormPanel {
    title: &'static str,
    fields: IndexMap<FieldLabel, InputField>,
    rows: Vec<FormRow>,
}

impl Default for FormPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPanel {
    /// Build a panel with one empty field per label, in label order.
    pub fn new() -> Self {
        let mut fields = IndexMap::with_capacity(FieldLabel::ALL.len());
        let mut rows = Vec::with_capacity(FieldLabel::ALL.len());

        for (row, label) in FieldLabel::ALL.into_iter().enumerate() {
            fields.insert(label, InputField::new(FIELD_COLUMNS));
            rows.push(FormRow {
                label,
                label_cell: compute_cell_layout(LABEL_COLUMN, row),
                field_cell: compute_cell_layout(FIELD_COLUMN, row),
            });
        }

        log::debug!("form panel built with {} fields", fields.len());

        Self {
            title: PANEL_TITLE,
            fields,
            rows,
        }
    }

    pub fn title(&self) -> &str {
        self.title
    }

    /// Number of label → field entries.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Grid rows in display order.
    pub fn rows(&self) -> &[FormRow] {
        &self.rows
    }

    /// Current text of the field named `label`.
    ///
    /// Fails with [`crate::FormError::UnknownLabel`] for any text that is not one of
    /// the six labels; there is no empty-string fallback.
    pub fn value(&self, label: &str) -> Result<&str> {
        self.lookup(label).map(InputField::text)
    }

    /// Replace the text of the field named `label`.
    pub fn set_value(&mut self, label: &str, text: impl Into<String>) -> Result<()> {
        let label: FieldLabel = label.parse()?;
        self.field_mut(label).set_text(text);
        Ok(())
    }

    pub fn field(&self, label: FieldLabel) -> &InputField {
        &self.fields[&label]
    }

    pub fn field_mut(&mut self, label: FieldLabel) -> &mut InputField {
        &mut self.fields[&label]
    }

    /// Label and current text for every field, in label order.
    pub fn values(&self) -> impl Iterator<Item = (FieldLabel, &str)> {
        self.fields.iter().map(|(label, field)| (*label, field.text()))
    }

    /// Strict lookup of a field by its label text.
    pub fn lookup(&self, label: &str) -> Result<&InputField> {
        let label: FieldLabel = label.parse()?;
        Ok(self.field(label))
    }
}
