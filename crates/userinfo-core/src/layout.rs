//! Grid cell constraints for the two-column form.
//!
//! Column 0 holds labels, column 1 holds input fields. Constraints are pure
//! values computed from the cell coordinates; nothing here is stored.

/// Where a component sits inside its cell when it does not fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Left edge, vertically centered.
    LineStart,
    /// Right edge, vertically centered.
    LineEnd,
}

/// Which axes a component stretches along to fill its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    None,
    Horizontal,
    Vertical,
    Both,
}

impl Fill {
    pub fn horizontal(self) -> bool {
        matches!(self, Fill::Horizontal | Fill::Both)
    }

    pub fn vertical(self) -> bool {
        matches!(self, Fill::Vertical | Fill::Both)
    }
}

/// Empty space around a component inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insets {
    pub top: u16,
    pub left: u16,
    pub bottom: u16,
    pub right: u16,
}

impl Insets {
    pub const fn new(top: u16, left: u16, bottom: u16, right: u16) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn horizontal(&self) -> u16 {
        self.left + self.right
    }

    pub fn vertical(&self) -> u16 {
        self.top + self.bottom
    }
}

/// Placement rules for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellConstraint {
    pub column: usize,
    pub row: usize,
    pub anchor: Anchor,
    pub fill: Fill,
    pub insets: Insets,
    pub weight_x: f32,
    pub weight_y: f32,
}

/// Column index holding the labels.
pub const LABEL_COLUMN: usize = 0;

/// Column index holding the input fields.
pub const FIELD_COLUMN: usize = 1;

const LABEL_INSETS: Insets = Insets::new(3, 3, 3, 8);
const FIELD_INSETS: Insets = Insets::new(3, 3, 3, 3);

/// Constraint for the cell at `(column, row)`.
///
/// Every column other than the label column is treated as a field column.
pub fn compute_cell_layout(column: usize, row: usize) -> CellConstraint {
    let (anchor, fill, insets) = if column == LABEL_COLUMN {
        (Anchor::LineStart, Fill::Both, LABEL_INSETS)
    } else {
        (Anchor::LineEnd, Fill::Horizontal, FIELD_INSETS)
    };

    CellConstraint {
        column,
        row,
        anchor,
        fill,
        insets,
        weight_x: 1.0,
        weight_y: 1.0,
    }
}
