//! Layout constants and grid geometry for userinfo-tui.
//!
//! Centralizes the dialog dimensions and turns the form's cell constraints
//! into terminal rectangles.

use ratatui::layout::Rect;
use userinfo_core::layout::{Anchor, CellConstraint};

/// Option dialog dimensions.
pub mod dialog {
    /// Share of the terminal width the dialog takes.
    pub const WIDTH_RATIO: f32 = 0.5;

    /// Dialog width bounds in columns.
    pub const MIN_WIDTH: u16 = 44;
    pub const MAX_WIDTH: u16 = 70;

    /// Height of the button row.
    pub const BUTTON_ROW_HEIGHT: u16 = 1;

    /// Blank columns between two buttons.
    pub const BUTTON_GAP: u16 = 2;
}

/// Form grid conversion factors.
pub mod grid {
    /// Vertical inset units that make up one terminal row.
    ///
    /// The label/field insets are 3 above and 3 below, which adds one spacer
    /// row under every form row.
    pub const INSET_UNITS_PER_ROW: u16 = 6;

    /// Height of a label or field widget.
    pub const WIDGET_HEIGHT: u16 = 1;
}

/// Height of a grid row whose cell has this constraint.
pub fn row_height(constraint: &CellConstraint) -> u16 {
    grid::WIDGET_HEIGHT + constraint.insets.vertical() / grid::INSET_UNITS_PER_ROW
}

/// Split `available` columns between grid columns.
///
/// Every column first gets its preferred width; what is left over is shared
/// in proportion to the column weights, the last column absorbing rounding.
/// When space is short, earlier columns keep their preferred width first.
pub fn column_widths(available: u16, preferred: &[u16], weights: &[f32]) -> Vec<u16> {
    let total_preferred: u16 = preferred.iter().sum();

    if available <= total_preferred {
        let mut remaining = available;
        return preferred
            .iter()
            .map(|&want| {
                let width = want.min(remaining);
                remaining -= width;
                width
            })
            .collect();
    }

    let extra = available - total_preferred;
    let total_weight: f32 = weights.iter().sum();
    let mut widths: Vec<u16> = preferred
        .iter()
        .zip(weights)
        .map(|(&want, &weight)| {
            let share = if total_weight > 0.0 {
                (extra as f32 * weight / total_weight).floor() as u16
            } else {
                0
            };
            want + share
        })
        .collect();

    let assigned: u16 = widths.iter().sum();
    if let Some(last) = widths.last_mut() {
        *last += available - assigned;
    }
    widths
}

/// Rectangle a widget occupies inside its grid cell.
///
/// Insets shrink the cell first (horizontal insets in columns, vertical
/// insets in [`grid::INSET_UNITS_PER_ROW`] units). The fill axes then decide
/// whether the widget stretches; otherwise it keeps its preferred width and
/// sits at the anchor edge.
pub fn place_in_cell(cell: Rect, constraint: &CellConstraint, preferred_width: u16) -> Rect {
    let insets = constraint.insets;
    let left = insets.left.min(cell.width);
    let right = insets.right.min(cell.width - left);
    let top = (insets.top / grid::INSET_UNITS_PER_ROW).min(cell.height);
    let vertical = (insets.vertical() / grid::INSET_UNITS_PER_ROW).min(cell.height);

    let inner = Rect::new(
        cell.x + left,
        cell.y + top,
        cell.width - left - right,
        cell.height - vertical,
    );

    let width = if constraint.fill.horizontal() {
        inner.width
    } else {
        preferred_width.min(inner.width)
    };
    let height = if constraint.fill.vertical() {
        inner.height
    } else {
        grid::WIDGET_HEIGHT.min(inner.height)
    };

    let x = match constraint.anchor {
        Anchor::LineStart => inner.x,
        Anchor::LineEnd => inner.x + inner.width - width,
    };
    let y = inner.y + (inner.height - height) / 2;

    Rect::new(x, y, width, height)
}

/// Centered rectangle of at most `width` x `height` inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use userinfo_core::layout::{Fill, compute_cell_layout};

    #[test]
    fn test_row_height_adds_spacer() {
        assert_eq!(row_height(&compute_cell_layout(0, 0)), 2);
        assert_eq!(row_height(&compute_cell_layout(1, 5)), 2);
    }

    #[test]
    fn test_column_widths_share_extra_equally() {
        assert_eq!(column_widths(40, &[20, 14], &[1.0, 1.0]), vec![23, 17]);
    }

    #[test]
    fn test_column_widths_rounding_goes_last() {
        let widths = column_widths(41, &[20, 14], &[1.0, 1.0]);
        assert_eq!(widths, vec![23, 18]);
        assert_eq!(widths.iter().sum::<u16>(), 41);
    }

    #[test]
    fn test_column_widths_when_short() {
        assert_eq!(column_widths(25, &[20, 14], &[1.0, 1.0]), vec![20, 5]);
        assert_eq!(column_widths(10, &[20, 14], &[1.0, 1.0]), vec![10, 0]);
    }

    #[test]
    fn test_column_widths_zero_weights() {
        assert_eq!(column_widths(40, &[20, 14], &[0.0, 0.0]), vec![20, 20]);
    }

    #[test]
    fn test_label_fills_cell_minus_insets() {
        let cell = Rect::new(10, 4, 20, 2);
        let placed = place_in_cell(cell, &compute_cell_layout(0, 0), 9);
        assert_eq!(placed, Rect::new(13, 4, 9, 1));
    }

    #[test]
    fn test_field_stretches_horizontally() {
        let cell = Rect::new(30, 4, 20, 2);
        let placed = place_in_cell(cell, &compute_cell_layout(1, 0), 8);
        assert_eq!(placed, Rect::new(33, 4, 14, 1));
    }

    #[test]
    fn test_unfilled_widget_sits_at_anchor() {
        let mut constraint = compute_cell_layout(1, 0);
        constraint.fill = Fill::None;
        let placed = place_in_cell(Rect::new(0, 0, 20, 2), &constraint, 8);
        assert_eq!(placed, Rect::new(9, 0, 8, 1));

        constraint.anchor = Anchor::LineStart;
        let placed = place_in_cell(Rect::new(0, 0, 20, 2), &constraint, 8);
        assert_eq!(placed, Rect::new(3, 0, 8, 1));
    }

    #[test]
    fn test_tiny_cell_does_not_underflow() {
        let placed = place_in_cell(Rect::new(0, 0, 4, 0), &compute_cell_layout(0, 0), 9);
        assert_eq!(placed.width, 0);
        assert_eq!(placed.height, 0);
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered(area, 40, 10), Rect::new(20, 7, 40, 10));
        assert_eq!(centered(area, 100, 30), area);
    }
}
