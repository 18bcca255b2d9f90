//! Form panel rendering.
//!
//! Draws the titled panel border and the label/field grid. Cell placement
//! comes from the constraints stored on each form row.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;
use userinfo_core::labels::FieldLabel;
use userinfo_core::panel::{FormPanel, FormRow};

use super::styles::{border_style, input_text_style, label_style, modal_title_style};
use crate::layout::{column_widths, place_in_cell, row_height};

/// Stateless renderer for a [`FormPanel`].
pub struct FormView;

impl FormView {
    /// Width and height the panel needs, border included.
    pub fn preferred_size(panel: &FormPanel) -> (u16, u16) {
        let [label_width, field_width] = Self::preferred_columns(panel);
        let height: u16 = panel.rows().iter().map(Self::height_of).sum();
        (label_width + field_width + 2, height + 2)
    }

    /// Render the panel. `focused` names the field holding the cursor.
    pub fn render(frame: &mut Frame, area: Rect, panel: &FormPanel, focused: Option<FieldLabel>) {
        let block = Block::default()
            .title(format!(" {} ", panel.title()))
            .title_style(modal_title_style())
            .borders(Borders::ALL)
            .border_style(border_style(focused.is_some()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(first) = panel.rows().first() else {
            return;
        };
        let widths = column_widths(
            inner.width,
            &Self::preferred_columns(panel),
            &[first.label_cell.weight_x, first.field_cell.weight_x],
        );

        let mut y = inner.y;
        for row in panel.rows() {
            if y >= inner.bottom() {
                break;
            }
            let height = Self::height_of(row).min(inner.bottom() - y);

            let label_cell = Rect::new(inner.x, y, widths[0], height);
            let label_width = row.label.as_str().width() as u16;
            let label_area = place_in_cell(label_cell, &row.label_cell, label_width);
            frame.render_widget(
                Paragraph::new(row.label.as_str()).style(label_style()),
                label_area,
            );

            let field = panel.field(row.label);
            let field_cell = Rect::new(inner.x + widths[0], y, widths[1], height);
            let field_area = place_in_cell(field_cell, &row.field_cell, field.columns());
            let is_focused = focused == Some(row.label);
            let (visible, cursor_col) = field.visible_window(field_area.width as usize);
            frame.render_widget(
                Paragraph::new(visible).style(input_text_style(is_focused)),
                field_area,
            );

            if is_focused && field_area.width > 0 && field_area.height > 0 {
                frame.set_cursor_position((field_area.x + cursor_col as u16, field_area.y));
            }

            y += height;
        }
    }

    /// Preferred widths of the label and field columns, insets included.
    fn preferred_columns(panel: &FormPanel) -> [u16; 2] {
        panel.rows().iter().fold([0, 0], |[label_w, field_w], row| {
            let label = row.label.as_str().width() as u16 + row.label_cell.insets.horizontal();
            let field = panel.field(row.label).columns() + row.field_cell.insets.horizontal();
            [label_w.max(label), field_w.max(field)]
        })
    }

    fn height_of(row: &FormRow) -> u16 {
        row_height(&row.label_cell).max(row_height(&row.field_cell))
    }
}
