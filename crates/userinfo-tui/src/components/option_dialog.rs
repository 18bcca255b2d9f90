//! Modal option dialog wrapping the form panel.
//!
//! Owns focus and key handling; the form values live in the borrowed
//! [`FormPanel`] so the caller reads them after the dialog resolves.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;
use userinfo_core::dialog::{DialogOutcome, OptionDialog};
use userinfo_core::labels::FieldLabel;
use userinfo_core::panel::FormPanel;

use super::styles::{
    TEXT_DIM, TEXT_KEY, button_style, default_button_style, message_border_style,
    modal_title_style, selected_style,
};
use super::{Component, FormView};
use crate::layout::{centered, dialog};

/// What currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldLabel),
    /// Option button, by index.
    Button(usize),
}

/// Interactive state of the option dialog.
pub struct OptionDialogView<'a> {
    dialog: &'a OptionDialog,
    panel: &'a mut FormPanel,
    focus: Focus,
    outcome: Option<DialogOutcome>,
}

impl<'a> OptionDialogView<'a> {
    /// Open the dialog with focus on the initial option.
    pub fn new(dialog: &'a OptionDialog, panel: &'a mut FormPanel) -> Self {
        let focus = if dialog.options.is_empty() {
            Focus::Field(FieldLabel::ALL[0])
        } else {
            Focus::Button(dialog.initial_option.min(dialog.options.len() - 1))
        };
        Self {
            dialog,
            panel,
            focus,
            outcome: None,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Set once the user picked an option or dismissed the dialog.
    pub fn outcome(&self) -> Option<DialogOutcome> {
        self.outcome
    }

    /// Width and height of the whole dialog, border included.
    pub fn preferred_size(&self, area: Rect) -> (u16, u16) {
        let (form_width, form_height) = FormView::preferred_size(self.panel);
        let width = ((area.width as f32 * dialog::WIDTH_RATIO) as u16)
            .clamp(dialog::MIN_WIDTH, dialog::MAX_WIDTH)
            .max(form_width + 4);
        // Border, form, one blank row, buttons.
        let height = 2 + form_height + 1 + dialog::BUTTON_ROW_HEIGHT;
        (width, height)
    }

    fn focus_order(&self) -> Vec<Focus> {
        FieldLabel::ALL
            .into_iter()
            .map(Focus::Field)
            .chain((0..self.dialog.options.len()).map(Focus::Button))
            .collect()
    }

    fn move_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    fn resolve(&mut self, outcome: DialogOutcome) {
        log::debug!("option dialog resolved: {:?}", outcome);
        self.outcome = Some(outcome);
    }

    /// Editing keys for the focused field.
    fn handle_field_key(&mut self, label: FieldLabel, key: KeyEvent) -> bool {
        let field = self.panel.field_mut(label);
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                field.insert_char(c);
            }
            KeyCode::Backspace => field.backspace(),
            KeyCode::Delete => field.delete(),
            KeyCode::Left => field.move_left(),
            KeyCode::Right => field.move_right(),
            KeyCode::Home => field.move_home(),
            KeyCode::End => field.move_end(),
            _ => return false,
        }
        true
    }

    /// Keys for the focused option button.
    fn handle_button_key(&mut self, index: usize, key: KeyEvent) -> bool {
        let last = self.dialog.options.len().saturating_sub(1);
        match key.code {
            KeyCode::Left => self.focus = Focus::Button(index.saturating_sub(1)),
            KeyCode::Right => self.focus = Focus::Button((index + 1).min(last)),
            KeyCode::Char(' ') => self.resolve(DialogOutcome::Selected(index)),
            _ => return false,
        }
        true
    }

    fn render_buttons(&self, frame: &mut Frame, area: Rect) {
        let gap = " ".repeat(dialog::BUTTON_GAP as usize);
        let mut spans = Vec::new();
        for (i, option) in self.dialog.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(gap.clone()));
            }
            let style = match self.focus {
                Focus::Button(focused) if focused == i => selected_style(),
                Focus::Field(_) if i == self.dialog.initial_option => default_button_style(),
                _ => button_style(),
            };
            spans.push(Span::styled(format!("[ {} ]", option), style));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn render_hint(&self, frame: &mut Frame, dialog_area: Rect) {
        if dialog_area.height <= 2 {
            return;
        }
        let hint = Line::from(vec![
            Span::styled("Tab", TEXT_KEY),
            Span::styled(": Next  ", TEXT_DIM),
            Span::styled("Enter", TEXT_KEY),
            Span::styled(": Select  ", TEXT_DIM),
            Span::styled("Esc", TEXT_KEY),
            Span::styled(": Cancel", TEXT_DIM),
        ]);
        let hint_width = (hint.width() as u16).min(dialog_area.width.saturating_sub(2));
        let hint_area = Rect::new(
            dialog_area.x + 1,
            dialog_area.y + dialog_area.height - 1,
            hint_width,
            1,
        );
        frame.render_widget(Paragraph::new(hint), hint_area);
    }

    fn title(&self) -> String {
        match self.dialog.icon {
            Some(icon) => format!(" {} {} ", icon, self.dialog.title),
            None => format!(" {} ", self.dialog.title),
        }
    }
}

impl Component for OptionDialogView<'_> {
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let (width, height) = self.preferred_size(area);
        let dialog_area = centered(area, width, height);

        frame.render_widget(Clear, dialog_area);
        let block = Block::default()
            .title(self.title())
            .title_style(modal_title_style())
            .borders(Borders::ALL)
            .border_style(message_border_style(self.dialog.message_type));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let (_, form_height) = FormView::preferred_size(self.panel);
        let form_height = form_height.min(inner.height);
        let form_area = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            form_height,
        );
        let focused_field = match self.focus() {
            Focus::Field(label) if focused => Some(label),
            _ => None,
        };
        FormView::render(frame, form_area, self.panel, focused_field);

        let buttons_y = inner.y + form_height + 1;
        if buttons_y < inner.bottom() {
            let buttons_area = Rect::new(
                inner.x,
                buttons_y,
                inner.width,
                dialog::BUTTON_ROW_HEIGHT.min(inner.bottom() - buttons_y),
            );
            self.render_buttons(frame, buttons_area);
        }

        if dialog_area.width > self.title().width() as u16 {
            self.render_hint(frame, dialog_area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.outcome.is_some() {
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.resolve(DialogOutcome::Closed);
            return true;
        }

        match key.code {
            KeyCode::Esc => self.resolve(DialogOutcome::Closed),
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Enter => {
                let chosen = match self.focus {
                    Focus::Button(index) => index,
                    Focus::Field(_) => self.dialog.initial_option,
                };
                self.resolve(DialogOutcome::Selected(chosen));
            }
            _ => {
                return match self.focus {
                    Focus::Field(label) => self.handle_field_key(label, key),
                    Focus::Button(index) => self.handle_button_key(index, key),
                };
            }
        }
        true
    }
}
