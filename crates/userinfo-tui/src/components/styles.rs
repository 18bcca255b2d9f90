//! Shared style definitions for the dialog components.

use ratatui::style::{Color, Modifier, Style};
use userinfo_core::dialog::MessageType;

// === Border Styles ===

/// Border style for focused components.
pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Border style for unfocused components.
pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

/// Get border style based on focus state.
#[inline]
pub fn border_style(focused: bool) -> Style {
    if focused {
        BORDER_FOCUSED
    } else {
        BORDER_UNFOCUSED
    }
}

/// Dialog border color for a message type. Plain dialogs stay neutral.
pub fn message_border_style(message_type: MessageType) -> Style {
    match message_type {
        MessageType::Error => Style::new().fg(Color::Red),
        MessageType::Warning => Style::new().fg(Color::Yellow),
        MessageType::Information | MessageType::Question => Style::new().fg(Color::Blue),
        MessageType::Plain => Style::new().fg(Color::White),
    }
}

// === Text Styles ===

/// Style for dimmed/hint text.
pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);

/// Style for hint key names.
pub const TEXT_KEY: Style = Style::new().fg(Color::Yellow);

// === Modal Styles ===

/// Style for modal titles.
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the focused button.
pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the default button while focus is elsewhere.
pub fn default_button_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the remaining buttons.
pub fn button_style() -> Style {
    Style::default().fg(Color::Gray)
}

// === Input Styles ===

/// Style for label text.
pub fn label_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for input text.
pub fn input_text_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED)
    }
}
