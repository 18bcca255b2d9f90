//! Single-line editable text field.

use unicode_width::UnicodeWidthChar;

/// Preferred width of every input field, in character columns.
pub const FIELD_COLUMNS: u16 = 8;

/// A single-line text value edited by keystrokes.
///
/// The cursor is a char index into `text`, so multi-byte input never splits
/// a code point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    text: String,
    cursor: usize,
    columns: u16,
}

impl InputField {
    pub fn new(columns: u16) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            columns,
        }
    }

    /// Current text, verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Preferred width in character columns.
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Cursor position as a char index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole value and park the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// The part of the text that fits in `width` display columns while
    /// keeping the cursor visible, plus the cursor column inside it.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let chars: Vec<char> = self.text.chars().collect();
        let char_width = |c: &char| c.width().unwrap_or(0);

        // Leave one column for the cursor itself.
        let mut start = 0;
        while start < self.cursor
            && chars[start..self.cursor].iter().map(char_width).sum::<usize>() >= width
        {
            start += 1;
        }

        let mut used = 0;
        let mut visible = String::new();
        for c in &chars[start..] {
            let w = char_width(c);
            if used + w > width {
                break;
            }
            used += w;
            visible.push(*c);
        }

        let cursor_col = chars[start..self.cursor].iter().map(char_width).sum();
        (visible, cursor_col)
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputField {
        let mut field = InputField::new(FIELD_COLUMNS);
        for c in s.chars() {
            field.insert_char(c);
        }
        field
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = InputField::new(FIELD_COLUMNS);
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor(), 0);
        assert_eq!(field.columns(), 8);
    }

    #[test]
    fn test_typing_keeps_text_verbatim() {
        let field = typed("  Jane  Doe ");
        assert_eq!(field.text(), "  Jane  Doe ");
        assert_eq!(field.cursor(), 12);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut field = typed("Jne");
        field.move_left();
        field.move_left();
        field.insert_char('a');
        assert_eq!(field.text(), "Jane");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut field = typed("ab");
        field.insert_char('\n');
        field.insert_char('\t');
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = typed("Zürich");
        field.backspace();
        assert_eq!(field.text(), "Züric");

        field.move_home();
        field.move_right();
        field.delete();
        assert_eq!(field.text(), "Zric");

        field.move_home();
        field.backspace();
        assert_eq!(field.text(), "Zric");

        field.move_end();
        field.delete();
        assert_eq!(field.text(), "Zric");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut field = typed("ab");
        field.move_right();
        assert_eq!(field.cursor(), 2);
        field.move_home();
        field.move_left();
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_set_text_and_clear() {
        let mut field = InputField::new(FIELD_COLUMNS);
        field.set_text("Springfield");
        assert_eq!(field.text(), "Springfield");
        assert_eq!(field.cursor(), 11);
        field.clear();
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_visible_window_short_text() {
        let field = typed("Doe");
        assert_eq!(field.visible_window(8), ("Doe".to_string(), 3));
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        let field = typed("Springfield");
        let (visible, col) = field.visible_window(8);
        assert_eq!(visible, "ngfield");
        assert_eq!(col, 7);
    }

    #[test]
    fn test_visible_window_from_start() {
        let mut field = typed("Springfield");
        field.move_home();
        let (visible, col) = field.visible_window(8);
        assert_eq!(visible, "Springfi");
        assert_eq!(col, 0);
    }

    #[test]
    fn test_visible_window_zero_width() {
        let field = typed("abc");
        assert_eq!(field.visible_window(0), (String::new(), 0));
    }
}
