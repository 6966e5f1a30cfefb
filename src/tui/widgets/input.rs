//! Text input widget
//!
//! A single-line text field with cursor support. The cursor is tracked in
//! characters, so editing is safe for non-ASCII input; scrolling and the
//! cursor cell are measured in display columns.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_len();
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the given character position
    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor (paste)
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| !c.is_control()) {
            self.insert(c);
        }
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

impl TextInput {
    /// First character to draw so the cursor cell fits in `width` columns
    fn scroll_start(&self, chars: &[char], width: usize) -> usize {
        let cursor_cell = chars.get(self.cursor).map_or(1, |c| char_width(*c).max(1));
        let mut start = 0;
        let mut used: usize = chars[..self.cursor].iter().map(|c| char_width(*c)).sum();
        while start < self.cursor && used + cursor_cell > width {
            used -= char_width(chars[start]);
            start += 1;
        }
        start
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            UnicodeWidthStr::width(self.label.as_str()) + 2
        };

        let input_start = area.x + label_width as u16;
        let input_width = area.width.saturating_sub(label_width as u16) as usize;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        if input_width == 0 {
            return;
        }

        let chars: Vec<char> = self.content.chars().collect();
        let start = self.scroll_start(&chars, input_width);

        if chars.is_empty() {
            buf.set_stringn(
                input_start,
                area.y,
                &self.placeholder,
                input_width,
                Style::default().fg(Color::DarkGray),
            );
        } else {
            let visible: String = chars[start..].iter().collect();
            buf.set_stringn(
                input_start,
                area.y,
                &visible,
                input_width,
                Style::default().fg(Color::White),
            );
        }

        if self.focused {
            let column: usize = chars[start..self.cursor].iter().map(|c| char_width(*c)).sum();
            let cursor_x = input_start as usize + column;
            if cursor_x < (area.x + area.width) as usize {
                let cursor_char = chars.get(self.cursor).copied().unwrap_or(' ');
                buf.set_string(
                    cursor_x as u16,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Green),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "url".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "url");
        input.backspace();
        assert_eq!(input.value(), "ur");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("café");
        assert_eq!(input.cursor, 4);
        input.move_left();
        input.insert('è');
        assert_eq!(input.value(), "cafèé");
        input.move_right();
        input.backspace();
        assert_eq!(input.value(), "cafè");
    }

    #[test]
    fn test_delete_and_movement() {
        let mut input = TextInput::new().content("abc");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "bc");
        input.move_end();
        input.delete();
        assert_eq!(input.value(), "bc");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_insert_str_drops_control_chars() {
        let mut input = TextInput::new();
        input.insert_str("https://jobs.example.com/1\n");
        assert_eq!(input.value(), "https://jobs.example.com/1");
    }

    #[test]
    fn test_render_label_and_placeholder() {
        let input = TextInput::new()
            .label("Resume file")
            .placeholder(".txt,.docx,.pdf");
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);

        let row: String = (0..40u16)
            .map(|x| buf[(x, 0u16)].symbol().to_string())
            .collect();
        assert!(row.starts_with("Resume file: .txt,.docx,.pdf"));
    }

    fn row(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf[(x, 0u16)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_long_input_scrolls_to_cursor() {
        let input = TextInput::new().content("abcdefghij").focused(true);
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);

        // Four characters plus the cursor cell at the end
        assert_eq!(row(&buf, 5), "ghij ");
        assert_eq!(buf[(4u16, 0u16)].bg, Color::Green);
    }

    #[test]
    fn test_cursor_after_wide_chars() {
        let input = TextInput::new().content("履歴").focused(true);
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);

        // Two glyphs fill four columns; the cursor sits in the fifth
        assert_eq!(buf[(4u16, 0u16)].bg, Color::Green);
        assert_ne!(buf[(2u16, 0u16)].bg, Color::Green);
    }

    #[test]
    fn test_wide_chars_scroll_by_columns() {
        let input = TextInput::new().content("履歴書").focused(true);
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);

        // Six columns of text cannot sit beside the cursor in five
        assert_eq!(buf[(0u16, 0u16)].symbol(), "歴");
        assert_eq!(buf[(4u16, 0u16)].bg, Color::Green);
    }
}
