//! Editable text with a cursor.
//!
//! gpui has no native text field, so key events are captured by the window
//! and fed to the buffer of whichever field has focus.

/// Character shown in place of each masked character.
pub const MASK_CHAR: char = '\u{2022}';

/// Text plus a cursor position (in bytes, always on a char boundary).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text as it appears on screen.
    pub fn display(&self, masked: bool) -> String {
        if masked {
            std::iter::repeat(MASK_CHAR)
                .take(self.text.chars().count())
                .collect()
        } else {
            self.text.clone()
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        match self.text[..self.cursor].chars().next_back() {
            Some(c) => {
                self.cursor -= c.len_utf8();
                self.text.remove(self.cursor);
                true
            }
            None => false,
        }
    }

    /// Removes the character under the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Applies a gpui key name. Returns `true` if the buffer changed.
    ///
    /// `key` is the name from `Keystroke::key`: a single character for
    /// printable keys, otherwise a word like `backspace` or `left`.
    pub fn apply_key(&mut self, key: &str, shift: bool) -> bool {
        match key {
            "backspace" => self.backspace(),
            "delete" => self.delete(),
            "left" => {
                let before = self.cursor;
                self.move_left();
                before != self.cursor
            }
            "right" => {
                let before = self.cursor;
                self.move_right();
                before != self.cursor
            }
            "home" => std::mem::replace(&mut self.cursor, 0) != 0,
            "end" => std::mem::replace(&mut self.cursor, self.text.len()) != self.text.len(),
            "space" => {
                self.insert_char(' ');
                true
            }
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => {
                        self.insert_char(if shift { c.to_ascii_uppercase() } else { c });
                        true
                    }
                    _ => false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &[&str]) -> TextBuffer {
        let mut buffer = TextBuffer::new();
        for key in keys {
            buffer.apply_key(key, false);
        }
        buffer
    }

    #[test]
    fn typing_appends() {
        let buffer = typed(&["j", "b", "l", "space", "x"]);
        assert_eq!(buffer.text(), "jbl x");
        assert_eq!(buffer.cursor(), 5);
    }

    #[test]
    fn shift_uppercases() {
        let mut buffer = TextBuffer::new();
        assert!(buffer.apply_key("j", true));
        assert_eq!(buffer.text(), "J");
    }

    #[test]
    fn named_keys_are_not_inserted() {
        let mut buffer = TextBuffer::new();
        assert!(!buffer.apply_key("enter", false));
        assert!(!buffer.apply_key("f5", false));
        assert!(buffer.is_empty());
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut buffer = TextBuffer::new();
        assert!(!buffer.apply_key("backspace", false));
    }

    #[test]
    fn editing_in_the_middle() {
        let mut buffer = TextBuffer::with_text("hllo");
        buffer.apply_key("home", false);
        buffer.apply_key("right", false);
        buffer.apply_key("e", false);
        assert_eq!(buffer.text(), "hello");

        buffer.apply_key("end", false);
        buffer.apply_key("backspace", false);
        assert_eq!(buffer.text(), "hell");
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut buffer = TextBuffer::with_text("abc");
        buffer.apply_key("home", false);
        assert!(buffer.apply_key("delete", false));
        assert_eq!(buffer.text(), "bc");
        buffer.apply_key("end", false);
        assert!(!buffer.apply_key("delete", false));
    }

    #[test]
    fn multibyte_characters() {
        let mut buffer = TextBuffer::with_text("caf");
        buffer.insert_char('\u{e9}');
        assert_eq!(buffer.text(), "caf\u{e9}");
        buffer.move_left();
        assert_eq!(buffer.cursor(), 3);
        buffer.move_right();
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "caf");
    }

    #[test]
    fn masked_display_hides_characters() {
        let buffer = TextBuffer::with_text("s3cr\u{e9}t");
        assert_eq!(buffer.display(true), "\u{2022}".repeat(6));
        assert_eq!(buffer.display(false), "s3cr\u{e9}t");
    }
}
