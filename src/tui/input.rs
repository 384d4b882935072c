// Single-line input buffer with a byte-offset cursor

/// Find the byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Editable entry line. The cursor is a byte offset into the buffer and
/// always sits on a character boundary.
#[derive(Debug, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters, for terminal cursor placement.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = prev_char_boundary(&self.buffer, self.cursor);
            self.buffer.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            let next = next_char_boundary(&self.buffer, self.cursor);
            self.buffer.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = prev_char_boundary(&self.buffer, self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor = next_char_boundary(&self.buffer, self.cursor);
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputState {
        let mut input = InputState::new();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_insert_appends_at_cursor() {
        let mut input = typed("sos");
        input.move_home();
        input.insert('!');
        assert_eq!(input.text(), "!sos");
        assert_eq!(input.cursor_column(), 1);
    }

    #[test]
    fn test_backspace_removes_previous_char() {
        let mut input = typed("abc");
        input.backspace();
        assert_eq!(input.text(), "ab");

        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let mut input = typed("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "bc");
        assert_eq!(input.cursor_column(), 0);

        input.move_end();
        input.delete();
        assert_eq!(input.text(), "bc");
    }

    #[test]
    fn test_cursor_movement_clamps_at_edges() {
        let mut input = typed("hi");
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor_column(), 0);

        input.move_right();
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_multibyte_editing_stays_on_boundaries() {
        // "café" is five bytes, 'é' is two of them
        let mut input = typed("café");
        input.move_left();
        assert_eq!(input.cursor_column(), 3);

        input.insert('x');
        assert_eq!(input.text(), "cafxé");

        input.backspace();
        input.move_right();
        input.backspace();
        assert_eq!(input.text(), "caf");
    }

    #[test]
    fn test_clear_resets_buffer_and_cursor() {
        let mut input = typed("hello");
        input.clear();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_column(), 0);
    }
}
