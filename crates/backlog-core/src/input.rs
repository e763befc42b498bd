/// Single-line text buffer with a byte-indexed cursor and an optional
/// character limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    cursor: usize,
    char_limit: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            char_limit: None,
        }
    }

    /// Buffer that silently drops input past `limit` characters.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            char_limit: Some(limit),
            ..Self::new()
        }
    }

    fn is_full(&self) -> bool {
        self.char_limit
            .is_some_and(|limit| self.buffer.chars().count() >= limit)
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_full() {
            return;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
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

    /// Replaces the contents, truncated to the limit, with the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.buffer = match self.char_limit {
            Some(limit) => text.chars().take(limit).collect(),
            None => text,
        };
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    pub fn char_limit(&self) -> Option<usize> {
        self.char_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let input = InputState::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
        assert_eq!(input.as_str(), "");
    }

    #[test]
    fn test_insert_char_at_middle() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('c');
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputState::new();
        input.backspace();
        assert_eq!(input.as_str(), "");

        input.insert_char('a');
        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "a");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_delete_removes_char_at_cursor() {
        let mut input = InputState::new();
        input.set("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "bc");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_home_end_and_clear() {
        let mut input = InputState::new();
        input.set("abc");
        input.move_home();
        assert_eq!(input.cursor_pos(), 0);
        input.move_end();
        assert_eq!(input.cursor_pos(), 3);
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_char_limit_drops_extra_input() {
        let mut input = InputState::with_limit(3);
        for c in "abcdef".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.as_str(), "abc");

        input.backspace();
        input.insert_char('z');
        assert_eq!(input.as_str(), "abz");
    }

    #[test]
    fn test_set_truncates_to_limit() {
        let mut input = InputState::with_limit(10);
        input.set("31-12-20245");
        assert_eq!(input.as_str(), "31-12-2024");
        assert_eq!(input.cursor_pos(), 10);
    }

    #[test]
    fn test_multibyte_navigation() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('\u{00e9}');
        input.insert_char('b');
        assert_eq!(input.cursor_pos(), 4);

        input.move_left();
        input.move_left();
        assert_eq!(input.cursor_pos(), 1);
        input.delete();
        assert_eq!(input.as_str(), "ab");

        input.move_end();
        input.insert_char('\u{1f600}');
        input.backspace();
        assert_eq!(input.as_str(), "ab");
    }

    #[test]
    fn test_limit_counts_chars_not_bytes() {
        let mut input = InputState::with_limit(2);
        input.insert_char('\u{4e16}');
        input.insert_char('\u{754c}');
        input.insert_char('x');
        assert_eq!(input.as_str(), "\u{4e16}\u{754c}");
    }
}
