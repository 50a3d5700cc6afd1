use crate::keymap::Action;
use crossterm::event::KeyCode;

/// A single-line text field with a cursor and an optional length limit.
///
/// # Example
/// ```
/// use kioskflow::utils::text_input::TextInput;
///
/// let mut input = TextInput::with_limit(4);
/// for c in "REF123".chars() {
///     input.insert_char(c);
/// }
/// assert_eq!(input.text(), "REF1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
    max_len: Option<usize>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input that refuses characters past `max_len`.
    pub fn with_limit(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Empty, ignoring whitespace
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Set the text and move cursor to end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a printable ASCII character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        if !c.is_ascii() || c.is_control() {
            return;
        }
        if self.max_len.is_some_and(|max| self.text.chars().count() >= max) {
            return;
        }
        let byte_index = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len());
        self.text.insert(byte_index, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.remove_at(self.cursor - 1);
            self.cursor -= 1;
        }
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.remove_at(self.cursor);
        }
    }

    fn remove_at(&mut self, index: usize) {
        self.text = self
            .text
            .chars()
            .enumerate()
            .filter_map(|(i, c)| (i != index).then_some(c))
            .collect();
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Handle a mapped action. Returns true if it was an editing action.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Handle a raw key. Returns true if the key edited the field.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in s.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_char_insertion_mid_text() {
        let mut input = typed("hello");
        input.move_left();
        input.move_left();
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.text(), "hexllo");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = typed("hello");
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "helo");
        assert_eq!(input.cursor(), 2);
        input.delete();
        assert_eq!(input.text(), "heo");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = typed("hi");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "hi");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_non_ascii_and_control_rejected() {
        let input = typed("é\tA");
        assert_eq!(input.text(), "A");
    }

    #[test]
    fn test_limit_is_enforced() {
        let mut input = TextInput::with_limit(3);
        for c in "ABCDE".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text(), "ABC");
    }

    #[test]
    fn test_handle_key_reports_edits() {
        let mut input = TextInput::new();
        assert!(input.handle_key(KeyCode::Char('R')));
        assert!(!input.handle_key(KeyCode::Enter));
        assert!(input.handle_action(Action::Backspace));
        assert!(!input.handle_action(Action::Confirm));
        assert!(input.is_empty());
    }
}
