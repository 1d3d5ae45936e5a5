//! Single-line text buffer.
//!
//! The cursor counts graphemes, not bytes, so multi-byte input edits the
//! way the user sees it.

use scenarioctl_core::InputAction;
use unicode_segmentation::UnicodeSegmentation;

/// State for a single-line text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Current text value
    pub value: String,
    /// Cursor position (in graphemes)
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value`, cursor at the end.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Replace the whole value and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.len();
    }

    /// Number of graphemes in the value.
    pub fn len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let byte_offset = self.grapheme_to_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        // A combining mark joins the previous grapheme instead of adding one
        self.cursor = self.value[..byte_offset + c.len_utf8()]
            .graphemes(true)
            .count();
    }

    /// Insert text at the cursor (paste).
    pub fn insert_str(&mut self, text: &str) {
        let byte_offset = self.grapheme_to_byte_offset(self.cursor);
        self.value.insert_str(byte_offset, text);
        self.cursor = self.value[..byte_offset + text.len()].graphemes(true).count();
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let start = self.grapheme_to_byte_offset(self.cursor - 1);
            let end = self.grapheme_to_byte_offset(self.cursor);
            self.value.replace_range(start..end, "");
            self.cursor -= 1;
        }
    }

    /// Delete the grapheme under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let start = self.grapheme_to_byte_offset(self.cursor);
            let end = self.grapheme_to_byte_offset(self.cursor + 1);
            self.value.replace_range(start..end, "");
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Apply an editing action. Every [`InputAction`] edits or moves, so
    /// this always consumes the action.
    pub fn apply(&mut self, action: &InputAction) -> bool {
        match action {
            InputAction::Char(c) => self.insert(*c),
            InputAction::Paste(text) => self.insert_str(text),
            InputAction::Backspace => self.backspace(),
            InputAction::Delete => self.delete(),
            InputAction::Left => self.move_left(),
            InputAction::Right => self.move_right(),
            InputAction::Home => self.move_home(),
            InputAction::End => self.move_end(),
            InputAction::Clear => self.clear(),
        }
        true
    }

    /// Split the value around the cursor: text before, the grapheme under
    /// the cursor (if any), and text after.
    pub fn split_at_cursor(&self) -> (&str, Option<&str>, &str) {
        let start = self.grapheme_to_byte_offset(self.cursor);
        let end = self.grapheme_to_byte_offset(self.cursor + 1);
        let at = (start < end).then(|| &self.value[start..end]);
        (&self.value[..start], at, &self.value[end..])
    }

    fn grapheme_to_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.value.len())
    }
}
