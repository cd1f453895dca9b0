//! Rope-backed text and selection storage.
//!
//! [`TextStore`] is the in-memory text model used when no platform text
//! field is available. It keeps text in a `ropey::Rope`, a selection in
//! char offsets and the anchor that shift-extended movement pivots on.

use ropey::Rope;

use crate::text::SelectionSpan;
use crate::unicode::{
    next_grapheme_boundary, next_word_boundary, prev_grapheme_boundary, prev_word_boundary,
};

/// Strip carriage returns so stored text only uses `'\n'` line breaks.
#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
    text.replace('\r', "")
}

/// Editable text with a selection.
#[derive(Clone, Debug, Default)]
pub struct TextStore {
    rope: Rope,
    selection: SelectionSpan,
    anchor: usize,
}

impl TextStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `text`, caret at the end.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut store = Self::new();
        store.set_text(text);
        store.collapse_to(store.len_chars());
        store
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Current content.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the entire contents; the selection is clamped to the new length.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(&normalize_line_endings(text));
        let len = self.len_chars();
        self.selection = self.selection.clamped(len);
        self.anchor = self.anchor.min(len);
    }

    /// Selection as stored.
    #[must_use]
    pub fn selection(&self) -> SelectionSpan {
        self.selection
    }

    /// Text covered by the selection.
    #[must_use]
    pub fn selected_text(&self) -> String {
        let span = self.selection.normalized().clamped(self.len_chars());
        self.rope.slice(span.start..span.end).to_string()
    }

    /// Store a normalized, clamped selection and report whether it changed.
    pub fn update_selection(&mut self, start: usize, end: usize) -> bool {
        let span = SelectionSpan::new(start, end)
            .normalized()
            .clamped(self.len_chars());
        self.anchor = span.start;
        if span == self.selection {
            return false;
        }
        self.selection = span;
        true
    }

    /// Collapse the selection to a caret at `pos` (clamped).
    pub fn collapse_to(&mut self, pos: usize) {
        let pos = pos.min(self.len_chars());
        self.selection = SelectionSpan::caret(pos);
        self.anchor = pos;
    }

    /// Select all text.
    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.selection = SelectionSpan::new(0, self.len_chars());
    }

    /// Position that movement starts from: the end opposite the anchor.
    #[must_use]
    pub fn head(&self) -> usize {
        if self.selection.start == self.anchor {
            self.selection.end
        } else {
            self.selection.start
        }
    }

    fn move_head(&mut self, to: usize, extend: bool) {
        let to = to.min(self.len_chars());
        if extend {
            self.selection = SelectionSpan::new(self.anchor, to).normalized();
        } else {
            self.collapse_to(to);
        }
    }

    /// Move one grapheme left. Without `extend` a selection collapses to its start.
    pub fn move_left(&mut self, extend: bool, by_word: bool) {
        if !extend && !self.selection.is_empty() && !by_word {
            let start = self.selection.normalized().start;
            self.collapse_to(start);
            return;
        }
        let text = self.text();
        let head = self.head();
        let to = if by_word {
            prev_word_boundary(&text, head)
        } else {
            prev_grapheme_boundary(&text, head)
        };
        self.move_head(to, extend);
    }

    /// Move one grapheme right. Without `extend` a selection collapses to its end.
    pub fn move_right(&mut self, extend: bool, by_word: bool) {
        if !extend && !self.selection.is_empty() && !by_word {
            let end = self.selection.normalized().end;
            self.collapse_to(end);
            return;
        }
        let text = self.text();
        let head = self.head();
        let to = if by_word {
            next_word_boundary(&text, head)
        } else {
            next_grapheme_boundary(&text, head)
        };
        self.move_head(to, extend);
    }

    /// Move to the start of the current line.
    pub fn move_home(&mut self, extend: bool) {
        let line = self.rope.char_to_line(self.head().min(self.len_chars()));
        let to = self.rope.line_to_char(line);
        self.move_head(to, extend);
    }

    /// Move to the end of the current line, before its line break.
    pub fn move_end(&mut self, extend: bool) {
        let line = self.rope.char_to_line(self.head().min(self.len_chars()));
        let to = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1).saturating_sub(1)
        } else {
            self.len_chars()
        };
        self.move_head(to, extend);
    }

    /// Move to the same column on the previous line, or to the start.
    pub fn move_up(&mut self, extend: bool) {
        let head = self.head().min(self.len_chars());
        let line = self.rope.char_to_line(head);
        let to = if line == 0 {
            0
        } else {
            let col = head - self.rope.line_to_char(line);
            self.column_on_line(line - 1, col)
        };
        self.move_head(to, extend);
    }

    /// Move to the same column on the next line, or to the end.
    pub fn move_down(&mut self, extend: bool) {
        let head = self.head().min(self.len_chars());
        let line = self.rope.char_to_line(head);
        let to = if line + 1 >= self.rope.len_lines() {
            self.len_chars()
        } else {
            let col = head - self.rope.line_to_char(line);
            self.column_on_line(line + 1, col)
        };
        self.move_head(to, extend);
    }

    fn column_on_line(&self, line: usize, col: usize) -> usize {
        let start = self.rope.line_to_char(line);
        let end = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - 1
        } else {
            self.len_chars()
        };
        start + col.min(end - start)
    }

    /// Remove the selected text. Returns false when nothing was selected.
    pub fn delete_selection(&mut self) -> bool {
        let span = self.selection.normalized().clamped(self.len_chars());
        if span.is_empty() {
            return false;
        }
        self.rope.remove(span.start..span.end);
        self.collapse_to(span.start);
        true
    }

    /// Insert text over the selection.
    ///
    /// With a positive `max_chars` the inserted text is cut so the result
    /// never exceeds the limit. Returns whether anything changed.
    pub fn insert(&mut self, text: &str, max_chars: usize) -> bool {
        let text = normalize_line_endings(text);
        let span = self.selection.normalized().clamped(self.len_chars());
        let remaining_after_delete = self.len_chars() - span.len();
        let room = if max_chars > 0 {
            max_chars.saturating_sub(remaining_after_delete)
        } else {
            usize::MAX
        };
        let insert: String = text.chars().take(room).collect();
        if insert.is_empty() && span.is_empty() {
            return false;
        }
        self.rope.remove(span.start..span.end);
        self.rope.insert(span.start, &insert);
        self.collapse_to(span.start + insert.chars().count());
        true
    }

    /// Delete the selection or the grapheme before the caret.
    pub fn delete_backward(&mut self, by_word: bool) -> bool {
        if self.delete_selection() {
            return true;
        }
        let head = self.head();
        if head == 0 {
            return false;
        }
        let text = self.text();
        let start = if by_word {
            prev_word_boundary(&text, head)
        } else {
            prev_grapheme_boundary(&text, head)
        };
        self.rope.remove(start..head);
        self.collapse_to(start);
        true
    }

    /// Delete the selection or the grapheme after the caret.
    pub fn delete_forward(&mut self, by_word: bool) -> bool {
        if self.delete_selection() {
            return true;
        }
        let head = self.head();
        if head >= self.len_chars() {
            return false;
        }
        let text = self.text();
        let end = if by_word {
            next_word_boundary(&text, head)
        } else {
            next_grapheme_boundary(&text, head)
        };
        self.rope.remove(head..end);
        self.collapse_to(head);
        true
    }

    /// Truncate to at most `max_chars` chars (0 means unlimited).
    pub fn truncate(&mut self, max_chars: usize) {
        if max_chars > 0 && self.len_chars() > max_chars {
            self.rope.remove(max_chars..);
            self.selection = self.selection.clamped(max_chars);
            self.anchor = self.anchor.min(max_chars);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_strips_carriage_returns() {
        let mut store = TextStore::new();
        store.set_text("a\r\nb");
        assert_eq!(store.text(), "a\nb");
        assert_eq!(store.len_chars(), 3);
    }

    #[test]
    fn test_update_selection_reports_change() {
        let mut store = TextStore::with_text("hello");
        assert!(store.update_selection(4, 1));
        assert_eq!(store.selection(), SelectionSpan::new(1, 4));
        assert!(!store.update_selection(1, 4));
        assert!(!store.update_selection(4, 1));
        assert!(store.update_selection(0, 99));
        assert_eq!(store.selection(), SelectionSpan::new(0, 5));
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut store = TextStore::with_text("Hello World");
        store.update_selection(6, 11);
        assert!(store.insert("Rust", 0));
        assert_eq!(store.text(), "Hello Rust");
        assert_eq!(store.selection(), SelectionSpan::caret(10));
    }

    #[test]
    fn test_insert_respects_max_chars() {
        let mut store = TextStore::with_text("abc");
        assert!(store.insert("defg", 5));
        assert_eq!(store.text(), "abcde");
        assert!(!store.insert("x", 5));
        assert_eq!(store.text(), "abcde");
    }

    #[test]
    fn test_delete_backward_grapheme() {
        let mut store = TextStore::with_text("ae\u{0301}");
        assert!(store.delete_backward(false));
        assert_eq!(store.text(), "a");
        assert!(store.delete_backward(false));
        assert!(!store.delete_backward(false));
    }

    #[test]
    fn test_delete_word() {
        let mut store = TextStore::with_text("hello world");
        assert!(store.delete_backward(true));
        assert_eq!(store.text(), "hello ");
        store.collapse_to(0);
        assert!(store.delete_forward(true));
        assert_eq!(store.text(), " ");
    }

    #[test]
    fn test_shift_extend_pivots_on_anchor() {
        let mut store = TextStore::with_text("abcdef");
        store.collapse_to(3);
        store.move_right(true, false);
        store.move_right(true, false);
        assert_eq!(store.selection(), SelectionSpan::new(3, 5));
        store.move_left(true, false);
        store.move_left(true, false);
        store.move_left(true, false);
        assert_eq!(store.selection(), SelectionSpan::new(2, 3));
        assert_eq!(store.head(), 2);
        assert_eq!(store.selected_text(), "c");
    }

    #[test]
    fn test_move_collapses_selection() {
        let mut store = TextStore::with_text("abcdef");
        store.update_selection(1, 4);
        store.move_left(false, false);
        assert_eq!(store.selection(), SelectionSpan::caret(1));
        store.update_selection(1, 4);
        store.move_right(false, false);
        assert_eq!(store.selection(), SelectionSpan::caret(4));
    }

    #[test]
    fn test_home_end_stay_on_line() {
        let mut store = TextStore::with_text("ab\ncde\nf");
        store.collapse_to(4);
        store.move_home(false);
        assert_eq!(store.head(), 3);
        store.move_end(true);
        assert_eq!(store.selection(), SelectionSpan::new(3, 6));
        store.collapse_to(7);
        store.move_end(false);
        assert_eq!(store.head(), 8);
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let mut store = TextStore::with_text("abcd\nef\nghij");
        store.collapse_to(3);
        store.move_down(false);
        assert_eq!(store.head(), 7);
        store.move_down(false);
        assert_eq!(store.head(), 10);
        store.move_down(false);
        assert_eq!(store.head(), 12);
        store.move_up(true);
        assert_eq!(store.selection(), SelectionSpan::new(7, 12));
        store.collapse_to(2);
        store.move_up(false);
        assert_eq!(store.head(), 0);
    }

    #[test]
    fn test_truncate() {
        let mut store = TextStore::with_text("abcdef");
        store.truncate(3);
        assert_eq!(store.text(), "abc");
        assert_eq!(store.selection(), SelectionSpan::caret(3));
        store.truncate(0);
        assert_eq!(store.text(), "abc");
    }
}
