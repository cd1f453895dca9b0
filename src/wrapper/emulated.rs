//! In-memory text-editing backend.

use std::time::Instant;

use crate::input::{KeyCode, KeyEvent, KeyPhase};
use crate::text::{SelectionSpan, TextStore};
use crate::wrapper::{BackendKind, FieldVariant, InputType, KeyListener, TextEditingWrapper};

/// Backend that stores text itself and edits it from key events.
///
/// Used where no platform text field exists. Focus takes effect
/// immediately. Copy, cut and paste go through an internal clipboard that
/// lives as long as the wrapper.
#[derive(Default)]
pub struct EmulatedWrapper {
    store: TextStore,
    clipboard: String,
    max_chars: usize,
    input_type: InputType,
    variant: FieldVariant,
    engaged: bool,
    listener: Option<KeyListener>,
}

impl std::fmt::Debug for EmulatedWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmulatedWrapper")
            .field("store", &self.store)
            .field("max_chars", &self.max_chars)
            .field("input_type", &self.input_type)
            .field("variant", &self.variant)
            .field("engaged", &self.engaged)
            .finish_non_exhaustive()
    }
}

impl EmulatedWrapper {
    /// Create an empty, disengaged backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of the internal clipboard.
    #[must_use]
    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    fn copy_allowed(&self) -> bool {
        self.input_type != InputType::Password
    }

    fn shortcut(&mut self, key: char) -> bool {
        match key {
            'a' => {
                let before = self.store.selection();
                self.store.select_all();
                before != self.store.selection()
            }
            'c' => {
                if self.copy_allowed() && !self.store.selection().is_empty() {
                    self.clipboard = self.store.selected_text();
                }
                false
            }
            'x' => {
                if !self.copy_allowed() || self.store.selection().is_empty() {
                    return false;
                }
                self.clipboard = self.store.selected_text();
                self.store.delete_selection()
            }
            'v' => {
                let mut paste = self.clipboard.clone();
                if self.variant == FieldVariant::SingleLine {
                    paste.retain(|c| c != '\n');
                }
                self.store.insert(&paste, self.max_chars)
            }
            _ => false,
        }
    }

    fn edit(&mut self, event: &KeyEvent) -> bool {
        if let Some(key) = event.shortcut() {
            return self.shortcut(key);
        }

        let before = (self.store.selection(), self.store.len_chars());
        let extend = event.shift();
        let by_word = event.ctrl();
        let multi = self.variant == FieldVariant::MultiLine;

        let edited = match event.code {
            KeyCode::Char(c) if !c.is_control() && !event.alt() => {
                let mut buf = [0u8; 4];
                self.store.insert(c.encode_utf8(&mut buf), self.max_chars)
            }
            KeyCode::Enter if multi => self.store.insert("\n", self.max_chars),
            KeyCode::Backspace => self.store.delete_backward(by_word),
            KeyCode::Delete => self.store.delete_forward(by_word),
            KeyCode::Left => {
                self.store.move_left(extend, by_word);
                false
            }
            KeyCode::Right => {
                self.store.move_right(extend, by_word);
                false
            }
            KeyCode::Home => {
                self.store.move_home(extend);
                false
            }
            KeyCode::End => {
                self.store.move_end(extend);
                false
            }
            KeyCode::Up if multi => {
                self.store.move_up(extend);
                false
            }
            KeyCode::Down if multi => {
                self.store.move_down(extend);
                false
            }
            _ => return false,
        };

        edited || before != (self.store.selection(), self.store.len_chars())
    }
}

impl TextEditingWrapper for EmulatedWrapper {
    fn kind(&self) -> BackendKind {
        BackendKind::Emulated
    }

    fn text(&self) -> String {
        self.store.text()
    }

    fn set_text(&mut self, text: &str) {
        self.store.set_text(text);
    }

    fn selection(&self) -> SelectionSpan {
        self.store.selection()
    }

    fn update_selection(&mut self, start: usize, end: usize) -> bool {
        self.store.update_selection(start, end)
    }

    fn caret(&self) -> usize {
        self.store.head()
    }

    fn set_cursor_pos(&mut self, pos: usize) {
        self.store.collapse_to(pos);
    }

    fn max_chars(&self) -> usize {
        self.max_chars
    }

    fn set_max_chars(&mut self, max_chars: usize) {
        self.max_chars = max_chars;
        self.store.truncate(max_chars);
    }

    fn input_type(&self) -> InputType {
        self.input_type
    }

    fn set_input_type(&mut self, input_type: InputType) {
        self.input_type = input_type;
    }

    fn variant(&self) -> FieldVariant {
        self.variant
    }

    fn focus(&mut self, variant: FieldVariant) {
        self.variant = variant;
        self.engaged = true;
        tracing::debug!(?variant, "emulated backend engaged");
    }

    fn blur(&mut self) {
        if self.engaged {
            tracing::debug!("emulated backend disengaged");
        }
        self.engaged = false;
    }

    fn is_engaged(&self) -> bool {
        self.engaged
    }

    fn poll(&mut self, _now: Instant) {}

    fn handle_key(&mut self, phase: KeyPhase, event: &KeyEvent) -> bool {
        if !self.engaged || phase != KeyPhase::Down {
            return false;
        }
        self.edit(event)
    }

    fn key_listener(&self) -> Option<KeyListener> {
        self.listener.clone()
    }

    fn set_key_listener(&mut self, listener: Option<KeyListener>) {
        self.listener = listener;
    }
}
