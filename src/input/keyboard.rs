//! Key events as delivered by the host window.
//!
//! Only the keys that focus navigation and the emulated editor act on get
//! their own variant. Everything printable arrives as [`KeyCode::Char`].

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held while a key event fired.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 1;
        const ALT = 1 << 1;
        const CTRL = 1 << 2;
        /// Command on macOS, the Windows key elsewhere.
        const SUPER = 1 << 3;
    }
}

/// Keys the input core distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Printable input, space included.
    Char(char),
    Backspace,
    Delete,
    /// Line break in a text area; the enter action elsewhere.
    Enter,
    Tab,
    /// Shift+Tab as reported by hosts that fold the modifier in.
    BackTab,
    Left,
    Right,
    /// Previous line in a text area; previous focus item in a single-line
    /// input.
    Up,
    /// Next line in a text area; next focus item in a single-line input.
    Down,
    Home,
    End,
    Esc,
}

/// Whether a key went down or came back up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    Down,
    Up,
}

/// A key press or release with its modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key with no modifiers held.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// A printable character with no modifiers held.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    #[must_use]
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CTRL)
    }

    #[must_use]
    pub fn with_shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Shift extends the selection while moving the caret.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Ctrl or Super. Moves and deletes by word, and turns letters into
    /// clipboard shortcuts.
    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.intersects(KeyModifiers::CTRL | KeyModifiers::SUPER)
    }

    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    /// Lowercased letter of a Ctrl/Super chord such as copy or paste.
    #[must_use]
    pub fn shortcut(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if self.ctrl() => Some(c.to_ascii_lowercase()),
            _ => None,
        }
    }

    /// `BackTab`, or `Tab` with Shift held.
    #[must_use]
    pub fn is_back_tab(&self) -> bool {
        match self.code {
            KeyCode::BackTab => true,
            KeyCode::Tab => self.shift(),
            _ => false,
        }
    }
}
