//! Text-editing backends.
//!
//! A [`TextEditingWrapper`] is the authoritative store for the text and
//! selection of whichever control currently has focus. Two implementations
//! exist:
//!
//! - [`NativeWrapper`]: delegates storage, composition and clipboard to a
//!   platform text field ([`PlatformTextField`]), one field per
//!   [`FieldVariant`], shared by every control of that variant.
//! - [`EmulatedWrapper`]: keeps text in memory and applies key events itself.
//!
//! [`detect`] picks the native backend when the platform can provide its
//! fields and falls back to emulation otherwise.

mod deferred;
mod emulated;
mod native;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::input::{KeyEvent, KeyPhase};
use crate::text::SelectionSpan;

pub use deferred::{Deferred, NATIVE_FOCUS_DELAY};
pub use emulated::EmulatedWrapper;
pub use native::{NativeWrapper, Platform, PlatformTextField};

/// Which shared field a control binds to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldVariant {
    /// One line of text.
    #[default]
    SingleLine,
    /// Text with line breaks.
    MultiLine,
}

/// Kind of content a field accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Search,
    Tel,
    Url,
}

impl InputType {
    /// Attribute-style name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "password" => Ok(Self::Password),
            "email" => Ok(Self::Email),
            "number" => Ok(Self::Number),
            "search" => Ok(Self::Search),
            "tel" => Ok(Self::Tel),
            "url" => Ok(Self::Url),
            _ => Err(Error::InvalidInputType(s.to_string())),
        }
    }
}

/// Which implementation backs a wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Native,
    Emulated,
}

/// Receives key events after the backend has processed them.
pub type KeyListener = Rc<dyn Fn(KeyPhase, &KeyEvent)>;

/// A backend shared between controls.
pub type SharedWrapper = Rc<RefCell<Box<dyn TextEditingWrapper>>>;

/// Uniform interface over text-and-selection storage.
///
/// Positions are char offsets. Out-of-range positions are clamped.
pub trait TextEditingWrapper {
    /// Which implementation this is.
    fn kind(&self) -> BackendKind;

    /// Current content, never containing `'\r'`.
    fn text(&self) -> String;

    /// Overwrite the content. Length limits are the caller's concern.
    fn set_text(&mut self, text: &str);

    /// Selection as stored.
    fn selection(&self) -> SelectionSpan;

    /// Store a normalized selection; returns whether it changed.
    fn update_selection(&mut self, start: usize, end: usize) -> bool;

    /// Where the caret is drawn.
    fn caret(&self) -> usize {
        self.selection().start
    }

    /// Collapse the selection to a caret at `pos`.
    fn set_cursor_pos(&mut self, pos: usize);

    /// Length limit (0 means unlimited).
    fn max_chars(&self) -> usize;

    /// Set the length limit.
    fn set_max_chars(&mut self, max_chars: usize);

    /// Kind of content accepted.
    fn input_type(&self) -> InputType;

    /// Change the kind of content accepted.
    fn set_input_type(&mut self, input_type: InputType);

    /// Field variant currently in use.
    fn variant(&self) -> FieldVariant;

    /// Engage the backend with the given field variant.
    ///
    /// May complete later: see [`TextEditingWrapper::poll`].
    fn focus(&mut self, variant: FieldVariant);

    /// Disengage the backend, cancelling a pending focus.
    fn blur(&mut self);

    /// Check if the backend currently takes keyboard input.
    fn is_engaged(&self) -> bool;

    /// Run deferred work that is due at `now`.
    fn poll(&mut self, now: Instant);

    /// Apply a key event to the stored text and selection.
    ///
    /// Returns whether the text or selection changed. Backends whose
    /// platform field edits itself return false.
    fn handle_key(&mut self, phase: KeyPhase, event: &KeyEvent) -> bool;

    /// Listener notified of key events.
    fn key_listener(&self) -> Option<KeyListener>;

    /// Replace the key listener.
    fn set_key_listener(&mut self, listener: Option<KeyListener>);
}

/// Choose a backend: native when the platform provides its fields,
/// emulated otherwise.
pub fn detect(platform: Option<&mut dyn Platform>) -> Box<dyn TextEditingWrapper> {
    if let Some(platform) = platform {
        if let Some(native) = NativeWrapper::new(platform) {
            tracing::debug!("using platform text fields");
            return Box::new(native);
        }
        tracing::warn!("platform text fields unavailable, falling back to emulation");
    }
    Box::new(EmulatedWrapper::new())
}

/// Wrap a backend for sharing.
#[must_use]
pub fn share(wrapper: Box<dyn TextEditingWrapper>) -> SharedWrapper {
    Rc::new(RefCell::new(wrapper))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoFields;

    impl Platform for NoFields {
        fn create_field(&mut self, _variant: FieldVariant) -> Option<Box<dyn PlatformTextField>> {
            None
        }
    }

    #[test]
    fn test_detect_without_platform_emulates() {
        assert_eq!(detect(None).kind(), BackendKind::Emulated);
    }

    #[test]
    fn test_detect_falls_back_when_fields_missing() {
        let mut platform = NoFields;
        assert_eq!(detect(Some(&mut platform)).kind(), BackendKind::Emulated);
    }

    #[test]
    fn test_input_type_names() {
        assert_eq!("Password".parse::<InputType>().unwrap(), InputType::Password);
        assert_eq!(InputType::Email.to_string(), "email");
        assert!("date".parse::<InputType>().is_err());
    }
}
