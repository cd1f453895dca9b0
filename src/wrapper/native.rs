//! Backend delegating to platform text fields.

use std::time::Instant;

use crate::input::{KeyEvent, KeyPhase};
use crate::text::{SelectionSpan, normalize_line_endings};
use crate::wrapper::{
    BackendKind, Deferred, FieldVariant, InputType, KeyListener, NATIVE_FOCUS_DELAY,
    TextEditingWrapper,
};

/// A hidden platform text widget.
///
/// The platform owns the text, selection, composition and clipboard. Its
/// positions are char offsets.
pub trait PlatformTextField {
    /// Current value, possibly with `"\r\n"` line endings.
    fn value(&self) -> String;

    /// Replace the value.
    fn set_value(&mut self, value: &str);

    /// Selection as `(start, end)`.
    fn selection_range(&self) -> (usize, usize);

    /// Set the selection; `start <= end`.
    fn set_selection_range(&mut self, start: usize, end: usize);

    /// Length limit enforced by the field; `None` removes it.
    fn set_max_length(&mut self, max: Option<usize>);

    /// Change the kind of content the field accepts.
    fn set_input_type(&mut self, input_type: InputType);

    /// Give the field keyboard focus.
    fn focus(&mut self);

    /// Take keyboard focus away from the field.
    fn blur(&mut self);
}

/// Source of platform text fields.
pub trait Platform {
    /// Create the field for a variant, or `None` if the platform has none.
    fn create_field(&mut self, variant: FieldVariant) -> Option<Box<dyn PlatformTextField>>;
}

/// Backend over one platform field per [`FieldVariant`].
///
/// Focusing is deferred by [`NATIVE_FOCUS_DELAY`] so a click that moves
/// focus between controls settles before the platform field grabs it.
pub struct NativeWrapper {
    single_line: Box<dyn PlatformTextField>,
    multi_line: Box<dyn PlatformTextField>,
    variant: FieldVariant,
    max_chars: usize,
    input_type: InputType,
    pending_focus: Deferred<FieldVariant>,
    engaged: bool,
    listener: Option<KeyListener>,
}

impl std::fmt::Debug for NativeWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeWrapper")
            .field("variant", &self.variant)
            .field("max_chars", &self.max_chars)
            .field("input_type", &self.input_type)
            .field("pending_focus", &self.pending_focus.is_pending())
            .field("engaged", &self.engaged)
            .finish_non_exhaustive()
    }
}

impl NativeWrapper {
    /// Create both fields, or `None` if the platform cannot provide them.
    pub fn new(platform: &mut dyn Platform) -> Option<Self> {
        let single_line = platform.create_field(FieldVariant::SingleLine)?;
        let multi_line = platform.create_field(FieldVariant::MultiLine)?;
        Some(Self {
            single_line,
            multi_line,
            variant: FieldVariant::SingleLine,
            max_chars: 0,
            input_type: InputType::Text,
            pending_focus: Deferred::new(NATIVE_FOCUS_DELAY),
            engaged: false,
            listener: None,
        })
    }

    /// Check if a focus request is waiting for its delay.
    #[must_use]
    pub fn has_pending_focus(&self) -> bool {
        self.pending_focus.is_pending()
    }

    fn field(&self) -> &dyn PlatformTextField {
        match self.variant {
            FieldVariant::SingleLine => self.single_line.as_ref(),
            FieldVariant::MultiLine => self.multi_line.as_ref(),
        }
    }

    fn field_mut(&mut self) -> &mut dyn PlatformTextField {
        match self.variant {
            FieldVariant::SingleLine => self.single_line.as_mut(),
            FieldVariant::MultiLine => self.multi_line.as_mut(),
        }
    }

    fn apply_max_chars(&mut self) {
        let max = (self.max_chars > 0).then_some(self.max_chars);
        self.field_mut().set_max_length(max);
    }
}

impl TextEditingWrapper for NativeWrapper {
    fn kind(&self) -> BackendKind {
        BackendKind::Native
    }

    fn text(&self) -> String {
        normalize_line_endings(&self.field().value())
    }

    fn set_text(&mut self, text: &str) {
        self.field_mut().set_value(text);
    }

    fn selection(&self) -> SelectionSpan {
        self.field().selection_range().into()
    }

    fn update_selection(&mut self, start: usize, end: usize) -> bool {
        let span = SelectionSpan::new(start, end).normalized();
        if self.selection() == span {
            return false;
        }
        self.field_mut().set_selection_range(span.start, span.end);
        true
    }

    fn set_cursor_pos(&mut self, pos: usize) {
        self.field_mut().set_selection_range(pos, pos);
    }

    fn max_chars(&self) -> usize {
        self.max_chars
    }

    fn set_max_chars(&mut self, max_chars: usize) {
        if self.max_chars != max_chars {
            self.max_chars = max_chars;
            self.apply_max_chars();
        }
    }

    fn input_type(&self) -> InputType {
        self.input_type
    }

    fn set_input_type(&mut self, input_type: InputType) {
        self.input_type = input_type;
        self.field_mut().set_input_type(input_type);
    }

    fn variant(&self) -> FieldVariant {
        self.variant
    }

    fn focus(&mut self, variant: FieldVariant) {
        if self.variant != variant {
            self.variant = variant;
            let input_type = self.input_type;
            self.field_mut().set_input_type(input_type);
            self.apply_max_chars();
        }
        self.pending_focus.schedule(variant, Instant::now());
        tracing::debug!(?variant, delay = ?NATIVE_FOCUS_DELAY, "platform focus scheduled");
    }

    fn blur(&mut self) {
        if self.pending_focus.cancel() {
            tracing::debug!("pending platform focus cancelled");
        }
        if self.engaged {
            self.field_mut().blur();
            self.engaged = false;
        }
    }

    fn is_engaged(&self) -> bool {
        self.engaged
    }

    fn poll(&mut self, now: Instant) {
        if let Some(variant) = self.pending_focus.poll(now) {
            if variant == self.variant {
                self.field_mut().focus();
                self.engaged = true;
                tracing::debug!(?variant, "platform field focused");
            }
        }
    }

    fn handle_key(&mut self, _phase: KeyPhase, _event: &KeyEvent) -> bool {
        false
    }

    fn key_listener(&self) -> Option<KeyListener> {
        self.listener.clone()
    }

    fn set_key_listener(&mut self, listener: Option<KeyListener>) {
        self.listener = listener;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct FieldState {
        value: String,
        selection: (usize, usize),
        max_length: Option<usize>,
        input_type: Option<InputType>,
        focused: bool,
    }

    struct FakeField(Rc<RefCell<FieldState>>);

    impl PlatformTextField for FakeField {
        fn value(&self) -> String {
            self.0.borrow().value.clone()
        }
        fn set_value(&mut self, value: &str) {
            self.0.borrow_mut().value = value.to_string();
        }
        fn selection_range(&self) -> (usize, usize) {
            self.0.borrow().selection
        }
        fn set_selection_range(&mut self, start: usize, end: usize) {
            self.0.borrow_mut().selection = (start, end);
        }
        fn set_max_length(&mut self, max: Option<usize>) {
            self.0.borrow_mut().max_length = max;
        }
        fn set_input_type(&mut self, input_type: InputType) {
            self.0.borrow_mut().input_type = Some(input_type);
        }
        fn focus(&mut self) {
            self.0.borrow_mut().focused = true;
        }
        fn blur(&mut self) {
            self.0.borrow_mut().focused = false;
        }
    }

    struct FakePlatform {
        single: Rc<RefCell<FieldState>>,
        multi: Rc<RefCell<FieldState>>,
    }

    impl Platform for FakePlatform {
        fn create_field(&mut self, variant: FieldVariant) -> Option<Box<dyn PlatformTextField>> {
            let state = match variant {
                FieldVariant::SingleLine => &self.single,
                FieldVariant::MultiLine => &self.multi,
            };
            Some(Box::new(FakeField(Rc::clone(state))))
        }
    }

    fn native() -> (NativeWrapper, Rc<RefCell<FieldState>>, Rc<RefCell<FieldState>>) {
        let single = Rc::new(RefCell::new(FieldState::default()));
        let multi = Rc::new(RefCell::new(FieldState::default()));
        let mut platform = FakePlatform {
            single: Rc::clone(&single),
            multi: Rc::clone(&multi),
        };
        let wrapper = NativeWrapper::new(&mut platform).unwrap();
        (wrapper, single, multi)
    }

    #[test]
    fn test_text_strips_carriage_returns() {
        let (w, single, _) = native();
        single.borrow_mut().value = "a\r\nb".into();
        assert_eq!(w.text(), "a\nb");
    }

    #[test]
    fn test_update_selection_normalizes() {
        let (mut w, single, _) = native();
        assert!(w.update_selection(5, 2));
        assert_eq!(single.borrow().selection, (2, 5));
        assert!(!w.update_selection(5, 2));
        assert!(!w.update_selection(2, 5));
    }

    #[test]
    fn test_focus_is_deferred() {
        let (mut w, single, _) = native();
        w.focus(FieldVariant::SingleLine);
        assert!(w.has_pending_focus());
        assert!(!w.is_engaged());
        w.poll(Instant::now() + Duration::from_millis(200));
        assert!(w.is_engaged());
        assert!(single.borrow().focused);
    }

    #[test]
    fn test_blur_cancels_pending_focus() {
        let (mut w, single, _) = native();
        w.focus(FieldVariant::SingleLine);
        w.blur();
        w.poll(Instant::now() + Duration::from_secs(1));
        assert!(!w.is_engaged());
        assert!(!single.borrow().focused);
    }

    #[test]
    fn test_variant_selects_field() {
        let (mut w, single, multi) = native();
        w.set_max_chars(8);
        w.focus(FieldVariant::MultiLine);
        w.set_text("two\nlines");
        assert_eq!(multi.borrow().value, "two\nlines");
        assert_eq!(multi.borrow().max_length, Some(8));
        assert!(single.borrow().value.is_empty());
        w.set_max_chars(0);
        assert_eq!(multi.borrow().max_length, None);
    }
}
