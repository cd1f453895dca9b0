//! In-memory stand-in for platform text fields.

use std::cell::RefCell;
use std::rc::Rc;

use caret_ui::wrapper::FieldVariant;
use caret_ui::{InputType, Platform, PlatformTextField};

#[derive(Debug, Default)]
pub struct FieldState {
    pub value: String,
    pub selection: (usize, usize),
    pub max_length: Option<usize>,
    pub input_type: Option<InputType>,
    pub focused: bool,
}

pub type SharedField = Rc<RefCell<FieldState>>;

struct FakeField(SharedField);

impl PlatformTextField for FakeField {
    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&mut self, value: &str) {
        let mut state = self.0.borrow_mut();
        state.value = value.to_string();
        let len = value.chars().count();
        state.selection = (state.selection.0.min(len), state.selection.1.min(len));
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

/// Platform handing out fields whose state the test can inspect and edit.
#[derive(Default)]
pub struct FakePlatform {
    pub single: SharedField,
    pub multi: SharedField,
    pub available: bool,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl Platform for FakePlatform {
    fn create_field(&mut self, variant: FieldVariant) -> Option<Box<dyn PlatformTextField>> {
        if !self.available {
            return None;
        }
        let state = match variant {
            FieldVariant::SingleLine => &self.single,
            FieldVariant::MultiLine => &self.multi,
        };
        Some(Box::new(FakeField(Rc::clone(state))))
    }
}

/// Simulate the user editing a platform field: replace its value and
/// put the caret at the end.
pub fn user_edit(field: &SharedField, value: &str) {
    let mut state = field.borrow_mut();
    state.value = value.to_string();
    let len = value.chars().count();
    state.selection = (len, len);
}
