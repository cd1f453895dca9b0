//! Construction-time options for input controls.

use std::time::Duration;

use crate::color::Rgba;
use crate::geometry::ViewOffset;
use crate::style::TextStyle;
use crate::wrapper::{FieldVariant, InputType};

/// Default caret blink interval.
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Default caret stroke width in pixels.
pub const DEFAULT_CARET_WIDTH: f32 = 2.0;

/// Default selection highlight color.
pub const DEFAULT_SELECTION_COLOR: Rgba = Rgba::rgb(0.0, 128.0 / 255.0, 1.0);

/// Which platform field the control binds to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputKind {
    #[default]
    Input,
    TextArea,
}

impl InputKind {
    /// Field variant backing this kind.
    #[must_use]
    pub fn variant(self) -> FieldVariant {
        match self {
            Self::Input => FieldVariant::SingleLine,
            Self::TextArea => FieldVariant::MultiLine,
        }
    }
}

/// Line layout mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputMode {
    /// One line, scrolled horizontally to follow the caret.
    #[default]
    Single,
    /// Word-wrapped lines.
    Multi,
}

/// Options applied when a control is constructed.
///
/// All fields have defaults, so options are usually built with
/// `InputOptions::default()` and a few `with_*` calls.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputOptions {
    pub kind: InputKind,
    pub mode: InputMode,
    /// Length limit in chars; 0 means unlimited.
    pub max_chars: usize,
    /// Regular expression new text must match; empty disables the check.
    pub pattern: String,
    pub placeholder: String,
    pub blink_interval: Duration,
    pub caret_width: f32,
    /// Insets between the control bounds and the text clip region.
    pub view_offset: ViewOffset,
    pub clip_content: bool,
    /// Stop pointer events from reaching ancestors.
    pub auto_prevent_interaction: bool,
    pub input_type: InputType,
    /// Initial text.
    pub text: String,
    pub tab_index: Option<i32>,
    pub tab_group: Option<String>,
    pub style: TextStyle,
    pub placeholder_style: TextStyle,
    pub caret_color: Rgba,
    pub selection_color: Rgba,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            kind: InputKind::Input,
            mode: InputMode::Single,
            max_chars: 0,
            pattern: String::new(),
            placeholder: String::new(),
            blink_interval: DEFAULT_BLINK_INTERVAL,
            caret_width: DEFAULT_CARET_WIDTH,
            view_offset: ViewOffset::default(),
            clip_content: true,
            auto_prevent_interaction: false,
            input_type: InputType::Text,
            text: String::new(),
            tab_index: None,
            tab_group: None,
            style: TextStyle::default(),
            placeholder_style: TextStyle::placeholder(),
            caret_color: Rgba::BLACK,
            selection_color: DEFAULT_SELECTION_COLOR,
        }
    }
}

impl InputOptions {
    /// Defaults for a multi-line text area.
    #[must_use]
    pub fn text_area() -> Self {
        Self {
            kind: InputKind::TextArea,
            mode: InputMode::Multi,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_blink_interval(mut self, interval: Duration) -> Self {
        self.blink_interval = interval;
        self
    }

    #[must_use]
    pub fn with_caret_width(mut self, width: f32) -> Self {
        self.caret_width = width;
        self
    }

    #[must_use]
    pub fn with_view_offset(mut self, offset: ViewOffset) -> Self {
        self.view_offset = offset;
        self
    }

    #[must_use]
    pub fn with_clip_content(mut self, clip: bool) -> Self {
        self.clip_content = clip;
        self
    }

    #[must_use]
    pub fn with_auto_prevent_interaction(mut self, prevent: bool) -> Self {
        self.auto_prevent_interaction = prevent;
        self
    }

    #[must_use]
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Place the control in a tab group at a tab index.
    #[must_use]
    pub fn with_tab(mut self, tab_index: i32, group: Option<&str>) -> Self {
        self.tab_index = Some(tab_index);
        self.tab_group = group.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_placeholder_style(mut self, style: TextStyle) -> Self {
        self.placeholder_style = style;
        self
    }

    #[must_use]
    pub fn with_caret_color(mut self, color: Rgba) -> Self {
        self.caret_color = color;
        self
    }

    #[must_use]
    pub fn with_selection_color(mut self, color: Rgba) -> Self {
        self.selection_color = color;
        self
    }
}
