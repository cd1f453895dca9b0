//! Single-line text field.

use std::ops::Deref;

use crate::InputContext;
use crate::control::{InputControl, InputKind, InputMode, InputOptions};
use crate::error::Result;

/// A single-line input.
///
/// Text scrolls horizontally to keep the caret in view. Dereferences to
/// [`InputControl`] for everything shared with [`TextArea`](crate::TextArea).
#[derive(Clone, Debug)]
pub struct TextInput {
    control: InputControl,
}

impl TextInput {
    /// Create an input; `kind` and `mode` in `options` are overridden.
    pub fn new(ctx: &InputContext, options: InputOptions) -> Result<Self> {
        let options = InputOptions {
            kind: InputKind::Input,
            mode: InputMode::Single,
            ..options
        };
        Ok(Self {
            control: InputControl::new(ctx, options)?,
        })
    }

    /// Mask the text with `*` and switch the backend to password entry.
    pub fn set_display_as_password(&self, mask: bool) {
        self.control.set_display_as_password(mask);
    }

    #[must_use]
    pub fn display_as_password(&self) -> bool {
        self.control.displays_as_password()
    }

    /// The underlying control.
    #[must_use]
    pub fn control(&self) -> &InputControl {
        &self.control
    }
}

impl Deref for TextInput {
    type Target = InputControl;

    fn deref(&self) -> &InputControl {
        &self.control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MonospaceMetrics;
    use crate::wrapper::InputType;

    #[test]
    fn test_forces_single_line() {
        let ctx = InputContext::new(MonospaceMetrics::new(10.0, 20.0));
        let input = TextInput::new(&ctx, InputOptions::text_area().with_text("a\nb")).unwrap();
        assert_eq!(input.lines(), vec!["a\nb"]);
    }

    #[test]
    fn test_password_masks_lines_not_value() {
        let ctx = InputContext::new(MonospaceMetrics::new(10.0, 20.0));
        let input = TextInput::new(&ctx, InputOptions::default().with_text("secret")).unwrap();
        input.set_display_as_password(true);
        input.redraw(std::time::Instant::now());
        assert!(input.display_as_password());
        assert_eq!(input.text(), "secret");
        assert_eq!(input.lines(), vec!["******"]);
        assert_eq!(input.input_type(), InputType::Password);
    }

    #[test]
    fn test_password_input_type_masks_from_start() {
        let ctx = InputContext::new(MonospaceMetrics::new(10.0, 20.0));
        let input = TextInput::new(
            &ctx,
            InputOptions::default()
                .with_input_type(InputType::Password)
                .with_text("pw"),
        )
        .unwrap();
        assert!(input.display_as_password());
        assert_eq!(input.lines(), vec!["**"]);
    }
}
