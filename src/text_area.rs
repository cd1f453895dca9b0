//! Multi-line, word-wrapped text field.

use std::ops::Deref;

use crate::InputContext;
use crate::control::{InputControl, InputKind, InputMode, InputOptions};
use crate::error::Result;

/// A multi-line input.
///
/// Lines wrap at the clip width minus the caret width; Enter inserts a
/// line break and Up/Down move the caret instead of focus.
#[derive(Clone, Debug)]
pub struct TextArea {
    control: InputControl,
}

impl TextArea {
    /// Create a text area; `kind` and `mode` in `options` are overridden.
    pub fn new(ctx: &InputContext, options: InputOptions) -> Result<Self> {
        let options = InputOptions {
            kind: InputKind::TextArea,
            mode: InputMode::Multi,
            ..options
        };
        Ok(Self {
            control: InputControl::new(ctx, options)?,
        })
    }

    /// Number of display lines after wrapping.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.control.lines().len()
    }

    /// The underlying control.
    #[must_use]
    pub fn control(&self) -> &InputControl {
        &self.control
    }
}

impl Deref for TextArea {
    type Target = InputControl;

    fn deref(&self) -> &InputControl {
        &self.control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ViewOffset;
    use crate::input::{KeyCode, KeyEvent};
    use crate::text::MonospaceMetrics;

    fn ctx() -> InputContext {
        InputContext::new(MonospaceMetrics::new(10.0, 20.0))
    }

    #[test]
    fn test_hard_breaks_split_lines() {
        let ctx = ctx();
        let area = TextArea::new(&ctx, InputOptions::default().with_text("one\r\ntwo")).unwrap();
        assert_eq!(area.text(), "one\ntwo");
        assert_eq!(area.lines(), vec!["one", "two"]);
        assert_eq!(area.line_count(), 2);
    }

    #[test]
    fn test_rewraps_on_resize() {
        let ctx = ctx();
        let area = TextArea::new(
            &ctx,
            InputOptions::default()
                .with_view_offset(ViewOffset::uniform(0.0))
                .with_text("abcdefgh"),
        )
        .unwrap();
        area.set_size(52.0, 100.0);
        area.redraw(std::time::Instant::now());
        assert_eq!(area.lines(), vec!["abcde", "fgh"]);
        area.set_size(32.0, 100.0);
        area.redraw(std::time::Instant::now());
        assert_eq!(area.lines(), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_enter_and_arrows_stay_in_area() {
        let ctx = ctx();
        let area = TextArea::new(&ctx, InputOptions::default().with_tab(0, None)).unwrap();
        let other = ctx.text_input(InputOptions::default().with_tab(1, None)).unwrap();
        area.focus();
        ctx.key_down(&KeyEvent::char('a'));
        ctx.key_down(&KeyEvent::key(KeyCode::Enter));
        ctx.key_down(&KeyEvent::char('b'));
        assert_eq!(area.text(), "a\nb");
        ctx.key_down(&KeyEvent::key(KeyCode::Up));
        assert!(area.has_focus());
        assert!(!other.has_focus());
        assert_eq!(area.cursor_pos(), 1);
    }
}
