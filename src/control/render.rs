//! Layout, caret placement and scene output for the control core.

use std::time::Instant;

use crate::control::scene::{ControlScene, SelectionNode, TextNode};
use crate::control::state::Invalidation;
use crate::control::{ControlCore, InputMode};
use crate::geometry::{Point, Rect, non_negative};
use crate::text::{LineLayout, multi_line_rects, single_line_rects};

impl ControlCore {
    pub(super) fn line_height(&self) -> f32 {
        let font_height = self.metrics.font_height();
        let line_height = self.options.style.resolve_line_height(font_height);
        if self.options.mode == InputMode::Single {
            line_height.max(font_height)
        } else {
            line_height
        }
    }

    pub(super) fn set_size(&mut self, width: f32, height: f32) {
        let size = (non_negative(width), non_negative(height));
        if self.size != size {
            self.size = size;
            self.invalid |= Invalidation::CLIPPING | Invalidation::CURSOR | Invalidation::SELECTION;
        }
    }

    /// Width available to wrapped lines, `None` when unbounded.
    fn wrap_width(&self) -> Option<f32> {
        let width = self.clip.0 - self.options.caret_width;
        (width > 0.0).then_some(width)
    }

    pub(super) fn refresh_clip(&mut self) {
        let clip = self.options.view_offset.inner_size(self.size.0, self.size.1);
        if clip != self.clip && self.is_multi_line() {
            self.invalid |= Invalidation::TEXT;
        }
        self.clip = clip;
        self.invalid.remove(Invalidation::CLIPPING);
    }

    pub(super) fn rebuild_layout(&mut self) {
        let text = self.geometry_text();
        self.layout = if self.is_multi_line() {
            LineLayout::wrap(&text, self.wrap_width(), self.metrics.as_ref())
        } else {
            LineLayout::single(&text)
        };
        self.invalid.remove(Invalidation::TEXT);
        self.invalid |= Invalidation::CURSOR | Invalidation::SELECTION;
    }

    /// Bring the clip region and line layout up to date.
    pub(super) fn ensure_layout(&mut self) {
        if self.invalid.contains(Invalidation::CLIPPING) {
            self.refresh_clip();
        }
        if self.invalid.contains(Invalidation::TEXT) {
            self.rebuild_layout();
        }
    }

    /// Top-left corner of the clip region inside the control bounds.
    ///
    /// Single-line text is centered vertically.
    pub(super) fn content_origin(&self) -> Point {
        let offset = self.options.view_offset;
        if self.is_multi_line() {
            Point::new(offset.left, offset.top)
        } else {
            Point::new(
                offset.left,
                non_negative((self.size.1 - self.line_height()) / 2.0),
            )
        }
    }

    pub(super) fn text_to_pixel(&self, pos: usize) -> Point {
        let local = self
            .layout
            .position_of(pos, self.metrics.as_ref(), self.line_height());
        local.offset(self.text_origin)
    }

    pub(super) fn pixel_to_text(&self, point: Point) -> usize {
        let local = Point::new(point.x - self.text_origin.x, point.y - self.text_origin.y);
        self.layout
            .index_at(local, self.metrics.as_ref(), self.line_height())
    }

    fn scrolls(&self) -> bool {
        !self.is_multi_line() && self.options.clip_content && self.clip.0 > 0.0
    }

    /// Place the caret at the cursor, scrolling single-line text so the
    /// caret stays inside the clip region.
    pub(super) fn update_caret(&mut self) {
        self.ensure_layout();
        let line_height = self.line_height();
        let caret_width = self.options.caret_width;
        let pos = self.cursor_pos.min(self.char_len());
        let local = self
            .layout
            .position_of(pos, self.metrics.as_ref(), line_height);

        if self.scrolls() {
            let clip_width = self.clip.0;
            let text_width = self.layout.line_width(0, self.metrics.as_ref());
            let caret_x = self.text_origin.x + local.x;
            if caret_x + caret_width > clip_width {
                self.text_origin.x -= caret_x + caret_width - clip_width;
            } else if caret_x < 0.0 {
                self.text_origin.x -= caret_x;
            } else if self.text_origin.x < 0.0
                && self.text_origin.x + text_width <= clip_width - caret_width
            {
                self.text_origin.x = (clip_width - caret_width - text_width).min(0.0);
            }
        } else if !self.is_multi_line() {
            self.text_origin.x = 0.0;
        }

        self.caret.position = local.offset(self.text_origin);
        self.caret.width = caret_width;
        self.caret.height = line_height;
        self.caret.color = self.options.caret_color;
        self.invalid.remove(Invalidation::CURSOR);
    }

    /// Toggle the caret on the blink interval and reposition it when shown.
    fn draw_cursor(&mut self, now: Instant) {
        if !self.has_focus {
            self.caret.visible = false;
            return;
        }
        let due = self
            .blink_timer
            .is_none_or(|last| now.saturating_duration_since(last) >= self.options.blink_interval);
        if due {
            self.blink_timer = Some(now);
            self.caret.visible = !self.caret.visible;
        }
        if self.caret.visible && self.invalid.contains(Invalidation::CURSOR) {
            self.update_caret();
        }
    }

    fn update_selection_rects(&mut self) {
        self.selection_rects = if self.has_focus {
            let span = self.selection();
            let line_height = self.line_height();
            if self.is_multi_line() {
                multi_line_rects(&self.layout, span, self.metrics.as_ref(), line_height)
            } else {
                single_line_rects(&self.geometry_text(), span, self.metrics.as_ref(), line_height)
            }
        } else {
            Vec::new()
        };
        self.invalid.remove(Invalidation::SELECTION);
    }

    pub(super) fn redraw(&mut self, now: Instant) {
        self.ensure_layout();
        self.draw_cursor(now);
        if self.invalid.contains(Invalidation::SELECTION) {
            self.update_selection_rects();
        }
    }

    pub(super) fn scene(&self) -> ControlScene {
        let line_height = self.line_height();
        let placeholder = self.shows_placeholder();
        let owned = |layout: &LineLayout| -> Vec<String> {
            layout.line_texts().into_iter().map(str::to_string).collect()
        };
        let (lines, style) = if placeholder {
            let placeholder_layout = if self.is_multi_line() {
                LineLayout::wrap(
                    &self.options.placeholder,
                    self.wrap_width(),
                    self.metrics.as_ref(),
                )
            } else {
                LineLayout::single(&self.options.placeholder)
            };
            (owned(&placeholder_layout), self.options.placeholder_style)
        } else {
            (owned(&self.layout), self.options.style)
        };

        ControlScene {
            content_origin: self.content_origin(),
            clip: self
                .options
                .clip_content
                .then(|| Rect::new(0.0, 0.0, self.clip.0, self.clip.1)),
            selection: SelectionNode {
                origin: self.text_origin,
                rects: self.selection_rects.clone(),
                color: self.options.selection_color,
            },
            text: TextNode {
                origin: self.text_origin,
                lines,
                line_height,
                style,
                is_placeholder: placeholder,
            },
            caret: self.caret,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::control::{InputControl, InputOptions, Invalidation};
    use crate::geometry::{Point, Rect, ViewOffset};
    use crate::style::TextStyle;
    use crate::text::{MonospaceMetrics, SelectionSpan};
    use crate::InputContext;

    fn ctx() -> InputContext {
        InputContext::new(MonospaceMetrics::new(10.0, 20.0))
    }

    fn sized(ctx: &InputContext, options: InputOptions, width: f32, height: f32) -> InputControl {
        let c = InputControl::new(ctx, options.with_view_offset(ViewOffset::uniform(0.0))).unwrap();
        c.set_size(width, height);
        c.redraw(std::time::Instant::now());
        c
    }

    #[test]
    fn test_line_height_single_never_below_font() {
        let ctx = ctx();
        let style = TextStyle::builder().line_height(12.0).build();
        let single = InputControl::new(&ctx, InputOptions::default().with_style(style)).unwrap();
        let multi = InputControl::new(&ctx, InputOptions::text_area().with_style(style)).unwrap();
        assert!((single.line_height() - 20.0).abs() < f32::EPSILON);
        assert!((multi.line_height() - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clip_size_uses_view_offset() {
        let ctx = ctx();
        let c = InputControl::new(&ctx, InputOptions::default()).unwrap();
        c.set_size(100.0, 30.0);
        assert!(c.invalidation().contains(Invalidation::CLIPPING));
        c.redraw(std::time::Instant::now());
        assert_eq!(c.clip_size(), (90.0, 20.0));
        assert!(!c.invalidation().contains(Invalidation::CLIPPING));
    }

    #[test]
    fn test_text_to_pixel_and_back() {
        let ctx = ctx();
        let c = sized(&ctx, InputOptions::default().with_text("hello"), 200.0, 20.0);
        assert_eq!(c.text_to_pixel(3), Point::new(30.0, 0.0));
        assert_eq!(c.pixel_to_text(Point::new(25.0, 5.0)), 2);
        assert_eq!(c.pixel_to_text(Point::new(31.0, 5.0)), 3);
        assert_eq!(c.pixel_to_text(Point::new(-5.0, 5.0)), 0);
        assert_eq!(c.pixel_to_text(Point::new(500.0, 5.0)), 5);
    }

    #[test]
    fn test_auto_scroll_follows_caret() {
        let ctx = ctx();
        let c = sized(&ctx, InputOptions::default().with_text("hello"), 30.0, 20.0);
        c.focus();
        c.set_selection(5, 5);
        // caret at 50 + width 2 overflows a 30px clip by 22
        assert_eq!(c.text_origin(), Point::new(-22.0, 0.0));
        assert!((c.scene().caret.position.x - 28.0).abs() < f32::EPSILON);

        c.set_selection(0, 0);
        assert_eq!(c.text_origin(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_auto_scroll_snaps_back_when_text_shrinks() {
        let ctx = ctx();
        let c = sized(&ctx, InputOptions::default().with_text("abcdefgh"), 30.0, 20.0);
        c.focus();
        c.set_selection(8, 8);
        assert_eq!(c.text_origin(), Point::new(-52.0, 0.0));
        c.set_text("abcdefg");
        c.set_selection(6, 6);
        // text end pulled back to the clip edge minus the caret
        assert_eq!(c.text_origin(), Point::new(-42.0, 0.0));
    }

    #[test]
    fn test_caret_blinks_only_when_focused() {
        let ctx = ctx();
        let c = sized(&ctx, InputOptions::default().with_text("ab"), 100.0, 20.0);
        let t0 = std::time::Instant::now();
        c.redraw(t0);
        assert!(!c.caret_visible());

        c.focus();
        c.redraw(t0);
        assert!(c.caret_visible());
        c.redraw(t0 + Duration::from_millis(100));
        assert!(c.caret_visible());
        c.redraw(t0 + Duration::from_millis(500));
        assert!(!c.caret_visible());
        c.redraw(t0 + Duration::from_millis(1000));
        assert!(c.caret_visible());

        c.blur();
        c.redraw(t0 + Duration::from_millis(1500));
        assert!(!c.caret_visible());
    }

    #[test]
    fn test_single_line_selection_rects() {
        let ctx = ctx();
        let c = sized(&ctx, InputOptions::default().with_text("hello"), 200.0, 20.0);
        c.focus();
        c.set_selection(1, 3);
        c.redraw(std::time::Instant::now());
        assert_eq!(c.scene().selection.rects, vec![Rect::new(10.0, 0.0, 20.0, 20.0)]);

        c.blur();
        c.redraw(std::time::Instant::now());
        assert!(c.scene().selection.rects.is_empty());
        assert_eq!(c.selection(), SelectionSpan::new(1, 3));
    }

    #[test]
    fn test_text_area_wraps_to_clip_width() {
        let ctx = ctx();
        // clip 32 minus caret 2 leaves 30px: three cells per line
        let c = sized(&ctx, InputOptions::text_area().with_text("abcdefgh"), 32.0, 100.0);
        assert_eq!(c.lines(), vec!["abc", "def", "gh"]);
        assert_eq!(c.text_to_pixel(4), Point::new(10.0, 20.0));
        assert_eq!(c.pixel_to_text(Point::new(25.0, 45.0)), 8);
        assert_eq!(c.pixel_to_text(Point::new(15.0, 45.0)), 7);
    }

    #[test]
    fn test_placeholder_in_scene() {
        let ctx = ctx();
        let c = sized(&ctx, InputOptions::default().with_placeholder("Name"), 100.0, 20.0);
        let scene = c.scene();
        assert!(scene.text.is_placeholder);
        assert_eq!(scene.text.lines, vec!["Name"]);
        assert_eq!(scene.text.style, TextStyle::placeholder());

        c.set_text("Bo");
        let scene = c.scene();
        assert!(!scene.text.is_placeholder);
        assert_eq!(scene.text.lines, vec!["Bo"]);
    }

    #[test]
    fn test_single_line_centered_vertically() {
        let ctx = ctx();
        let c = sized(&ctx, InputOptions::default(), 100.0, 40.0);
        assert_eq!(c.scene().content_origin, Point::new(0.0, 10.0));
    }
}
