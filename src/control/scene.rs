//! Drawable nodes a control owns in the host's scene graph.
//!
//! Coordinates are relative to the control's content origin (the top-left
//! corner of the clip region). The host copies these into its own retained
//! nodes after each redraw.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};
use crate::style::TextStyle;

/// The blinking caret stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretNode {
    /// Left edge of the stroke.
    pub position: Point,
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
    pub visible: bool,
}

impl CaretNode {
    /// Bounds of the stroke.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }
}

/// Selection highlight rectangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionNode {
    /// Where the text is drawn; `rects` are relative to it.
    pub origin: Point,
    pub rects: Vec<Rect>,
    pub color: Rgba,
}

impl SelectionNode {
    /// Rectangles in content coordinates.
    #[must_use]
    pub fn absolute_rects(&self) -> Vec<Rect> {
        self.rects.iter().map(|r| r.translate(self.origin)).collect()
    }
}

/// The glyph run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub origin: Point,
    /// Display lines (masked or placeholder text when applicable).
    pub lines: Vec<String>,
    pub line_height: f32,
    pub style: TextStyle,
    pub is_placeholder: bool,
}

/// Snapshot of everything a control draws.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlScene {
    /// Offset of the content origin inside the control bounds.
    pub content_origin: Point,
    /// Clip region in content coordinates; `None` when clipping is off.
    pub clip: Option<Rect>,
    pub selection: SelectionNode,
    pub text: TextNode,
    pub caret: CaretNode,
}
