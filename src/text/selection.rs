//! Selection ranges and their highlight rectangles.

use crate::geometry::Rect;
use crate::text::{FontMetrics, LineLayout};

/// Selection range in char offsets, as stored (not necessarily ordered).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionSpan {
    pub start: usize,
    pub end: usize,
}

impl SelectionSpan {
    /// Create a new selection.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed selection at `pos`.
    #[must_use]
    pub const fn caret(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get normalized (start <= end) selection.
    #[must_use]
    pub fn normalized(&self) -> Self {
        if self.start <= self.end {
            *self
        } else {
            Self::new(self.end, self.start)
        }
    }

    /// Clamp both ends to `len`.
    #[must_use]
    pub fn clamped(&self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    /// Number of selected chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.start.abs_diff(self.end)
    }

    /// Check if position is within selection.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        let n = self.normalized();
        pos >= n.start && pos < n.end
    }
}

impl From<(usize, usize)> for SelectionSpan {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<SelectionSpan> for (usize, usize) {
    fn from(span: SelectionSpan) -> Self {
        (span.start, span.end)
    }
}

/// Highlight rectangles for a selection over a single line of text.
///
/// One rectangle from the width of the text before the start to the width
/// of the text before the end.
#[must_use]
pub fn single_line_rects(
    text: &str,
    span: SelectionSpan,
    metrics: &dyn FontMetrics,
    line_height: f32,
) -> Vec<Rect> {
    let span = span.normalized();
    if span.is_empty() {
        return Vec::new();
    }
    let widths = metrics.char_widths(text);
    let x0: f32 = widths.iter().take(span.start).sum();
    let x1: f32 = widths.iter().take(span.end).sum();
    vec![Rect::new(x0, 0.0, x1 - x0, line_height)]
}

/// Highlight rectangles for a selection over wrapped lines.
///
/// Both ends on one line yield one rectangle. Otherwise the first line is
/// covered from the start to its right edge, interior lines in full, and
/// the last line from its left edge to the end.
#[must_use]
pub fn multi_line_rects(
    layout: &LineLayout,
    span: SelectionSpan,
    metrics: &dyn FontMetrics,
    line_height: f32,
) -> Vec<Rect> {
    let span = span.normalized();
    if span.is_empty() {
        return Vec::new();
    }

    let (first_row, first_col) = layout.locate(span.start);
    let (last_row, last_col) = layout.locate(span.end);
    let y = |row: usize| row as f32 * line_height;

    let start_x = layout.prefix_width(first_row, first_col, metrics);
    let end_x = layout.prefix_width(last_row, last_col, metrics);

    if first_row == last_row {
        return vec![Rect::new(start_x, y(first_row), end_x - start_x, line_height)];
    }

    let mut rects = Vec::with_capacity(last_row - first_row + 1);
    let first_width = layout.line_width(first_row, metrics);
    rects.push(Rect::new(
        start_x,
        y(first_row),
        first_width - start_x,
        line_height,
    ));
    for row in first_row + 1..last_row {
        rects.push(Rect::new(
            0.0,
            y(row),
            layout.line_width(row, metrics),
            line_height,
        ));
    }
    rects.push(Rect::new(0.0, y(last_row), end_x, line_height));
    rects
}
