//! Line layout: splitting text into display lines and mapping between
//! char offsets and pixel positions.
//!
//! A [`LineLayout`] is derived data, rebuilt whenever the text, the wrap
//! width or the font changes. Each line remembers the char offset where it
//! starts and whether the break that ended it consumed a character (a hard
//! `'\n'` or the whitespace a soft wrap replaced). Walking the lines
//! therefore advances by `len + 1` across consuming breaks and by `len`
//! across breaks forced in the middle of a word.

// Wrapping logic reads best as a single loop
#![allow(clippy::too_many_lines)]

use crate::geometry::Point;
use crate::text::FontMetrics;

/// Break character used to join wrapped lines.
pub const LINE_BREAK: char = '\n';

/// One display line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutLine {
    text: String,
    start: usize,
    len: usize,
    separator: bool,
}

impl LayoutLine {
    fn new(chars: &[char], base: usize, range: std::ops::Range<usize>, separator: bool) -> Self {
        Self {
            text: chars[range.clone()].iter().collect(),
            start: base + range.start,
            len: range.len(),
            separator,
        }
    }

    /// Line content without its break.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Char offset of the line's first character in the source text.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of chars on the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the line has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the break after this line consumed a source character.
    #[must_use]
    pub fn has_separator(&self) -> bool {
        self.separator
    }

    /// Positions this line occupies in the source text, break included.
    #[must_use]
    pub fn span(&self) -> usize {
        self.len + usize::from(self.separator)
    }
}

/// Ordered display lines for a control's text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineLayout {
    lines: Vec<LayoutLine>,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self::single("")
    }
}

impl LineLayout {
    /// The whole text as one line.
    #[must_use]
    pub fn single(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self {
            lines: vec![LayoutLine::new(&chars, 0, 0..chars.len(), false)],
        }
    }

    /// Split at hard line breaks and, when `max_width` is set, word-wrap
    /// every hard line to fit.
    ///
    /// Soft breaks prefer the last whitespace on the line, which the break
    /// replaces. Words wider than a full line are broken between
    /// characters. A line always holds at least one character, even if that
    /// character alone is wider than `max_width`.
    #[must_use]
    pub fn wrap(text: &str, max_width: Option<f32>, metrics: &dyn FontMetrics) -> Self {
        let mut lines = Vec::new();
        let mut base = 0usize;
        let hard_lines: Vec<&str> = text.split(LINE_BREAK).collect();
        let last_hard = hard_lines.len() - 1;

        for (hard_idx, hard_line) in hard_lines.iter().enumerate() {
            let chars: Vec<char> = hard_line.chars().collect();
            let hard_break = hard_idx < last_hard;

            match max_width {
                Some(max_width) => {
                    wrap_hard_line(&chars, base, max_width, metrics, &mut lines);
                }
                None => lines.push(LayoutLine::new(&chars, base, 0..chars.len(), false)),
            }
            if let Some(last) = lines.last_mut() {
                last.separator = hard_break;
            }
            base += chars.len() + 1;
        }

        Self { lines }
    }

    /// The display lines.
    #[must_use]
    pub fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    /// The display lines as string slices.
    #[must_use]
    pub fn line_texts(&self) -> Vec<&str> {
        self.lines.iter().map(LayoutLine::text).collect()
    }

    /// Number of display lines (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false: an empty text still has one empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with [`LINE_BREAK`].
    #[must_use]
    pub fn wrapped_text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push(LINE_BREAK);
            }
            out.push_str(&line.text);
        }
        out
    }

    /// Total source positions covered by the layout.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.lines.last().map_or(0, |l| l.start + l.len)
    }

    /// Find the `(line, column)` of a char offset.
    ///
    /// An offset equal to a line's length stays on that line (caret at the
    /// end of the line). Offsets past the end clamp to the end of the last
    /// line.
    #[must_use]
    pub fn locate(&self, char_index: usize) -> (usize, usize) {
        let mut remaining = char_index;
        let last = self.lines.len().saturating_sub(1);
        for (row, line) in self.lines.iter().enumerate() {
            if line.len < remaining && row < last {
                remaining = remaining.saturating_sub(line.span());
            } else {
                return (row, remaining.min(line.len));
            }
        }
        (0, 0)
    }

    /// Char offset of `(line, column)`, both clamped.
    #[must_use]
    pub fn offset_of(&self, line: usize, column: usize) -> usize {
        let line = line.min(self.lines.len().saturating_sub(1));
        self.lines
            .get(line)
            .map_or(0, |l| l.start + column.min(l.len))
    }

    /// Pixel width of the first `column` chars of `line`.
    #[must_use]
    pub fn prefix_width(&self, line: usize, column: usize, metrics: &dyn FontMetrics) -> f32 {
        self.lines.get(line).map_or(0.0, |l| {
            metrics
                .char_widths(&l.text)
                .iter()
                .take(column)
                .sum()
        })
    }

    /// Pixel width of a whole line.
    #[must_use]
    pub fn line_width(&self, line: usize, metrics: &dyn FontMetrics) -> f32 {
        self.lines
            .get(line)
            .map_or(0.0, |l| metrics.text_width(&l.text))
    }

    /// Text-local pixel position of a char offset.
    ///
    /// `x` is the width of the line's text before the offset, `y` is the
    /// line index times the line height.
    #[must_use]
    pub fn position_of(
        &self,
        char_index: usize,
        metrics: &dyn FontMetrics,
        line_height: f32,
    ) -> Point {
        let (row, col) = self.locate(char_index);
        Point::new(
            self.prefix_width(row, col, metrics),
            row as f32 * line_height,
        )
    }

    /// Char offset under a text-local pixel position.
    ///
    /// The line is `floor(y / line_height)` clamped to the layout; within
    /// the line, widths accumulate char by char and the first char whose
    /// right edge passes `x` is hit. A point exactly on a char boundary
    /// resolves to that boundary, so zero-width chars (combining marks)
    /// stay attached to the char before them. A position past the line's
    /// right edge maps to the end of the line.
    #[must_use]
    pub fn index_at(&self, pos: Point, metrics: &dyn FontMetrics, line_height: f32) -> usize {
        let last = self.lines.len().saturating_sub(1);
        let row = if line_height > 0.0 && pos.y > 0.0 {
            ((pos.y / line_height).floor() as usize).min(last)
        } else {
            0
        };
        let Some(line) = self.lines.get(row) else {
            return 0;
        };

        let widths = metrics.char_widths(&line.text);
        let total: f32 = widths.iter().sum();
        let column = if pos.x < total {
            let mut acc = 0.0;
            widths
                .iter()
                .position(|w| {
                    acc += w;
                    acc > pos.x
                })
                .unwrap_or(line.len)
        } else {
            line.len
        };

        line.start + column
    }
}

fn wrap_hard_line(
    chars: &[char],
    base: usize,
    max_width: f32,
    metrics: &dyn FontMetrics,
    lines: &mut Vec<LayoutLine>,
) {
    let line: String = chars.iter().collect();
    let widths = metrics.char_widths(&line);

    let mut start = 0usize;
    let mut width = 0.0f32;
    let mut last_ws: Option<usize> = None;
    let mut i = 0usize;

    while i < chars.len() {
        let ch = chars[i];
        let w = widths[i];

        if width + w > max_width && i > start {
            let (end, next_start, separator) = if ch.is_whitespace() {
                (i, i + 1, true)
            } else if let Some(ws) = last_ws {
                (ws, ws + 1, true)
            } else {
                (i, i, false)
            };
            lines.push(LayoutLine::new(chars, base, start..end, separator));

            start = next_start;
            i = i.max(start);
            width = widths[start..i].iter().sum();
            last_ws = (start..i).rev().find(|&j| chars[j].is_whitespace());
            continue;
        }

        if ch.is_whitespace() {
            last_ws = Some(i);
        }
        width += w;
        i += 1;
    }

    lines.push(LayoutLine::new(chars, base, start..chars.len(), false));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MonospaceMetrics;

    fn mono() -> MonospaceMetrics {
        MonospaceMetrics::new(10.0, 20.0)
    }

    #[test]
    fn test_single_line_keeps_everything() {
        let layout = LineLayout::single("hello world");
        assert_eq!(layout.line_texts(), vec!["hello world"]);
        assert_eq!(layout.locate(11), (0, 11));
        assert_eq!(layout.locate(99), (0, 11));
    }

    #[test]
    fn test_hard_breaks_without_wrap_width() {
        let layout = LineLayout::wrap("abc\nde", None, &mono());
        assert_eq!(layout.line_texts(), vec!["abc", "de"]);
        assert!(layout.lines()[0].has_separator());
        assert!(!layout.lines()[1].has_separator());
        assert_eq!(layout.wrapped_text(), "abc\nde");
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let layout = LineLayout::wrap("abc\n", None, &mono());
        assert_eq!(layout.line_texts(), vec!["abc", ""]);
        assert_eq!(layout.locate(4), (1, 0));
    }

    #[test]
    fn test_word_wrap_breaks_at_whitespace() {
        // 4 cells per line
        let layout = LineLayout::wrap("abc def", Some(40.0), &mono());
        assert_eq!(layout.line_texts(), vec!["abc", "def"]);
        assert_eq!(layout.lines()[1].start(), 4);
        assert_eq!(layout.wrapped_text().chars().count(), 7);
    }

    #[test]
    fn test_word_wrap_on_overflowing_space() {
        let layout = LineLayout::wrap("abcd efg", Some(40.0), &mono());
        assert_eq!(layout.line_texts(), vec!["abcd", "efg"]);
        assert_eq!(layout.lines()[1].start(), 5);
    }

    #[test]
    fn test_long_word_breaks_between_chars() {
        let layout = LineLayout::wrap("abcdefgh", Some(30.0), &mono());
        assert_eq!(layout.line_texts(), vec!["abc", "def", "gh"]);
        assert!(!layout.lines()[0].has_separator());
        assert_eq!(layout.lines()[1].start(), 3);
        // Offset 3 is the end of the first line; 4 is inside the second
        assert_eq!(layout.locate(3), (0, 3));
        assert_eq!(layout.locate(4), (1, 1));
        assert_eq!(layout.char_count(), 8);
    }

    #[test]
    fn test_char_wider_than_line_still_placed() {
        let layout = LineLayout::wrap("漢字", Some(10.0), &mono());
        assert_eq!(layout.line_texts(), vec!["漢", "字"]);
    }

    #[test]
    fn test_empty_text_has_one_line() {
        let layout = LineLayout::wrap("", Some(40.0), &mono());
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.locate(0), (0, 0));
        assert_eq!(layout.wrapped_text(), "");
    }

    #[test]
    fn test_locate_walks_line_spans() {
        let layout = LineLayout::wrap("abc\nde", None, &mono());
        assert_eq!(layout.locate(0), (0, 0));
        assert_eq!(layout.locate(3), (0, 3));
        assert_eq!(layout.locate(4), (1, 0));
        assert_eq!(layout.locate(5), (1, 1));
        assert_eq!(layout.locate(6), (1, 2));
        assert_eq!(layout.offset_of(1, 1), 5);
        assert_eq!(layout.offset_of(7, 9), 6);
    }

    #[test]
    fn test_position_of() {
        let m = mono();
        let layout = LineLayout::wrap("abc\nde", None, &m);
        assert_eq!(layout.position_of(2, &m, 20.0), Point::new(20.0, 0.0));
        assert_eq!(layout.position_of(5, &m, 20.0), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_index_at() {
        let m = mono();
        let layout = LineLayout::wrap("abc\nde", None, &m);
        // Inside the second char of line 0
        assert_eq!(layout.index_at(Point::new(15.0, 5.0), &m, 20.0), 1);
        // Right of the text on line 1 maps to its end
        assert_eq!(layout.index_at(Point::new(500.0, 25.0), &m, 20.0), 6);
        // Below the last line clamps to it, above the first clamps to 0
        assert_eq!(layout.index_at(Point::new(0.0, 900.0), &m, 20.0), 4);
        assert_eq!(layout.index_at(Point::new(-5.0, -5.0), &m, 20.0), 0);
    }

    #[test]
    fn test_index_at_exact_boundary() {
        let m = mono();
        let layout = LineLayout::wrap("abc", None, &m);
        assert_eq!(layout.index_at(Point::new(0.0, 5.0), &m, 20.0), 0);
        assert_eq!(layout.index_at(Point::new(10.0, 5.0), &m, 20.0), 1);
        assert_eq!(layout.index_at(Point::new(20.0, 5.0), &m, 20.0), 2);
    }

    #[test]
    fn test_index_at_skips_combining_marks() {
        let m = mono();
        // 'a' + combining acute accent + 'b': offsets 1 and 2 both sit at x = 10
        let layout = LineLayout::wrap("a\u{0301}b", None, &m);
        assert_eq!(layout.position_of(2, &m, 20.0), Point::new(10.0, 0.0));
        assert_eq!(layout.index_at(Point::new(10.0, 5.0), &m, 20.0), 2);
        assert_eq!(layout.index_at(Point::new(5.0, 5.0), &m, 20.0), 0);
        assert_eq!(layout.index_at(Point::new(15.0, 5.0), &m, 20.0), 2);
    }
}
