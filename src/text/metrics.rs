//! Font metrics used to measure text in pixels.
//!
//! Controls never rasterize glyphs; they only need advance widths, kerning
//! and the font height to place the caret and selection boxes. Two metric
//! sources are provided:
//!
//! - [`MonospaceMetrics`]: every cell has the same width, wide characters
//!   take two cells (via `unicode-width`).
//! - [`BitmapFontMetrics`]: per-glyph x-advance and kerning pairs, scaled,
//!   as described by a bitmap font's character table.

use std::collections::HashMap;

use crate::unicode::{WidthMethod, display_width_char};

/// Source of glyph measurements for one font at one size.
pub trait FontMetrics {
    /// Horizontal advance of a single character in pixels.
    fn advance(&self, ch: char) -> f32;

    /// Kerning adjustment applied between `prev` and `next`.
    fn kerning(&self, _prev: char, _next: char) -> f32 {
        0.0
    }

    /// Height of the font's glyph box in pixels.
    fn font_height(&self) -> f32;

    /// Per-character widths of a run, kerning included.
    ///
    /// Entry `i` is what char `i` adds to the run's width, so the prefix
    /// sums of this vector are the pixel offsets of every caret position.
    fn char_widths(&self, text: &str) -> Vec<f32> {
        let mut widths = Vec::with_capacity(text.len());
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            widths.push(self.advance(ch) + prev.map_or(0.0, |p| self.kerning(p, ch)));
            prev = Some(ch);
        }
        widths
    }

    /// Width of a run of text in pixels.
    fn text_width(&self, text: &str) -> f32 {
        self.char_widths(text).iter().sum()
    }
}

/// Fixed-cell metrics: one cell per column reported by `unicode-width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    cell_width: f32,
    font_height: f32,
    method: WidthMethod,
}

impl MonospaceMetrics {
    /// Create metrics for a given cell size.
    #[must_use]
    pub fn new(cell_width: f32, font_height: f32) -> Self {
        Self {
            cell_width,
            font_height,
            method: WidthMethod::WcWidth,
        }
    }

    /// Use a different width method for ambiguous-width characters.
    #[must_use]
    pub fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.method = method;
        self
    }

    /// Width of a single cell.
    #[must_use]
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }
}

impl FontMetrics for MonospaceMetrics {
    fn advance(&self, ch: char) -> f32 {
        display_width_char(ch, self.method) as f32 * self.cell_width
    }

    fn font_height(&self) -> f32 {
        self.font_height
    }
}

/// Bitmap-font metrics from a glyph table.
///
/// Characters missing from the table measure as zero width. Kerning skips
/// over them and pairs the known glyphs on either side.
#[derive(Clone, Debug, Default)]
pub struct BitmapFontMetrics {
    advances: HashMap<char, f32>,
    kernings: HashMap<(char, char), f32>,
    line_height: f32,
    scale: f32,
}

impl BitmapFontMetrics {
    /// Create an empty glyph table with a line height (unscaled).
    #[must_use]
    pub fn new(line_height: f32) -> Self {
        Self {
            advances: HashMap::new(),
            kernings: HashMap::new(),
            line_height,
            scale: 1.0,
        }
    }

    /// Add a glyph with its x-advance.
    #[must_use]
    pub fn with_glyph(mut self, ch: char, x_advance: f32) -> Self {
        self.advances.insert(ch, x_advance);
        self
    }

    /// Add a kerning amount applied when `second` follows `first`.
    #[must_use]
    pub fn with_kerning(mut self, first: char, second: char, amount: f32) -> Self {
        self.kernings.insert((first, second), amount);
        self
    }

    /// Scale all measurements (font size / native font size).
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Check if a glyph is present.
    #[must_use]
    pub fn has_glyph(&self, ch: char) -> bool {
        self.advances.contains_key(&ch)
    }
}

impl FontMetrics for BitmapFontMetrics {
    fn advance(&self, ch: char) -> f32 {
        self.advances.get(&ch).map_or(0.0, |a| a * self.scale)
    }

    fn kerning(&self, prev: char, next: char) -> f32 {
        if !self.has_glyph(prev) || !self.has_glyph(next) {
            return 0.0;
        }
        self.kernings
            .get(&(prev, next))
            .map_or(0.0, |k| k * self.scale)
    }

    fn font_height(&self) -> f32 {
        self.line_height * self.scale
    }

    fn char_widths(&self, text: &str) -> Vec<f32> {
        // Unknown glyphs keep the previous known glyph as the kerning partner.
        let mut widths = Vec::with_capacity(text.len());
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            if !self.has_glyph(ch) {
                widths.push(0.0);
                continue;
            }
            widths.push(self.advance(ch) + prev.map_or(0.0, |p| self.kerning(p, ch)));
            prev = Some(ch);
        }
        widths
    }
}
