//! Text styling for the glyph run, placeholder and caret.

use crate::color::Rgba;

/// Style applied to a control's text run.
///
/// Glyph shapes and advances come from the active
/// [`FontMetrics`](crate::text::FontMetrics); the style only carries what
/// the control itself needs to lay out and paint the text.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    /// Text fill color.
    pub fill: Rgba,
    /// Explicit line height; `None` derives it from the font.
    pub line_height: Option<f32>,
    /// Outline thickness added to the derived line height.
    pub stroke_thickness: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fill: Rgba::BLACK,
            line_height: None,
            stroke_thickness: 0.0,
        }
    }
}

impl TextStyle {
    /// Create a style builder.
    #[must_use]
    pub fn builder() -> TextStyleBuilder {
        TextStyleBuilder::default()
    }

    /// Default placeholder style: grey fill.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            fill: Rgba::from_rgb_u8(0x99, 0x99, 0x99),
            ..Self::default()
        }
    }

    /// Line height for a font of the given height.
    ///
    /// An explicit line height wins; otherwise the font height plus the
    /// stroke thickness.
    #[must_use]
    pub fn resolve_line_height(&self, font_height: f32) -> f32 {
        self.line_height
            .unwrap_or(font_height + self.stroke_thickness)
    }
}

/// Builder for [`TextStyle`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TextStyleBuilder {
    style: TextStyle,
}

impl TextStyleBuilder {
    /// Set the fill color.
    #[must_use]
    pub fn fill(mut self, color: Rgba) -> Self {
        self.style.fill = color;
        self
    }

    /// Set an explicit line height.
    #[must_use]
    pub fn line_height(mut self, height: f32) -> Self {
        self.style.line_height = Some(height);
        self
    }

    /// Set the stroke thickness.
    #[must_use]
    pub fn stroke_thickness(mut self, thickness: f32) -> Self {
        self.style.stroke_thickness = thickness;
        self
    }

    /// Build the style.
    #[must_use]
    pub fn build(self) -> TextStyle {
        self.style
    }
}
