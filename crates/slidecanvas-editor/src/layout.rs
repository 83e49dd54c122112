//! Intrinsic text extents for auto-sized overlays.
//!
//! An overlay without an explicit width or height takes the size its text
//! needs. Hosts that can measure real glyphs plug in their own
//! [`TextMeasurer`]; the engine falls back to [`ApproxTextMetrics`].

use crate::geometry::Size;
use crate::style::TextStyle;

/// Measures the box an overlay's text occupies, padding included.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Size;
}

/// Monospace-style approximation of rendered text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxTextMetrics {
    /// Horizontal padding on each side.
    pub padding_x: f64,
    /// Vertical padding on each side.
    pub padding_y: f64,
    /// Average glyph advance as a fraction of the font size.
    pub char_width_ratio: f64,
    /// Line height as a fraction of the font size.
    pub line_height_ratio: f64,
}

impl Default for ApproxTextMetrics {
    fn default() -> Self {
        Self {
            padding_x: 20.0,
            padding_y: 16.0,
            char_width_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for ApproxTextMetrics {
    fn measure(&self, text: &str, style: &TextStyle) -> Size {
        let font_size = if style.font_size_px.is_finite() && style.font_size_px > 0.0 {
            style.font_size_px
        } else {
            0.0
        };

        let lines = text.lines().count().max(1);
        let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);

        let width = longest as f64 * font_size * self.char_width_ratio + 2.0 * self.padding_x;
        let height = lines as f64 * font_size * self.line_height_ratio + 2.0 * self.padding_y;

        Size::new(width, height)
    }
}
