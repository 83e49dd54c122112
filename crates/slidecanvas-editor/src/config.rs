//! Tunables for the editor engine.

use crate::geometry::{Size, MIN_HEIGHT, MIN_WIDTH};
use crate::style::{FontSizeRange, TextStyle};
use std::time::Duration;

/// Text used for a new overlay when the content input is empty.
pub const PLACEHOLDER_TEXT: &str = "New Text";

/// Engine configuration. Hosts usually build this from persisted settings.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Smallest size an overlay can be resized to.
    pub min_size: Size,
    /// Per-overlay offset applied to default placement on a slide.
    pub stack_offset: f64,
    /// Minimum distance of a default placement from the slide's top-left edge.
    pub edge_margin: f64,
    /// Pointer travel below which a press counts as a click.
    pub click_slop: f64,
    pub placeholder_text: String,
    pub font_sizes: FontSizeRange,
    /// Style of the property inputs before anything is selected.
    pub default_style: TextStyle,
    pub toast_duration: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_size: Size::new(MIN_WIDTH, MIN_HEIGHT),
            stack_offset: 30.0,
            edge_margin: 20.0,
            click_slop: 3.0,
            placeholder_text: PLACEHOLDER_TEXT.to_string(),
            font_sizes: FontSizeRange::default(),
            default_style: TextStyle::default(),
            toast_duration: Duration::from_millis(3000),
        }
    }
}
