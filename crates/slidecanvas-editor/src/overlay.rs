//! A single text overlay and its geometry invariants.

use crate::config::EditorConfig;
use crate::geometry::{clamp_position, clamp_size, Rect, Size};
use crate::layout::TextMeasurer;
use crate::style::{FontSizeRange, StylePatch, TextStyle};
use slidecanvas_core::OverlayId;

/// Placement of an overlay on its slide surface.
///
/// `width`/`height` stay `None` (auto) until the overlay is resized; the
/// effective extent of an auto axis comes from the text measurer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub left: f64,
    pub top: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Everything needed to validate an overlay mutation.
#[derive(Clone, Copy)]
pub struct Constraints<'a> {
    /// Render surface of the overlay's slide.
    pub surface: Size,
    pub min_size: Size,
    pub font_sizes: FontSizeRange,
    pub measurer: &'a dyn TextMeasurer,
}

impl<'a> Constraints<'a> {
    pub fn new(surface: Size, config: &EditorConfig, measurer: &'a dyn TextMeasurer) -> Self {
        Self {
            surface,
            min_size: config.min_size,
            font_sizes: config.font_sizes,
            measurer,
        }
    }
}

/// One text element on one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    id: OverlayId,
    slide_index: usize,
    content: String,
    style: TextStyle,
    geometry: Geometry,
    /// Floor for auto-sized axes, taken from the last constraints applied.
    min_size: Size,
}

impl Overlay {
    /// Creates an overlay at the default placement for its slide.
    ///
    /// The placement starts near the slide centre and moves down-right by
    /// `stack_offset` for every overlay already on the slide.
    pub fn create(
        id: OverlayId,
        slide_index: usize,
        style: TextStyle,
        text: &str,
        existing_on_slide: usize,
        config: &EditorConfig,
        cx: &Constraints<'_>,
    ) -> Self {
        let offset = config.stack_offset * existing_on_slide as f64;
        let left = (cx.surface.width / 2.0 - 100.0 + offset)
            .floor()
            .max(config.edge_margin);
        let top = (cx.surface.height / 2.0 - 30.0 + offset)
            .floor()
            .max(config.edge_margin);

        let content = if text.trim().is_empty() {
            config.placeholder_text.clone()
        } else {
            text.to_string()
        };

        Self::seeded(id, slide_index, style, &content, left, top, cx)
    }

    /// Creates an overlay at an explicit position.
    pub fn seeded(
        id: OverlayId,
        slide_index: usize,
        mut style: TextStyle,
        text: &str,
        left: f64,
        top: f64,
        cx: &Constraints<'_>,
    ) -> Self {
        style.font_size_px = cx.font_sizes.coerce(style.font_size_px);
        let mut overlay = Self {
            id,
            slide_index,
            content: text.to_string(),
            style,
            geometry: Geometry {
                left,
                top,
                width: None,
                height: None,
            },
            min_size: cx.min_size,
        };
        overlay.revalidate(cx);
        overlay
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Effective size: explicit dimensions, or measured text for auto axes.
    pub fn extent(&self, measurer: &dyn TextMeasurer) -> Size {
        match (self.geometry.width, self.geometry.height) {
            (Some(width), Some(height)) => Size::new(width, height),
            (width, height) => {
                let measured = measurer.measure(&self.content, &self.style);
                Size::new(
                    width.unwrap_or_else(|| measured.width.max(self.min_size.width)),
                    height.unwrap_or_else(|| measured.height.max(self.min_size.height)),
                )
            }
        }
    }

    pub fn rect(&self, measurer: &dyn TextMeasurer) -> Rect {
        let extent = self.extent(measurer);
        Rect::new(
            self.geometry.left,
            self.geometry.top,
            extent.width,
            extent.height,
        )
    }

    /// Applies a style patch. Returns true if the overlay changed.
    pub fn set_style(&mut self, patch: &StylePatch, cx: &Constraints<'_>) -> bool {
        let changed = self.style.apply(patch, &cx.font_sizes);
        // An auto-sized overlay grows with its font.
        changed | self.revalidate(cx)
    }

    /// Replaces the text. Returns true if the overlay changed.
    pub fn set_content(&mut self, text: &str, cx: &Constraints<'_>) -> bool {
        let changed = self.content != text;
        if changed {
            self.content = text.to_string();
        }
        changed | self.revalidate(cx)
    }

    /// Moves and optionally resizes the overlay.
    ///
    /// `None` keeps the current value of that dimension. Size is clamped to
    /// `[min_size, surface]` first, then the position against the new extent.
    pub fn set_geometry(
        &mut self,
        left: f64,
        top: f64,
        width: Option<f64>,
        height: Option<f64>,
        cx: &Constraints<'_>,
    ) -> bool {
        let before = self.geometry;
        self.min_size = cx.min_size;
        let width = width.or(self.geometry.width);
        let height = height.or(self.geometry.height);

        if width.is_some() || height.is_some() {
            let current = self.extent(cx.measurer);
            let (w, h) = clamp_size(
                width.unwrap_or(current.width),
                height.unwrap_or(current.height),
                cx.min_size.width,
                cx.min_size.height,
                cx.surface.width,
                cx.surface.height,
            );
            self.geometry.width = width.map(|_| w);
            self.geometry.height = height.map(|_| h);
        }

        self.geometry.left = left;
        self.geometry.top = top;
        self.clamp_to_surface(cx);

        if self.geometry != before {
            tracing::trace!(
                "{} geometry -> ({}, {}) {:?}x{:?}",
                self.id,
                self.geometry.left,
                self.geometry.top,
                self.geometry.width,
                self.geometry.height
            );
            true
        } else {
            false
        }
    }

    /// Re-applies the clamp rules to the current geometry.
    pub fn revalidate(&mut self, cx: &Constraints<'_>) -> bool {
        let g = self.geometry;
        self.set_geometry(g.left, g.top, None, None, cx)
    }

    fn clamp_to_surface(&mut self, cx: &Constraints<'_>) {
        let extent = self.extent(cx.measurer);
        let (left, top) = clamp_position(
            self.geometry.left,
            self.geometry.top,
            extent.width,
            extent.height,
            cx.surface.width,
            cx.surface.height,
        );
        self.geometry.left = left;
        self.geometry.top = top;
    }
}
