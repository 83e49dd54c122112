//! Derivation of the editor's dependent views.
//!
//! The side panel, the property form, the element counter, the on-canvas
//! boxes and the slide navigation are all recomputed from the registry and
//! the active slide. Nothing here holds state of its own, so equal inputs
//! always produce equal views.

use crate::geometry::Rect;
use crate::layout::TextMeasurer;
use crate::registry::OverlayRegistry;
use crate::style::{TextAlign, TextStyle};
use serde::Serialize;
use slidecanvas_core::OverlayId;

/// Heading shown when the active slide has no overlays.
pub const EMPTY_TITLE: &str = "No text elements";
/// Hint shown under [`EMPTY_TITLE`].
pub const EMPTY_HINT: &str = "Add some text to get started";

/// One row of the side-panel list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRow {
    pub id: OverlayId,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SidePanel {
    pub rows: Vec<PanelRow>,
}

impl SidePanel {
    /// True when the panel should show the empty state.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Field values of the property form for the selected overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormFields {
    pub content: String,
    pub font_family: String,
    pub font_size_px: f64,
    pub text_color_hex: String,
    pub background_hex: String,
    pub align: TextAlign,
}

impl FormFields {
    fn from_overlay(content: &str, style: &TextStyle) -> Self {
        Self {
            content: content.to_string(),
            font_family: style.font_family.to_string(),
            font_size_px: style.font_size_px,
            text_color_hex: style.text_color.to_hex(),
            background_hex: style.background_color.to_hex(),
            align: style.text_align,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "fields", rename_all = "lowercase")]
pub enum PropertyForm {
    /// Nothing selected on this slide.
    Disabled,
    Editing(FormFields),
}

impl PropertyForm {
    pub fn fields(&self) -> Option<&FormFields> {
        match self {
            PropertyForm::Disabled => None,
            PropertyForm::Editing(fields) => Some(fields),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, PropertyForm::Editing(_))
    }
}

/// On-canvas projection of one overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayBox {
    pub id: OverlayId,
    pub rect: Rect,
    pub style: TextStyle,
    pub content: String,
    /// Highlighted as the selection.
    pub active: bool,
}

/// Slide counter and indicator dots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideNav {
    /// One-based number of the visible slide.
    pub current: usize,
    pub total: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub indicators: Vec<bool>,
}

impl SlideNav {
    fn new(active_slide: usize, slide_count: usize) -> Self {
        Self {
            current: active_slide + 1,
            total: slide_count,
            can_go_previous: active_slide > 0,
            can_go_next: active_slide + 1 < slide_count,
            indicators: (0..slide_count).map(|i| i == active_slide).collect(),
        }
    }
}

/// Everything a host renders, derived for one slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorView {
    pub active_slide: usize,
    pub panel: SidePanel,
    pub form: PropertyForm,
    pub element_count: usize,
    pub boxes: Vec<OverlayBox>,
    pub nav: SlideNav,
}

/// Derives every dependent view for `active_slide`.
pub fn derive_view(
    registry: &OverlayRegistry,
    active_slide: usize,
    slide_count: usize,
    measurer: &dyn TextMeasurer,
) -> EditorView {
    let mut rows = Vec::new();
    let mut boxes = Vec::new();

    for overlay in registry.overlays_for_slide(active_slide) {
        let active = registry.is_selected(overlay.id());
        rows.push(PanelRow {
            id: overlay.id(),
            label: overlay.content().to_string(),
            active,
        });
        boxes.push(OverlayBox {
            id: overlay.id(),
            rect: overlay.rect(measurer),
            style: overlay.style().clone(),
            content: overlay.content().to_string(),
            active,
        });
    }

    let form = registry
        .selected()
        .filter(|overlay| overlay.slide_index() == active_slide)
        .map(|overlay| {
            PropertyForm::Editing(FormFields::from_overlay(overlay.content(), overlay.style()))
        })
        .unwrap_or(PropertyForm::Disabled);

    EditorView {
        active_slide,
        element_count: rows.len(),
        panel: SidePanel { rows },
        form,
        boxes,
        nav: SlideNav::new(active_slide, slide_count),
    }
}
