//! Property setters for the selected overlay.
//!
//! Every input updates the draft style (what the next "add" uses) and, when
//! an overlay is selected, that overlay.

use super::EditorState;
use crate::overlay::Constraints;
use crate::style::{Color, FontFamily, StylePatch, TextAlign};
use slidecanvas_core::{AppEvent, OverlayEvent, OverlayId};

impl EditorState {
    pub fn set_font_family(&mut self, family: FontFamily) -> bool {
        self.apply_style(StylePatch::default().font_family(family))
    }

    pub fn set_text_align(&mut self, align: TextAlign) -> bool {
        self.apply_style(StylePatch::default().text_align(align))
    }

    /// Sets the font size, coerced into the configured range.
    pub fn set_font_size(&mut self, px: f64) -> bool {
        self.apply_style(StylePatch::default().font_size(px))
    }

    /// Sets the text color from a picker value; malformed values fall back to white.
    pub fn set_text_color(&mut self, value: &str) -> bool {
        let color = Color::parse_or(value, Color::DEFAULT_TEXT);
        self.apply_style(StylePatch::default().text_color(color))
    }

    /// Sets the background color; malformed values fall back to `#8b5a2b`.
    pub fn set_background_color(&mut self, value: &str) -> bool {
        let color = Color::parse_or(value, Color::DEFAULT_BACKGROUND);
        self.apply_style(StylePatch::default().background_color(color))
    }

    /// Updates the content input, and the selected overlay's text with it.
    pub fn set_content_input(&mut self, text: &str) -> bool {
        self.content_input = text.to_string();
        match self.registry.selected_id() {
            Some(id) => self.edit_content(id, text),
            None => false,
        }
    }

    /// In-place text edit of an overlay. Returns true if the text changed.
    pub fn edit_content(&mut self, id: OverlayId, text: &str) -> bool {
        let Some(surface) = self
            .registry
            .get(id)
            .and_then(|overlay| self.surface_of(overlay.slide_index()))
        else {
            tracing::debug!("edit_content: {} not present", id);
            return false;
        };

        let cx = Constraints::new(surface, &self.config, self.measurer.as_ref());
        let changed = self
            .registry
            .update(id, |overlay| overlay.set_content(text, &cx))
            .unwrap_or(false);

        if self.registry.is_selected(id) {
            self.content_input = text.to_string();
        }
        if changed {
            self.publish(AppEvent::Overlay(OverlayEvent::ContentChanged { id }));
        }
        changed
    }

    /// Applies a style patch to the draft and the selected overlay.
    ///
    /// Returns true if the selected overlay changed.
    pub fn apply_style(&mut self, patch: StylePatch) -> bool {
        self.draft_style.apply(&patch, &self.config.font_sizes);

        let Some(id) = self.registry.selected_id() else {
            return false;
        };
        let Some(surface) = self
            .registry
            .get(id)
            .and_then(|overlay| self.surface_of(overlay.slide_index()))
        else {
            return false;
        };

        let cx = Constraints::new(surface, &self.config, self.measurer.as_ref());
        let changed = self
            .registry
            .update(id, |overlay| overlay.set_style(&patch, &cx))
            .unwrap_or(false);
        if changed {
            self.publish(AppEvent::Overlay(OverlayEvent::StyleChanged { id }));
        }
        changed
    }
}
