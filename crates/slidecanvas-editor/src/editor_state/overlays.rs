//! Overlay lifecycle (add, delete, reset, select, seed) for editor state.

use super::EditorState;
use crate::notification::{DESIGN_SAVED_MESSAGE, TEXT_ADDED_MESSAGE};
use crate::overlay::{Constraints, Overlay};
use crate::seed::SeedOverlay;
use slidecanvas_core::{AppEvent, EditorError, GestureEvent, OverlayEvent, OverlayId};

impl EditorState {
    /// Adds a text overlay to the active slide using the current inputs.
    ///
    /// The overlay is placed at the default position for the slide. The
    /// content input resets to the placeholder afterwards.
    pub fn add_text(&mut self) -> Result<OverlayId, EditorError> {
        let slide = self.active_slide();
        let surface = self
            .surface_of(slide)
            .ok_or(EditorError::NoSlideSurface { index: slide })?;

        let id = self.registry.next_id();
        let existing = self.registry.count_for_slide(slide);
        let cx = Constraints::new(surface, &self.config, self.measurer.as_ref());
        let overlay = Overlay::create(
            id,
            slide,
            self.draft_style.clone(),
            &self.content_input,
            existing,
            &self.config,
            &cx,
        );
        self.registry.add(overlay);
        self.content_input = self.config.placeholder_text.clone();

        self.publish(AppEvent::Overlay(OverlayEvent::Added { id, slide }));
        self.notify(TEXT_ADDED_MESSAGE);
        Ok(id)
    }

    /// Adds one overlay at an explicit position. Returns `None` if the
    /// slide doesn't exist.
    pub fn add_seeded(&mut self, seed: &SeedOverlay) -> Option<OverlayId> {
        let Some(surface) = self.surface_of(seed.slide_index) else {
            tracing::warn!("skipping seed for missing slide {}", seed.slide_index);
            return None;
        };

        let id = self.registry.next_id();
        let cx = Constraints::new(surface, &self.config, self.measurer.as_ref());
        let overlay = Overlay::seeded(
            id,
            seed.slide_index,
            seed.style.clone(),
            seed.content,
            seed.left,
            seed.top,
            &cx,
        );
        self.registry.add(overlay);
        self.publish(AppEvent::Overlay(OverlayEvent::Added {
            id,
            slide: seed.slide_index,
        }));
        Some(id)
    }

    /// Populates the deck with the starter overlays. Returns how many were added.
    pub fn seed_default_content(&mut self) -> usize {
        let added = crate::seed::default_overlays()
            .iter()
            .filter_map(|seed| self.add_seeded(seed))
            .count();
        tracing::info!("seeded {} default overlays", added);
        added
    }

    /// Selects an overlay, or clears the selection with `None`.
    ///
    /// Selecting loads the overlay's content and style into the inputs.
    /// Returns true if the selection changed.
    pub fn select(&mut self, id: Option<OverlayId>) -> bool {
        let previous = self.registry.selected_id();
        self.registry.select(id);
        self.selection_settled(previous)
    }

    /// Deletes an overlay. Deleting an absent id is a no-op.
    pub fn delete_overlay(&mut self, id: OverlayId) -> bool {
        if self.gestures.active_overlay() == Some(id) {
            self.abort_gesture();
        }

        let previous = self.registry.selected_id();
        let Some(removed) = self.registry.remove(id) else {
            return false;
        };
        self.publish(AppEvent::Overlay(OverlayEvent::Removed {
            id,
            slide: removed.slide_index(),
        }));
        self.selection_settled(previous);
        true
    }

    /// Deletes the selected overlay, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.registry.selected_id() {
            Some(id) => self.delete_overlay(id),
            None => false,
        }
    }

    /// Removes every overlay on the active slide. Returns how many went.
    pub fn reset_active_slide(&mut self) -> usize {
        let slide = self.active_slide();
        let gesture_on_slide = self
            .gestures
            .active_overlay()
            .and_then(|id| self.registry.get(id))
            .is_some_and(|overlay| overlay.slide_index() == slide);
        if gesture_on_slide {
            self.abort_gesture();
        }

        let previous = self.registry.selected_id();
        let removed = self.registry.reset_slide(slide);
        tracing::info!("reset slide {} ({} overlays removed)", slide, removed);
        self.publish(AppEvent::Overlay(OverlayEvent::SlideReset {
            slide,
            removed,
        }));
        self.selection_settled(previous);
        removed
    }

    /// Moves and optionally resizes an overlay, clamped to its slide.
    ///
    /// `None` keeps the current width or height.
    pub fn set_geometry(
        &mut self,
        id: OverlayId,
        left: f64,
        top: f64,
        width: Option<f64>,
        height: Option<f64>,
    ) -> bool {
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
            .update(id, |overlay| {
                overlay.set_geometry(left, top, width, height, &cx)
            })
            .unwrap_or(false);
        if changed {
            self.publish_geometry(id);
        }
        changed
    }

    /// Confirms a save to the user. Overlays are not persisted.
    pub fn save(&mut self) {
        self.notify(DESIGN_SAVED_MESSAGE);
    }

    /// Ends the active gesture, if any, resuming the pager.
    pub fn abort_gesture(&mut self) {
        if let Some((id, mode)) = self.gestures.abort() {
            self.publish(AppEvent::Gesture(GestureEvent::Cancelled {
                id,
                kind: mode.kind(),
            }));
        }
    }

    /// Syncs the inputs after the registry's selection may have changed.
    pub(crate) fn selection_settled(&mut self, previous: Option<OverlayId>) -> bool {
        let current = self.registry.selected_id();
        if current == previous {
            return false;
        }

        match current.and_then(|id| self.registry.get(id)) {
            Some(overlay) => {
                self.content_input = overlay.content().to_string();
                self.draft_style = overlay.style().clone();
            }
            None => self.content_input.clear(),
        }

        tracing::debug!("selection {:?} -> {:?}", previous, current);
        self.publish(AppEvent::Overlay(OverlayEvent::SelectionChanged {
            selected: current,
        }));
        true
    }
}
