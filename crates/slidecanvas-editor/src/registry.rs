//! The overlay registry: the single source of truth for overlays and selection.

use crate::overlay::Overlay;
use crate::overlay_store::OverlayStore;
use crate::selection_manager::SelectionManager;
use slidecanvas_core::OverlayId;

/// Ordered overlays across all slides plus the current selection.
///
/// Every mutation bumps [`revision`](Self::revision) so hosts can tell when
/// derived views are stale.
#[derive(Debug, Clone, Default)]
pub struct OverlayRegistry {
    store: OverlayStore,
    selection: SelectionManager,
    revision: u64,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves an id for an overlay about to be added.
    pub fn next_id(&mut self) -> OverlayId {
        self.store.generate_id()
    }

    pub fn add(&mut self, overlay: Overlay) -> OverlayId {
        let id = overlay.id();
        tracing::debug!("adding {} to slide {}", id, overlay.slide_index());
        self.store.insert(overlay);
        self.bump();
        id
    }

    /// Removes an overlay, clearing the selection if it pointed at it.
    ///
    /// Removing an absent id is a no-op.
    pub fn remove(&mut self, id: OverlayId) -> Option<Overlay> {
        let Some(removed) = self.store.remove(id) else {
            tracing::debug!("remove: {} not present", id);
            return None;
        };
        self.selection.prune(&self.store);
        self.bump();
        Some(removed)
    }

    /// Selects an overlay or clears the selection. Returns true if it changed.
    pub fn select(&mut self, id: Option<OverlayId>) -> bool {
        let changed = self.selection.select(&self.store, id);
        if changed {
            self.bump();
        }
        changed
    }

    pub fn selected_id(&self) -> Option<OverlayId> {
        self.selection.selected_id()
    }

    pub fn selected(&self) -> Option<&Overlay> {
        self.selected_id().and_then(|id| self.store.get(id))
    }

    pub fn is_selected(&self, id: OverlayId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn get(&self, id: OverlayId) -> Option<&Overlay> {
        self.store.get(id)
    }

    /// Mutates an overlay in place; `f` reports whether it changed anything.
    ///
    /// Returns `None` if the id is absent. The revision only moves on change.
    pub fn update<F>(&mut self, id: OverlayId, f: F) -> Option<bool>
    where
        F: FnOnce(&mut Overlay) -> bool,
    {
        let overlay = self.store.get_mut(id)?;
        let changed = f(overlay);
        if changed {
            self.bump();
        }
        Some(changed)
    }

    /// Overlays on one slide, in insertion order.
    ///
    /// The iterator is lazy; call again to restart it.
    pub fn overlays_for_slide(&self, slide_index: usize) -> impl Iterator<Item = &Overlay> + '_ {
        self.store
            .iter()
            .filter(move |overlay| overlay.slide_index() == slide_index)
    }

    pub fn count_for_slide(&self, slide_index: usize) -> usize {
        self.overlays_for_slide(slide_index).count()
    }

    /// Removes every overlay on `slide_index` and returns how many went.
    ///
    /// The selection is cleared only if it pointed into that slide.
    pub fn reset_slide(&mut self, slide_index: usize) -> usize {
        let removed = self
            .store
            .remove_where(|overlay| overlay.slide_index() == slide_index);
        if removed.is_empty() {
            return 0;
        }
        self.selection.prune(&self.store);
        self.bump();
        tracing::debug!("reset slide {}: removed {}", slide_index, removed.len());
        removed.len()
    }

    /// All overlays in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Overlay> + '_ {
        self.store.iter()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
