//! Insertion-ordered storage of overlays.

use crate::overlay::Overlay;
use slidecanvas_core::OverlayId;
use std::collections::HashMap;

/// Owns every overlay and remembers the order they were added in.
///
/// Insertion order is the list order in the side panel and the paint order
/// on the slide.
#[derive(Debug, Clone)]
pub struct OverlayStore {
    overlays: HashMap<OverlayId, Overlay>,
    insertion_order: Vec<OverlayId>,
    next_id: u64,
}

impl Default for OverlayStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayStore {
    pub fn new() -> Self {
        Self {
            overlays: HashMap::new(),
            insertion_order: Vec::new(),
            next_id: 1,
        }
    }

    /// Hands out a fresh id. Ids are never reused, even after removal.
    pub fn generate_id(&mut self) -> OverlayId {
        let id = OverlayId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Inserts an overlay. An overlay with the same id is replaced in place.
    pub fn insert(&mut self, overlay: Overlay) {
        let id = overlay.id();
        if id.get() >= self.next_id {
            self.next_id = id.get() + 1;
        }
        if self.overlays.insert(id, overlay).is_none() {
            self.insertion_order.push(id);
        }
    }

    pub fn remove(&mut self, id: OverlayId) -> Option<Overlay> {
        let removed = self.overlays.remove(&id)?;
        self.insertion_order.retain(|other| *other != id);
        Some(removed)
    }

    pub fn get(&self, id: OverlayId) -> Option<&Overlay> {
        self.overlays.get(&id)
    }

    pub fn get_mut(&mut self, id: OverlayId) -> Option<&mut Overlay> {
        self.overlays.get_mut(&id)
    }

    pub fn contains(&self, id: OverlayId) -> bool {
        self.overlays.contains_key(&id)
    }

    /// Overlays in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Overlay> + '_ {
        self.insertion_order
            .iter()
            .filter_map(move |id| self.overlays.get(id))
    }

    /// Removes every overlay matching the predicate and returns their ids.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<OverlayId>
    where
        F: FnMut(&Overlay) -> bool,
    {
        let doomed: Vec<OverlayId> = self
            .iter()
            .filter(|overlay| predicate(overlay))
            .map(Overlay::id)
            .collect();
        for id in &doomed {
            self.overlays.remove(id);
        }
        self.insertion_order.retain(|id| !doomed.contains(id));
        doomed
    }

    pub fn len(&self) -> usize {
        self.insertion_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion_order.is_empty()
    }
}
