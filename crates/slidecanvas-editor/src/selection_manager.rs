use crate::overlay_store::OverlayStore;
use slidecanvas_core::OverlayId;

/// Tracks the single active overlay.
///
/// The selection is a relation, not ownership: clearing it never touches the
/// overlay, and an id that disappears from the store is pruned rather than
/// left dangling.
///
/// # Selection Model
///
/// - **Single selection**: at most one overlay is active at a time
/// - **Implicit deselect**: selecting B while A is active deselects A
/// - **Missing targets**: selecting an id the store doesn't hold is a no-op
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<OverlayId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidecanvas_editor::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected overlay.
    pub fn selected_id(&self) -> Option<OverlayId> {
        self.selected_id
    }

    pub fn is_selected(&self, id: OverlayId) -> bool {
        self.selected_id == Some(id)
    }

    /// Selects `id`, or clears the selection for `None`.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed. Selecting an id missing from `store`
    /// leaves the selection as it was and returns `false`.
    pub fn select(&mut self, store: &OverlayStore, id: Option<OverlayId>) -> bool {
        match id {
            Some(id) if !store.contains(id) => {
                tracing::debug!("ignoring selection of missing {}", id);
                false
            }
            _ if self.selected_id == id => false,
            _ => {
                self.selected_id = id;
                true
            }
        }
    }

    /// Clears the selection. Returns `true` if something was selected.
    pub fn deselect(&mut self) -> bool {
        self.selected_id.take().is_some()
    }

    /// Drops the selection if it points at an overlay no longer in `store`.
    pub fn prune(&mut self, store: &OverlayStore) -> bool {
        match self.selected_id {
            Some(id) if !store.contains(id) => {
                self.selected_id = None;
                true
            }
            _ => false,
        }
    }
}
