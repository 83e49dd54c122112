//! Slide paging for editor state.

use super::EditorState;
use crate::pager::SlidePager;
use slidecanvas_core::{AppEvent, EditorError, SlideEvent};

impl EditorState {
    /// Shows slide `index`.
    ///
    /// Returns `Ok(false)` when `index` is already active.
    pub fn go_to_slide(&mut self, index: usize) -> Result<bool, EditorError> {
        let slide_count = self.slide_count();
        if index >= slide_count {
            return Err(EditorError::InvalidSlide { index, slide_count });
        }
        Ok(self.page(|pager| pager.go_to(index)))
    }

    /// Advances one slide. Returns false on the last slide.
    pub fn next_slide(&mut self) -> bool {
        self.page(|pager| pager.next())
    }

    /// Goes back one slide. Returns false on the first slide.
    pub fn previous_slide(&mut self) -> bool {
        self.page(|pager| pager.previous())
    }

    fn page<F>(&mut self, step: F) -> bool
    where
        F: FnOnce(&mut dyn SlidePager) -> bool,
    {
        let from = self.active_slide();
        let to = {
            let mut pager = self.pager.borrow_mut();
            step(&mut *pager);
            pager.active_index()
        };
        if from == to {
            return false;
        }

        // An in-flight gesture belongs to the slide being left.
        self.abort_gesture();

        tracing::info!("slide {} -> {}", from + 1, to + 1);
        self.publish(AppEvent::Slide(SlideEvent::Changed { from, to }));
        true
    }
}
