//! Adapter over the slide carousel.

use crate::geometry::Size;

/// What the editor needs from the carousel hosting the slides.
pub trait SlidePager {
    /// Zero-based index of the visible slide.
    fn active_index(&self) -> usize;

    fn slide_count(&self) -> usize;

    /// Shows slide `index`. Returns false if `index` is out of range.
    fn go_to(&mut self, index: usize) -> bool;

    /// Advances one slide. Returns false on the last slide.
    fn next(&mut self) -> bool;

    /// Goes back one slide. Returns false on the first slide.
    fn previous(&mut self) -> bool;

    /// Render surface of slide `index`, if it exists.
    fn slide_surface(&self, index: usize) -> Option<Size>;

    /// Enables or disables swipe paging.
    fn set_allow_gestures(&mut self, allow: bool);

    /// Whether a swipe would currently page.
    fn allows_gestures(&self) -> bool;

    /// Disables swiping for the duration of an overlay gesture.
    fn suspend_gestures(&mut self);

    /// Undoes one [`suspend_gestures`](Self::suspend_gestures).
    fn resume_gestures(&mut self);
}

/// In-memory pager over a fixed number of equally sized slides.
#[derive(Debug, Clone)]
pub struct DeckPager {
    slide_count: usize,
    surface: Size,
    active: usize,
    allow_gestures: bool,
    suspend_depth: u32,
    suspend_calls: u64,
    resume_calls: u64,
}

impl DeckPager {
    pub fn new(slide_count: usize, surface: Size) -> Self {
        Self {
            slide_count,
            surface,
            active: 0,
            allow_gestures: true,
            suspend_depth: 0,
            suspend_calls: 0,
            resume_calls: 0,
        }
    }

    /// True while at least one gesture holds swiping off.
    pub fn is_suspended(&self) -> bool {
        self.suspend_depth > 0
    }

    /// Number of `suspend_gestures` calls so far.
    pub fn suspend_calls(&self) -> u64 {
        self.suspend_calls
    }

    /// Number of `resume_gestures` calls so far.
    pub fn resume_calls(&self) -> u64 {
        self.resume_calls
    }
}

impl SlidePager for DeckPager {
    fn active_index(&self) -> usize {
        self.active
    }

    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn go_to(&mut self, index: usize) -> bool {
        if index >= self.slide_count {
            return false;
        }
        self.active = index;
        true
    }

    fn next(&mut self) -> bool {
        if self.active + 1 >= self.slide_count {
            return false;
        }
        self.active += 1;
        true
    }

    fn previous(&mut self) -> bool {
        if self.active == 0 {
            return false;
        }
        self.active -= 1;
        true
    }

    fn slide_surface(&self, index: usize) -> Option<Size> {
        (index < self.slide_count).then_some(self.surface)
    }

    fn set_allow_gestures(&mut self, allow: bool) {
        self.allow_gestures = allow;
    }

    fn allows_gestures(&self) -> bool {
        self.allow_gestures && self.suspend_depth == 0
    }

    fn suspend_gestures(&mut self) {
        self.suspend_calls += 1;
        self.suspend_depth += 1;
    }

    fn resume_gestures(&mut self) {
        self.resume_calls += 1;
        if self.suspend_depth == 0 {
            tracing::warn!("resume_gestures called without a matching suspend");
            return;
        }
        self.suspend_depth -= 1;
    }
}
