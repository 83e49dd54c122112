//! Pointer gesture controller.
//!
//! Drives the `Idle -> Dragging | Resizing -> Idle` state machine from an
//! explicit stream of [`PointerEvent`]s. While a gesture is active the
//! pointer is captured (events from other pointers are ignored) and the
//! slide pager's swipe handling is suspended. The suspension is held by a
//! guard inside the session, so every way out of a gesture (up, cancel,
//! lost capture, abort, drop, unwind) resumes the pager exactly once.

use crate::config::EditorConfig;
use crate::geometry::{clamp_position, clamp_size, Point, Size};
use crate::layout::TextMeasurer;
use crate::overlay::{Constraints, Geometry};
use crate::pager::SlidePager;
use crate::registry::OverlayRegistry;
use slidecanvas_core::{GestureKind, OverlayId, Shared};
use std::fmt;

/// Which pointer button a press came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// The sub-region of an overlay under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPart {
    /// The overlay element itself.
    Body,
    /// The corner resize grip.
    ResizeHandle,
    /// A child element (the text node); presses here select but don't drag.
    Content,
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Overlay { id: OverlayId, part: OverlayPart },
    SlideBackground,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    LostCapture,
}

/// One pointer input event in slide-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u32,
    pub kind: PointerEventKind,
    pub position: Point,
    pub button: PointerButton,
    pub target: HitTarget,
}

impl PointerEvent {
    pub fn down(pointer_id: u32, position: Point, target: HitTarget) -> Self {
        Self {
            pointer_id,
            kind: PointerEventKind::Down,
            position,
            button: PointerButton::Primary,
            target,
        }
    }

    pub fn moved(pointer_id: u32, position: Point) -> Self {
        Self::follow_up(pointer_id, PointerEventKind::Move, position)
    }

    pub fn up(pointer_id: u32, position: Point) -> Self {
        Self::follow_up(pointer_id, PointerEventKind::Up, position)
    }

    pub fn cancel(pointer_id: u32) -> Self {
        Self::follow_up(pointer_id, PointerEventKind::Cancel, Point::default())
    }

    pub fn lost_capture(pointer_id: u32) -> Self {
        Self::follow_up(pointer_id, PointerEventKind::LostCapture, Point::default())
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    // Captured events are routed by pointer id, so their target is irrelevant.
    fn follow_up(pointer_id: u32, kind: PointerEventKind, position: Point) -> Self {
        Self {
            pointer_id,
            kind,
            position,
            button: PointerButton::Primary,
            target: HitTarget::Outside,
        }
    }
}

/// The two gesture states besides idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureMode {
    Dragging,
    Resizing,
}

impl GestureMode {
    pub fn kind(self) -> GestureKind {
        match self {
            GestureMode::Dragging => GestureKind::Drag,
            GestureMode::Resizing => GestureKind::Resize,
        }
    }
}

impl fmt::Display for GestureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureMode::Dragging => write!(f, "dragging"),
            GestureMode::Resizing => write!(f, "resizing"),
        }
    }
}

/// Result of feeding one event to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing happened.
    Ignored,
    Started {
        id: OverlayId,
        mode: GestureMode,
    },
    /// The active gesture changed the overlay's geometry.
    Updated {
        id: OverlayId,
    },
    /// Press and release on the body without moving past the click slop.
    /// `nudged` is set when the moves inside the slop left the overlay away
    /// from where it started.
    Clicked {
        id: OverlayId,
        nudged: bool,
    },
    Finished {
        id: OverlayId,
        mode: GestureMode,
    },
    Cancelled {
        id: OverlayId,
        mode: GestureMode,
    },
}

/// Keeps the pager's swipe handling suspended while alive.
pub struct PagerSuspension {
    pager: Shared<dyn SlidePager>,
}

impl PagerSuspension {
    pub fn new(pager: Shared<dyn SlidePager>) -> Self {
        pager.borrow_mut().suspend_gestures();
        Self { pager }
    }
}

impl Drop for PagerSuspension {
    fn drop(&mut self) {
        match self.pager.try_borrow_mut() {
            Ok(mut pager) => pager.resume_gestures(),
            Err(_) => tracing::warn!("pager busy while ending gesture; swipe stays suspended"),
        }
    }
}

impl fmt::Debug for PagerSuspension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagerSuspension").finish_non_exhaustive()
    }
}

/// State of one in-flight gesture.
#[derive(Debug)]
struct GestureSession {
    mode: GestureMode,
    overlay_id: OverlayId,
    pointer_id: u32,
    start_pointer: Point,
    start_geometry: Geometry,
    start_extent: Size,
    /// Farthest the pointer has been from `start_pointer`.
    max_travel: f64,
    click_slop: f64,
    /// Geometry differs from `start_geometry`.
    displaced: bool,
    _suspension: PagerSuspension,
}

/// Borrowed editor state a gesture operates on.
pub struct GestureContext<'a> {
    pub registry: &'a mut OverlayRegistry,
    pub pager: &'a Shared<dyn SlidePager>,
    pub config: &'a EditorConfig,
    pub measurer: &'a dyn TextMeasurer,
}

impl GestureContext<'_> {
    fn surface_for(&self, id: OverlayId) -> Option<Size> {
        let slide = self.registry.get(id)?.slide_index();
        self.pager.try_borrow().ok()?.slide_surface(slide)
    }
}

/// The gesture state machine. Holds at most one session.
#[derive(Debug, Default)]
pub struct GestureController {
    session: Option<GestureSession>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode, or `None` when idle.
    pub fn mode(&self) -> Option<GestureMode> {
        self.session.as_ref().map(|s| s.mode)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Pointer currently captured by a gesture.
    pub fn captured_pointer(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.pointer_id)
    }

    pub fn active_overlay(&self) -> Option<OverlayId> {
        self.session.as_ref().map(|s| s.overlay_id)
    }

    /// Feeds one event through the state machine.
    pub fn handle(&mut self, event: &PointerEvent, cx: &mut GestureContext<'_>) -> GestureOutcome {
        match event.kind {
            PointerEventKind::Down => self.on_down(event, cx),
            PointerEventKind::Move => self.on_move(event, cx),
            PointerEventKind::Up => self.finish(event.pointer_id),
            PointerEventKind::Cancel | PointerEventKind::LostCapture => {
                self.cancel(event.pointer_id)
            }
        }
    }

    /// Forces the controller back to idle, e.g. when the overlay goes away.
    pub fn abort(&mut self) -> Option<(OverlayId, GestureMode)> {
        let session = self.session.take()?;
        tracing::debug!(
            "aborting {} gesture on {}",
            session.mode,
            session.overlay_id
        );
        Some((session.overlay_id, session.mode))
    }

    fn on_down(&mut self, event: &PointerEvent, cx: &mut GestureContext<'_>) -> GestureOutcome {
        if let Some(session) = &self.session {
            tracing::debug!(
                "pointer {} down ignored: pointer {} is captured",
                event.pointer_id,
                session.pointer_id
            );
            return GestureOutcome::Ignored;
        }
        if event.button != PointerButton::Primary {
            return GestureOutcome::Ignored;
        }

        let (id, mode) = match event.target {
            HitTarget::Overlay {
                id,
                part: OverlayPart::Body,
            } => (id, GestureMode::Dragging),
            HitTarget::Overlay {
                id,
                part: OverlayPart::ResizeHandle,
            } => (id, GestureMode::Resizing),
            _ => return GestureOutcome::Ignored,
        };

        let Some(overlay) = cx.registry.get(id) else {
            tracing::debug!("pointer down on missing {}", id);
            return GestureOutcome::Ignored;
        };
        let start_geometry = overlay.geometry();
        let start_extent = overlay.extent(cx.measurer);

        if cx.pager.try_borrow_mut().is_err() {
            tracing::warn!("pager busy; not starting {} on {}", mode, id);
            return GestureOutcome::Ignored;
        }
        let suspension = PagerSuspension::new(cx.pager.clone());

        cx.registry.select(Some(id));
        self.session = Some(GestureSession {
            mode,
            overlay_id: id,
            pointer_id: event.pointer_id,
            start_pointer: event.position,
            start_geometry,
            start_extent,
            max_travel: 0.0,
            click_slop: cx.config.click_slop,
            displaced: false,
            _suspension: suspension,
        });

        tracing::debug!("{} {} with pointer {}", mode, id, event.pointer_id);
        GestureOutcome::Started { id, mode }
    }

    fn on_move(&mut self, event: &PointerEvent, cx: &mut GestureContext<'_>) -> GestureOutcome {
        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::Ignored;
        };
        if session.pointer_id != event.pointer_id {
            return GestureOutcome::Ignored;
        }

        let travel = event.position.distance_to(session.start_pointer);
        if travel.is_finite() {
            session.max_travel = session.max_travel.max(travel);
        }

        let id = session.overlay_id;
        let Some(surface) = cx.surface_for(id) else {
            // The overlay was removed underneath the gesture.
            return match self.abort() {
                Some((id, mode)) => GestureOutcome::Cancelled { id, mode },
                None => GestureOutcome::Ignored,
            };
        };

        let (dx, dy) = event.position.delta_from(session.start_pointer);
        let start = session.start_geometry;
        let extent = session.start_extent;
        let constraints = Constraints::new(surface, cx.config, cx.measurer);

        let changed = match session.mode {
            GestureMode::Dragging => {
                let (left, top) = clamp_position(
                    start.left + dx,
                    start.top + dy,
                    extent.width,
                    extent.height,
                    surface.width,
                    surface.height,
                );
                cx.registry.update(id, |overlay| {
                    overlay.set_geometry(left, top, None, None, &constraints)
                })
            }
            GestureMode::Resizing => {
                let (width, height) = clamp_size(
                    extent.width + dx,
                    extent.height + dy,
                    constraints.min_size.width,
                    constraints.min_size.height,
                    surface.width - start.left,
                    surface.height - start.top,
                );
                cx.registry.update(id, |overlay| {
                    overlay.set_geometry(
                        start.left,
                        start.top,
                        Some(width),
                        Some(height),
                        &constraints,
                    )
                })
            }
        };

        if changed == Some(true) {
            session.displaced = cx
                .registry
                .get(id)
                .is_some_and(|overlay| overlay.geometry() != start);
        }

        tracing::trace!("{} move ({}, {}) on {}", session.mode, dx, dy, id);
        match changed {
            Some(true) => GestureOutcome::Updated { id },
            _ => GestureOutcome::Ignored,
        }
    }

    fn finish(&mut self, pointer_id: u32) -> GestureOutcome {
        let Some(session) = self.take_for(pointer_id) else {
            return GestureOutcome::Ignored;
        };
        let (id, mode) = (session.overlay_id, session.mode);
        let moved = session.max_travel > session.click_slop;
        let nudged = session.displaced;
        drop(session);

        tracing::debug!("{} {} finished (moved: {})", mode, id, moved);
        if !moved && mode == GestureMode::Dragging {
            GestureOutcome::Clicked { id, nudged }
        } else {
            GestureOutcome::Finished { id, mode }
        }
    }

    fn cancel(&mut self, pointer_id: u32) -> GestureOutcome {
        let Some(session) = self.take_for(pointer_id) else {
            return GestureOutcome::Ignored;
        };
        tracing::debug!("{} {} cancelled", session.mode, session.overlay_id);
        GestureOutcome::Cancelled {
            id: session.overlay_id,
            mode: session.mode,
        }
    }

    fn take_for(&mut self, pointer_id: u32) -> Option<GestureSession> {
        match &self.session {
            Some(session) if session.pointer_id == pointer_id => self.session.take(),
            _ => None,
        }
    }
}
