//! Event type definitions for the event bus.
//!
//! This module defines all editor events organized by category.
//! Events are designed to be cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};

use crate::types::OverlayId;

/// Root event enum for all editor events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Overlay registry mutations
    Overlay(OverlayEvent),
    /// Slide paging
    Slide(SlideEvent),
    /// Pointer gestures on overlays
    Gesture(GestureEvent),
    /// Toast notifications
    Notification(NotificationEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Overlay(_) => EventCategory::Overlay,
            AppEvent::Slide(_) => EventCategory::Slide,
            AppEvent::Gesture(_) => EventCategory::Gesture,
            AppEvent::Notification(_) => EventCategory::Notification,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Overlay(e) => e.description(),
            AppEvent::Slide(e) => e.description(),
            AppEvent::Gesture(e) => e.description(),
            AppEvent::Notification(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Overlay add/remove/select/edit events.
    Overlay,
    /// Slide change events.
    Slide,
    /// Drag and resize gesture events.
    Gesture,
    /// Toast notification events.
    Notification,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Overlay => write!(f, "Overlay"),
            EventCategory::Slide => write!(f, "Slide"),
            EventCategory::Gesture => write!(f, "Gesture"),
            EventCategory::Notification => write!(f, "Notification"),
        }
    }
}

/// Overlay registry events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OverlayEvent {
    /// An overlay was added to a slide.
    Added {
        /// The new overlay.
        id: OverlayId,
        /// Slide the overlay belongs to.
        slide: usize,
    },
    /// An overlay was deleted.
    Removed {
        /// The removed overlay.
        id: OverlayId,
        /// Slide the overlay belonged to.
        slide: usize,
    },
    /// The selection changed.
    SelectionChanged {
        /// The newly selected overlay, if any.
        selected: Option<OverlayId>,
    },
    /// Text content was edited.
    ContentChanged {
        /// The edited overlay.
        id: OverlayId,
    },
    /// One or more style fields changed.
    StyleChanged {
        /// The restyled overlay.
        id: OverlayId,
    },
    /// Position or size changed at the end of a gesture.
    GeometryChanged {
        /// The moved or resized overlay.
        id: OverlayId,
        /// Left edge in slide pixels.
        left: f64,
        /// Top edge in slide pixels.
        top: f64,
        /// Explicit width, if the overlay has been resized.
        width: Option<f64>,
        /// Explicit height, if the overlay has been resized.
        height: Option<f64>,
    },
    /// Every overlay of a slide was removed.
    SlideReset {
        /// The cleared slide.
        slide: usize,
        /// Number of overlays removed.
        removed: usize,
    },
}

impl OverlayEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            OverlayEvent::Added { id, slide } => format!("Added {} to slide {}", id, slide),
            OverlayEvent::Removed { id, slide } => {
                format!("Removed {} from slide {}", id, slide)
            }
            OverlayEvent::SelectionChanged { selected: Some(id) } => format!("Selected {}", id),
            OverlayEvent::SelectionChanged { selected: None } => "Selection cleared".to_string(),
            OverlayEvent::ContentChanged { id } => format!("Content of {} changed", id),
            OverlayEvent::StyleChanged { id } => format!("Style of {} changed", id),
            OverlayEvent::GeometryChanged { id, left, top, .. } => {
                format!("{} moved to ({:.0}, {:.0})", id, left, top)
            }
            OverlayEvent::SlideReset { slide, removed } => {
                format!("Slide {} reset ({} removed)", slide, removed)
            }
        }
    }
}

/// Slide paging events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlideEvent {
    /// The active slide changed.
    Changed {
        /// Previously active slide.
        from: usize,
        /// Newly active slide.
        to: usize,
    },
}

impl SlideEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            SlideEvent::Changed { from, to } => format!("Slide {} -> {}", from, to),
        }
    }
}

/// Kind of pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureKind {
    /// Repositioning the overlay.
    Drag,
    /// Resizing from the corner handle.
    Resize,
}

impl std::fmt::Display for GestureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureKind::Drag => write!(f, "drag"),
            GestureKind::Resize => write!(f, "resize"),
        }
    }
}

/// Pointer gesture events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// A gesture captured the pointer.
    Started {
        /// Overlay under the gesture.
        id: OverlayId,
        /// Drag or resize.
        kind: GestureKind,
    },
    /// The pointer was released normally.
    Finished {
        /// Overlay under the gesture.
        id: OverlayId,
        /// Drag or resize.
        kind: GestureKind,
    },
    /// The gesture was cancelled or lost pointer capture.
    Cancelled {
        /// Overlay under the gesture.
        id: OverlayId,
        /// Drag or resize.
        kind: GestureKind,
    },
}

impl GestureEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            GestureEvent::Started { id, kind } => format!("{} of {} started", kind, id),
            GestureEvent::Finished { id, kind } => format!("{} of {} finished", kind, id),
            GestureEvent::Cancelled { id, kind } => format!("{} of {} cancelled", kind, id),
        }
    }
}

/// Toast notification events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotificationEvent {
    /// A toast was shown.
    Shown {
        /// Toast text.
        message: String,
    },
}

impl NotificationEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            NotificationEvent::Shown { message } => format!("Toast: {}", message),
        }
    }
}
