//! Editor state manager for host integration.
//! Owns the overlay registry and routes input to it.
//!
//! This module is split into submodules:
//! - `overlays`: Add, delete, reset, select, seeding, save
//! - `input`: Pointer events and the gesture controller
//! - `properties`: Style and content inputs
//! - `navigation`: Slide paging

mod input;
mod navigation;
mod overlays;
mod properties;

use crate::config::EditorConfig;
use crate::geometry::Size;
use crate::gesture::{GestureController, GestureMode};
use crate::layout::{ApproxTextMetrics, TextMeasurer};
use crate::notification::{Notifier, ToastCenter};
use crate::pager::SlidePager;
use crate::registry::OverlayRegistry;
use crate::style::TextStyle;
use crate::view_sync::{derive_view, EditorView};
use slidecanvas_core::{AppEvent, EventBus, NotificationEvent, Shared};
use std::sync::Arc;

/// Editor state: the single owner of overlays, selection and input drafts.
pub struct EditorState {
    pub(crate) registry: OverlayRegistry,
    pub(crate) gestures: GestureController,
    pub(crate) pager: Shared<dyn SlidePager>,
    pub(crate) notifier: Box<dyn Notifier>,
    pub(crate) measurer: Box<dyn TextMeasurer>,
    pub(crate) events: Arc<EventBus>,
    pub(crate) config: EditorConfig,
    /// Style the property inputs currently show; used for the next "add".
    pub(crate) draft_style: TextStyle,
    /// Value of the content input.
    pub(crate) content_input: String,
}

impl EditorState {
    /// Creates an empty editor over `pager`.
    pub fn new(pager: Shared<dyn SlidePager>, config: EditorConfig) -> Self {
        Self {
            registry: OverlayRegistry::new(),
            gestures: GestureController::new(),
            pager,
            notifier: Box::new(ToastCenter::new(config.toast_duration)),
            measurer: Box::new(ApproxTextMetrics::default()),
            events: Arc::new(EventBus::new()),
            draft_style: config.default_style.clone(),
            content_input: config.placeholder_text.clone(),
            config,
        }
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    pub fn registry(&self) -> &OverlayRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Bus the editor publishes its events on.
    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    pub fn pager(&self) -> &Shared<dyn SlidePager> {
        &self.pager
    }

    pub fn draft_style(&self) -> &TextStyle {
        &self.draft_style
    }

    pub fn content_input(&self) -> &str {
        &self.content_input
    }

    pub fn gesture_mode(&self) -> Option<GestureMode> {
        self.gestures.mode()
    }

    pub fn active_slide(&self) -> usize {
        self.pager.borrow().active_index()
    }

    pub fn slide_count(&self) -> usize {
        self.pager.borrow().slide_count()
    }

    /// Derives the views for the active slide.
    pub fn view(&self) -> EditorView {
        let (active, count) = {
            let pager = self.pager.borrow();
            (pager.active_index(), pager.slide_count())
        };
        derive_view(&self.registry, active, count, self.measurer.as_ref())
    }

    /// Derives the views as they would look on `slide_index`.
    pub fn view_for_slide(&self, slide_index: usize) -> EditorView {
        derive_view(
            &self.registry,
            slide_index,
            self.slide_count(),
            self.measurer.as_ref(),
        )
    }

    pub(crate) fn surface_of(&self, slide_index: usize) -> Option<Size> {
        self.pager.borrow().slide_surface(slide_index)
    }

    pub(crate) fn publish(&self, event: AppEvent) {
        let delivered = self.events.publish(event);
        tracing::trace!("Event delivered to {} handler(s)", delivered);
    }

    pub(crate) fn notify(&mut self, message: &str) {
        self.notifier.show(message);
        self.publish(AppEvent::Notification(NotificationEvent::Shown {
            message: message.to_string(),
        }));
    }
}
