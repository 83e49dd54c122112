//! # SlideCanvas Editor
//!
//! The overlay interaction and state-synchronization engine of the slide
//! editor: text overlays attached to slides, pointer-driven drag and resize,
//! and the views derived from them.
//!
//! ## Core Components
//!
//! - **Geometry**: total clamp functions for positions and sizes
//! - **Overlay**: one text element, its style and its geometry invariants
//! - **Gesture**: the pointer state machine with exclusive capture and pager suspension
//! - **Registry**: ordered overlays across slides plus the single selection
//! - **View Sync**: side panel, property form, counters and canvas boxes, derived purely
//! - **Pager**: the adapter trait over the slide carousel
//!
//! ## Architecture
//!
//! ```text
//! EditorState
//!   ├── OverlayRegistry (OverlayStore + SelectionManager)
//!   ├── GestureController ──> PagerSuspension ──> SlidePager
//!   ├── Notifier (toasts)
//!   └── EventBus (slidecanvas-core)
//!
//! derive_view(registry, slide) ──> EditorView
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slidecanvas_core::{shared, Shared};
//! use slidecanvas_editor::{DeckPager, EditorConfig, EditorState, HitTarget, OverlayPart, Point, PointerEvent, Size, SlidePager};
//!
//! let pager: Shared<dyn SlidePager> = shared(DeckPager::new(3, Size::new(800.0, 500.0)));
//! let mut editor = EditorState::new(pager, EditorConfig::default());
//! let id = editor.add_text()?;
//!
//! let body = HitTarget::Overlay { id, part: OverlayPart::Body };
//! editor.handle_pointer(PointerEvent::down(1, Point::new(310.0, 230.0), body));
//! editor.handle_pointer(PointerEvent::moved(1, Point::new(350.0, 260.0)));
//! editor.handle_pointer(PointerEvent::up(1, Point::new(350.0, 260.0)));
//!
//! let view = editor.view();
//! ```

pub mod config;
pub mod editor_state;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod notification;
pub mod overlay;
pub mod overlay_store;
pub mod pager;
pub mod registry;
pub mod seed;
pub mod selection_manager;
pub mod style;
pub mod view_sync;

pub use config::{EditorConfig, PLACEHOLDER_TEXT};
pub use editor_state::EditorState;
pub use geometry::{clamp_position, clamp_size, Point, Rect, Size, MIN_HEIGHT, MIN_WIDTH};
pub use gesture::{
    GestureContext, GestureController, GestureMode, GestureOutcome, HitTarget, OverlayPart,
    PagerSuspension, PointerButton, PointerEvent, PointerEventKind,
};
pub use layout::{ApproxTextMetrics, TextMeasurer};
pub use notification::{Notifier, Toast, ToastCenter, DESIGN_SAVED_MESSAGE, TEXT_ADDED_MESSAGE};
pub use overlay::{Constraints, Geometry, Overlay};
pub use overlay_store::OverlayStore;
pub use pager::{DeckPager, SlidePager};
pub use registry::OverlayRegistry;
pub use seed::{default_overlays, SeedOverlay};
pub use selection_manager::SelectionManager;
pub use style::{Color, FontFamily, FontSizeRange, StylePatch, TextAlign, TextStyle, FONT_PRESETS};
pub use view_sync::{
    derive_view, EditorView, FormFields, OverlayBox, PanelRow, PropertyForm, SidePanel, SlideNav,
    EMPTY_HINT, EMPTY_TITLE,
};
