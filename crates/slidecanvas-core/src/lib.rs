//! # SlideCanvas Core
//!
//! Core types, errors, and the event bus shared by the SlideCanvas crates.

pub mod error;
pub mod event_bus;
pub mod types;

pub use error::{ColorParseError, EditorError, Error, Result};

pub use event_bus::{
    AppEvent, EventBus, EventBusConfig, EventCategory, EventFilter, GestureEvent, GestureKind,
    NotificationEvent, OverlayEvent, SlideEvent, SubscriptionId,
};

pub use types::{shared, OverlayId, Shared};
