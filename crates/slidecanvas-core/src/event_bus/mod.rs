//! # Event Bus Module
//!
//! Provides the event bus used for decoupled communication between the
//! editor engine and whatever hosts it (UI shell, logging, tests).
//!
//! ## Overview
//!
//! - The editor publishes typed events without knowing its observers
//! - Subscribers filter and receive events of interest
//! - Handlers run synchronously on the publishing thread
//! - Optional bounded history for inspecting what was published
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slidecanvas_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, SlideEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Slide]),
//!     |event| {
//!         if let AppEvent::Slide(SlideEvent::Changed { to, .. }) = event {
//!             println!("Now on slide {}", to + 1);
//!         }
//!     },
//! );
//!
//! bus.publish(AppEvent::Slide(SlideEvent::Changed { from: 0, to: 1 }));
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
