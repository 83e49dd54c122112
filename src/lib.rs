//! # SlideCanvas
//!
//! The interaction and state-sync engine of a slide editor: text overlays
//! placed on slides, moved and resized with the pointer, styled through a
//! property form, and mirrored into a side panel.
//!
//! ## Architecture
//!
//! SlideCanvas is organized as a workspace with multiple crates:
//!
//! 1. **slidecanvas-core** - Shared ids, errors, and the event bus
//! 2. **slidecanvas-editor** - Overlay registry, gestures, view derivation
//! 3. **slidecanvas-settings** - Persisted configuration
//! 4. **slidecanvas** - Binary that drives a scripted editing session

pub use slidecanvas_core::{
    AppEvent, EditorError, EventBus, EventBusConfig, EventCategory, EventFilter, OverlayId,
};

pub use slidecanvas_editor::{
    default_overlays, DeckPager, EditorConfig, EditorState, EditorView, GestureOutcome, HitTarget,
    OverlayPart, Point, PointerEvent, Size, SlidePager,
};

pub use slidecanvas_settings::{Config, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
