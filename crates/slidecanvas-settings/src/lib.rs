//! SlideCanvas Settings Crate
//!
//! Handles application configuration, settings persistence, and the mapping
//! from persisted settings to the editor engine's configuration.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{CanvasSettings, Config, NotificationSettings, OverlaySettings, StyleSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use manager::SettingsManager;
