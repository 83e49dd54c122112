//! Configuration and settings management for SlideCanvas
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (slide count and surface size)
//! - Overlay settings (placement, resize minimum, click slop)
//! - Style defaults (font, colors, alignment, size range)
//! - Notification settings (toast duration)

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use serde::{Deserialize, Serialize};
use slidecanvas_editor::{
    Color, EditorConfig, FontFamily, FontSizeRange, Size, TextAlign, TextStyle, PLACEHOLDER_TEXT,
};
use std::path::Path;
use std::time::Duration;

/// Slide deck settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Number of slides in the deck
    pub slide_count: usize,
    /// Slide surface width in pixels
    pub slide_width: f64,
    /// Slide surface height in pixels
    pub slide_height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            slide_count: 3,
            slide_width: 800.0,
            slide_height: 500.0,
        }
    }
}

impl CanvasSettings {
    pub fn surface(&self) -> Size {
        Size::new(self.slide_width, self.slide_height)
    }
}

/// Overlay placement and interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Smallest width a resize can produce
    pub min_width: f64,
    /// Smallest height a resize can produce
    pub min_height: f64,
    /// Offset between stacked default placements
    pub stack_offset: f64,
    /// Minimum distance of a default placement from the slide edge
    pub edge_margin: f64,
    /// Pointer travel below which a press is a click
    pub click_slop: f64,
    /// Text for new overlays when the content input is empty
    pub placeholder_text: String,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        let editor = EditorConfig::default();
        Self {
            min_width: editor.min_size.width,
            min_height: editor.min_size.height,
            stack_offset: editor.stack_offset,
            edge_margin: editor.edge_margin,
            click_slop: editor.click_slop,
            placeholder_text: PLACEHOLDER_TEXT.to_string(),
        }
    }
}

/// Default text style for the property inputs
///
/// Colors are stored as CSS strings so hand-edited files stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub font_family: String,
    pub font_size: f64,
    pub text_color: String,
    pub background_color: String,
    pub text_align: TextAlign,
    pub min_font_size: f64,
    pub max_font_size: f64,
}

impl Default for StyleSettings {
    fn default() -> Self {
        let style = TextStyle::default();
        let sizes = FontSizeRange::default();
        Self {
            font_family: style.font_family.as_str().to_string(),
            font_size: style.font_size_px,
            text_color: style.text_color.to_string(),
            background_color: style.background_color.to_string(),
            text_align: style.text_align,
            min_font_size: sizes.min,
            max_font_size: sizes.max,
        }
    }
}

impl StyleSettings {
    pub fn font_sizes(&self) -> FontSizeRange {
        FontSizeRange::new(self.min_font_size, self.max_font_size)
    }

    /// Build the text style these settings describe.
    pub fn text_style(&self) -> ConfigResult<TextStyle> {
        Ok(TextStyle {
            font_family: FontFamily::new(self.font_family.as_str()),
            font_size_px: self.font_sizes().coerce(self.font_size),
            text_color: parse_color("style.text_color", &self.text_color)?,
            background_color: parse_color("style.background_color", &self.background_color)?,
            text_align: self.text_align,
        })
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn parse_color(key: &str, value: &str) -> ConfigResult<Color> {
    Color::parse(value).map_err(|source| ConfigError::InvalidColor {
        key: key.to_string(),
        source,
    })
}

/// Toast notification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// How long a toast stays visible
    pub toast_duration_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Populate the deck with the sample overlays on startup
    pub seed_default_content: bool,
    pub canvas: CanvasSettings,
    pub overlay: OverlaySettings,
    pub style: StyleSettings,
    pub notifications: NotificationSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_default_content: true,
            canvas: CanvasSettings::default(),
            overlay: OverlaySettings::default(),
            style: StyleSettings::default(),
            notifications: NotificationSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let canvas = &self.canvas;
        if canvas.slide_count == 0 {
            return Err(ConfigError::out_of_range(
                "canvas.slide_count",
                canvas.slide_count,
            ));
        }
        if !is_positive(canvas.slide_width) {
            return Err(ConfigError::out_of_range(
                "canvas.slide_width",
                canvas.slide_width,
            ));
        }
        if !is_positive(canvas.slide_height) {
            return Err(ConfigError::out_of_range(
                "canvas.slide_height",
                canvas.slide_height,
            ));
        }

        let overlay = &self.overlay;
        if !is_positive(overlay.min_width) {
            return Err(ConfigError::out_of_range(
                "overlay.min_width",
                overlay.min_width,
            ));
        }
        if !is_positive(overlay.min_height) {
            return Err(ConfigError::out_of_range(
                "overlay.min_height",
                overlay.min_height,
            ));
        }
        if !is_non_negative(overlay.stack_offset) {
            return Err(ConfigError::out_of_range(
                "overlay.stack_offset",
                overlay.stack_offset,
            ));
        }
        if !is_non_negative(overlay.edge_margin) {
            return Err(ConfigError::out_of_range(
                "overlay.edge_margin",
                overlay.edge_margin,
            ));
        }
        if !is_non_negative(overlay.click_slop) {
            return Err(ConfigError::out_of_range(
                "overlay.click_slop",
                overlay.click_slop,
            ));
        }

        let style = &self.style;
        if !is_positive(style.min_font_size)
            || !is_positive(style.max_font_size)
            || style.max_font_size < style.min_font_size
        {
            return Err(ConfigError::out_of_range(
                "style.max_font_size",
                format!("{}..{}", style.min_font_size, style.max_font_size),
            ));
        }
        style.text_style()?;

        if self.notifications.toast_duration_ms == 0 {
            return Err(ConfigError::out_of_range(
                "notifications.toast_duration_ms",
                0,
            ));
        }

        Ok(())
    }

    /// Build the engine configuration from these settings.
    ///
    /// Invalid style values fall back to the engine defaults.
    pub fn editor_config(&self) -> EditorConfig {
        let defaults = EditorConfig::default();
        let default_style = self.style.text_style().unwrap_or_else(|err| {
            tracing::warn!("Ignoring configured style: {}", err);
            defaults.default_style.clone()
        });

        EditorConfig {
            min_size: Size::new(self.overlay.min_width, self.overlay.min_height),
            stack_offset: self.overlay.stack_offset,
            edge_margin: self.overlay.edge_margin,
            click_slop: self.overlay.click_slop,
            placeholder_text: self.overlay.placeholder_text.clone(),
            font_sizes: self.style.font_sizes(),
            default_style,
            toast_duration: Duration::from_millis(self.notifications.toast_duration_ms),
        }
    }
}
