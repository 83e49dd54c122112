//! Text style model: fonts, alignment and colors.

use serde::{de, Deserialize, Deserializer, Serialize};
use slidecanvas_core::ColorParseError;
use std::fmt;
use std::str::FromStr;

/// Font stacks offered by the font picker.
pub const FONT_PRESETS: &[&str] = &[
    "'Playfair Display', serif",
    "'Great Vibes', cursive",
    "'Dancing Script', cursive",
    "Arial, sans-serif",
];

/// A CSS font stack such as `'Playfair Display', serif`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontFamily(String);

impl FontFamily {
    pub fn new(stack: impl Into<String>) -> Self {
        let stack = stack.into();
        let trimmed = stack.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self(trimmed.to_string())
    }

    /// The full font stack.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary family name without quotes, e.g. `Playfair Display`.
    pub fn display_name(&self) -> &str {
        self.0
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self(FONT_PRESETS[0].to_string())
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Horizontal text alignment inside an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(format!("unknown text alignment '{}'", other)),
        }
    }
}

/// Named colors recognised by the parser (a CSS subset).
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("brown", (165, 42, 42)),
    ("pink", (255, 192, 203)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    ("gold", (255, 215, 0)),
    ("transparent", (0, 0, 0)),
];

/// A color as set through the style inputs.
///
/// The stored value keeps the form the user supplied (hex, `rgba(...)` or a
/// keyword); [`Color::to_hex`] projects it for the color pickers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "String")]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Named(&'static str),
}

impl Color {
    /// Fallback text color (`#ffffff`).
    pub const DEFAULT_TEXT: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Fallback background color (`#8b5a2b`).
    pub const DEFAULT_BACKGROUND: Color = Color::Rgb {
        r: 139,
        g: 90,
        b: 43,
    };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba {
            r,
            g,
            b,
            a: if a.is_finite() {
                a.clamp(0.0, 1.0)
            } else {
                1.0
            },
        }
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`, `rgba(r, g, b, a)`
    /// or a named color.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let value = input.trim();
        if value.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let lower = value.to_ascii_lowercase();
        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(value.to_string()));
        }
        if let Some(args) = lower.strip_prefix("rgba(") {
            return parse_function(value, args, true);
        }
        if let Some(args) = lower.strip_prefix("rgb(") {
            return parse_function(value, args, false);
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(name, _)| Color::Named(name))
            .ok_or_else(|| ColorParseError::Unrecognized(value.to_string()))
    }

    /// Parses `input`, substituting `fallback` for malformed values.
    pub fn parse_or(input: &str, fallback: Color) -> Color {
        match Color::parse(input) {
            Ok(color) => color,
            Err(err) => {
                tracing::warn!("{}; using fallback {}", err, fallback);
                fallback
            }
        }
    }

    /// RGB components, resolving named colors.
    pub fn components(&self) -> (u8, u8, u8) {
        match *self {
            Color::Rgb { r, g, b } | Color::Rgba { r, g, b, .. } => (r, g, b),
            Color::Named(name) => NAMED_COLORS
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, rgb)| *rgb)
                .unwrap_or((0, 0, 0)),
        }
    }

    /// Alpha channel in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Rgba { a, .. } => a,
            Color::Named("transparent") => 0.0,
            _ => 1.0,
        }
    }

    /// Lowercase `#rrggbb`; alpha is dropped.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.components();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut it = hex.chars().map(|c| channel(&format!("{c}{c}")));
            Some(Color::rgb(it.next()??, it.next()??, it.next()??))
        }
        6 => Some(Color::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Color::rgba(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            f32::from(channel(&hex[6..8])?) / 255.0,
        )),
        _ => None,
    }
}

fn parse_function(value: &str, args: &str, with_alpha: bool) -> Result<Color, ColorParseError> {
    let body = args
        .strip_suffix(')')
        .ok_or_else(|| ColorParseError::InvalidFunction(value.to_string()))?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::InvalidFunction(value.to_string()));
    }

    let out_of_range = |component: &str| ColorParseError::ComponentOutOfRange {
        component: component.to_string(),
        value: value.to_string(),
    };
    let channel = |s: &str| s.parse::<u8>().map_err(|_| out_of_range(s));

    let (r, g, b) = (channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    if !with_alpha {
        return Ok(Color::rgb(r, g, b));
    }

    let a = parts[3]
        .parse::<f32>()
        .ok()
        .filter(|a| (0.0..=1.0).contains(a))
        .ok_or_else(|| out_of_range(parts[3]))?;
    Ok(Color::rgba(r, g, b, a))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgb { .. } => f.write_str(&self.to_hex()),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Color::parse(&value).map_err(de::Error::custom)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Inclusive font size bounds in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizeRange {
    pub min: f64,
    pub max: f64,
}

impl FontSizeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Coerces a requested size into the range; non-finite input maps to `min`.
    pub fn coerce(&self, px: f64) -> f64 {
        if !px.is_finite() || self.max < self.min {
            return self.min;
        }
        px.clamp(self.min, self.max)
    }
}

impl Default for FontSizeRange {
    fn default() -> Self {
        Self::new(8.0, 120.0)
    }
}

/// The fixed style record of an overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: FontFamily,
    pub font_size_px: f64,
    pub text_color: Color,
    pub background_color: Color,
    pub text_align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: FontFamily::default(),
            font_size_px: 24.0,
            text_color: Color::DEFAULT_TEXT,
            background_color: Color::DEFAULT_BACKGROUND,
            text_align: TextAlign::Center,
        }
    }
}

impl TextStyle {
    /// Applies a patch; returns true if any field changed.
    pub fn apply(&mut self, patch: &StylePatch, sizes: &FontSizeRange) -> bool {
        let before = self.clone();
        if let Some(family) = &patch.font_family {
            self.font_family = family.clone();
        }
        if let Some(px) = patch.font_size_px {
            self.font_size_px = sizes.coerce(px);
        }
        if let Some(color) = patch.text_color {
            self.text_color = color;
        }
        if let Some(color) = patch.background_color {
            self.background_color = color;
        }
        if let Some(align) = patch.text_align {
            self.text_align = align;
        }
        *self != before
    }
}

/// A partial style update; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    pub font_family: Option<FontFamily>,
    pub font_size_px: Option<f64>,
    pub text_color: Option<Color>,
    pub background_color: Option<Color>,
    pub text_align: Option<TextAlign>,
}

impl StylePatch {
    pub fn font_family(mut self, family: FontFamily) -> Self {
        self.font_family = Some(family);
        self
    }

    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size_px = Some(px);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == StylePatch::default()
    }
}
