//! Error handling for SlideCanvas
//!
//! The editor engine degrades to a safe state instead of failing: geometry is
//! clamped, missing targets are no-ops and malformed colors fall back to a
//! documented default. The error types here cover the few boundaries where a
//! caller has to be told that a request could not be honoured:
//! - Editor errors (slide navigation, slide surfaces)
//! - Color errors (parsing user or config supplied color strings)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Editor error type
///
/// Represents requests against the slide deck that cannot be satisfied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// Slide index outside the deck
    #[error("Slide {index} does not exist (deck has {slide_count} slides)")]
    InvalidSlide {
        /// The requested slide index.
        index: usize,
        /// The number of slides in the deck.
        slide_count: usize,
    },

    /// The pager could not provide a render surface for a slide
    #[error("No render surface available for slide {index}")]
    NoSlideSurface {
        /// The slide index without a surface.
        index: usize,
    },
}

/// Color parsing error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Empty input
    #[error("Empty color value")]
    Empty,

    /// Malformed `#rgb` / `#rrggbb` value
    #[error("Invalid hex color '{0}'")]
    InvalidHex(String),

    /// Malformed `rgb(...)` / `rgba(...)` function
    #[error("Invalid color function '{0}'")]
    InvalidFunction(String),

    /// A component was outside its valid range
    #[error("Color component '{component}' out of range in '{value}'")]
    ComponentOutOfRange {
        /// The offending component text.
        component: String,
        /// The full input value.
        value: String,
    },

    /// Not a recognised color keyword
    #[error("Unrecognized color '{0}'")]
    Unrecognized(String),
}

/// Main error type for SlideCanvas
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Editor error
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Color error
    #[error(transparent)]
    Color(#[from] ColorParseError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an editor error
    pub fn is_editor_error(&self) -> bool {
        matches!(self, Error::Editor(_))
    }

    /// Check if this is a color error
    pub fn is_color_error(&self) -> bool {
        matches!(self, Error::Color(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
