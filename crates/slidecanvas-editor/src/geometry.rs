//! Geometry primitives and clamping.
//!
//! All overlay coordinates are slide-surface pixels with the origin at the
//! top-left corner. The clamp functions are total: out-of-range, negative or
//! non-finite input is adjusted to the nearest valid boundary, never rejected.

use serde::{Deserialize, Serialize};

/// Minimum overlay width in pixels.
pub const MIN_WIDTH: f64 = 80.0;
/// Minimum overlay height in pixels.
pub const MIN_HEIGHT: f64 = 40.0;

/// A position in slide-surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`.
    pub fn delta_from(&self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let (dx, dy) = self.delta_from(other);
        dx.hypot(dy)
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns true if the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

/// Clamps a single axis to `[lower, upper]`.
///
/// Non-finite values map to `lower`. An empty range (`upper < lower`) pins
/// to `lower`.
fn clamp_axis(value: f64, lower: f64, upper: f64) -> f64 {
    if !value.is_finite() || upper < lower {
        return lower;
    }
    value.max(lower).min(upper)
}

/// Clamps a position so an element of the given size stays inside the container.
///
/// Each axis is clamped independently to `[0, container - element]`. When the
/// element is larger than the container the axis pins to 0 and the element
/// overflows on the far side.
pub fn clamp_position(
    left: f64,
    top: f64,
    element_w: f64,
    element_h: f64,
    container_w: f64,
    container_h: f64,
) -> (f64, f64) {
    let max_left = sanitize_extent(container_w) - sanitize_extent(element_w);
    let max_top = sanitize_extent(container_h) - sanitize_extent(element_h);
    (
        clamp_axis(left, 0.0, max_left),
        clamp_axis(top, 0.0, max_top),
    )
}

/// Clamps a size to `[min, max]` on each axis.
///
/// When `max < min` the result is `min` and the element overflows its container.
pub fn clamp_size(
    width: f64,
    height: f64,
    min_w: f64,
    min_h: f64,
    max_w: f64,
    max_h: f64,
) -> (f64, f64) {
    (
        clamp_axis(width, min_w, sanitize_bound(max_w, min_w)),
        clamp_axis(height, min_h, sanitize_bound(max_h, min_h)),
    )
}

/// Treats negative or non-finite extents as zero.
fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// An unbounded (`+inf`) maximum is allowed; NaN collapses to the minimum.
fn sanitize_bound(max: f64, min: f64) -> f64 {
    if max.is_nan() {
        min
    } else {
        max
    }
}
