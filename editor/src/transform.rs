//! Coordinate frames: display space vs. original-image space.
//!
//! Boxes live in display space, the frame of the fitted on-screen template.
//! The rendering collaborator works in original-image space. `Scale` is the
//! per-axis ratio between the two and is derived once per template load.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::{Deserialize, Serialize};

/// A point in either pointer, display, or original-image space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }
}

/// Width and height of a rectangle or image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Ratio of original to display dimension along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

impl Scale {
    /// Scale factors mapping `display` onto `original`.
    ///
    /// A degenerate display axis yields a factor of `1.0` for that axis.
    #[must_use]
    pub fn between(original: Size, display: Size) -> Self {
        let axis = |orig: f64, shown: f64| if shown > 0.0 { orig / shown } else { 1.0 };
        Self {
            x: axis(original.width, display.width),
            y: axis(original.height, display.height),
        }
    }

    /// Convert a display-space point to original-image space.
    #[must_use]
    pub fn to_original(&self, display: Point) -> Point {
        Point { x: display.x * self.x, y: display.y * self.y }
    }

    /// Convert a display-space size to original-image space.
    #[must_use]
    pub fn size_to_original(&self, display: Size) -> Size {
        Size { width: display.width * self.x, height: display.height * self.y }
    }

    /// Convert a display-space scalar that scales with the horizontal axis
    /// (font sizes) to original-image space.
    #[must_use]
    pub fn length_to_original(&self, display: f64) -> f64 {
        display * self.x
    }
}

/// Fit `original` inside `bounds`, preserving aspect ratio.
///
/// Images already within bounds on both axes are returned unchanged; images
/// are never upscaled. A downscaled frame has whole-pixel dimensions: the
/// limiting axis takes the bound and the other is floored, matching the
/// integer size of the canvas that displays it.
#[must_use]
pub fn fit_to_bounds(original: Size, bounds: Size) -> Size {
    if original.width <= bounds.width && original.height <= bounds.height {
        return original;
    }
    if bounds.width / original.width <= bounds.height / original.height {
        let height = (original.height * bounds.width / original.width).floor().max(1.0);
        Size { width: bounds.width, height }
    } else {
        let width = (original.width * bounds.height / original.height).floor().max(1.0);
        Size { width, height: bounds.height }
    }
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
