//! Integer axis-aligned rectangles used for overlap tests and render bounds.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in whole world pixels.
///
/// `x`/`y` is the top-left corner; `y` grows downward.
///
/// # Example
///
/// ```
/// use naval_war_core::geometry::Rect;
///
/// let a = Rect::new(0, 0, 10, 10);
/// assert!(a.overlaps(&Rect::new(9, 9, 5, 5)));
/// assert!(!a.overlaps(&Rect::new(10, 0, 5, 5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open overlap test; rectangles that only share an edge do not overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Bottom edge (`y + h`).
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Geometric center, keeping the half-pixel for odd sizes.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            f64::from(self.x) + f64::from(self.w) / 2.0,
            f64::from(self.y) + f64::from(self.h) / 2.0,
        )
    }

    /// Larger of width and height.
    #[must_use]
    pub fn max_extent(&self) -> i32 {
        self.w.max(self.h)
    }
}
