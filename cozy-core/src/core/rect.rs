//! Axis-Aligned Rectangles
//!
//! Integer rectangles in screen space: origin at the top-left corner,
//! y grows downward. Used for the player body and for every collider.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Integer axis-aligned rectangle.
///
/// Edge setters move the rectangle; they never resize it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle of the given size with its top-left corner at `pos`.
    #[inline]
    pub const fn from_top_left(pos: (i32, i32), size: (i32, i32)) -> Self {
        Self::new(pos.0, pos.1, size.0, size.1)
    }

    /// Left edge.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Top edge.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Move so the left edge sits at `left`.
    #[inline]
    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    /// Move so the right edge sits at `right`.
    #[inline]
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    /// Move so the top edge sits at `top`.
    #[inline]
    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    /// Move so the bottom edge sits at `bottom`.
    #[inline]
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// True if the rectangle has no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Strict overlap test.
    ///
    /// Rectangles that only share an edge do not overlap, and an empty
    /// rectangle never overlaps anything.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Center point as floats (for rendering).
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}, {}..{}]", self.left(), self.right(), self.top(), self.bottom())
    }
}

// =============================================================================
// TESTS
// =============================================================================
