//! Axis-aligned bounding boxes and the offset intersection test
//!
//! The one geometric primitive the engine needs: "would box A, translated by
//! some offset, overlap box B". The offset form lets the physics code ask
//! "would the ball overlap the paddle after moving by its velocity" without
//! committing the move.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in display-pixel coordinates, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Overlap test with `self` translated by `(x_off, y_off)` first.
    ///
    /// Closed-interval semantics: boxes that merely touch along an edge count
    /// as intersecting. Zero-width or zero-height boxes never intersect
    /// anything.
    pub fn intersects(&self, other: &Rect, x_off: i32, y_off: i32) -> bool {
        if self.w == 0 || self.h == 0 || other.w == 0 || other.h == 0 {
            return false;
        }
        // Separated on the x axis
        if self.x + x_off > other.x + other.w || other.x > self.x + x_off + self.w {
            return false;
        }
        // Separated on the y axis
        if self.y + y_off > other.y + other.h || other.y > self.y + y_off + self.h {
            return false;
        }
        true
    }
}
