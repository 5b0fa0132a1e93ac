//! Axis-Aligned Rectangle
//!
//! Top-left anchored rectangle used for hurtboxes, hitboxes, platforms, and
//! projectile bounds. Overlap is strict: rectangles that merely share an edge
//! do not intersect, which keeps side-by-side platform segments from
//! generating phantom collisions.

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle centered on a point (projectile bounds).
    #[inline]
    pub fn from_center(center: Vec2, half_w: f32, half_h: f32) -> Self {
        Self {
            x: center.x - half_w,
            y: center.y - half_h,
            w: half_w * 2.0,
            h: half_h * 2.0,
        }
    }

    /// Left edge.
    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge.
    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test (touching edges do not count).
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
