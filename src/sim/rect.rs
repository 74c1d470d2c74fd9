//! Axis-aligned rectangle geometry for sprites, buttons and the play field
//!
//! A rectangle is defined by its top-left corner and its size, in screen
//! space (x grows right, y grows down).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict overlap: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Point containment, exclusive on every edge
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x > self.left() && point.x < self.right() && point.y > self.top() && point.y < self.bottom()
    }

    /// Half-open containment: top and left edges inside, bottom and right outside
    pub fn covers_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Move this rectangle the minimum distance needed to lie inside `bounds`.
    ///
    /// A rectangle larger than `bounds` along an axis is centered on that axis.
    pub fn clamped_into(&self, bounds: &Rect) -> Rect {
        let clamp_axis = |min: f32, size: f32, lo: f32, extent: f32| {
            if size > extent {
                lo + (extent - size) / 2.0
            } else {
                min.clamp(lo, lo + extent - size)
            }
        };
        Rect {
            min: Vec2::new(
                clamp_axis(self.min.x, self.size.x, bounds.min.x, bounds.size.x),
                clamp_axis(self.min.y, self.size.y, bounds.min.y, bounds.size.y),
            ),
            size: self.size,
        }
    }
}
