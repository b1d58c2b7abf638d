//! Axis-aligned rectangles in screen space
//!
//! A rectangle covers `[min.x, max.x) x [min.y, max.y)`. Overlap is strict:
//! rectangles that only share an edge do not collide.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Half-open axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: IVec2,
    pub max: IVec2,
}

impl Rect {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Rectangle with its top-left corner at `pos`
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// True if the rectangle covers no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// True if both rectangles share a region of positive area
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}
