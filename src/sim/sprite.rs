//! Positioned, optionally animated and scaled on-screen objects

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::assets::FrameId;
use crate::consts::DEFAULT_SCALE;

/// A sprite: the crab, the fish or a bird
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Top-left corner in screen pixels
    pub pos: IVec2,
    /// Unscaled frame size
    pub base_size: IVec2,
    /// Size multiplier, [`DEFAULT_SCALE`] for native size
    pub scale: f32,
    /// Rotation in degrees. Purely cosmetic, never part of the bounding box.
    pub rotation: f32,
    /// Frame currently on display
    pub frame: FrameId,
    /// Animation frames, empty for static sprites
    pub animation: Vec<FrameId>,
    /// Pixels moved per tick, 0 for static sprites
    pub move_step_tick: i32,
}

impl Sprite {
    /// A static sprite at native size
    pub fn new(pos: IVec2, base_size: IVec2, frame: FrameId) -> Self {
        Self {
            pos,
            base_size,
            scale: DEFAULT_SCALE,
            rotation: 0.0,
            frame,
            animation: Vec::new(),
            move_step_tick: 0,
        }
    }

    /// Attach an animation; the first frame becomes the displayed one
    pub fn with_animation(mut self, frames: Vec<FrameId>) -> Self {
        if let Some(first) = frames.first() {
            self.frame = *first;
        }
        self.animation = frames;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_step(mut self, move_step_tick: i32) -> Self {
        self.move_step_tick = move_step_tick;
        self
    }

    #[inline]
    pub fn width(&self) -> i32 {
        (self.base_size.x as f32 * self.scale) as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        (self.base_size.y as f32 * self.scale) as i32
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width(), self.height())
    }

    /// Bounding box from position and scaled size (rotation ignored)
    pub fn bounding_box(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size())
    }

    /// Show animation frame `index`. Static sprites and out-of-range
    /// indices leave the current frame untouched.
    pub fn select_frame(&mut self, index: usize) {
        if let Some(frame) = self.animation.get(index) {
            self.frame = *frame;
        }
    }

    pub fn overlaps(&self, other: &Sprite) -> bool {
        self.bounding_box().overlaps(&other.bounding_box())
    }

    pub fn is_animated(&self) -> bool {
        !self.animation.is_empty()
    }
}
