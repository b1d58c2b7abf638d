//! Crab Beach - a small beach arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, difficulty)
//! - `tuning`: Data-driven game balance
//! - `assets`: Frame handles for the sprite sheets
//! - `render`: Per-frame draw list handed to the renderer

pub mod assets;
pub mod render;
pub mod sim;
pub mod tuning;

pub use assets::{AssetBundle, AssetError, FrameId, Sheet};
pub use tuning::{Tuning, TuningError};

/// Reference game constants (the defaults of [`Tuning`])
pub mod consts {
    pub const SCREEN_WIDTH: i32 = 1000;
    pub const SCREEN_HEIGHT: i32 = 800;

    /// The beach backdrop is drawn at twice its native size
    pub const BEACH_SCALE_FACTOR: f32 = 2.0;
    /// Walkable band in screen pixels (beach image rows 180..320, scaled)
    pub const WALKABLE_MIN_Y: i32 = 180 * 2;
    pub const WALKABLE_MAX_Y: i32 = 320 * 2;

    /// Sprite sheets are 192x192 with a 4x4 grid of frames
    pub const SPRITE_WIDTH: i32 = 192 / 4;
    pub const SPRITE_HEIGHT: i32 = 192 / 4;
    pub const ANIMATION_FRAME_COLUMNS: u32 = 4;
    pub const CRAB_ANIMATION_ROW: u32 = 0;
    pub const BIRD_ANIMATION_ROW: u32 = 0;

    /// No scaling
    pub const DEFAULT_SCALE: f32 = 1.0;
    pub const BIRD_SCALE_FACTOR: f32 = 1.5;

    pub const TICKS_PER_SECOND: u32 = 60;
    pub const TICKS_PER_FRAME: u32 = TICKS_PER_SECOND / 4;
    pub const DEFAULT_STEP_TICK: i32 = 2;

    pub const MAX_BIRD_COUNT: usize = 3;
    pub const MAX_BIRD_STEP_TICK: i32 = 5;
    pub const SCORE_LEVEL_DIVISOR: u32 = 3;

    /// Rotation (degrees) applied to the crab once the game is lost
    pub const GAME_OVER_ROTATION: f32 = 180.0;

    /// HUD text anchors
    pub const SCORE_TEXT_POS: (i32, i32) = (10, 740);
    pub const LEVEL_TEXT_POS: (i32, i32) = (780, 740);
    /// The game over line sits on the top edge of the walkable band
    pub const GAME_OVER_TEXT_X: i32 = 200;
}
