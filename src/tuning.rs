//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. The defaults reproduce the
//! reference game; a JSON file may override any subset of them.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Game balance and layout constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Layout ===
    pub screen_width: i32,
    pub screen_height: i32,
    pub beach_scale: f32,
    /// Top of the walkable band (inclusive)
    pub walkable_min_y: i32,
    /// Bottom of the walkable band (exclusive)
    pub walkable_max_y: i32,

    // === Sprites ===
    /// Unscaled frame size of every sprite sheet cell
    pub sprite_width: i32,
    pub sprite_height: i32,
    pub bird_scale: f32,
    pub animation_columns: u32,
    pub crab_animation_row: u32,
    pub bird_animation_row: u32,

    // === Timing ===
    pub ticks_per_second: u32,
    pub ticks_per_frame: u32,

    // === Difficulty ===
    /// Pixels per tick for the crab and for freshly added birds
    pub default_step_tick: i32,
    pub max_bird_count: usize,
    pub max_bird_step_tick: i32,
    pub score_level_divisor: u32,

    // === HUD ===
    pub score_text_pos: (i32, i32),
    pub level_text_pos: (i32, i32),
    /// Explicit anchor for the game over line. When unset it follows
    /// `walkable_min_y`.
    pub game_over_text_pos: Option<(i32, i32)>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            beach_scale: BEACH_SCALE_FACTOR,
            walkable_min_y: WALKABLE_MIN_Y,
            walkable_max_y: WALKABLE_MAX_Y,

            sprite_width: SPRITE_WIDTH,
            sprite_height: SPRITE_HEIGHT,
            bird_scale: BIRD_SCALE_FACTOR,
            animation_columns: ANIMATION_FRAME_COLUMNS,
            crab_animation_row: CRAB_ANIMATION_ROW,
            bird_animation_row: BIRD_ANIMATION_ROW,

            ticks_per_second: TICKS_PER_SECOND,
            ticks_per_frame: TICKS_PER_FRAME,

            default_step_tick: DEFAULT_STEP_TICK,
            max_bird_count: MAX_BIRD_COUNT,
            max_bird_step_tick: MAX_BIRD_STEP_TICK,
            score_level_divisor: SCORE_LEVEL_DIVISOR,

            score_text_pos: SCORE_TEXT_POS,
            level_text_pos: LEVEL_TEXT_POS,
            game_over_text_pos: None,
        }
    }
}

impl Tuning {
    /// Highest difficulty. Each level adds one bird or one step of bird speed.
    pub fn max_level(&self) -> u32 {
        let speed_ups = (self.max_bird_step_tick - self.default_step_tick).max(0) as usize;
        (self.max_bird_count + speed_ups * self.max_bird_count) as u32
    }

    /// Number of distinct animation indices produced per cycle
    pub fn animation_frame_count(&self) -> u32 {
        self.ticks_per_second / self.ticks_per_frame.max(1)
    }

    /// Top edge of the lane used by the bird with the given spawn index.
    /// Lanes are two unscaled sprite heights apart, starting at the top of
    /// the band.
    pub fn bird_lane_y(&self, index: usize) -> i32 {
        self.walkable_min_y + self.sprite_height * index as i32 * 2
    }

    /// Scaled bird height
    pub fn bird_height(&self) -> i32 {
        (self.sprite_height as f32 * self.bird_scale) as i32
    }

    /// Where the game over line is drawn
    pub fn game_over_text_pos(&self) -> (i32, i32) {
        self.game_over_text_pos
            .unwrap_or((GAME_OVER_TEXT_X, self.walkable_min_y))
    }

    /// Unscaled sprite size
    #[inline]
    pub fn sprite_size(&self) -> IVec2 {
        IVec2::new(self.sprite_width, self.sprite_height)
    }

    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: String| Err(TuningError::Invalid(msg));

        if self.screen_width <= 0 || self.screen_height <= 0 {
            return invalid(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.sprite_width <= 0 || self.sprite_height <= 0 {
            return invalid(format!(
                "sprite size must be positive, got {}x{}",
                self.sprite_width, self.sprite_height
            ));
        }
        if self.beach_scale <= 0.0 || self.bird_scale <= 0.0 {
            return invalid("scale factors must be positive".to_string());
        }
        if self.screen_width <= self.sprite_width {
            return invalid(format!(
                "screen width {} cannot hold a sprite of width {}",
                self.screen_width, self.sprite_width
            ));
        }
        if self.walkable_min_y < 0
            || self.walkable_max_y > self.screen_height
            || self.walkable_max_y - self.walkable_min_y
                <= self.sprite_height.max(self.sprite_width)
        {
            return invalid(format!(
                "walkable band {}..{} cannot hold a sprite",
                self.walkable_min_y, self.walkable_max_y
            ));
        }
        if self.animation_columns == 0 {
            return invalid("animation_columns must be at least 1".to_string());
        }
        if self.ticks_per_frame == 0 || self.ticks_per_frame > self.ticks_per_second {
            return invalid(format!(
                "ticks_per_frame must be in 1..={}, got {}",
                self.ticks_per_second, self.ticks_per_frame
            ));
        }
        if self.animation_frame_count() > self.animation_columns {
            // Indices past the last column keep showing the previous frame
            log::warn!(
                "timing yields {} animation frames but sheets have {} columns",
                self.animation_frame_count(),
                self.animation_columns
            );
        }
        if self.score_level_divisor == 0 {
            return invalid("score_level_divisor must be at least 1".to_string());
        }
        if self.default_step_tick <= 0 {
            return invalid("default_step_tick must be positive".to_string());
        }
        if self.max_bird_step_tick < self.default_step_tick {
            return invalid(format!(
                "max_bird_step_tick {} is below default_step_tick {}",
                self.max_bird_step_tick, self.default_step_tick
            ));
        }
        // Level starts at 1, so there must be at least one level to reach
        if self.max_bird_count == 0 {
            return invalid("max_bird_count must be at least 1".to_string());
        }
        let last_lane_bottom = self.bird_lane_y(self.max_bird_count - 1) + self.bird_height();
        if last_lane_bottom > self.walkable_max_y {
            return invalid(format!(
                "{} bird lanes end at y={}, past the walkable band bottom {}",
                self.max_bird_count, last_lane_bottom, self.walkable_max_y
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_max_level_reference() {
        // 3 birds + 3 speed steps for each of them
        assert_eq!(Tuning::default().max_level(), 12);
    }

    #[test]
    fn test_animation_frame_count() {
        assert_eq!(Tuning::default().animation_frame_count(), 4);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_bird_step_tick": 4 }"#).unwrap();
        assert_eq!(tuning.max_bird_step_tick, 4);
        assert_eq!(tuning.screen_width, SCREEN_WIDTH);
        assert_eq!(tuning.max_bird_count, MAX_BIRD_COUNT);
        assert_eq!(tuning.max_level(), 9);
    }

    #[test]
    fn test_reference_lanes_fit_band() {
        let tuning = Tuning::default();
        assert_eq!(tuning.bird_lane_y(2), 552);
        assert_eq!(tuning.bird_height(), 72);
        assert!(tuning.bird_lane_y(2) + tuning.bird_height() <= tuning.walkable_max_y);
    }

    #[test]
    fn test_rejects_lanes_below_band() {
        // Bird 5 would sit at y=744 and end at 816, past the band at 640
        let err = Tuning::from_json(r#"{ "max_bird_count": 5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));

        let err = Tuning::from_json(r#"{ "max_bird_count": 4 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_more_birds_fit_a_taller_band() {
        let tuning = Tuning::from_json(
            r#"{ "max_bird_count": 5, "walkable_min_y": 0, "walkable_max_y": 800 }"#,
        )
        .unwrap();
        assert_eq!(tuning.bird_lane_y(4) + tuning.bird_height(), 456);
        assert_eq!(tuning.max_level(), 20);
    }

    #[test]
    fn test_rejects_zero_birds() {
        let err = Tuning::from_json(r#"{ "max_bird_count": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_game_over_text_follows_band() {
        assert_eq!(Tuning::default().game_over_text_pos(), (200, 360));

        let moved = Tuning::from_json(r#"{ "walkable_min_y": 300 }"#).unwrap();
        assert_eq!(moved.game_over_text_pos(), (200, 300));

        let pinned = Tuning::from_json(
            r#"{ "walkable_min_y": 300, "game_over_text_pos": [50, 420] }"#,
        )
        .unwrap();
        assert_eq!(pinned.game_over_text_pos(), (50, 420));
    }

    #[test]
    fn test_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_zero_divisor() {
        let err = Tuning::from_json(r#"{ "score_level_divisor": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_narrow_walkable_band() {
        let tuning = Tuning {
            walkable_min_y: 100,
            walkable_max_y: 140,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_max_step_below_default() {
        let tuning = Tuning {
            max_bird_step_tick: 1,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
