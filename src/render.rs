//! Renderer boundary
//!
//! Turns a [`GameState`] into a flat, ordered list of draw requests and HUD
//! text. The renderer owns images and fonts; nothing flows back into the sim.

use serde::Serialize;

use crate::assets::FrameId;
use crate::sim::{GameState, Sprite};

pub const GAME_OVER_TEXT: &str = "Game Over! (Enter: restart, Esc: exit)";

/// Draw one frame image at a position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawRequest {
    pub frame: FrameId,
    pub x: i32,
    pub y: i32,
    pub scale: f32,
    /// Degrees, applied around the sprite center
    pub rotation: f32,
}

impl DrawRequest {
    fn sprite(sprite: &Sprite) -> Self {
        Self {
            frame: sprite.frame,
            x: sprite.pos.x,
            y: sprite.pos.y,
            scale: sprite.scale,
            rotation: sprite.rotation,
        }
    }
}

/// A line of HUD text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLabel {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Everything needed to draw one frame, in back-to-front order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub draws: Vec<DrawRequest>,
    pub texts: Vec<TextLabel>,
}

/// Build the draw list: beach, crab, fish, birds, then HUD text
pub fn build_frame(state: &GameState) -> Frame {
    let tuning = &state.tuning;

    let mut draws = Vec::with_capacity(3 + state.birds.len());
    draws.push(DrawRequest {
        frame: state.assets.beach,
        x: 0,
        y: 0,
        scale: tuning.beach_scale,
        rotation: 0.0,
    });
    draws.push(DrawRequest::sprite(&state.crab));
    draws.push(DrawRequest::sprite(&state.fish));
    draws.extend(state.birds.iter().map(DrawRequest::sprite));

    let label = |text: String, (x, y): (i32, i32)| TextLabel { text, x, y };
    let mut texts = vec![
        label(format!("Score: {}", state.score), tuning.score_text_pos),
        label(
            format!("Level: {}/{}", state.level, tuning.max_level()),
            tuning.level_text_pos,
        ),
    ];
    if state.is_over() {
        texts.push(label(GAME_OVER_TEXT.to_string(), tuning.game_over_text_pos()));
    }

    Frame { draws, texts }
}
