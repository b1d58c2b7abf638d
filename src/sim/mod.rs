//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - Stable iteration order (birds in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod difficulty;
pub mod rect;
pub mod spawn;
pub mod sprite;
pub mod state;
pub mod tick;

pub use difficulty::{choose_uniform, desired_level, speed_up_random, upgradable_birds};
pub use rect::Rect;
pub use spawn::random_walkable_position;
pub use sprite::Sprite;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Direction, TickInput, TickOutcome, move_birds, move_crab, tick};
