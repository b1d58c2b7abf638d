//! Fixed timestep simulation tick
//!
//! One call per host frame. The tick reads a snapshot of the controls,
//! moves the crab and the birds, resolves collisions and scoring.

use super::spawn::random_walkable_position;
use super::sprite::Sprite;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::GAME_OVER_ROTATION;
use crate::tuning::Tuning;

/// Control state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Stop the host loop
    pub terminate: bool,
    /// Start a new round, also while still playing
    pub restart: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// A single crab movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl TickInput {
    /// The one direction applied this tick. Priority: left, right, up, down.
    pub fn direction(&self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else {
            None
        }
    }

    pub fn moving(direction: Direction) -> Self {
        let mut input = Self::default();
        match direction {
            Direction::Left => input.left = true,
            Direction::Right => input.right = true,
            Direction::Up => input.up = true,
            Direction::Down => input.down = true,
        }
        input
    }
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Terminate,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    if input.terminate {
        return TickOutcome::Terminate;
    }

    // Restart wins over the game over freeze
    if input.restart {
        state.restart();
        return TickOutcome::Continue;
    }

    // Game over freezes everything, animation included
    if state.phase == GamePhase::GameOver {
        return TickOutcome::Continue;
    }

    advance_animation(state);

    if let Some(direction) = input.direction() {
        move_crab(&mut state.crab, direction, &state.tuning);
    }

    move_birds(&mut state.birds, state.tuning.screen_width);

    if let Some(index) = state.birds.iter().position(|bird| state.crab.overlaps(bird)) {
        state.phase = GamePhase::GameOver;
        // Turn the crab upside down as a visual indicator
        state.crab.rotation = GAME_OVER_ROTATION;
        state.push_event(GameEvent::GameOver {
            score: state.score,
            level: state.level,
        });
        log::info!(
            "Game over: caught by bird {} (score {}, level {})",
            index,
            state.score,
            state.level
        );
        return TickOutcome::Continue;
    }

    if state.crab.overlaps(&state.fish) {
        state.fish.pos = random_walkable_position(state.fish.size(), &state.tuning, &mut state.rng);
        state.score += 1;
        state.push_event(GameEvent::FishCollected { score: state.score });
        log::debug!("Fish collected, respawned at {}", state.fish.pos);
        state.update_level();
    }

    TickOutcome::Continue
}

/// Step the animation counter and show the matching frame on every
/// animated sprite. The fish is never animated.
fn advance_animation(state: &mut GameState) {
    let tuning = &state.tuning;
    state.frame = (state.frame + 1) % tuning.ticks_per_second.max(1);
    let index = (state.frame / tuning.ticks_per_frame.max(1)) as usize;

    state.crab.select_frame(index);
    for bird in &mut state.birds {
        bird.select_frame(index);
    }
}

/// Move the crab one step, saturating at the screen edges and the walkable band
pub fn move_crab(crab: &mut Sprite, direction: Direction, tuning: &Tuning) {
    let step = crab.move_step_tick;
    let width = crab.width();

    match direction {
        Direction::Left => crab.pos.x = (crab.pos.x - step).max(0),
        Direction::Right => {
            crab.pos.x = (crab.pos.x + step).min(tuning.screen_width - width - 1)
        }
        Direction::Up => crab.pos.y = (crab.pos.y - step).max(tuning.walkable_min_y),
        // The lower bound is derived from the width, not the height
        Direction::Down => {
            crab.pos.y = (crab.pos.y + step).min(tuning.walkable_max_y - width - 1)
        }
    }
}

/// Patrol every bird to the right, wrapping to the left edge once it has
/// passed the right one
pub fn move_birds(birds: &mut [Sprite], screen_width: i32) {
    for bird in birds {
        if bird.pos.x >= screen_width {
            bird.pos.x = 0;
        } else {
            bird.pos.x += bird.move_step_tick;
        }
    }
}
