//! Difficulty progression
//!
//! Score maps to a level. Each level earned first adds a bird; once the bird
//! count is capped it speeds up a random bird that is not yet at full speed.
//! When neither is possible the level stops advancing.

use glam::IVec2;
use rand::Rng;

use super::sprite::Sprite;
use super::state::{GameEvent, GameState};
use crate::assets::{FrameId, Sheet};

/// Level justified by `score`, starting at 1
#[inline]
pub fn desired_level(score: u32, divisor: u32) -> u32 {
    score / divisor.max(1) + 1
}

/// Indices of birds still below `max_step`
pub fn upgradable_birds(birds: &[Sprite], max_step: i32) -> Vec<usize> {
    birds
        .iter()
        .enumerate()
        .filter(|(_, bird)| bird.move_step_tick < max_step)
        .map(|(index, _)| index)
        .collect()
}

/// Uniform pick from `candidates`, `None` when empty
pub fn choose_uniform(candidates: &[usize], rng: &mut impl Rng) -> Option<usize> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

/// Speed up one random bird below `max_step` by one pixel per tick.
/// Returns the index of the upgraded bird.
pub fn speed_up_random(birds: &mut [Sprite], max_step: i32, rng: &mut impl Rng) -> Option<usize> {
    let candidates = upgradable_birds(birds, max_step);
    let index = choose_uniform(&candidates, rng)?;
    birds[index].move_step_tick += 1;
    Some(index)
}

impl GameState {
    /// Raise the difficulty if the current score has earned a new level.
    /// Returns true if the level changed.
    pub fn update_level(&mut self) -> bool {
        let next_level = desired_level(self.score, self.tuning.score_level_divisor);

        if next_level <= self.level || next_level >= self.tuning.max_level() {
            return false;
        }

        // Only advance when the difficulty actually changed
        if self.add_bird() || self.speed_up_random_bird() {
            self.level = next_level;
            self.push_event(GameEvent::LevelUp { level: next_level });
            log::info!("Next level reached: {}", next_level);
            return true;
        }

        false
    }

    /// Add a bird in the next free lane. Fails once the bird cap is reached.
    pub fn add_bird(&mut self) -> bool {
        let count = self.birds.len();
        if count >= self.tuning.max_bird_count {
            return false;
        }

        let y = self.tuning.bird_lane_y(count);
        let bird = Sprite::new(
            IVec2::new(0, y),
            self.tuning.sprite_size(),
            FrameId::single(Sheet::Bird),
        )
        .with_animation(self.assets.bird_frames.clone())
        .with_scale(self.tuning.bird_scale)
        .with_step(self.tuning.default_step_tick);

        self.birds.push(bird);
        self.push_event(GameEvent::BirdAdded { count: count + 1 });
        log::debug!("Bird {} added at y={}", count + 1, y);

        true
    }

    /// Speed up one random bird. Fails once every bird is at full speed.
    pub fn speed_up_random_bird(&mut self) -> bool {
        let max_step = self.tuning.max_bird_step_tick;
        match speed_up_random(&mut self.birds, max_step, &mut self.rng) {
            Some(index) => {
                let step = self.birds[index].move_step_tick;
                self.push_event(GameEvent::BirdSpedUp { index, step });
                log::debug!("Bird {} sped up to {} px/tick", index, step);
                true
            }
            None => false,
        }
    }
}
