//! Idle/demo mode: a simple AI that plays the game
//!
//! Produces the same [`TickInput`] a keyboard would, so the simulation
//! cannot tell the difference.

use super::sprite::Sprite;
use super::state::GameState;
use super::tick::{Direction, TickInput};

/// How far ahead (pixels) a bird in the crab's lane counts as a threat
pub const DODGE_LOOKAHEAD: i32 = 160;

/// Pick the input for the next tick
pub fn steer(state: &GameState) -> TickInput {
    if state.is_over() {
        return TickInput {
            restart: true,
            ..Default::default()
        };
    }

    if let Some(direction) = dodge(state) {
        return TickInput::moving(direction);
    }

    chase_fish(&state.crab, &state.fish)
        .map(TickInput::moving)
        .unwrap_or_default()
}

/// Step out of the lane of the closest bird flying in from the left
fn dodge(state: &GameState) -> Option<Direction> {
    let crab = &state.crab;
    let threat = state
        .birds
        .iter()
        .filter(|bird| is_threat(crab, bird))
        .min_by_key(|bird| crab.pos.x - (bird.pos.x + bird.width()))?;

    let crab_center = crab.pos.y + crab.height() / 2;
    let bird_center = threat.pos.y + threat.height() / 2;
    let at_top = crab.pos.y <= state.tuning.walkable_min_y;
    let at_bottom = crab.pos.y >= state.tuning.walkable_max_y - crab.width() - 1;

    // Flee away from the bird's center, unless the band edge is in the way
    let flee_up = bird_center >= crab_center;
    match (flee_up, at_top, at_bottom) {
        (true, false, _) | (false, _, true) => Some(Direction::Up),
        _ => Some(Direction::Down),
    }
}

fn is_threat(crab: &Sprite, bird: &Sprite) -> bool {
    let crab_box = crab.bounding_box();
    let bird_box = bird.bounding_box();

    let same_lane = bird_box.min.y < crab_box.max.y && crab_box.min.y < bird_box.max.y;
    let gap = crab_box.min.x - bird_box.max.x;
    let closing_in = bird_box.min.x < crab_box.max.x && gap < DODGE_LOOKAHEAD;

    same_lane && closing_in && bird.move_step_tick > 0
}

/// Walk toward the fish, lining up horizontally first
fn chase_fish(crab: &Sprite, fish: &Sprite) -> Option<Direction> {
    let step = crab.move_step_tick.max(1);
    let dx = fish.pos.x - crab.pos.x;
    let dy = fish.pos.y - crab.pos.y;

    if dx.abs() >= step {
        Some(if dx < 0 { Direction::Left } else { Direction::Right })
    } else if dy.abs() >= step {
        Some(if dy < 0 { Direction::Up } else { Direction::Down })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetBundle, FrameId, Sheet};
    use crate::sim::state::GamePhase;
    use crate::sim::tick::{TickOutcome, tick};
    use crate::tuning::Tuning;
    use glam::IVec2;

    fn new_state(seed: u64) -> GameState {
        let tuning = Tuning::default();
        let assets = AssetBundle::from_tuning(&tuning).unwrap();
        GameState::new(&tuning, &assets, seed)
    }

    fn bird_at(x: i32, y: i32) -> Sprite {
        Sprite::new(IVec2::new(x, y), IVec2::new(48, 48), FrameId::single(Sheet::Bird))
            .with_scale(1.5)
            .with_step(2)
    }

    #[test]
    fn test_restarts_after_game_over() {
        let mut state = new_state(1);
        state.phase = GamePhase::GameOver;
        assert!(steer(&state).restart);
    }

    #[test]
    fn test_never_terminates() {
        let mut state = new_state(2);
        for _ in 0..2000 {
            let input = steer(&state);
            assert!(!input.terminate);
            assert_eq!(tick(&mut state, &input), TickOutcome::Continue);
        }
    }

    #[test]
    fn test_chases_fish_horizontally_first() {
        let mut state = new_state(3);
        state.fish.pos = state.crab.pos + IVec2::new(-200, 100);
        assert_eq!(steer(&state).direction(), Some(Direction::Left));

        state.fish.pos = state.crab.pos + IVec2::new(0, 100);
        assert_eq!(steer(&state).direction(), Some(Direction::Down));
    }

    #[test]
    fn test_reaches_fish() {
        let mut state = new_state(4);
        for _ in 0..2000 {
            if state.score > 0 {
                break;
            }
            let input = steer(&state);
            tick(&mut state, &input);
        }
        assert!(state.score > 0);
    }

    #[test]
    fn test_dodges_bird_in_lane() {
        let mut state = new_state(5);
        state.fish.pos = state.crab.pos + IVec2::new(300, 0);
        // Crab sits at the top of the band, bird slightly below its center
        state.birds.push(bird_at(state.crab.pos.x - 100, state.crab.pos.y + 10));
        assert_eq!(steer(&state).direction(), Some(Direction::Down));

        state.birds[0].pos.y = state.crab.pos.y - 10;
        assert_eq!(steer(&state).direction(), Some(Direction::Down));
    }

    #[test]
    fn test_ignores_distant_or_passed_birds() {
        let mut state = new_state(6);
        state.fish.pos = state.crab.pos + IVec2::new(300, 0);
        // Far behind
        state.birds.push(bird_at(0, state.crab.pos.y));
        // Already past the crab
        state.birds.push(bird_at(state.crab.pos.x + 60, state.crab.pos.y));
        assert_eq!(steer(&state).direction(), Some(Direction::Right));
    }
}
