//! Game state and lifecycle
//!
//! [`GameState`] exclusively owns every sprite. It is built once and rebuilt
//! wholesale on restart, never patched field by field.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::random_walkable_position;
use super::sprite::Sprite;
use crate::assets::{AssetBundle, FrameId, Sheet};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Crab was caught, frozen until restart
    GameOver,
}

/// Things that happened during a tick, for sound cues and UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FishCollected { score: u32 },
    BirdAdded { count: usize },
    BirdSpedUp { index: usize, step: i32 },
    LevelUp { level: u32 },
    GameOver { score: u32, level: u32 },
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub assets: AssetBundle,
    /// Animation tick counter, cycles through `0..ticks_per_second`
    pub frame: u32,
    pub score: u32,
    /// Difficulty level, starts at 1
    pub level: u32,
    pub phase: GamePhase,
    pub crab: Sprite,
    pub fish: Sprite,
    /// Birds in spawn order, never shrinks during a round
    pub birds: Vec<Sprite>,
    pub rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(tuning: &Tuning, assets: &AssetBundle, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (crab, fish) = initial_sprites(tuning, assets, &mut rng);

        Self {
            seed,
            tuning: tuning.clone(),
            assets: assets.clone(),
            frame: 0,
            score: 0,
            level: 1,
            phase: GamePhase::Playing,
            crab,
            fish,
            birds: Vec::new(),
            rng,
            events: Vec::new(),
        }
    }

    /// Reset every round field to its initial value. Possible at any time,
    /// not only after game over.
    pub fn restart(&mut self) {
        let (crab, fish) = initial_sprites(&self.tuning, &self.assets, &mut self.rng);

        self.frame = 0;
        self.score = 0;
        self.level = 1;
        self.phase = GamePhase::Playing;
        self.crab = crab;
        self.fish = fish;
        // Start with zero birds, difficulty brings them in
        self.birds = Vec::new();
        self.events.push(GameEvent::Restarted);

        log::info!("Game restarted");
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Crab starting position: horizontally centered on the top of the band
    pub fn crab_start(tuning: &Tuning) -> IVec2 {
        IVec2::new(
            (tuning.screen_width - tuning.sprite_width) / 2,
            tuning.walkable_min_y,
        )
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn initial_sprites(tuning: &Tuning, assets: &AssetBundle, rng: &mut Pcg32) -> (Sprite, Sprite) {
    let size = tuning.sprite_size();

    let crab = Sprite::new(GameState::crab_start(tuning), size, FrameId::single(Sheet::Crab))
        .with_animation(assets.crab_frames.clone())
        .with_step(tuning.default_step_tick);

    let fish = Sprite::new(IVec2::ZERO, size, assets.fish);
    let fish = Sprite {
        pos: random_walkable_position(fish.size(), tuning, rng),
        ..fish
    };

    (crab, fish)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state(seed: u64) -> GameState {
        let tuning = Tuning::default();
        let assets = AssetBundle::from_tuning(&tuning).unwrap();
        GameState::new(&tuning, &assets, seed)
    }

    #[test]
    fn test_new_state_initial_values() {
        let state = new_state(12345);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.frame, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.birds.is_empty());
        assert!(state.events().is_empty());
        assert_eq!(state.crab.pos, IVec2::new((1000 - 48) / 2, 360));
        assert_eq!(state.crab.move_step_tick, 2);
        assert_eq!(state.fish.move_step_tick, 0);
        assert!(!state.fish.is_animated());
    }

    #[test]
    fn test_same_seed_same_state() {
        assert_eq!(new_state(99), new_state(99));
    }

    #[test]
    fn test_restart_resets_round() {
        let mut state = new_state(1);
        state.score = 17;
        state.level = 6;
        state.frame = 33;
        state.phase = GamePhase::GameOver;
        state.crab.pos = IVec2::new(3, 400);
        state.crab.rotation = 180.0;
        state.birds.push(state.crab.clone());

        state.restart();

        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.frame, 0);
        assert!(!state.is_over());
        assert!(state.birds.is_empty());
        assert_eq!(state.crab.pos, GameState::crab_start(&state.tuning));
        assert_eq!(state.crab.rotation, 0.0);
        assert_eq!(state.drain_events(), vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_restart_keeps_undrained_events() {
        let mut state = new_state(4);
        state.push_event(GameEvent::GameOver { score: 3, level: 2 });

        state.restart();

        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::GameOver { score: 3, level: 2 },
                GameEvent::Restarted
            ]
        );
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = new_state(1);
        state.push_event(GameEvent::LevelUp { level: 2 });
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.events().is_empty());
    }
}
