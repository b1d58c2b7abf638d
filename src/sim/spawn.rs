//! Random spawn placement inside the walkable band

use glam::IVec2;
use rand::Rng;

use crate::tuning::Tuning;

/// Uniform random position where a sprite of `size` fits fully on screen
/// and inside the walkable band.
///
/// `x` is drawn from `[0, screen_width - size.x)` and `y` from
/// `[walkable_min_y, walkable_max_y - size.y)`. A range that cannot hold the
/// sprite collapses to its lower bound.
pub fn random_walkable_position(size: IVec2, tuning: &Tuning, rng: &mut impl Rng) -> IVec2 {
    let x = uniform_or_start(rng, 0, tuning.screen_width - size.x);
    let y = uniform_or_start(rng, tuning.walkable_min_y, tuning.walkable_max_y - size.y);
    IVec2::new(x, y)
}

fn uniform_or_start(rng: &mut impl Rng, start: i32, end: i32) -> i32 {
    if end > start {
        rng.random_range(start..end)
    } else {
        start
    }
}
