//! Seeded roster generation
//!
//! Places non-overlapping bodies inside the arena. The same seed always gives
//! the same roster, so demos and stress tests are reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::BodySeed;

/// Colors handed out in random order
pub const PALETTE: [&str; 8] = [
    "red", "blue", "green", "orange", "purple", "teal", "gold", "crimson",
];

/// Placement attempts per body before giving up on it
const MAX_ATTEMPTS: u32 = 200;

/// Parameters for [`scatter`]
#[derive(Debug, Clone)]
pub struct ScatterParams {
    pub width: f32,
    pub height: f32,
    pub count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Each velocity component is drawn from `[-max_speed, max_speed]`
    pub max_speed: f32,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            width: crate::consts::ARENA_WIDTH,
            height: crate::consts::ARENA_HEIGHT,
            count: 12,
            min_radius: 10.0,
            max_radius: 30.0,
            max_speed: 0.0,
        }
    }
}

/// Generate up to `params.count` bodies fully inside the bounds with no
/// overlaps. Fewer are returned when the arena is too crowded.
pub fn scatter(params: &ScatterParams, seed: u64) -> Vec<BodySeed> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut placed: Vec<BodySeed> = Vec::with_capacity(params.count);

    for _ in 0..params.count {
        let radius = if params.max_radius > params.min_radius {
            rng.random_range(params.min_radius..params.max_radius)
        } else {
            params.min_radius
        };
        // Arena smaller than this disc
        if 2.0 * radius >= params.width || 2.0 * radius >= params.height {
            continue;
        }

        let spot = (0..MAX_ATTEMPTS).find_map(|_| {
            let x = rng.random_range(radius..params.width - radius);
            let y = rng.random_range(radius..params.height - radius);
            let clear = placed.iter().all(|other| {
                let (dx, dy) = (other.x - x, other.y - y);
                (dx * dx + dy * dy).sqrt() >= other.radius + radius
            });
            clear.then_some((x, y))
        });

        let Some((x, y)) = spot else {
            continue;
        };

        let color = PALETTE[rng.random_range(0..PALETTE.len())];
        let mut body = BodySeed::new(x, y, radius, color);
        if params.max_speed > 0.0 {
            body.dx = rng.random_range(-params.max_speed..=params.max_speed);
            body.dy = rng.random_range(-params.max_speed..=params.max_speed);
        }
        placed.push(body);
    }

    if placed.len() < params.count {
        log::warn!("Roster seed {}: placed {} of {} bodies", seed, placed.len(), params.count);
    } else {
        log::info!("Roster seed {}: placed {} bodies", seed, placed.len());
    }
    placed
}
