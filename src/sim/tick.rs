//! Per-frame simulation step
//!
//! One tick is one implicit time unit: velocities are displacements per frame
//! and there is no dt. Callers drive it once per animation frame.

use super::collision::{bounce_off_walls, collide_at};
use super::state::{Arena, Body, PairResolution};
use glam::Vec2;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Bodies that hit at least one wall
    pub wall_bounces: u32,
    /// Pair resolutions applied (an ordered pair counts once per visit)
    pub collisions: u32,
}

/// Advance the arena by one frame
pub fn tick(arena: &mut Arena) -> TickStats {
    arena.time_ticks += 1;

    let bounds = arena.bounds();
    let damping = arena.wall_damping;
    let stats = match arena.pair_resolution {
        PairResolution::OrderedPairs => step_ordered_pairs(&mut arena.bodies, bounds, damping),
        PairResolution::UniquePairs => step_unique_pairs(&mut arena.bodies, bounds, damping),
    };

    if stats.collisions > 0 || stats.wall_bounces > 0 {
        log::trace!(
            "Tick {}: {} wall bounces, {} collisions",
            arena.time_ticks,
            stats.wall_bounces,
            stats.collisions
        );
    }
    stats
}

/// Integrate then reflect off the walls. Returns true on a wall hit.
fn advance_body(body: &mut Body, bounds: Vec2, damping: f32) -> bool {
    body.pos += body.vel;
    bounce_off_walls(body, bounds, damping).any()
}

/// Each body is advanced and then tested against every other body before the
/// next body moves. Both bodies of a pair are written immediately, so the
/// (j, i) visit reads what the (i, j) visit left behind.
fn step_ordered_pairs(bodies: &mut [Body], bounds: Vec2, damping: f32) -> TickStats {
    let mut stats = TickStats::default();

    for i in 0..bodies.len() {
        if advance_body(&mut bodies[i], bounds, damping) {
            stats.wall_bounces += 1;
        }
        for j in 0..bodies.len() {
            if i != j && collide_at(bodies, i, j) {
                stats.collisions += 1;
            }
        }
    }

    stats
}

/// All bodies move first, then each unordered pair is resolved once
fn step_unique_pairs(bodies: &mut [Body], bounds: Vec2, damping: f32) -> TickStats {
    let mut stats = TickStats::default();

    for body in bodies.iter_mut() {
        if advance_body(body, bounds, damping) {
            stats.wall_bounces += 1;
        }
    }

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if collide_at(bodies, i, j) {
                stats.collisions += 1;
            }
        }
    }

    stats
}
