//! Collision detection and response for discs in a rectangle
//!
//! Two rules: damped reflection off the arena walls, and a 1-D elastic
//! exchange applied per axis between overlapping discs. Neither rule moves a
//! body back out of penetration.

use glam::Vec2;

use super::state::Body;

/// Which axes crossed a wall this step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    /// Left or right wall
    pub x: bool,
    /// Top or bottom wall
    pub y: bool,
}

impl WallHit {
    #[inline]
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Check whether a disc's leading edge lies outside `[0, bounds]` on each axis
pub fn wall_crossing(pos: Vec2, radius: f32, bounds: Vec2) -> WallHit {
    WallHit {
        x: pos.x - radius < 0.0 || pos.x + radius > bounds.x,
        y: pos.y - radius < 0.0 || pos.y + radius > bounds.y,
    }
}

/// Negate and damp the velocity component of every crossing axis.
///
/// Position is left as is, so a body may sit past the wall for a tick.
pub fn bounce_off_walls(body: &mut Body, bounds: Vec2, damping: f32) -> WallHit {
    let hit = wall_crossing(body.pos, body.radius, bounds);
    if hit.x {
        body.vel.x *= -damping;
    }
    if hit.y {
        body.vel.y *= -damping;
    }
    hit
}

/// Strict overlap: touching discs do not collide
#[inline]
pub fn discs_overlap(a: &Body, b: &Body) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

/// One-dimensional elastic collision, applied to x and y independently.
///
/// v1' = ((m1 - m2) v1 + 2 m2 v2) / (m1 + m2)
/// v2' = ((m2 - m1) v2 + 2 m1 v1) / (m1 + m2)
#[inline]
pub fn elastic_exchange(m1: f32, v1: Vec2, m2: f32, v2: Vec2) -> (Vec2, Vec2) {
    let total = m1 + m2;
    debug_assert!(total > 0.0, "elastic exchange needs positive total mass");
    let v1_new = (v1 * (m1 - m2) + v2 * (2.0 * m2)) / total;
    let v2_new = (v2 * (m2 - m1) + v1 * (2.0 * m1)) / total;
    (v1_new, v2_new)
}

/// Exchange velocities between two bodies using radius as mass
pub fn resolve_pair(a: &mut Body, b: &mut Body) {
    let (va, vb) = elastic_exchange(a.mass(), a.vel, b.mass(), b.vel);
    a.vel = va;
    b.vel = vb;
}

/// Resolve bodies `i` and `j` if they overlap. Returns true on contact.
pub fn collide_at(bodies: &mut [Body], i: usize, j: usize) -> bool {
    debug_assert_ne!(i, j);
    let (a, b) = pair_mut(bodies, i, j);
    if !discs_overlap(a, b) {
        return false;
    }
    resolve_pair(a, b);
    log::trace!("Collision {} <-> {}: v=({}, {})", i, j, a.vel, b.vel);
    true
}

/// Two distinct mutable borrows, returned in the order asked for
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
