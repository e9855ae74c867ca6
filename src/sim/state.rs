//! Arena state and the disc bodies it owns
//!
//! Bodies are identified by their index in the arena. The population is fixed
//! at construction: nothing is added or removed afterwards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input;
use super::tick::{TickStats, tick};
use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::ArenaConfig;

/// A circular body
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Center in arena space
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Always positive; doubles as the body's mass in collisions
    pub radius: f32,
    /// Any CSS-style color string; never validated here
    pub color: String,
}

impl Body {
    /// Create a body at rest
    pub fn new(pos: Vec2, radius: f32, color: impl Into<String>) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            color: color.into(),
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    /// Mass stand-in used by the elastic collision formula
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius
    }

    /// Point-in-disc test (boundary counts as inside)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.pos) <= self.radius
    }
}

/// How overlapping pairs are visited during a tick.
///
/// `OrderedPairs` walks every ordered pair (i, j) with i != j while body i is
/// being advanced, so an overlapping pair is resolved twice per tick and each
/// resolution reads the velocities left by the previous one. Later bodies have
/// not been integrated yet when earlier ones test against them. Results depend
/// on body order, and an equal-radius pair that is still overlapping on the
/// second visit swaps its velocities back.
///
/// `UniquePairs` integrates every body first, then resolves each unordered
/// pair once. This changes visible behavior (less sticking and jitter) and is
/// opt-in. Neither mode is order independent when three or more bodies overlap
/// in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairResolution {
    #[default]
    OrderedPairs,
    UniquePairs,
}

/// Rectangular arena owning a fixed, ordered set of bodies
#[derive(Debug, Clone)]
pub struct Arena {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) wall_damping: f32,
    pub(crate) nudge_factor: f32,
    pub(crate) pair_resolution: PairResolution,
    pub(crate) bodies: Vec<Body>,
    /// Ticks advanced since construction
    pub(crate) time_ticks: u64,
}

impl Arena {
    /// Create an arena with the default damping, nudge factor and pair mode.
    ///
    /// Panics if a radius is not positive; use [`Arena::from_config`] for
    /// untrusted input.
    pub fn new(width: f32, height: f32, bodies: Vec<Body>) -> Self {
        assert!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "arena bounds must be positive and finite"
        );
        for (i, body) in bodies.iter().enumerate() {
            assert!(
                body.radius.is_finite() && body.radius > 0.0,
                "body {i} radius must be positive and finite"
            );
            assert!(
                body.pos.is_finite() && body.vel.is_finite(),
                "body {i} position and velocity must be finite"
            );
        }
        Self {
            width,
            height,
            wall_damping: WALL_DAMPING,
            nudge_factor: NUDGE_FACTOR,
            pair_resolution: PairResolution::default(),
            bodies,
            time_ticks: 0,
        }
    }

    /// Build an arena from a validated configuration
    pub fn from_config(config: &ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let bodies: Vec<Body> = config.bodies.iter().map(|seed| seed.to_body()).collect();
        log::info!(
            "Arena {}x{} with {} bodies ({:?})",
            config.width,
            config.height,
            bodies.len(),
            config.pair_resolution
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            wall_damping: config.wall_damping,
            nudge_factor: config.nudge_factor,
            pair_resolution: config.pair_resolution,
            bodies,
            time_ticks: 0,
        })
    }

    pub fn with_pair_resolution(mut self, mode: PairResolution) -> Self {
        self.pair_resolution = mode;
        self
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Arena size as a vector (width, height)
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn pair_resolution(&self) -> PairResolution {
        self.pair_resolution
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Read-only view of all bodies in identity order
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance one frame
    pub fn tick(&mut self) -> TickStats {
        tick(self)
    }

    /// Index of the first body containing `point`
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        input::hit_test(&self.bodies, point)
    }

    /// Push the first body under `point` toward it; returns that body's index
    pub fn nudge(&mut self, point: Vec2) -> Option<usize> {
        input::nudge(&mut self.bodies, point, self.nudge_factor)
    }

    /// Replace a body's color. Empty strings are ignored.
    ///
    /// Panics if `index` is out of range.
    pub fn set_color(&mut self, index: usize, color: &str) {
        assert!(
            index < self.bodies.len(),
            "set_color: body index {index} out of range (len {})",
            self.bodies.len()
        );
        if color.is_empty() {
            return;
        }
        log::debug!("Body {} color: {} -> {}", index, self.bodies[index].color, color);
        self.bodies[index].color = color.to_owned();
    }

    /// Sum of radius-weighted velocities
    pub fn momentum(&self) -> Vec2 {
        self.bodies.iter().map(|b| b.vel * b.mass()).sum()
    }

    /// Sum of `0.5 * r * |v|^2`
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.mass() * b.vel.length_squared())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_arena() -> Arena {
        Arena::new(
            ARENA_WIDTH,
            ARENA_HEIGHT,
            vec![
                Body::new(Vec2::new(100.0, 200.0), 20.0, "red"),
                Body::new(Vec2::new(300.0, 100.0), 30.0, "blue"),
                Body::new(Vec2::new(500.0, 300.0), 25.0, "green"),
            ],
        )
    }

    #[test]
    fn test_body_contains_boundary() {
        let body = Body::new(Vec2::new(10.0, 10.0), 5.0, "red");
        assert!(body.contains(Vec2::new(15.0, 10.0)));
        assert!(!body.contains(Vec2::new(15.1, 10.0)));
    }

    #[test]
    fn test_set_color_changes_only_target() {
        let mut arena = sample_arena();
        let before = arena.bodies().to_vec();

        arena.set_color(1, "purple");

        assert_eq!(arena.bodies()[1].color, "purple");
        for (i, (a, b)) in before.iter().zip(arena.bodies()).enumerate() {
            if i == 1 {
                assert_eq!(a.pos, b.pos);
                assert_eq!(a.vel, b.vel);
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_set_color_empty_is_noop() {
        let mut arena = sample_arena();
        arena.set_color(0, "");
        assert_eq!(arena.bodies()[0].color, "red");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_color_out_of_range_panics() {
        let mut arena = sample_arena();
        arena.set_color(3, "purple");
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_new_rejects_zero_radius() {
        Arena::new(100.0, 100.0, vec![Body::new(Vec2::ZERO, 0.0, "red")]);
    }

    #[test]
    #[should_panic(expected = "radius must be positive and finite")]
    fn test_new_rejects_infinite_radius() {
        Arena::new(100.0, 100.0, vec![Body::new(Vec2::ZERO, f32::INFINITY, "red")]);
    }

    #[test]
    #[should_panic(expected = "position and velocity must be finite")]
    fn test_new_rejects_non_finite_position() {
        Arena::new(100.0, 100.0, vec![Body::new(Vec2::new(f32::NAN, 10.0), 5.0, "red")]);
    }

    #[test]
    fn test_momentum_and_energy() {
        let arena = Arena::new(
            100.0,
            100.0,
            vec![
                Body::new(Vec2::new(20.0, 20.0), 2.0, "a").with_velocity(Vec2::new(3.0, 0.0)),
                Body::new(Vec2::new(60.0, 60.0), 4.0, "b").with_velocity(Vec2::new(0.0, -1.0)),
            ],
        );
        assert_eq!(arena.momentum(), Vec2::new(6.0, -4.0));
        assert!((arena.kinetic_energy() - (9.0 + 2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_pair_resolution_serde_names() {
        let json = serde_json::to_string(&PairResolution::UniquePairs).unwrap();
        assert_eq!(json, "\"unique_pairs\"");
        assert_eq!(PairResolution::default(), PairResolution::OrderedPairs);
    }
}
