//! Arena configuration
//!
//! Supplied once at construction; nothing here is renegotiated while the
//! simulation runs. Missing JSON keys fall back to the defaults in
//! [`crate::consts`] and the reference roster.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{Body, PairResolution};

/// Initial state of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySeed {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: String,
    /// Initial velocity (at rest unless given)
    #[serde(default)]
    pub dx: f32,
    #[serde(default)]
    pub dy: f32,
}

impl BodySeed {
    pub fn new(x: f32, y: f32, radius: f32, color: &str) -> Self {
        Self {
            x,
            y,
            radius,
            color: color.to_owned(),
            dx: 0.0,
            dy: 0.0,
        }
    }

    pub fn to_body(&self) -> Body {
        Body::new(Vec2::new(self.x, self.y), self.radius, self.color.clone())
            .with_velocity(Vec2::new(self.dx, self.dy))
    }
}

/// Everything needed to build an [`Arena`](crate::Arena)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    /// Velocity multiplier on the crossing axis (0.8 = lose 20% per bounce)
    pub wall_damping: f32,
    /// Pointer offset to velocity scale per move event
    pub nudge_factor: f32,
    pub pair_resolution: PairResolution,
    /// Roster in identity order
    pub bodies: Vec<BodySeed>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            wall_damping: WALL_DAMPING,
            nudge_factor: NUDGE_FACTOR,
            pair_resolution: PairResolution::OrderedPairs,
            bodies: vec![
                BodySeed::new(100.0, 200.0, 20.0, "red"),
                BodySeed::new(300.0, 100.0, 30.0, "blue"),
                BodySeed::new(500.0, 300.0, 25.0, "green"),
                BodySeed::new(200.0, 200.0, 15.0, "green"),
            ],
        }
    }
}

impl ArenaConfig {
    /// Parse from JSON; keys not present keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.wall_damping) {
            return Err(ConfigError::InvalidDamping(self.wall_damping));
        }
        if !(self.nudge_factor.is_finite() && self.nudge_factor >= 0.0) {
            return Err(ConfigError::InvalidNudgeFactor(self.nudge_factor));
        }
        for (index, seed) in self.bodies.iter().enumerate() {
            if !(seed.radius.is_finite() && seed.radius > 0.0) {
                return Err(ConfigError::InvalidRadius {
                    index,
                    radius: seed.radius,
                });
            }
            let finite = [seed.x, seed.y, seed.dx, seed.dy].iter().all(|v| v.is_finite());
            if !finite {
                return Err(ConfigError::NonFiniteBody { index });
            }
        }
        Ok(())
    }
}
