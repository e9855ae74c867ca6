//! Disc Arena - a bounded 2D disc physics simulation
//!
//! Core modules:
//! - `sim`: Per-frame simulation (bodies, arena, collisions, pointer input)
//! - `settings`: Construction-time arena configuration
//! - `roster`: Seeded generation of initial body sets
//! - `platform`: Browser binding surface for a canvas shell
//! - `error`: Configuration errors

pub mod error;
pub mod platform;
pub mod roster;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{ArenaConfig, BodySeed};
pub use sim::{Arena, Body, PairResolution, TickStats};

/// Simulation configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Velocity multiplier applied to the crossing axis on a wall bounce
    pub const WALL_DAMPING: f32 = 0.8;

    /// Fraction of the pointer offset added to a body's velocity per move event
    pub const NUDGE_FACTOR: f32 = 0.05;
}
