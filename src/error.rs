//! Arena configuration errors.
//!
//! The simulation step itself is total; only building an arena from
//! configuration can fail.

use std::fmt;

/// Reasons an [`ArenaConfig`](crate::ArenaConfig) cannot become an arena.
#[derive(Debug)]
pub enum ConfigError {
    /// Width or height is not a positive finite number.
    InvalidBounds { width: f32, height: f32 },

    /// A body's radius is not a positive finite number.
    InvalidRadius {
        /// Roster index of the offending body.
        index: usize,
        radius: f32,
    },

    /// A body's position or velocity contains NaN or infinity.
    NonFiniteBody { index: usize },

    /// Wall damping outside `[0, 1]` would add energy on every bounce.
    InvalidDamping(f32),

    /// Nudge factor must be finite and non-negative.
    InvalidNudgeFactor(f32),

    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBounds { width, height } => {
                write!(f, "arena bounds must be positive and finite, got {width}x{height}")
            }
            ConfigError::InvalidRadius { index, radius } => {
                write!(f, "body {index} has invalid radius {radius}")
            }
            ConfigError::NonFiniteBody { index } => {
                write!(f, "body {index} has a non-finite position or velocity")
            }
            ConfigError::InvalidDamping(d) => {
                write!(f, "wall damping must be within [0, 1], got {d}")
            }
            ConfigError::InvalidNudgeFactor(k) => {
                write!(f, "nudge factor must be finite and non-negative, got {k}")
            }
            ConfigError::Parse(e) => write!(f, "invalid arena config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
