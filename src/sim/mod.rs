//! Disc simulation module
//!
//! All physics lives here. No rendering or platform dependencies:
//! - One implicit time unit per tick
//! - Bodies keep their index for the lifetime of the arena
//! - Pointer input is a plain method call, never a callback

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{WallHit, bounce_off_walls, discs_overlap, elastic_exchange, resolve_pair};
pub use input::{hit_test, nudge};
pub use state::{Arena, Body, PairResolution};
pub use tick::{TickStats, tick};
