//! Platform bindings
//!
//! The core never draws or listens for events. A browser shell drives it
//! through the wasm surface in `web`: one `tick` per animation frame, the
//! flat body arrays for painting, and the pointer/color entry points.

#[cfg(target_arch = "wasm32")]
pub mod web;
