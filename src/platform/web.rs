//! wasm-bindgen surface for a canvas shell
//!
//! Coordinates passed in are canvas-local; translating from client space is
//! the shell's job.

use glam::Vec2;
use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use crate::roster::{ScatterParams, scatter};
use crate::settings::ArenaConfig;
use crate::sim::{Arena, PairResolution};

/// Install panic hook and logger once per page
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
}

/// Arena handle owned by the JS side
#[wasm_bindgen]
pub struct WebArena {
    arena: Arena,
}

#[wasm_bindgen]
impl WebArena {
    /// Reference 800x400 arena with the four-body roster
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebArena, JsError> {
        Self::from_json("{}")
    }

    /// Build from a (possibly partial) JSON config
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WebArena, JsError> {
        let config = ArenaConfig::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        let arena = Arena::from_config(&config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WebArena { arena })
    }

    /// Seeded random roster in an arena of the given size
    pub fn scattered(width: f32, height: f32, count: usize, seed: u64) -> Result<WebArena, JsError> {
        let params = ScatterParams {
            width,
            height,
            count,
            ..Default::default()
        };
        let config = ArenaConfig {
            width,
            height,
            bodies: scatter(&params, seed),
            ..Default::default()
        };
        let arena = Arena::from_config(&config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WebArena { arena })
    }

    #[wasm_bindgen(js_name = setUniquePairs)]
    pub fn set_unique_pairs(&mut self, unique: bool) {
        let mode = if unique {
            PairResolution::UniquePairs
        } else {
            PairResolution::OrderedPairs
        };
        self.arena.pair_resolution = mode;
    }

    /// Advance one frame; call from requestAnimationFrame
    pub fn tick(&mut self) {
        self.arena.tick();
    }

    /// Body index under the point, or undefined
    #[wasm_bindgen(js_name = hitTest)]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        self.arena.hit_test(Vec2::new(x, y))
    }

    /// Pointer-move push
    pub fn nudge(&mut self, x: f32, y: f32) {
        self.arena.nudge(Vec2::new(x, y));
    }

    /// Color dialog confirmed; empty input is ignored
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, index: usize, color: &str) {
        self.arena.set_color(index, color);
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn width(&self) -> f32 {
        self.arena.width()
    }

    pub fn height(&self) -> f32 {
        self.arena.height()
    }

    /// Interleaved x, y per body
    pub fn positions(&self) -> Float32Array {
        let flat: Vec<f32> = self
            .arena
            .bodies()
            .iter()
            .flat_map(|b| [b.pos.x, b.pos.y])
            .collect();
        Float32Array::from(flat.as_slice())
    }

    pub fn radii(&self) -> Float32Array {
        let radii: Vec<f32> = self.arena.bodies().iter().map(|b| b.radius).collect();
        Float32Array::from(radii.as_slice())
    }

    pub fn color(&self, index: usize) -> Option<String> {
        self.arena.bodies().get(index).map(|b| b.color.clone())
    }
}
