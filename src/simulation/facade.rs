use wasm_bindgen::prelude::*;

use crate::elements;

use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions (RNG seeded from the clock)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// Create a new world with an explicit RNG seed (deterministic replay)
    #[wasm_bindgen(js_name = newWithSeed)]
    pub fn new_with_seed(width: u32, height: u32, seed: u32) -> Self {
        Self {
            core: WorldCore::new_with_seed(width, height, seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn get_content_manifest_json(&self) -> String {
        self.core.get_content_manifest_json()
    }

    /// Paint a single cell. Returns false for an unknown element id;
    /// out-of-bounds coordinates are silently clipped.
    pub fn paint_cell(&mut self, x: i32, y: i32, element: u8) -> bool {
        let Some(element) = elements::element(element) else {
            return false;
        };
        self.core.paint_cell(x, y, element);
        true
    }

    /// Paint a rectangle anchored at its top-left corner (the classic brush)
    pub fn paint_rect(&mut self, x: i32, y: i32, w: u32, h: u32, element: u8) -> bool {
        let Some(element) = elements::element(element) else {
            return false;
        };
        self.core.paint_rect(x, y, w, h, element);
        true
    }

    /// Paint a filled circle
    pub fn paint_radius(&mut self, cx: i32, cy: i32, radius: i32, element: u8) -> bool {
        let Some(element) = elements::element(element) else {
            return false;
        };
        self.core.paint_radius(cx, cy, radius, element);
        true
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Feature bit field of the cell in the current generation (0 = empty).
    /// Out-of-bounds reads as empty.
    pub fn features_at(&self, x: u32, y: u32) -> u32 {
        if x >= self.core.width() || y >= self.core.height() {
            return 0;
        }
        self.core.element_at(x, y).features()
    }

    /// Get pointer to the pixel buffer (for JS rendering)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels_len()
    }

    pub fn pixels_byte_len(&self) -> usize {
        self.core.pixels_byte_len()
    }
}
