//! World - the grid automaton
//!
//! Single Responsibility: WorldCore only orchestrates; paint commands live in
//! commands/, the tick algorithm in step/, construction in init/, and the
//! wasm-bindgen surface in facade.rs.
//!
//! Two full grids exist at any time: the current generation and a read-only
//! snapshot of it taken at the start of each tick. Every tick decision reads
//! the snapshot and writes the current generation, so a particle can relocate
//! at most once per tick.

use crate::domain::content;
use crate::elements::Element;
use crate::grid::Grid;

#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::World;

/// The simulation world
pub struct WorldCore {
    grid: Grid,     // current generation; paints land here directly
    snapshot: Grid, // previous generation, read-only during a tick
    pixels: Vec<u32>,

    // State
    particle_count: u32,
    frame: u64,
    rng_state: u32,
}

impl WorldCore {
    /// Create a new world with given dimensions, seeded from the clock
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, random::seed_from_clock())
    }

    /// Create a new world with an explicit RNG seed.
    /// Replaying a recorded seed with the same paint/step sequence reproduces
    /// an entire run bit-for-bit.
    pub fn new_with_seed(width: u32, height: u32, seed: u32) -> Self {
        init::create_world_core(width, height, seed)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn particle_count(&self) -> u32 { self.particle_count }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn get_content_manifest_json(&self) -> String {
        content::manifest_json()
    }

    /// Paint a single cell; out-of-bounds coordinates are ignored.
    /// Paint always overwrites, including other particles.
    pub fn paint_cell(&mut self, x: i32, y: i32, element: Element) {
        commands::paint_cell(self, x, y, element);
    }

    /// Paint an arbitrary set of cells; out-of-bounds points are ignored
    pub fn paint_cells(&mut self, points: &[(i32, i32)], element: Element) {
        commands::paint_cells(self, points, element);
    }

    /// Paint an axis-aligned rectangle anchored at its top-left corner (brush)
    pub fn paint_rect(&mut self, x: i32, y: i32, w: u32, h: u32, element: Element) {
        commands::paint_rect(self, x, y, w, h, element);
    }

    /// Paint a filled circle (brush)
    pub fn paint_radius(&mut self, cx: i32, cy: i32, radius: i32, element: Element) {
        commands::paint_radius(self, cx, cy, radius, element);
    }

    /// Clear all particles and reset counters
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Read a cell of the current generation
    pub fn element_at(&self, x: u32, y: u32) -> Element {
        self.grid.get(x, y)
    }

    /// The display buffer: one packed color per cell, row-major.
    /// Mirrors the tick snapshot, so it trails the just-computed moves by one
    /// tick for any given cell (intentional, inherited behavior).
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get pointer to the pixel buffer (for JS rendering)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels_byte_len(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<u32>()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
