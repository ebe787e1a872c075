use crate::elements::COLOR_EMPTY;
use crate::grid::Grid;

use super::random;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32, seed: u32) -> WorldCore {
    let size = (width * height) as usize;

    WorldCore {
        grid: Grid::new(width, height),
        snapshot: Grid::new(width, height),
        pixels: vec![COLOR_EMPTY; size],
        particle_count: 0,
        frame: 0,
        rng_state: random::sanitize_seed(seed),
    }
}
