//! The tick algorithm
//!
//! One tick: snapshot the current generation, then scan it bottom-to-top,
//! left-to-right, deciding each particle's destination in the current
//! generation. Decisions only ever read the snapshot, so a particle that
//! already moved this tick is never re-evaluated from its new cell.
//!
//! The pixel buffer is filled from the snapshot as the scan visits each cell,
//! which means the displayed frame trails the freshly computed moves by one
//! tick for any given cell. The original behaves the same way; keeping it
//! preserves the apparent fall speed.

use crate::elements::Element;
use crate::grid::Grid;

use super::{random, WorldCore};

/// Gas candidates: straight down competes with the diagonals as an equal
/// shuffled option
const DIRS_GAS: [(i32, i32); 3] = [(0, 1), (-1, 1), (1, 1)];

/// Solid diagonals, tried only after straight down failed
const DIRS_SOLID_DIAGONAL: [(i32, i32); 2] = [(-1, 1), (1, 1)];

pub(super) fn step(world: &mut WorldCore) {
    let WorldCore {
        grid,
        snapshot,
        pixels,
        rng_state,
        frame,
        ..
    } = world;

    // Paints issued since the last tick are already in `grid`, so they take
    // part in this tick's decisions.
    snapshot.copy_from(grid);

    let width = grid.width();
    let height = grid.height();

    // Row 0 is never scanned: gravity points down, so nothing can move into
    // or out of it, and skipping it keeps the scan clear of the top edge.
    for y in (1..height).rev() {
        for x in 0..width {
            pixels[(y * width + x) as usize] = snapshot.color_at(x, y);

            let element = snapshot.get(x, y);
            if element.is_movable_gas() {
                let mut dirs = DIRS_GAS;
                random::shuffle(&mut dirs, rng_state);
                try_move(grid, snapshot, x, y, element, &dirs);
            } else if element.is_movable_solid() {
                // Straight down has deterministic priority; only a blocked
                // fall spills into the shuffled diagonals.
                if is_free(grid, snapshot, x as i32, y as i32 + 1) {
                    relocate(grid, x, y, x, y + 1, element);
                } else {
                    let mut dirs = DIRS_SOLID_DIAGONAL;
                    random::shuffle(&mut dirs, rng_state);
                    try_move(grid, snapshot, x, y, element, &dirs);
                }
            }
            // Immovable or empty: whatever a neighbor's move or a paint put
            // into the current generation stands.
        }
    }

    *frame += 1;
}

/// A destination is valid only if it is empty in the snapshot AND still empty
/// in the current generation. The second check stops two movers from claiming
/// the same cell in one tick; the later write would otherwise destroy the
/// earlier particle.
#[inline]
fn is_free(grid: &Grid, snapshot: &Grid, x: i32, y: i32) -> bool {
    snapshot.is_empty(x, y) && grid.is_empty(x, y)
}

/// First-fit over the candidate list: take the first free target, stop
fn try_move(
    grid: &mut Grid,
    snapshot: &Grid,
    x: u32,
    y: u32,
    element: Element,
    dirs: &[(i32, i32)],
) -> bool {
    for &(dx, dy) in dirs {
        let tx = x as i32 + dx;
        let ty = y as i32 + dy;
        if is_free(grid, snapshot, tx, ty) {
            relocate(grid, x, y, tx as u32, ty as u32, element);
            return true;
        }
    }
    false
}

#[inline]
fn relocate(grid: &mut Grid, from_x: u32, from_y: u32, to_x: u32, to_y: u32, element: Element) {
    grid.set(to_x, to_y, element);
    grid.clear_cell(from_x, from_y);
}
