//! Paint commands
//!
//! Paints mutate the current generation directly and are therefore visible to
//! the very next `step`. Unlike movement, paint always overwrites whatever is
//! in the cell; painting the empty element is the eraser. Out-of-bounds
//! coordinates are clipped, never an error.

use crate::elements::Element;

use super::WorldCore;

pub(super) fn paint_cell(world: &mut WorldCore, x: i32, y: i32, element: Element) {
    if !world.grid.in_bounds(x, y) {
        return;
    }
    let (x, y) = (x as u32, y as u32);

    let was_empty = world.grid.features_at(x, y) == 0;
    world.grid.set(x, y, element);

    // Keep the particle count incremental; movement never changes it
    match (was_empty, element.is_empty()) {
        (true, false) => world.particle_count += 1,
        (false, true) => world.particle_count = world.particle_count.saturating_sub(1),
        _ => {}
    }
}

pub(super) fn paint_cells(world: &mut WorldCore, points: &[(i32, i32)], element: Element) {
    for &(x, y) in points {
        paint_cell(world, x, y, element);
    }
}

pub(super) fn paint_rect(world: &mut WorldCore, x: i32, y: i32, w: u32, h: u32, element: Element) {
    for dy in 0..h as i32 {
        for dx in 0..w as i32 {
            paint_cell(world, x + dx, y + dy, element);
        }
    }
}

pub(super) fn paint_radius(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, element: Element) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                paint_cell(world, cx + dx, cy + dy, element);
            }
        }
    }
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.snapshot.clear();
    world.pixels.fill(crate::elements::COLOR_EMPTY);
    world.particle_count = 0;
    world.frame = 0;
}
