//! Grid - Structure of Arrays (SoA) for cache-friendly cell storage
//!
//! Instead of: Vec<Option<Element>>  // Bad: poor cache behavior
//! We have:    features[], colors[]  // Good: linear memory, cheap snapshots
//!
//! Row-major, origin top-left, y increases downward (gravity direction).

use crate::elements::{Element, COLOR_EMPTY, FEAT_NONE};

/// SoA Grid - all cell data in separate arrays
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    // Structure of Arrays - each property in its own contiguous array
    features: Vec<u32>, // feature bit field (0 = empty)
    colors: Vec<u32>,   // ABGR packed color
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;

        Self {
            width,
            height,
            size,
            features: vec![FEAT_NONE; size],
            colors: vec![COLOR_EMPTY; size],
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Emptiness test: out-of-bounds counts as occupied
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) { return false; }
        self.features[self.index(x as u32, y as u32)] == FEAT_NONE
    }

    // === Cell access ===
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Element {
        let idx = self.index(x, y);
        Element::new(self.colors[idx], self.features[idx])
    }

    #[inline]
    pub fn features_at(&self, x: u32, y: u32) -> u32 {
        self.features[self.index(x, y)]
    }

    #[inline]
    pub fn color_at(&self, x: u32, y: u32) -> u32 {
        self.colors[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, element: Element) {
        let idx = self.index(x, y);
        self.features[idx] = element.features();
        self.colors[idx] = element.color();
    }

    // === Clear single cell ===
    #[inline]
    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.features[idx] = FEAT_NONE;
        self.colors[idx] = COLOR_EMPTY;
    }

    // === Clear entire grid ===
    pub fn clear(&mut self) {
        self.features.fill(FEAT_NONE);
        self.colors.fill(COLOR_EMPTY);
    }

    /// Copy the full contents of `other` into self (per-tick snapshot).
    /// Both grids must have the same dimensions.
    pub fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!(self.size, other.size);
        self.features.copy_from_slice(&other.features);
        self.colors.copy_from_slice(&other.colors);
    }

    /// Count of cells with at least one feature bit set
    pub fn non_empty_count(&self) -> u32 {
        self.features.iter().filter(|&&f| f != FEAT_NONE).count() as u32
    }
}
