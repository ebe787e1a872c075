//! Element Definitions - the fixed particle catalog
//!
//! Pure data: each element is a packed color plus a feature bit field.
//! Movement semantics live entirely in the simulation step; an element with
//! zero feature bits is the empty cell, and `features == 0` is the emptiness
//! test used everywhere.

/// Element id (index into the catalog)
pub type ElementId = u8;

pub const EL_EMPTY: ElementId = 0;
pub const EL_MOVABLE_SOLID: ElementId = 1;
pub const EL_MOVABLE_GAS: ElementId = 2;
pub const EL_IMMOVABLE_SOLID: ElementId = 3;

pub const ELEMENT_COUNT: usize = 4;

// Feature bit flags
pub const FEAT_NONE: u32 = 0;
pub const FEAT_FLUID: u32 = 1 << 0;
pub const FEAT_SOLID: u32 = 1 << 1;
pub const FEAT_GAS: u32 = 1 << 2;
pub const FEAT_MOVEABLE: u32 = 1 << 3;
pub const FEAT_IMMOVABLE: u32 = 1 << 4;

// Colors, ABGR packed (0xAABBGGRR)
pub const COLOR_EMPTY: u32 = 0xFFFFFFFF; // white background
pub const COLOR_MOVABLE_SOLID: u32 = 0xFF3729E6; // red (230, 41, 55)
pub const COLOR_MOVABLE_GAS: u32 = 0xFF00F9FD; // yellow (253, 249, 0)
pub const COLOR_IMMOVABLE_SOLID: u32 = 0xFFF17900; // blue (0, 121, 241)

/// An element value: immutable once constructed, copied by value into cells
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Element {
    color: u32,
    features: u32,
}

impl Element {
    pub const EMPTY: Element = Element::new(COLOR_EMPTY, FEAT_NONE);

    pub const fn new(color: u32, features: u32) -> Self {
        Self { color, features }
    }

    #[inline]
    pub const fn color(&self) -> u32 {
        self.color
    }

    #[inline]
    pub const fn features(&self) -> u32 {
        self.features
    }

    /// Universal emptiness test: no feature bits set
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.features == FEAT_NONE
    }

    #[inline]
    pub const fn is_movable_solid(&self) -> bool {
        self.features & FEAT_MOVEABLE != 0 && self.features & FEAT_SOLID != 0
    }

    #[inline]
    pub const fn is_movable_gas(&self) -> bool {
        self.features & FEAT_MOVEABLE != 0 && self.features & FEAT_GAS != 0
    }

    #[inline]
    pub const fn is_immovable(&self) -> bool {
        self.features & FEAT_IMMOVABLE != 0
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The catalog, indexed by ElementId
pub const ELEMENT_DATA: [Element; ELEMENT_COUNT] = [
    Element::EMPTY,
    Element::new(COLOR_MOVABLE_SOLID, FEAT_MOVEABLE | FEAT_SOLID),
    Element::new(COLOR_MOVABLE_GAS, FEAT_MOVEABLE | FEAT_GAS),
    Element::new(COLOR_IMMOVABLE_SOLID, FEAT_IMMOVABLE | FEAT_SOLID),
];

/// Display names, indexed by ElementId (id 0 doubles as the eraser brush)
pub const ELEMENT_NAMES: [&str; ELEMENT_COUNT] = [
    "Eraser",
    "Movable Solid",
    "Movable Gas",
    "Immovable Solid",
];

#[inline]
pub fn is_valid_element_id(id: ElementId) -> bool {
    (id as usize) < ELEMENT_COUNT
}

/// Look up an element by id
#[inline]
pub fn element(id: ElementId) -> Option<Element> {
    ELEMENT_DATA.get(id as usize).copied()
}
