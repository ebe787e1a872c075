//! Physics Automata Engine - Falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - domain/     - Element catalog (pure data)
//! - spatial/    - Grid storage
//! - simulation/ - World orchestration: paint commands, tick step, facade

pub mod domain;
pub mod spatial;
pub mod simulation;

// Compatibility re-exports (keeps internal/external paths short)
pub use domain::elements;
pub use spatial::grid;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Physics Automata WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::{World, WorldCore};
pub use domain::elements::Element;

// Export element constants for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { domain::elements::EL_EMPTY }
#[wasm_bindgen]
pub fn el_movable_solid() -> u8 { domain::elements::EL_MOVABLE_SOLID }
#[wasm_bindgen]
pub fn el_movable_gas() -> u8 { domain::elements::EL_MOVABLE_GAS }
#[wasm_bindgen]
pub fn el_immovable_solid() -> u8 { domain::elements::EL_IMMOVABLE_SOLID }
