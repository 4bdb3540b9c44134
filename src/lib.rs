//! Lifegrid Engine - Conway's Game of Life on a bounded square grid
//!
//! Architecture:
//! - core/       - cells, grid, grid store, configuration, errors
//! - systems/    - B3/S23 rules, neighbor lookup, per-band evaluation
//! - parallel/   - row partitioning and the worker pool controller
//! - simulation/ - scene state machine, clock, commands, WASM facade

pub mod core;
pub mod systems;
pub mod parallel;
pub mod simulation;

use wasm_bindgen::prelude::*;

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

    web_sys::console::log_1(&"Lifegrid WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Cell, EngineConfig, EngineError, Grid, GridStore, ImportError, MIN_DIMENSION};
pub use parallel::{ComputeController, Generation};
pub use simulation::{FrameClock, PerfStats, PlayState, Simulation, SimulationCore, Snapshot};

// Export cell constants for JS
#[wasm_bindgen]
pub fn cell_dead() -> u8 { crate::core::CELL_DEAD }
#[wasm_bindgen]
pub fn cell_alive() -> u8 { crate::core::CELL_ALIVE }
