use wasm_bindgen::prelude::*;

/// Generation counters and the cost of the last computed generation
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) generation_ms: f64,
    pub(super) generations: u32,
    pub(super) dropped_ticks: u32,
    pub(super) failed_generations: u32,

    // Filled in when the stats are read
    pub(super) dimension: u32,
    pub(super) live_cells: u32,
    pub(super) workers: u32,
    pub(super) cached_neighbor_lists: u32,
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn generation_ms(&self) -> f64 { self.generation_ms }
    #[wasm_bindgen(getter)]
    pub fn generations(&self) -> u32 { self.generations }
    #[wasm_bindgen(getter)]
    pub fn dropped_ticks(&self) -> u32 { self.dropped_ticks }
    #[wasm_bindgen(getter)]
    pub fn failed_generations(&self) -> u32 { self.failed_generations }
    #[wasm_bindgen(getter)]
    pub fn dimension(&self) -> u32 { self.dimension }
    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.live_cells }
    #[wasm_bindgen(getter)]
    pub fn workers(&self) -> u32 { self.workers }
    #[wasm_bindgen(getter)]
    pub fn cached_neighbor_lists(&self) -> u32 { self.cached_neighbor_lists }
}
