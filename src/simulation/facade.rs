use wasm_bindgen::prelude::*;

use crate::core::{EngineConfig, EngineError};

use super::perf_stats::PerfStats;
use super::render_extract::extract_cells;
use super::SimulationCore;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS handle to one simulation. The renderer reads the cell bytes through
/// `cells_ptr`/`cells_len` after every tick or command.
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
    cells: Vec<u8>,
}

impl Simulation {
    fn from_core(core: SimulationCore) -> Simulation {
        Simulation {
            core,
            cells: Vec::new(),
        }
    }

    fn refresh_cells(&mut self) {
        match self.core.snapshot() {
            Some(snapshot) => extract_cells(&snapshot.grid, &mut self.cells),
            None => self.cells.clear(),
        }
    }

    /// Native access to the scene behind this handle
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}

#[wasm_bindgen]
impl Simulation {
    /// Default settings with `number_of_cells` cells per side
    #[wasm_bindgen(constructor)]
    pub fn new(number_of_cells: usize) -> Result<Simulation, JsValue> {
        let config = EngineConfig {
            number_of_cells,
            ..EngineConfig::default()
        };
        Ok(Self::from_core(SimulationCore::new(config).map_err(to_js)?))
    }

    /// Settings from camelCase JSON (see `EngineConfig`)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<Simulation, JsValue> {
        Ok(Self::from_core(SimulationCore::from_config_json(&json).map_err(to_js)?))
    }

    // === Per-frame ===

    pub fn tick(&mut self, dt: f64, frame_rate: f64, canvas_size: f64) -> Result<(), JsValue> {
        let result = self.core.tick(dt, frame_rate, canvas_size).map(|_| ());
        self.refresh_cells();
        result.map_err(to_js)
    }

    /// Drive from `requestAnimationFrame` timestamps
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        let result = self.core.frame(timestamp_ms).map(|_| ());
        self.refresh_cells();
        result.map_err(to_js)
    }

    // === Commands ===

    pub fn play(&mut self) {
        self.core.play();
    }

    pub fn pause(&mut self) {
        self.core.pause();
    }

    pub fn restart(&mut self) {
        self.core.restart();
        self.refresh_cells();
    }

    pub fn clear(&mut self) {
        self.core.clear();
        self.refresh_cells();
    }

    pub fn toggle_cell(&mut self, pixel_x: f64, pixel_y: f64) -> bool {
        let toggled = self.core.toggle_cell(pixel_x, pixel_y);
        if toggled {
            self.refresh_cells();
        }
        toggled
    }

    pub fn set_frame_rate(&mut self, frame_rate: f64) -> Result<(), JsValue> {
        self.core.set_frame_rate(frame_rate).map_err(to_js)
    }

    pub fn set_number_of_cells(&mut self, number_of_cells: usize) -> Result<(), JsValue> {
        self.core.set_number_of_cells(number_of_cells).map_err(to_js)?;
        self.refresh_cells();
        Ok(())
    }

    pub fn set_canvas_size(&mut self, canvas_size: f64) {
        self.core.set_canvas_size(canvas_size);
    }

    /// `None` (undefined) until the first tick creates a grid
    pub fn export_snapshot(&self) -> Option<String> {
        self.core.export_snapshot()
    }

    pub fn import_snapshot(&mut self, json: String) -> Result<(), JsValue> {
        self.core.import_snapshot(&json).map_err(to_js)?;
        self.refresh_cells();
        Ok(())
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === Queries ===

    #[wasm_bindgen(getter)]
    pub fn dimension(&self) -> usize { self.core.dimension() }

    #[wasm_bindgen(getter)]
    pub fn elapsed_ms(&self) -> f64 { self.core.elapsed_ms() }

    #[wasm_bindgen(getter)]
    pub fn frame_rate(&self) -> f64 { self.core.frame_rate() }

    #[wasm_bindgen(getter)]
    pub fn is_playing(&self) -> bool { self.core.is_playing() }

    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> usize { self.core.live_cells() }

    /// Pointer to the row-major cell bytes (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.cells.len()
    }
}
