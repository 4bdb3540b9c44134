//! Scene controller - the simulation state machine and its clock
//!
//! - `Paused` (initial) / `Playing`; only `toggle_cell` depends on the state
//! - `tick` accumulates elapsed time, lazily creates the grid and, while
//!   playing, runs one generation whenever the frame-time budget runs out
//! - Commands (play, pause, restart, clear, resize, toggle, import/export)
//!   delegate to the grid store
//!
//! One `SimulationCore` per session, owned by the caller. Independent
//! simulations can coexist.

use std::sync::Arc;

use crate::core::{EngineConfig, EngineError, Grid, GridStore};
use crate::parallel::ComputeController;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "clock/frame_clock.rs"]
mod frame_clock;
#[path = "step/tick.rs"]
mod tick;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Simulation;
pub use frame_clock::FrameClock;
pub use perf_stats::PerfStats;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Paused,
    Playing,
}

/// Immutable view handed to the renderer once per frame
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub elapsed_ms: f64,
    pub grid: Arc<Grid>,
    pub dimension: usize,
}

pub struct SimulationCore {
    store: GridStore,
    compute: ComputeController,
    clock: FrameClock,
    state: PlayState,

    // Clock
    t: f64,
    frame_time_remaining: f64,

    // Settings
    frame_rate: f64,
    canvas_size: f64,

    perf_stats: PerfStats,
}

impl SimulationCore {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        init::create_simulation_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, EngineError> {
        Self::new(EngineConfig::from_json(json)?)
    }

    // === Per-frame entry points ===

    /// Advance the clock by `dt` milliseconds and return the current scene.
    pub fn tick(&mut self, dt: f64, frame_rate: f64, canvas_size: f64) -> Result<Snapshot, EngineError> {
        tick::tick(self, dt, frame_rate, canvas_size)
    }

    /// Tick from an absolute animation-frame timestamp using the stored
    /// frame rate and canvas size. The first call measures `dt = 0`.
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<Snapshot, EngineError> {
        tick::frame(self, timestamp_ms)
    }

    // === Commands ===

    pub fn play(&mut self) {
        commands::play(self)
    }

    pub fn pause(&mut self) {
        commands::pause(self)
    }

    /// Reset elapsed time and drop the grid; the next tick re-randomizes it.
    pub fn restart(&mut self) {
        commands::restart(self)
    }

    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Flip the cell under a canvas pixel. No-op (returns false) unless paused.
    pub fn toggle_cell(&mut self, pixel_x: f64, pixel_y: f64) -> bool {
        commands::toggle_cell(self, pixel_x, pixel_y)
    }

    pub fn export_snapshot(&self) -> Option<String> {
        commands::export_snapshot(self)
    }

    /// Replace the grid with a serialized one. On failure nothing changes.
    pub fn import_snapshot(&mut self, json: &str) -> Result<Snapshot, EngineError> {
        commands::import_snapshot(self, json)
    }

    // === Settings ===

    pub fn set_frame_rate(&mut self, frame_rate: f64) -> Result<(), EngineError> {
        settings::set_frame_rate(self, frame_rate)
    }

    pub fn set_number_of_cells(&mut self, number_of_cells: usize) -> Result<(), EngineError> {
        settings::set_number_of_cells(self, number_of_cells)
    }

    pub fn set_canvas_size(&mut self, canvas_size: f64) {
        settings::set_canvas_size(self, canvas_size)
    }

    pub fn set_generation_timeout_ms(&mut self, timeout_ms: Option<u64>) {
        settings::set_generation_timeout_ms(self, timeout_ms)
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Queries ===

    pub fn state(&self) -> PlayState { self.state }

    pub fn is_playing(&self) -> bool { self.state == PlayState::Playing }

    pub fn elapsed_ms(&self) -> f64 { self.t }

    pub fn frame_rate(&self) -> f64 { self.frame_rate }

    pub fn canvas_size(&self) -> f64 { self.canvas_size }

    /// Dimension of the current grid, or of the next one to be created
    pub fn dimension(&self) -> usize { self.store.dimension() }

    pub fn workers(&self) -> usize { self.compute.workers() }

    pub fn live_cells(&self) -> usize {
        self.store.grid().map_or(0, |grid| grid.live_count())
    }

    /// Current scene without advancing time; `None` before the grid exists
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.store.grid().map(|grid| self.snapshot_of(Arc::clone(grid)))
    }

    fn snapshot_of(&self, grid: Arc<Grid>) -> Snapshot {
        Snapshot {
            elapsed_ms: self.t,
            dimension: grid.dimension(),
            grid,
        }
    }

    /// Milliseconds between generations at `frame_rate`
    fn frame_time(frame_rate: f64) -> f64 {
        1000.0 / frame_rate
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
