use crate::core::EngineError;

use super::{PlayState, SimulationCore, Snapshot};

pub(super) fn play(sim: &mut SimulationCore) {
    sim.state = PlayState::Playing;
}

pub(super) fn pause(sim: &mut SimulationCore) {
    sim.state = PlayState::Paused;
}

pub(super) fn restart(sim: &mut SimulationCore) {
    sim.t = 0.0;
    sim.frame_time_remaining = SimulationCore::frame_time(sim.frame_rate);
    sim.clock.reset();
    sim.store.discard();
}

pub(super) fn clear(sim: &mut SimulationCore) {
    sim.store.clear();
}

/// Pixel -> cell: `floor(pixel / (canvas_size / dimension))` per axis.
/// The first axis is the grid row (band) index.
pub(super) fn toggle_cell(sim: &mut SimulationCore, pixel_x: f64, pixel_y: f64) -> bool {
    if sim.state != PlayState::Paused {
        return false;
    }
    let dimension = sim.store.dimension();
    if sim.canvas_size <= 0.0 || dimension == 0 {
        return false;
    }
    let cell_size = sim.canvas_size / dimension as f64;
    let x = (pixel_x / cell_size).floor();
    let y = (pixel_y / cell_size).floor();
    if !(x >= 0.0 && y >= 0.0) {
        return false;
    }
    sim.store.toggle(x as usize, y as usize).is_some()
}

pub(super) fn export_snapshot(sim: &SimulationCore) -> Option<String> {
    sim.store.export_snapshot()
}

pub(super) fn import_snapshot(sim: &mut SimulationCore, json: &str) -> Result<Snapshot, EngineError> {
    let grid = sim.store.import_snapshot(json)?;
    sim.t = 0.0;
    Ok(sim.snapshot_of(grid))
}
