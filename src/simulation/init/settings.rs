use std::time::Duration;

use crate::core::config::validate_frame_rate;
use crate::core::EngineError;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn set_frame_rate(sim: &mut SimulationCore, frame_rate: f64) -> Result<(), EngineError> {
    validate_frame_rate(frame_rate)?;
    sim.frame_rate = frame_rate;
    Ok(())
}

/// Takes effect on the next tick, which builds a fresh random grid
pub(super) fn set_number_of_cells(sim: &mut SimulationCore, number_of_cells: usize) -> Result<(), EngineError> {
    sim.store.resize(number_of_cells)
}

pub(super) fn set_canvas_size(sim: &mut SimulationCore, canvas_size: f64) {
    sim.canvas_size = canvas_size;
}

pub(super) fn set_generation_timeout_ms(sim: &mut SimulationCore, timeout_ms: Option<u64>) {
    sim.compute.set_timeout(timeout_ms.map(Duration::from_millis));
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    let mut stats = sim.perf_stats.clone();
    stats.dimension = sim.store.dimension() as u32;
    stats.live_cells = sim.live_cells() as u32;
    stats.workers = sim.compute.workers() as u32;
    stats.cached_neighbor_lists = sim.compute.cached_cells() as u32;
    stats
}
