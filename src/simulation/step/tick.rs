use tracing::warn;

use crate::core::config::validate_frame_rate;
use crate::core::perf_timer::PerfTimer;
use crate::core::EngineError;
use crate::parallel::Generation;

use super::{PlayState, SimulationCore, Snapshot};

pub(super) fn tick(
    sim: &mut SimulationCore,
    dt: f64,
    frame_rate: f64,
    canvas_size: f64,
) -> Result<Snapshot, EngineError> {
    validate_frame_rate(frame_rate)?;
    // Non-finite or negative deltas count as no time passing
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

    sim.t += dt;
    sim.canvas_size = canvas_size;
    let grid = sim.store.ensure_initialized();

    if sim.state == PlayState::Paused {
        return Ok(sim.snapshot_of(grid));
    }

    sim.frame_time_remaining -= dt;
    if sim.frame_time_remaining > 0.0 {
        return Ok(sim.snapshot_of(grid));
    }
    // Reset before computing: a failed generation is not retried next frame
    sim.frame_time_remaining = SimulationCore::frame_time(frame_rate);

    let timer = PerfTimer::start();
    match sim.compute.compute_generation(&grid) {
        Ok(Generation::Advanced(next)) => {
            sim.store.replace(next);
            sim.perf_stats.generation_ms = timer.elapsed_ms();
            sim.perf_stats.generations = sim.perf_stats.generations.saturating_add(1);
        }
        Ok(Generation::Dropped) => {
            sim.perf_stats.dropped_ticks = sim.perf_stats.dropped_ticks.saturating_add(1);
        }
        Err(err) => {
            sim.perf_stats.failed_generations = sim.perf_stats.failed_generations.saturating_add(1);
            warn!(%err, "generation failed; grid left at its pre-tick state");
            return Err(err);
        }
    }

    let current = sim.store.ensure_initialized();
    Ok(sim.snapshot_of(current))
}

pub(super) fn frame(sim: &mut SimulationCore, timestamp_ms: f64) -> Result<Snapshot, EngineError> {
    let dt = sim.clock.delta(timestamp_ms);
    let (frame_rate, canvas_size) = (sim.frame_rate, sim.canvas_size);
    tick(sim, dt, frame_rate, canvas_size)
}
