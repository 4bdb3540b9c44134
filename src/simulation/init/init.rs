use crate::core::{EngineConfig, EngineError, GridStore};
use crate::parallel::ComputeController;

use super::perf_stats::PerfStats;
use super::{FrameClock, PlayState, SimulationCore};

pub(super) fn create_simulation_core(config: EngineConfig) -> Result<SimulationCore, EngineError> {
    config.validate()?;

    let compute = ComputeController::new(config.pool_size, config.generation_timeout())?;
    let store = GridStore::new(config.number_of_cells, config.alive_probability, config.seed);

    Ok(SimulationCore {
        store,
        compute,
        clock: FrameClock::new(),
        state: PlayState::Paused,
        t: 0.0,
        frame_time_remaining: SimulationCore::frame_time(config.frame_rate),
        frame_rate: config.frame_rate,
        canvas_size: 0.0,
        perf_stats: PerfStats::default(),
    })
}
