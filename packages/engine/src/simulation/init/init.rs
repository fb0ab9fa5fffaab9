use crate::domain::config::SimulationConfig;
use crate::error::Result;
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::{pool_for, SimulationCore};

pub(super) fn create_simulation_core(grid: Grid, config: SimulationConfig) -> Result<SimulationCore> {
    config.validate()?;
    let pool = pool_for(&grid, config.workers)?;

    Ok(SimulationCore {
        grid,
        config,
        pool,
        generation: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
