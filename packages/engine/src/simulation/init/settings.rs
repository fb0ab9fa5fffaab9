use crate::error::Result;
use crate::spatial::partition::PartitionStrategy;

use super::perf_stats::PerfStats;
use super::{pool_for, SimulationCore};

pub(super) fn set_workers(sim: &mut SimulationCore, workers: usize) -> Result<()> {
    // Build first so a failure leaves the old pool in place
    let pool = pool_for(&sim.grid, workers)?;
    sim.pool = pool;
    sim.config.workers = workers;
    Ok(())
}

pub(super) fn set_partition_strategy(sim: &mut SimulationCore, strategy: PartitionStrategy) {
    sim.config.partition = strategy;
}

pub(super) fn set_generations(sim: &mut SimulationCore, generations: u32) {
    sim.config.generations = generations;
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}
