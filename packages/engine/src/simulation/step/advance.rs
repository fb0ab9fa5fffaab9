use crate::error::Result;
use crate::grid::Grid;
use crate::spatial::partition::{partition_rows, PartitionStrategy};

use super::row_processing::process_partition;
use super::{pool_for, PerfStats, PerfTimer, WorkerPool};

/// Compute the next generation of `grid` with `workers` workers.
///
/// Builds a pool for this one call; [`super::SimulationCore`] keeps its pool
/// across generations instead. The result is the same for any worker count
/// and either partition strategy.
pub fn advance(grid: &Grid, workers: usize, strategy: PartitionStrategy) -> Result<Grid> {
    let pool = pool_for(grid, workers)?;
    advance_with(&pool, grid, strategy, None)
}

/// Partition, fan out, gather. Phase timings go into `perf` when given.
pub(super) fn advance_with(
    pool: &WorkerPool,
    grid: &Grid,
    strategy: PartitionStrategy,
    mut perf: Option<&mut PerfStats>,
) -> Result<Grid> {
    let mut timer = PerfTimer::start_if(perf.is_some());

    let partitions = partition_rows(grid.height(), pool.workers(), strategy)?;
    if let (Some(stats), Some(t)) = (perf.as_deref_mut(), timer.as_mut()) {
        stats.partition_ms = t.lap_ms();
        stats.partitions = partitions.len() as u32;
        stats.workers = pool.workers() as u32;
    }

    // Barrier: returns once every partition is done
    let results = pool.map_partitions(&partitions, |partition| process_partition(grid, partition));
    if let (Some(stats), Some(t)) = (perf.as_deref_mut(), timer.as_mut()) {
        stats.compute_ms = t.lap_ms();
    }

    let next = Grid::gather_rows(grid.width(), grid.height(), results.into_iter().flatten());
    if let (Some(stats), Some(t)) = (perf.as_deref_mut(), timer.as_mut()) {
        stats.merge_ms = t.lap_ms();
    }

    Ok(next)
}
