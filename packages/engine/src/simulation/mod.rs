//! Simulation - generation engine and run driver
//!
//! Each generation is a fan-out/fan-in over row partitions:
//! - the current grid is a shared, read-only snapshot
//! - each worker computes next states for its own rows only
//! - rows are gathered by row index into a freshly allocated grid
//!
//! Nothing a worker reads is ever written during the same generation, so
//! no locking is needed and the result does not depend on worker count.

use crate::domain::config::SimulationConfig;
use crate::error::{EngineError, Result};
use crate::grid::Grid;
use crate::spatial::partition::{effective_workers, PartitionStrategy};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "workers/pool.rs"]
mod pool;
#[path = "step/row_processing.rs"]
mod row_processing;
#[path = "step/advance.rs"]
mod advance;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use advance::advance;
pub use facade::Automaton;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;
use pool::WorkerPool;

/// Run `config.generations` generations over `grid` and return the final grid
pub fn run(grid: Grid, config: &SimulationConfig) -> Result<Grid> {
    let mut core = SimulationCore::new(grid, config.clone())?;
    core.run()?;
    Ok(core.into_grid())
}

/// Owns the current generation and everything needed to advance it
pub struct SimulationCore {
    grid: Grid,
    config: SimulationConfig,
    pool: WorkerPool,

    // State
    generation: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Validate the config against the grid and set up the worker pool.
    /// Fails before any generation runs.
    pub fn new(grid: Grid, config: SimulationConfig) -> Result<Self> {
        init::create_simulation_core(grid, config)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    /// Generations completed so far
    pub fn generation(&self) -> u32 { self.generation }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn into_grid(self) -> Grid { self.grid }

    pub fn config(&self) -> &SimulationConfig { &self.config }

    /// Workers actually used per generation (clamped to the row count)
    pub fn workers(&self) -> usize { self.pool.workers() }

    pub fn set_workers(&mut self, workers: usize) -> Result<()> {
        settings::set_workers(self, workers)
    }

    pub fn set_partition_strategy(&mut self, strategy: PartitionStrategy) {
        settings::set_partition_strategy(self, strategy);
    }

    pub fn set_generations(&mut self, generations: u32) {
        settings::set_generations(self, generations);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Advance exactly one generation
    pub fn step(&mut self) -> Result<()> {
        step::step(self)
    }

    /// Advance until `config.generations` generations have completed.
    /// Returns how many generations this call ran.
    pub fn run(&mut self) -> Result<u32> {
        self.run_while(|_, _| true)
    }

    /// Advance `n` more generations regardless of the configured count
    pub fn run_for(&mut self, n: u32) -> Result<u32> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(n)
    }

    /// Advance while `keep_going(generation, grid)` holds, up to
    /// `config.generations`. The predicate is checked between generations,
    /// never during one.
    pub fn run_while<F>(&mut self, mut keep_going: F) -> Result<u32>
    where
        F: FnMut(u32, &Grid) -> bool,
    {
        let start = self.generation;
        log::info!(
            "running {}x{} grid from generation {} to {} with {} worker(s), {:?} partitions",
            self.width(),
            self.height(),
            start,
            self.config.generations,
            self.workers(),
            self.config.partition,
        );
        while self.generation < self.config.generations && keep_going(self.generation, &self.grid) {
            self.step()?;
        }
        let ran = self.generation - start;
        log::info!("finished after {} generation(s), now at {}", ran, self.generation);
        Ok(ran)
    }
}

fn check_workers(workers: usize) -> Result<usize> {
    if workers == 0 {
        return Err(EngineError::InvalidWorkerCount(workers));
    }
    Ok(workers)
}

fn pool_for(grid: &Grid, workers: usize) -> Result<WorkerPool> {
    let workers = check_workers(workers)?;
    WorkerPool::new(effective_workers(grid.height(), workers))
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
