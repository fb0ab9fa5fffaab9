use super::advance::advance_with;
use super::{PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore) -> crate::error::Result<()> {
    let perf_on = sim.perf_enabled;
    let step_start = PerfTimer::start_if(perf_on);

    let next = if perf_on {
        sim.perf_stats.reset();
        advance_with(&sim.pool, &sim.grid, sim.config.partition, Some(&mut sim.perf_stats))?
    } else {
        advance_with(&sim.pool, &sim.grid, sim.config.partition, None)?
    };

    if perf_on {
        sim.perf_stats.cells_processed = next.size() as u32;
        sim.perf_stats.cells_changed = sim
            .grid
            .cells()
            .iter()
            .zip(next.cells())
            .filter(|(old, new)| old != new)
            .count() as u32;
        sim.perf_stats.record_census(&next.census());
    }

    // Previous generation is dropped here; nothing else holds it
    sim.grid = next;
    sim.generation += 1;

    if let Some(t) = step_start {
        sim.perf_stats.step_ms = t.elapsed_ms();
        sim.perf_stats.generation = sim.generation;
    }

    if log::log_enabled!(log::Level::Trace) {
        let census = sim.grid.census();
        log::trace!(
            "generation {}: {} alive of {}",
            sim.generation,
            census.alive(),
            census.total()
        );
    } else {
        log::debug!("generation {} done", sim.generation);
    }

    Ok(())
}
