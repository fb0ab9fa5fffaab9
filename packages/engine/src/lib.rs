//! Cellular Life Engine - five-state cellular automaton
//!
//! Every cell holds one of five states (-2..=2) and advances each
//! generation from the sum of its 8 neighbors. Generations are computed
//! by splitting rows across workers (rayon when `parallel` is on) and
//! gathering them back in row order; the result is the same for any
//! worker count.
//!
//! Layout:
//! - domain/      - cell states, transition rule, run config
//! - spatial/     - grid storage, neighbor sums, row partitioning
//! - simulation/  - generation engine, run driver, perf, WASM facade
//! - io/          - grid text format

pub mod error;
pub mod domain;
pub mod spatial;
pub mod simulation;
pub mod io;

// Short paths for the common types
pub use spatial::grid;
pub use spatial::partition;

use wasm_bindgen::prelude::*;

// Browser thread pool; must be awaited from JS before running with more than one worker
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Cellular life engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::cells::CellState;
pub use domain::config::{SimulationConfig, DEFAULT_GENERATIONS};
pub use domain::rules::next_state;
pub use error::{EngineError, MalformedGrid};
pub use grid::{CellCensus, Grid};
pub use io::{decode_grid, encode_grid, load_grid, save_grid};
pub use partition::{partition_rows, PartitionStrategy, RowPartition};
pub use simulation::{advance, run, Automaton, PerfStats, SimulationCore};

// Export state values for JS
#[wasm_bindgen]
pub fn state_healthy_positive() -> i8 { CellState::HealthyPositive.value() }
#[wasm_bindgen]
pub fn state_weak_positive() -> i8 { CellState::WeakPositive.value() }
#[wasm_bindgen]
pub fn state_dead() -> i8 { CellState::Dead.value() }
#[wasm_bindgen]
pub fn state_weak_negative() -> i8 { CellState::WeakNegative.value() }
#[wasm_bindgen]
pub fn state_healthy_negative() -> i8 { CellState::HealthyNegative.value() }
