//! Domain - cell states, the transition rule, run configuration

pub mod cells;
pub mod config;
pub mod rules;

pub use cells::CellState;
pub use config::{SimulationConfig, DEFAULT_GENERATIONS};
pub use rules::next_state;
