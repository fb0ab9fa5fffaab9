pub mod grid;
pub mod partition;
