//! Text I/O - grid files with one symbol per cell

mod text;

pub use text::{decode_grid, encode_grid, load_grid, save_grid};
