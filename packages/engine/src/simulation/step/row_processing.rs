use crate::domain::cells::CellState;
use crate::domain::rules::next_state;
use crate::grid::Grid;
use crate::spatial::partition::RowPartition;

/// Next states for every row in `partition`, tagged with their row index.
/// Reads only from `grid`, the completed previous generation.
pub(super) fn process_partition(grid: &Grid, partition: &RowPartition) -> Vec<(u32, Vec<CellState>)> {
    partition
        .rows()
        .iter()
        .map(|&y| (y, process_row(grid, y)))
        .collect()
}

#[inline]
pub(super) fn process_row(grid: &Grid, y: u32) -> Vec<CellState> {
    grid.row(y)
        .iter()
        .enumerate()
        .map(|(x, &cell)| next_state(cell, grid.neighbor_sum(x as u32, y)))
        .collect()
}
