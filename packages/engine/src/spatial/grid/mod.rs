//! Grid - flat row-major storage for one generation of cells
//!
//! Cells live in a single contiguous `Vec<CellState>`; row `y` occupies
//! `cells[y * width .. (y + 1) * width]`. Dimensions are fixed at
//! construction and every row has exactly `width` cells.

use crate::domain::cells::CellState;
use crate::error::{MalformedGrid, Result};

mod indexing;
mod accessors;
mod neighbors;
mod census;

pub use census::CellCensus;
pub use neighbors::NEIGHBOR_OFFSETS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if height == 0 {
            return Err(MalformedGrid::NoRows.into());
        }
        if width == 0 {
            return Err(MalformedGrid::NoColumns.into());
        }
        let size = checked_size(width as usize, height as usize)?;
        Ok(Self {
            width,
            height,
            size,
            cells: vec![CellState::Dead; size],
        })
    }

    /// Build a grid from decoded rows, rejecting ragged or empty input
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(MalformedGrid::NoRows.into());
        };
        let width = first.len();
        if width == 0 {
            return Err(MalformedGrid::NoColumns.into());
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(MalformedGrid::RaggedRow { row, expected: width, found }.into());
        }

        let (width, height) = checked_dims(width, rows.len())?;
        let cells: Vec<CellState> = rows.into_iter().flatten().collect();
        Ok(Self {
            width,
            height,
            size: cells.len(),
            cells,
        })
    }

    /// Build a grid from integer states (-2..=2)
    pub fn from_values(rows: &[Vec<i8>]) -> Result<Self> {
        let decoded = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| CellState::try_from(v))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(decoded)
    }

    /// Reassemble a grid from rows produced out of order.
    ///
    /// `rows` is keyed by row index; every index in `0..height` must appear
    /// exactly once with `width` cells. Used by the engine after each worker
    /// fan-out.
    pub(crate) fn gather_rows<I>(width: u32, height: u32, rows: I) -> Self
    where
        I: IntoIterator<Item = (u32, Vec<CellState>)>,
    {
        let w = width as usize;
        let size = w * height as usize;
        let mut cells = vec![CellState::Dead; size];
        for (y, row) in rows {
            debug_assert_eq!(row.len(), w, "gather_rows: row {} has wrong width", y);
            let start = y as usize * w;
            cells[start..start + w].copy_from_slice(&row);
        }
        Self { width, height, size, cells }
    }

    /// Integer view, one `Vec` per row
    pub fn to_values(&self) -> Vec<Vec<i8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.value()).collect())
            .collect()
    }
}

/// Row and column counts as stored `u32` dimensions
fn checked_dims(columns: usize, rows: usize) -> Result<(u32, u32)> {
    let too_large = || MalformedGrid::TooLarge { rows, columns };
    let width = u32::try_from(columns).map_err(|_| too_large())?;
    let height = u32::try_from(rows).map_err(|_| too_large())?;
    checked_size(columns, rows)?;
    Ok((width, height))
}

fn checked_size(columns: usize, rows: usize) -> Result<usize> {
    columns
        .checked_mul(rows)
        .ok_or_else(|| MalformedGrid::TooLarge { rows, columns }.into())
}
