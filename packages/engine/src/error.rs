//! Engine error types.

use thiserror::Error;

/// Why a set of rows could not form a grid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MalformedGrid {
    /// No rows at all.
    #[error("grid has no rows")]
    NoRows,
    /// Rows exist but have no columns.
    #[error("grid has no columns")]
    NoColumns,
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    /// Dimensions do not fit the grid's `u32` width/height.
    #[error("grid of {rows} rows by {columns} columns is too large")]
    TooLarge { rows: usize, columns: usize },
}

/// Errors that can occur while building, decoding or advancing a grid.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rows of unequal length, or zero rows/columns.
    #[error("malformed grid: {0}")]
    MalformedGrid(#[from] MalformedGrid),

    /// Worker count below one.
    #[error("invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(usize),

    /// Integer that is not one of the five cell states.
    #[error("invalid cell value: {0}")]
    InvalidCellValue(i8),

    /// Character outside the symbol map while decoding text.
    #[error("unknown symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol { line: usize, column: usize, symbol: char },

    /// Simulation settings could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading or writing a grid file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Worker pool could not be created.
    #[error("worker pool error: {0}")]
    WorkerPool(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_reason_converts_and_displays() {
        let err: EngineError = MalformedGrid::RaggedRow { row: 3, expected: 4, found: 2 }.into();
        assert!(matches!(err, EngineError::MalformedGrid(MalformedGrid::RaggedRow { row: 3, .. })));
        assert_eq!(err.to_string(), "malformed grid: row 3 has 2 columns, expected 4");
        assert!(std::error::Error::source(&err).is_some());
    }
}
