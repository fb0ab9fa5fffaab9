use std::fs;
use std::path::Path;

use crate::domain::cells::CellState;
use crate::error::{EngineError, Result};
use crate::grid::Grid;

/// Decode grid text.
///
/// Each line is one row and each character one cell. Surrounding whitespace
/// (including a trailing `\r`) is trimmed and lines left empty are skipped,
/// so trailing blank lines are harmless. Positions in errors are 1-based and
/// refer to the original text.
pub fn decode_grid(text: &str) -> Result<Grid> {
    let mut rows = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let leading = line.len() - line.trim_start().len();
        let column_offset = line[..leading].chars().count();

        let row = trimmed
            .chars()
            .enumerate()
            .map(|(col, symbol)| {
                CellState::from_symbol(symbol).ok_or(EngineError::UnknownSymbol {
                    line: line_idx + 1,
                    column: column_offset + col + 1,
                    symbol,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }
    Grid::from_rows(rows)
}

/// Encode a grid as text, one newline-terminated line per row
pub fn encode_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.size() + grid.height() as usize);
    for row in grid.rows() {
        out.extend(row.iter().map(|c| c.symbol()));
        out.push('\n');
    }
    out
}

pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let text = fs::read_to_string(path)?;
    decode_grid(&text)
}

pub fn save_grid(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, encode_grid(grid))?;
    Ok(())
}
