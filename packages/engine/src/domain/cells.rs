//! Cell States - the five tiers a cell moves between
//!
//! Ordered from Healthy-Negative (-2) to Healthy-Positive (2). Adjacent
//! tiers transition into each other; the value doubles as the cell's
//! contribution to its neighbors' sums.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

// Text symbols (one character per cell)
pub const SYM_HEALTHY_POSITIVE: char = 'O';
pub const SYM_WEAK_POSITIVE: char = 'o';
pub const SYM_DEAD: char = '.';
pub const SYM_WEAK_NEGATIVE: char = 'x';
pub const SYM_HEALTHY_NEGATIVE: char = 'X';

#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum CellState {
    HealthyNegative = -2,
    WeakNegative = -1,
    #[default]
    Dead = 0,
    WeakPositive = 1,
    HealthyPositive = 2,
}

impl CellState {
    /// All states in value order
    pub const ALL: [CellState; 5] = [
        CellState::HealthyNegative,
        CellState::WeakNegative,
        CellState::Dead,
        CellState::WeakPositive,
        CellState::HealthyPositive,
    ];

    #[inline]
    pub fn value(self) -> i8 {
        self as i8
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            CellState::HealthyPositive => SYM_HEALTHY_POSITIVE,
            CellState::WeakPositive => SYM_WEAK_POSITIVE,
            CellState::Dead => SYM_DEAD,
            CellState::WeakNegative => SYM_WEAK_NEGATIVE,
            CellState::HealthyNegative => SYM_HEALTHY_NEGATIVE,
        }
    }

    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            SYM_HEALTHY_POSITIVE => Some(CellState::HealthyPositive),
            SYM_WEAK_POSITIVE => Some(CellState::WeakPositive),
            SYM_DEAD => Some(CellState::Dead),
            SYM_WEAK_NEGATIVE => Some(CellState::WeakNegative),
            SYM_HEALTHY_NEGATIVE => Some(CellState::HealthyNegative),
            _ => None,
        }
    }

    /// Position in [`CellState::ALL`]
    #[inline]
    pub(crate) fn ordinal(self) -> usize {
        (self.value() + 2) as usize
    }
}

impl TryFrom<i8> for CellState {
    type Error = EngineError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -2 => Ok(CellState::HealthyNegative),
            -1 => Ok(CellState::WeakNegative),
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::WeakPositive),
            2 => Ok(CellState::HealthyPositive),
            other => Err(EngineError::InvalidCellValue(other)),
        }
    }
}

impl From<CellState> for i8 {
    fn from(state: CellState) -> Self {
        state.value()
    }
}
