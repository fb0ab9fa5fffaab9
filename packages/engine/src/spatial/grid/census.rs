use super::*;

/// Population count for each state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellCensus {
    counts: [u32; 5],
}

impl CellCensus {
    #[inline]
    pub fn count(&self, state: CellState) -> u32 {
        self.counts[state.ordinal()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Cells in any state other than Dead
    pub fn alive(&self) -> u32 {
        self.total() - self.count(CellState::Dead)
    }

    fn add(&mut self, state: CellState) {
        self.counts[state.ordinal()] += 1;
    }
}

impl Grid {
    pub fn census(&self) -> CellCensus {
        let mut census = CellCensus::default();
        for &cell in &self.cells {
            census.add(cell);
        }
        census
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_state() {
        let grid = Grid::from_values(&[vec![2, 2, 1], vec![0, -1, -2]]).unwrap();
        let census = grid.census();
        assert_eq!(census.count(CellState::HealthyPositive), 2);
        assert_eq!(census.count(CellState::WeakPositive), 1);
        assert_eq!(census.count(CellState::Dead), 1);
        assert_eq!(census.count(CellState::WeakNegative), 1);
        assert_eq!(census.count(CellState::HealthyNegative), 1);
        assert_eq!(census.total(), 6);
        assert_eq!(census.alive(), 5);
    }
}
