use super::*;

impl Grid {
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> CellState {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, state: CellState) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    #[inline]
    pub fn row(&self, y: u32) -> &[CellState] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }
}
