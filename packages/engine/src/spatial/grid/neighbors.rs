use super::*;

/// The 8 grid-adjacent offsets as (dx, dy)
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

impl Grid {
    /// Sum of the in-bounds neighbors of (x, y).
    ///
    /// Edges and corners only see the neighbors that exist; there is no
    /// wraparound and the cell itself is never counted.
    #[inline]
    pub fn neighbor_sum(&self, x: u32, y: u32) -> i32 {
        let (cx, cy) = (x as i64, y as i64);
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| (cx + dx, cy + dy))
            .filter(|&(nx, ny)| self.in_bounds(nx, ny))
            .map(|(nx, ny)| self.get(nx as u32, ny as u32).value() as i32)
            .sum()
    }
}
