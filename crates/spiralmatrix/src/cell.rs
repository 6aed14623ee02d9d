//! Zero-based grid coordinates.

/// A cell position in a square grid, addressed as `(row, col)` from the
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row, counted downward from zero.
    pub row: u32,
    /// Column, counted rightward from zero.
    pub col: u32,
}

impl Cell {
    /// Create a cell at `(row, col)`.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell.
    ///
    /// Consecutive cells on a spiral path are always at distance 1.
    pub fn manhattan(&self, other: &Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Distance to the nearest edge of a grid with side `order`, which is also
    /// the offset of the ring containing this cell.
    pub(crate) fn ring(&self, order: u32) -> u32 {
        let last = order - 1;
        self.row
            .min(self.col)
            .min(last - self.row)
            .min(last - self.col)
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (u32, u32) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}
