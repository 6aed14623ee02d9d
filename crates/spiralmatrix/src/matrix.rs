//! The owned square grid produced by the generator.

use std::ops::Index;

use crate::{cell::Cell, order::Order, spiral::Spiral};

/// An `order × order` grid of `u32` values stored row-major.
///
/// Instances are only produced by [`crate::generate`], so every matrix holds
/// each value in `1..=order²` exactly once. The grid is read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiralMatrix {
    /// Side length.
    order: Order,
    /// Row-major cell values, `order²` long.
    cells: Vec<u32>,
}

impl SpiralMatrix {
    /// Wrap a fully populated row-major buffer.
    pub(crate) fn from_cells(order: Order, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), order.cell_count());
        Self { order, cells }
    }

    /// Side length of the matrix.
    pub fn order(&self) -> u32 {
        self.order.get()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a generated matrix; present for API symmetry with
    /// `len`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.offset(row, col).map(|off| self.cells[off])
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> Option<&[u32]> {
        let side = self.side();
        (row < side).then(|| &self.cells[row * side..(row + 1) * side])
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.side())
    }

    /// All values in row-major order.
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    /// Copy into a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Consume the matrix, returning the row-major buffer.
    pub fn into_vec(self) -> Vec<u32> {
        self.cells
    }

    /// Where `value` sits in the grid, or `None` if it is not in `1..=order²`.
    pub fn position_of(&self, value: u32) -> Option<Cell> {
        let index = u64::from(value).checked_sub(1)?;
        self.spiral().point(index).ok()
    }

    /// Read values along the spiral path. For a generated matrix this yields
    /// `1, 2, ..., order²`.
    pub fn spiral_values(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.spiral().path().map(move |cell| self[cell])
    }

    /// The spiral path over this matrix's grid.
    fn spiral(&self) -> Spiral {
        Spiral::from_order(self.order)
    }

    /// Side length as a `usize`.
    fn side(&self) -> usize {
        self.order.get() as usize
    }

    /// Row-major offset of an in-bounds cell.
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        let side = self.side();
        (row < side && col < side).then_some(row * side + col)
    }
}

impl Index<(usize, usize)> for SpiralMatrix {
    type Output = u32;

    fn index(&self, (row, col): (usize, usize)) -> &u32 {
        let side = self.side();
        assert!(
            row < side && col < side,
            "cell ({row}, {col}) out of bounds for a {side}x{side} matrix"
        );
        &self.cells[row * side + col]
    }
}

impl Index<Cell> for SpiralMatrix {
    type Output = u32;

    fn index(&self, cell: Cell) -> &u32 {
        &self[(cell.row as usize, cell.col as usize)]
    }
}

impl From<SpiralMatrix> for Vec<Vec<u32>> {
    fn from(matrix: SpiralMatrix) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error, generate};

    #[test]
    fn accessors() -> error::Result<()> {
        let m = generate(3)?;
        assert_eq!(m.order(), 3);
        assert_eq!(m.len(), 9);
        assert!(!m.is_empty());
        assert_eq!(m.get(1, 1), Some(9));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m[(2, 0)], 7);
        assert_eq!(m[Cell::new(1, 2)], 4);
        assert_eq!(m.row(1), Some(&[8, 9, 4][..]));
        assert_eq!(m.row(3), None);
        assert_eq!(m.rows().len(), 3);
        assert_eq!(m.as_slice(), &[1, 2, 3, 8, 9, 4, 7, 6, 5]);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_past_row_end_panics() {
        if let Ok(m) = generate(4) {
            assert_eq!(m[(0, 4)], 0);
        }
    }

    #[test]
    fn position_lookup() -> error::Result<()> {
        let m = generate(4)?;
        assert_eq!(m.position_of(1), Some(Cell::new(0, 0)));
        assert_eq!(m.position_of(5), Some(Cell::new(1, 3)));
        assert_eq!(m.position_of(16), Some(Cell::new(2, 1)));
        assert_eq!(m.position_of(0), None);
        assert_eq!(m.position_of(17), None);
        for v in 1..=16 {
            let cell = m.position_of(v).ok_or_else(|| {
                error::Error::OutOfBounds(format!("value {v} not found"))
            })?;
            assert_eq!(m[cell], v);
        }
        Ok(())
    }

    #[test]
    fn spiral_read_back() -> error::Result<()> {
        let m = generate(5)?;
        let values: Vec<u32> = m.spiral_values().collect();
        assert_eq!(values, (1..=25).collect::<Vec<u32>>());
        Ok(())
    }

    #[test]
    fn conversions() -> error::Result<()> {
        let m = generate(2)?;
        assert_eq!(m.to_rows(), vec![vec![1, 2], vec![4, 3]]);
        let rows: Vec<Vec<u32>> = m.clone().into();
        assert_eq!(rows, m.to_rows());
        assert_eq!(m.into_vec(), vec![1, 2, 4, 3]);
        Ok(())
    }
}
