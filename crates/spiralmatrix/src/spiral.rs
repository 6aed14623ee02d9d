//! Closed-form mapping between spiral indices and grid cells.
//!
//! A spiral of order `n` visits every cell of an `n × n` grid, starting at the
//! top-left corner and walking clockwise inward ring by ring. Ring `k` sits
//! `k` cells in from every edge and has side `s = n - 2k`. The rings outside
//! it hold `n² - s² = 4k(n - k)` cells, so both directions of the mapping can
//! be computed without walking the path.

use std::iter::FusedIterator;

use crate::{
    cell::Cell,
    error::{self, Error},
    order::Order,
};

/// The inward clockwise spiral over a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spiral {
    /// Side length of the grid.
    order: Order,
    /// Cached number of cells on the path.
    length: u64,
}

impl Spiral {
    /// Construct the spiral for a grid of side `order`.
    ///
    /// Fails with the same errors as [`Order::new`].
    pub fn new(order: i64) -> error::Result<Self> {
        Ok(Self::from_order(Order::new(order)?))
    }

    /// Construct the spiral for an already validated order.
    pub fn from_order(order: Order) -> Self {
        let side = u64::from(order.get());
        Self {
            order,
            length: side * side,
        }
    }

    /// The grid's side length.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Number of cells on the path, `order²`.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// The cell at zero-based position `index` along the path.
    pub fn point(&self, index: u64) -> error::Result<Cell> {
        if index >= self.length {
            return Err(Error::OutOfBounds(format!(
                "index {index} is past the end of a spiral of length {}",
                self.length
            )));
        }
        Ok(self.cell_at(index))
    }

    /// The zero-based position of `cell` along the path.
    pub fn index(&self, cell: Cell) -> error::Result<u64> {
        let n = self.order.get();
        if cell.row >= n || cell.col >= n {
            return Err(Error::OutOfBounds(format!(
                "cell ({}, {}) lies outside a {n}x{n} grid",
                cell.row, cell.col
            )));
        }
        Ok(self.index_of(cell))
    }

    /// Iterate over every cell in path order.
    pub fn path(&self) -> SpiralPath {
        SpiralPath {
            spiral: *self,
            front: 0,
            back: self.length,
        }
    }

    /// Path position of an in-bounds cell.
    fn index_of(&self, cell: Cell) -> u64 {
        let n = u64::from(self.order.get());
        let k = u64::from(cell.ring(self.order.get()));
        let (row, col) = (u64::from(cell.row), u64::from(cell.col));
        let start = 4 * k * (n - k);
        let edge = (n - 2 * k).saturating_sub(1);
        let far = n - 1 - k;

        let local = if row == k {
            col - k
        } else if col == far {
            edge + (row - k)
        } else if row == far {
            2 * edge + (far - col)
        } else {
            3 * edge + (far - row)
        };
        start + local
    }

    /// Cell at an in-bounds path position.
    fn cell_at(&self, index: u64) -> Cell {
        let n = u64::from(self.order.get());
        let remaining = self.length - index;

        // Smallest side with the parity of `n` whose square covers what is left.
        let mut side = remaining.isqrt();
        if side * side < remaining {
            side += 1;
        }
        if (n - side) % 2 == 1 {
            side += 1;
        }

        let k = (n - side) / 2;
        let local = index - 4 * k * (n - k);
        let edge = side.saturating_sub(1);
        let far = n - 1 - k;

        let (row, col) = if edge == 0 || local < edge {
            (k, k + local)
        } else if local < 2 * edge {
            (k + (local - edge), far)
        } else if local < 3 * edge {
            (far, far - (local - 2 * edge))
        } else {
            (far - (local - 3 * edge), k)
        };
        // Both coordinates are below `n`, which fits a u32.
        Cell::new(row as u32, col as u32)
    }
}

/// Iterator over the cells of a [`Spiral`] in path order.
#[derive(Debug, Clone)]
pub struct SpiralPath {
    /// The spiral being walked.
    spiral: Spiral,
    /// Next index yielded from the front.
    front: u64,
    /// One past the next index yielded from the back.
    back: u64,
}

impl Iterator for SpiralPath {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.front >= self.back {
            return None;
        }
        let cell = self.spiral.cell_at(self.front);
        self.front += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back - self.front) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for SpiralPath {
    fn next_back(&mut self) -> Option<Cell> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.spiral.cell_at(self.back))
    }
}

impl ExactSizeIterator for SpiralPath {}

impl FusedIterator for SpiralPath {}
