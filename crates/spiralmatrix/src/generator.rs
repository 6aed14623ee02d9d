//! Ring-peeling spiral fill.
//!
//! The matrix is filled one square ring at a time, outermost first. Each ring
//! is written in four passes (top, right, bottom, left) that share a running
//! counter. The top and bottom passes own the corners; the right and left
//! passes cover `side - 2` cells between them, so no cell is written twice.

use tracing::{debug, trace};

use crate::{error, matrix::SpiralMatrix, order::Order};

/// Row-major buffer plus the running counter for one fill.
struct Filler {
    /// Side length of the grid.
    side: usize,
    /// Cells being filled.
    cells: Vec<u32>,
    /// Next value to write.
    counter: u32,
}

impl Filler {
    /// Write the counter at `(row, col)` and advance it.
    fn put(&mut self, row: usize, col: usize) {
        self.cells[row * self.side + col] = self.counter;
        self.counter += 1;
    }
}

/// Generate the `order × order` spiral matrix.
///
/// Fails with [`error::Error::InvalidOrder`] if `order <= 0` and with
/// [`error::Error::OrderTooLarge`] if `order²` does not fit a `u32`. Nothing
/// is allocated for a rejected order.
pub fn generate(order: i64) -> error::Result<SpiralMatrix> {
    let order = Order::new(order).inspect_err(|err| debug!(%err, "rejected spiral order"))?;
    Ok(fill(order))
}

/// Fill a matrix for an already validated order.
pub fn fill(order: Order) -> SpiralMatrix {
    let n = order.get() as usize;
    debug!(order = n, "filling spiral matrix");

    let mut f = Filler {
        side: n,
        cells: vec![0; order.cell_count()],
        counter: 1,
    };

    let mut offset = 0;
    let mut current_side = n;
    // offset < n / 2 with real division, so the centre of an odd order is
    // reached.
    while 2 * offset < n {
        trace!(offset, side = current_side, counter = f.counter, "filling ring");
        let far = n - 1 - offset;
        let inner = current_side.saturating_sub(2);

        // top
        for i in 0..current_side {
            f.put(offset, offset + i);
        }

        // right
        for i in 0..inner {
            f.put(offset + 1 + i, far);
        }

        // bottom, absent for a single-cell centre ring
        if n / 2 > offset {
            for i in 0..current_side {
                f.put(far, far - i);
            }
        }

        // left
        for i in 0..inner {
            f.put(far - 1 - i, offset);
        }

        offset += 1;
        current_side = current_side.saturating_sub(2);
    }

    debug_assert_eq!(f.counter as usize, order.cell_count() + 1);
    SpiralMatrix::from_cells(order, f.cells)
}
