//! Validated matrix orders.

use crate::error::{self, Error};

/// Largest order whose square still fits the `u32` cell type.
///
/// The fill counter reaches `order * order`, so this is `floor(sqrt(u32::MAX))`.
pub const MAX_ORDER: u32 = u32::MAX.isqrt();

/// The side length of a square spiral matrix, checked to lie in
/// `1..=MAX_ORDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Order(u32);

impl Order {
    /// Validate a requested order.
    ///
    /// Returns [`Error::InvalidOrder`] for `order <= 0` and
    /// [`Error::OrderTooLarge`] when `order * order` would not fit a `u32`.
    pub fn new(order: i64) -> error::Result<Self> {
        if order <= 0 {
            return Err(Error::InvalidOrder { order });
        }
        let side = u32::try_from(order)
            .ok()
            .filter(|&side| side <= MAX_ORDER)
            .ok_or(Error::OrderTooLarge {
                order,
                max: MAX_ORDER,
            })?;
        Ok(Self(side))
    }

    /// The side length.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Total number of cells, `order * order`.
    pub fn cell_count(self) -> usize {
        let side = self.0 as usize;
        side * side
    }

    /// Number of concentric rings, counting a single centre cell as a ring.
    pub fn ring_count(self) -> u32 {
        self.0.div_ceil(2)
    }
}

impl TryFrom<i64> for Order {
    type Error = Error;

    fn try_from(value: i64) -> error::Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<u32> for Order {
    type Error = Error;

    fn try_from(value: u32) -> error::Result<Self> {
        Self::new(i64::from(value))
    }
}

impl From<Order> for u32 {
    fn from(order: Order) -> Self {
        order.0
    }
}
