//! Error types for spiral generation and path lookups.

use thiserror::Error;

/// Errors raised while validating orders or addressing a spiral.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested order is zero or negative.
    #[error("matrix order {order} must be greater than zero")]
    InvalidOrder {
        /// The rejected order.
        order: i64,
    },
    /// The requested order would overflow the cell value type.
    #[error("matrix order {order} is too large, maximum is {max}")]
    OrderTooLarge {
        /// The rejected order.
        order: i64,
        /// Largest accepted order.
        max: u32,
    },
    /// An index or cell lies outside the spiral's grid.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
