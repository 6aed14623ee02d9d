//! Square matrices filled along an inward clockwise spiral.
//!
//! [`generate`] builds an `N × N` grid holding `1..=N²`, starting with 1 in
//! the top-left corner and winding clockwise toward the centre:
//!
//! ```
//! let m = spiralmatrix::generate(3)?;
//! assert_eq!(m.to_rows(), vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]);
//! # Ok::<(), spiralmatrix::error::Error>(())
//! ```
//!
//! [`Spiral`] maps between positions on the spiral path and grid cells
//! without building a matrix.

/// Zero-based grid coordinates.
pub mod cell;
/// Error types used across the crate.
pub mod error;
/// The ring-peeling fill.
mod generator;
/// The generated grid type.
pub mod matrix;
/// Validated matrix orders.
pub mod order;
/// Index/cell mapping along the spiral path.
pub mod spiral;

pub use crate::{
    cell::Cell,
    generator::{fill, generate},
    matrix::SpiralMatrix,
    order::{MAX_ORDER, Order},
    spiral::{Spiral, SpiralPath},
};
