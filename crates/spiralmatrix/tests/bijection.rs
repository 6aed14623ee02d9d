//! Property-based tests for the spiral path mapping and the generator.
//!
//! The path must satisfy `spiral.index(spiral.point(i)) == i` for every valid
//! index, and generated matrices must agree with the mapping.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use proptest::prelude::*;
use spiralmatrix::{Cell, MAX_ORDER, Spiral, error::Error, generate};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Index to cell and back is the identity.
    #[test]
    fn point_then_index(order in 1i64..200, seed in any::<u64>()) {
        let spiral = Spiral::new(order).expect("valid order");
        let index = seed % spiral.length();
        let cell = spiral.point(index).expect("index in range");
        prop_assert_eq!(spiral.index(cell).expect("cell in range"), index);
    }

    /// Cell to index and back is the identity.
    #[test]
    fn index_then_point(order in 1u32..200, row in any::<u32>(), col in any::<u32>()) {
        let spiral = Spiral::new(i64::from(order)).expect("valid order");
        let cell = Cell::new(row % order, col % order);
        let index = spiral.index(cell).expect("cell in range");
        prop_assert!(index < spiral.length());
        prop_assert_eq!(spiral.point(index).expect("index in range"), cell);
    }

    /// Consecutive path positions are neighbours, even near the grid limit.
    #[test]
    fn path_steps_are_adjacent(order in 2i64..=i64::from(MAX_ORDER), seed in any::<u64>()) {
        let spiral = Spiral::new(order).expect("valid order");
        let index = seed % (spiral.length() - 1);
        let a = spiral.point(index).expect("index in range");
        let b = spiral.point(index + 1).expect("index in range");
        prop_assert_eq!(a.manhattan(&b), 1);
    }

    /// Every generated cell holds its path position plus one.
    #[test]
    fn generated_values_follow_path(order in 1i64..48) {
        let m = generate(order).expect("valid order");
        let spiral = Spiral::new(order).expect("valid order");
        for (index, cell) in spiral.path().enumerate() {
            prop_assert_eq!(u64::from(m[cell]), index as u64 + 1);
        }
    }

    /// Non-positive orders are rejected.
    #[test]
    fn non_positive_rejected(order in i64::MIN..=0) {
        prop_assert_eq!(generate(order), Err(Error::InvalidOrder { order }));
    }

    /// Orders whose square overflows `u32` are rejected.
    #[test]
    fn oversized_rejected(order in i64::from(MAX_ORDER) + 1..=i64::MAX) {
        let rejected = matches!(generate(order), Err(Error::OrderTooLarge { .. }));
        prop_assert!(rejected);
    }
}
