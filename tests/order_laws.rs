#![cfg(feature = "data")]
//! Property-based tests for Order laws on derived witnesses.
//!
//! - **Antisymmetry**: `compare(x, y) == compare(y, x).reverse()`
//! - **Transitivity**: `x <= y && y <= z => x <= z`
//! - **Totality**: exactly one of `<`, `==`, `>` holds
//! - **Consistency**: `compare(x, y) == Equal` iff `equals(x, y)`

use std::cmp::Ordering;

use fpstd::data::{array, option};
use fpstd::typeclass::{FromOrd, Order, OrderOn, Reversed, Setoid, ThenOrder};
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0_u8..3, 0..4)
}

// =============================================================================
// array::order
// =============================================================================

proptest! {
    #[test]
    fn prop_array_antisymmetric(x in small_vec(), y in small_vec()) {
        let witness = array::order(FromOrd);
        prop_assert_eq!(witness.compare(&x, &y), witness.compare(&y, &x).reverse());
    }

    #[test]
    fn prop_array_transitive(x in small_vec(), y in small_vec(), z in small_vec()) {
        let witness = array::order(FromOrd);
        if witness.less_than_or_equal(&x, &y) && witness.less_than_or_equal(&y, &z) {
            prop_assert!(witness.less_than_or_equal(&x, &z));
        }
    }

    #[test]
    fn prop_array_consistent_with_equals(x in small_vec(), y in small_vec()) {
        let witness = array::order(FromOrd);
        prop_assert_eq!(witness.compare(&x, &y) == Ordering::Equal, witness.equals(&x, &y));
    }

    #[test]
    fn prop_array_total(x in small_vec(), y in small_vec()) {
        let witness = array::order(FromOrd);
        let outcomes = [
            witness.less_than(&x, &y),
            witness.equals(&x, &y),
            witness.greater_than(&x, &y),
        ];
        prop_assert_eq!(outcomes.iter().filter(|outcome| **outcome).count(), 1);
    }

    #[test]
    fn prop_array_agrees_with_std_ord(x in small_vec(), y in small_vec()) {
        prop_assert_eq!(array::order(FromOrd).compare(&x, &y), x.cmp(&y));
    }

    #[test]
    fn prop_array_prefix_sorts_first(x in small_vec(), extra in prop::collection::vec(0_u8..3, 1..3)) {
        let mut longer = x.clone();
        longer.extend(extra);
        prop_assert_eq!(array::order(FromOrd).compare(&x, &longer), Ordering::Less);
    }

    #[test]
    fn prop_array_pairwise_equal_compares_equal(x in prop::collection::vec(0_u8..30, 0..6)) {
        let shifted: Vec<u8> = x.iter().map(|n| n + 10).collect();
        let modulo = OrderOn::new(FromOrd, |n: &u8| n % 10);
        prop_assert_eq!(array::order(modulo).compare(&x, &shifted), Ordering::Equal);
    }
}

// =============================================================================
// option::order
// =============================================================================

proptest! {
    #[test]
    fn prop_option_antisymmetric(x in any::<Option<i8>>(), y in any::<Option<i8>>()) {
        let witness = option::order(FromOrd);
        prop_assert_eq!(witness.compare(&x, &y), witness.compare(&y, &x).reverse());
    }

    #[test]
    fn prop_option_agrees_with_std_ord(x in any::<Option<i8>>(), y in any::<Option<i8>>()) {
        prop_assert_eq!(option::order(FromOrd).compare(&x, &y), x.cmp(&y));
    }

    #[test]
    fn prop_option_consistent_with_equals(x in prop::option::of(0_u8..3), y in prop::option::of(0_u8..3)) {
        let witness = option::order(FromOrd);
        prop_assert_eq!(witness.compare(&x, &y).is_eq(), witness.equals(&x, &y));
    }
}

// =============================================================================
// Combinators
// =============================================================================

proptest! {
    #[test]
    fn prop_reversed_flips(x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(Reversed(FromOrd).compare(&x, &y), FromOrd.compare(&y, &x));
    }

    #[test]
    fn prop_then_order_matches_tuple_ord(x in any::<(u8, u8)>(), y in any::<(u8, u8)>()) {
        let first = OrderOn::new(FromOrd, |pair: &(u8, u8)| pair.0);
        let second = OrderOn::new(FromOrd, |pair: &(u8, u8)| pair.1);
        prop_assert_eq!(ThenOrder::new(first, second).compare(&x, &y), x.cmp(&y));
    }

    #[test]
    fn prop_sort_is_ordered_permutation(values in prop::collection::vec(any::<i16>(), 0..40)) {
        let sorted = array::sort(&FromOrd, &values);
        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }
}
