#![cfg(feature = "data")]
//! Property-based tests for Semigroup and Monoid laws.
//!
//! - **Associativity**: `concat(concat(x, y), z) == concat(x, concat(y, z))`
//! - **Left Identity**: `concat(empty(), x) == x`
//! - **Right Identity**: `concat(x, empty()) == x`

use fpstd::data::{array, option};
use fpstd::typeclass::{
    All, Any, First, FromOrd, Last, MaxOf, MinOf, Monoid, Product, Semigroup, StringMonoid, Sum,
};
use proptest::prelude::*;

macro_rules! monoid_laws {
    ($module:ident, $witness:expr, $strategy:expr) => {
        mod $module {
            use super::*;

            proptest! {
                #[test]
                fn prop_associativity(x in $strategy, y in $strategy, z in $strategy) {
                    let witness = $witness;
                    let left = witness.concat(witness.concat(x.clone(), y.clone()), z.clone());
                    let right = witness.concat(x, witness.concat(y, z));
                    prop_assert_eq!(left, right);
                }

                #[test]
                fn prop_left_identity(x in $strategy) {
                    let witness = $witness;
                    prop_assert_eq!(witness.concat(witness.empty(), x.clone()), x);
                }

                #[test]
                fn prop_right_identity(x in $strategy) {
                    let witness = $witness;
                    prop_assert_eq!(witness.concat(x.clone(), witness.empty()), x);
                }
            }
        }
    };
}

monoid_laws!(sum_i64, Sum, -1_000_000_i64..1_000_000);
monoid_laws!(product_i64, Product, -1_000_i64..1_000);
monoid_laws!(all, All, any::<bool>());
monoid_laws!(any_bool, Any, any::<bool>());
monoid_laws!(string, StringMonoid, any::<String>());
monoid_laws!(array_monoid, array::monoid(), prop::collection::vec(any::<u8>(), 0..10));
monoid_laws!(first_some, option::first_monoid(), any::<Option<i32>>());
monoid_laws!(last_some, option::last_monoid(), any::<Option<i32>>());
monoid_laws!(option_sum, option::monoid(Sum), prop::option::of(-1_000_i32..1_000));
monoid_laws!(option_string, option::monoid(StringMonoid), any::<Option<String>>());

// =============================================================================
// Semigroups without identity
// =============================================================================

proptest! {
    #[test]
    fn prop_first_last_associative(x in any::<i32>(), y in any::<i32>(), z in any::<i32>()) {
        prop_assert_eq!(First.concat(First.concat(x, y), z), First.concat(x, First.concat(y, z)));
        prop_assert_eq!(Last.concat(Last.concat(x, y), z), Last.concat(x, Last.concat(y, z)));
    }

    #[test]
    fn prop_min_max_associative(x in any::<i32>(), y in any::<i32>(), z in any::<i32>()) {
        let min = MinOf(FromOrd);
        let max = MaxOf(FromOrd);
        prop_assert_eq!(min.concat(min.concat(x, y), z), x.min(y).min(z));
        prop_assert_eq!(max.concat(x, max.concat(y, z)), x.max(y).max(z));
    }

    #[test]
    fn prop_concat_all_matches_fold(values in prop::collection::vec(-1_000_i64..1_000, 0..20)) {
        prop_assert_eq!(Sum.concat_all(values.clone()), values.iter().sum::<i64>());
    }

    #[test]
    fn prop_array_monoid_concat_all_is_flatten(nested in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..4), 0..6)) {
        prop_assert_eq!(array::monoid().concat_all(nested.clone()), array::flatten(&nested));
    }
}
