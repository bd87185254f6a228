//! Monoid - a semigroup with an identity element, as a witness value.
//!
//! # Laws
//!
//! For all `a`, in addition to the semigroup's associativity:
//!
//! ```text
//! M.concat(M.empty(), a) == a    (left identity)
//! M.concat(a, M.empty()) == a    (right identity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::{Monoid, Product, Semigroup, StringMonoid, Sum};
//!
//! assert_eq!(Sum.concat_all(vec![1, 2, 3]), 6);
//! assert_eq!(Product.concat_all(vec![2, 3, 4]), 24);
//! assert_eq!(Product.concat_all(Vec::<i64>::new()), 1);
//!
//! let greeting = StringMonoid.concat("Hello, ".to_string(), "World!".to_string());
//! assert_eq!(greeting, "Hello, World!");
//! ```

use std::ops::{Add, Mul};

use super::semigroup::Semigroup;

/// A type class witness for a semigroup with an identity element.
pub trait Monoid<A>: Semigroup<A> {
    /// The identity element of `concat`.
    fn empty(&self) -> A;

    /// Combines every value from left to right, starting from `empty`.
    ///
    /// An empty iterator yields `empty()`.
    fn concat_all<I>(&self, values: I) -> A
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        values
            .into_iter()
            .fold(self.empty(), |accumulator, value| self.concat(accumulator, value))
    }
}

impl<A, M: Monoid<A> + ?Sized> Monoid<A> for &M {
    #[inline]
    fn empty(&self) -> A {
        (**self).empty()
    }
}

// =============================================================================
// Sum
// =============================================================================

/// Addition, with `A::default()` (zero for the numeric types) as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sum;

impl<A: Add<Output = A>> Semigroup<A> for Sum {
    #[inline]
    fn concat(&self, x: A, y: A) -> A {
        x + y
    }
}

impl<A: Add<Output = A> + Default> Monoid<A> for Sum {
    #[inline]
    fn empty(&self) -> A {
        A::default()
    }
}

// =============================================================================
// Product
// =============================================================================

/// Multiplication, with one as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Product;

impl<A: Mul<Output = A>> Semigroup<A> for Product {
    #[inline]
    fn concat(&self, x: A, y: A) -> A {
        x * y
    }
}

macro_rules! impl_product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid<$numeric> for Product {
                #[inline]
                fn empty(&self) -> $numeric {
                    $one
                }
            }
        )*
    };
}

impl_product_monoid!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

// =============================================================================
// All / Any
// =============================================================================

/// Boolean conjunction, with `true` as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct All;

impl Semigroup<bool> for All {
    #[inline]
    fn concat(&self, x: bool, y: bool) -> bool {
        x && y
    }
}

impl Monoid<bool> for All {
    #[inline]
    fn empty(&self) -> bool {
        true
    }
}

/// Boolean disjunction, with `false` as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Any;

impl Semigroup<bool> for Any {
    #[inline]
    fn concat(&self, x: bool, y: bool) -> bool {
        x || y
    }
}

impl Monoid<bool> for Any {
    #[inline]
    fn empty(&self) -> bool {
        false
    }
}

// =============================================================================
// StringMonoid
// =============================================================================

/// String concatenation, with the empty string as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringMonoid;

impl Semigroup<String> for StringMonoid {
    #[inline]
    fn concat(&self, mut x: String, y: String) -> String {
        x.push_str(&y);
        x
    }
}

impl Monoid<String> for StringMonoid {
    #[inline]
    fn empty(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3, 4], 10)]
    #[case(vec![], 0)]
    #[case(vec![-5, 5], 0)]
    fn sum_concat_all(#[case] values: Vec<i32>, #[case] expected: i32) {
        assert_eq!(Sum.concat_all(values), expected);
    }

    #[rstest]
    #[case(vec![2, 3], 6)]
    #[case(vec![], 1)]
    #[case(vec![7, 0], 0)]
    fn product_concat_all(#[case] values: Vec<u64>, #[case] expected: u64) {
        assert_eq!(Product.concat_all(values), expected);
    }

    #[rstest]
    fn product_float_identity() {
        let identity: f64 = Product.empty();
        assert!((identity - 1.0).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(vec![true, true], true, true)]
    #[case(vec![true, false], false, true)]
    #[case(vec![], true, false)]
    fn all_and_any(#[case] values: Vec<bool>, #[case] all: bool, #[case] any: bool) {
        assert_eq!(All.concat_all(values.clone()), all);
        assert_eq!(Any.concat_all(values), any);
    }

    #[rstest]
    fn string_identity_both_sides() {
        let value = "hello".to_string();
        assert_eq!(StringMonoid.concat(StringMonoid.empty(), value.clone()), value);
        assert_eq!(StringMonoid.concat(value.clone(), StringMonoid.empty()), value);
    }

    #[rstest]
    fn reference_delegates_empty() {
        let witness = &Sum;
        let zero: i32 = witness.empty();
        assert_eq!(zero, 0);
    }
}
