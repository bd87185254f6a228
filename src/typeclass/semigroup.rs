//! Semigroup - an associative binary operation as a witness value.
//!
//! A `Semigroup<A>` witness combines two values of `A`. The same type can
//! have many semigroups (addition, multiplication, "keep the first", ...),
//! so the witness is passed explicitly rather than implemented on `A`.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! S.concat(S.concat(a, b), c) == S.concat(a, S.concat(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::{First, FromOrd, MaxOf, Semigroup};
//!
//! assert_eq!(First.concat(1, 2), 1);
//! assert_eq!(MaxOf(FromOrd).concat(1, 2), 2);
//! assert_eq!(MaxOf(FromOrd).reduce_all(vec![3, 9, 4]), Some(9));
//! ```

use super::order::Order;

/// A type class witness for an associative binary operation on `A`.
pub trait Semigroup<A> {
    /// Combines two values. Must be associative.
    fn concat(&self, x: A, y: A) -> A;

    /// Combines every value of a non-empty iterator from left to right.
    ///
    /// Returns `None` for an empty iterator, since a semigroup has no
    /// identity element to fall back on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::{Last, Semigroup};
    ///
    /// assert_eq!(Last.reduce_all(vec![1, 2, 3]), Some(3));
    /// assert_eq!(Last.reduce_all(Vec::<i32>::new()), None);
    /// ```
    fn reduce_all<I>(&self, values: I) -> Option<A>
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        values.into_iter().reduce(|accumulator, value| self.concat(accumulator, value))
    }
}

impl<A, S: Semigroup<A> + ?Sized> Semigroup<A> for &S {
    #[inline]
    fn concat(&self, x: A, y: A) -> A {
        (**self).concat(x, y)
    }
}

/// Keeps the leftmost value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct First;

impl<A> Semigroup<A> for First {
    #[inline]
    fn concat(&self, x: A, _y: A) -> A {
        x
    }
}

/// Keeps the rightmost value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Last;

impl<A> Semigroup<A> for Last {
    #[inline]
    fn concat(&self, _x: A, y: A) -> A {
        y
    }
}

/// Keeps the smaller value under an order (the meet semigroup).
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOf<O>(pub O);

impl<A, O: Order<A>> Semigroup<A> for MinOf<O> {
    #[inline]
    fn concat(&self, x: A, y: A) -> A {
        self.0.min(x, y)
    }
}

/// Keeps the larger value under an order (the join semigroup).
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOf<O>(pub O);

impl<A, O: Order<A>> Semigroup<A> for MaxOf<O> {
    #[inline]
    fn concat(&self, x: A, y: A) -> A {
        self.0.max(x, y)
    }
}
