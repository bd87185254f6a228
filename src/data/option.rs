//! Witnesses and helpers for `Option`.
//!
//! The type class traits themselves are implemented for `Option` in
//! [`crate::typeclass`]; this module provides the witnesses that lift an
//! element witness to `Option<A>` and a few constructors.
//!
//! # Examples
//!
//! ```rust
//! use fpstd::data::option;
//! use fpstd::typeclass::{FromOrd, Monoid, Order, Sum};
//!
//! assert!(option::order(FromOrd).less_than(&None, &Some(0)));
//! assert_eq!(option::monoid(Sum).concat_all(vec![Some(1), None, Some(2)]), Some(3));
//! assert_eq!(option::first_monoid().concat_all(vec![None, Some(1), Some(2)]), Some(1));
//! ```

use std::cmp::Ordering;

use crate::typeclass::{Monoid, Order, Semigroup, Setoid};

// =============================================================================
// Setoid and Order
// =============================================================================

/// Equality on `Option<A>`: both `None`, or both `Some` with equal values.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionSetoid<S>(S);

/// Derives equality on `Option<A>` from equality on `A`.
pub const fn setoid<S>(element: S) -> OptionSetoid<S> {
    OptionSetoid(element)
}

impl<A, S: Setoid<A>> Setoid<Option<A>> for OptionSetoid<S> {
    fn equals(&self, x: &Option<A>, y: &Option<A>) -> bool {
        match (x, y) {
            (None, None) => true,
            (Some(a), Some(b)) => self.0.equals(a, b),
            _ => false,
        }
    }
}

/// Ordering on `Option<A>` where `None` sorts before every `Some`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionOrder<O>(O);

/// Derives an order on `Option<A>` from an order on `A`.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fpstd::data::option;
/// use fpstd::typeclass::{FromOrd, Order};
///
/// let witness = option::order(FromOrd);
/// assert_eq!(witness.compare(&Some(2), &Some(1)), Ordering::Greater);
/// assert_eq!(witness.compare(&None::<i32>, &None), Ordering::Equal);
/// ```
pub const fn order<O>(element: O) -> OptionOrder<O> {
    OptionOrder(element)
}

impl<A, O: Order<A>> Setoid<Option<A>> for OptionOrder<O> {
    fn equals(&self, x: &Option<A>, y: &Option<A>) -> bool {
        setoid(&self.0).equals(x, y)
    }
}

impl<A, O: Order<A>> Order<Option<A>> for OptionOrder<O> {
    fn compare(&self, x: &Option<A>, y: &Option<A>) -> Ordering {
        match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.0.compare(a, b),
        }
    }
}

// =============================================================================
// Monoids
// =============================================================================

/// Keeps the leftmost `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FirstSome;

/// The monoid that keeps the leftmost `Some`, with `None` as identity.
pub const fn first_monoid() -> FirstSome {
    FirstSome
}

impl<A> Semigroup<Option<A>> for FirstSome {
    #[inline]
    fn concat(&self, x: Option<A>, y: Option<A>) -> Option<A> {
        x.or(y)
    }
}

impl<A> Monoid<Option<A>> for FirstSome {
    #[inline]
    fn empty(&self) -> Option<A> {
        None
    }
}

/// Keeps the rightmost `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LastSome;

/// The monoid that keeps the rightmost `Some`, with `None` as identity.
pub const fn last_monoid() -> LastSome {
    LastSome
}

impl<A> Semigroup<Option<A>> for LastSome {
    #[inline]
    fn concat(&self, x: Option<A>, y: Option<A>) -> Option<A> {
        y.or(x)
    }
}

impl<A> Monoid<Option<A>> for LastSome {
    #[inline]
    fn empty(&self) -> Option<A> {
        None
    }
}

/// Combines two `Some` values with a semigroup; `None` is the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionMonoid<S>(S);

/// Lifts a semigroup on `A` to a monoid on `Option<A>`.
pub const fn monoid<S>(semigroup: S) -> OptionMonoid<S> {
    OptionMonoid(semigroup)
}

impl<A, S: Semigroup<A>> Semigroup<Option<A>> for OptionMonoid<S> {
    fn concat(&self, x: Option<A>, y: Option<A>) -> Option<A> {
        match (x, y) {
            (Some(a), Some(b)) => Some(self.0.concat(a, b)),
            (Some(a), None) => Some(a),
            (None, other) => other,
        }
    }
}

impl<A, S: Semigroup<A>> Monoid<Option<A>> for OptionMonoid<S> {
    #[inline]
    fn empty(&self) -> Option<A> {
        None
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// `Some(value)` when `predicate` holds, otherwise `None`.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::option;
///
/// assert_eq!(option::from_predicate(4, |n| n % 2 == 0), Some(4));
/// assert_eq!(option::from_predicate(5, |n| n % 2 == 0), None);
/// ```
#[inline]
pub fn from_predicate<A, P>(value: A, predicate: P) -> Option<A>
where
    P: FnOnce(&A) -> bool,
{
    if predicate(&value) { Some(value) } else { None }
}

/// Case analysis: `on_none()` for `None`, `on_some(value)` for `Some(value)`.
#[inline]
pub fn fold<A, B, N, S>(option: Option<A>, on_none: N, on_some: S) -> B
where
    N: FnOnce() -> B,
    S: FnOnce(A) -> B,
{
    option.map_or_else(on_none, on_some)
}

/// The contained value, or the result of `default`.
#[inline]
pub fn get_or_else<A, F>(option: Option<A>, default: F) -> A
where
    F: FnOnce() -> A,
{
    option.unwrap_or_else(default)
}
