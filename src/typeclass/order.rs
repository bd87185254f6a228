//! Order - total orders as explicit witness values.
//!
//! An `Order` witness extends a [`Setoid`] with a comparison. It is named
//! `Order` so it never shadows `std::cmp::Ord`.
//!
//! # Laws
//!
//! For all `x`, `y`, `z`:
//!
//! ```text
//! O.compare(x, y) == O.compare(y, x).reverse()                 (antisymmetry)
//! O.compare(x, y) != Greater && O.compare(y, z) != Greater
//!     => O.compare(x, z) != Greater                            (transitivity)
//! O.compare(x, y) == Equal <=> O.equals(x, y)                  (consistency)
//! ```
//!
//! Totality holds by construction: `compare` always returns an `Ordering`.
//!
//! # Composition
//!
//! Orders form a semigroup: [`ThenOrder`] compares with the first order and
//! breaks ties with the second. [`OrderSemigroup`] exposes that composition as
//! a [`Semigroup`] over boxed orders, which is how multi-key sorting folds a
//! list of orders into one.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use fpstd::typeclass::{FromOrd, Order, OrderOn, ThenOrder};
//!
//! fn name<'a>(person: &(&'a str, u32)) -> &'a str {
//!     person.0
//! }
//!
//! let by_age = OrderOn::new(FromOrd, |person: &(&str, u32)| person.1);
//! let by_age_then_name = ThenOrder::new(by_age, OrderOn::new(FromOrd, name));
//!
//! assert_eq!(
//!     by_age_then_name.compare(&("bob", 30), &("alice", 30)),
//!     Ordering::Greater
//! );
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::semigroup::Semigroup;
use super::setoid::Setoid;

/// A total-order witness over `A`, consistent with its [`Setoid`].
pub trait Order<A: ?Sized>: Setoid<A> {
    /// Compares `x` with `y`.
    fn compare(&self, x: &A, y: &A) -> Ordering;

    /// `x < y`
    #[inline]
    fn less_than(&self, x: &A, y: &A) -> bool {
        self.compare(x, y) == Ordering::Less
    }

    /// `x > y`
    #[inline]
    fn greater_than(&self, x: &A, y: &A) -> bool {
        self.compare(x, y) == Ordering::Greater
    }

    /// `x <= y`
    #[inline]
    fn less_than_or_equal(&self, x: &A, y: &A) -> bool {
        self.compare(x, y) != Ordering::Greater
    }

    /// `x >= y`
    #[inline]
    fn greater_than_or_equal(&self, x: &A, y: &A) -> bool {
        self.compare(x, y) != Ordering::Less
    }

    /// Returns the smaller of two values, preferring `x` when they are equal.
    #[inline]
    fn min(&self, x: A, y: A) -> A
    where
        A: Sized,
    {
        if self.compare(&y, &x) == Ordering::Less { y } else { x }
    }

    /// Returns the larger of two values, preferring `x` when they are equal.
    #[inline]
    fn max(&self, x: A, y: A) -> A
    where
        A: Sized,
    {
        if self.compare(&y, &x) == Ordering::Greater { y } else { x }
    }

    /// Restricts `value` to the inclusive range `[low, high]`.
    #[inline]
    fn clamp(&self, value: A, low: A, high: A) -> A
    where
        A: Sized,
    {
        self.min(self.max(value, low), high)
    }

    /// Tests whether `value` lies in the inclusive range `[low, high]`.
    #[inline]
    fn between(&self, value: &A, low: &A, high: &A) -> bool {
        self.greater_than_or_equal(value, low) && self.less_than_or_equal(value, high)
    }
}

impl<A: ?Sized, O: Order<A> + ?Sized> Order<A> for &O {
    #[inline]
    fn compare(&self, x: &A, y: &A) -> Ordering {
        (**self).compare(x, y)
    }
}

impl<A: ?Sized, O: Order<A> + ?Sized> Order<A> for Box<O> {
    #[inline]
    fn compare(&self, x: &A, y: &A) -> Ordering {
        (**self).compare(x, y)
    }
}

/// A boxed order, the element type of multi-key sorts.
pub type DynOrder<'a, A> = Box<dyn Order<A> + 'a>;

// =============================================================================
// FromOrd
// =============================================================================

/// The order given by a type's own `Ord` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FromOrd;

impl<A: Ord + ?Sized> Setoid<A> for FromOrd {
    #[inline]
    fn equals(&self, x: &A, y: &A) -> bool {
        x.cmp(y) == Ordering::Equal
    }
}

impl<A: Ord + ?Sized> Order<A> for FromOrd {
    #[inline]
    fn compare(&self, x: &A, y: &A) -> Ordering {
        x.cmp(y)
    }
}

// =============================================================================
// OrderBy
// =============================================================================

/// An order defined by a comparison function. Equality is `compare == Equal`.
#[derive(Clone, Copy)]
pub struct OrderBy<F> {
    compare: F,
}

impl<F> OrderBy<F> {
    /// Wraps a comparison function. It must be a total order.
    pub const fn new(compare: F) -> Self {
        Self { compare }
    }
}

impl<A: ?Sized, F> Setoid<A> for OrderBy<F>
where
    F: Fn(&A, &A) -> Ordering,
{
    #[inline]
    fn equals(&self, x: &A, y: &A) -> bool {
        (self.compare)(x, y) == Ordering::Equal
    }
}

impl<A: ?Sized, F> Order<A> for OrderBy<F>
where
    F: Fn(&A, &A) -> Ordering,
{
    #[inline]
    fn compare(&self, x: &A, y: &A) -> Ordering {
        (self.compare)(x, y)
    }
}

impl<F> fmt::Debug for OrderBy<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("OrderBy(<function>)")
    }
}

// =============================================================================
// OrderOn
// =============================================================================

/// Orders values by a projected key (the contravariant map of an order).
///
/// A key that borrows from the value, such as a `&str` field, needs a named
/// `fn` with an explicit lifetime: closure signatures cannot tie the output
/// lifetime to the input.
pub struct OrderOn<O, F, K> {
    order: O,
    project: F,
    key: PhantomData<fn() -> K>,
}

impl<O, F, K> OrderOn<O, F, K> {
    /// Builds an order that compares `project(x)` with `project(y)`.
    pub const fn new(order: O, project: F) -> Self {
        Self {
            order,
            project,
            key: PhantomData,
        }
    }
}

impl<A: ?Sized, O, F, K> Setoid<A> for OrderOn<O, F, K>
where
    O: Order<K>,
    F: Fn(&A) -> K,
{
    #[inline]
    fn equals(&self, x: &A, y: &A) -> bool {
        self.order.equals(&(self.project)(x), &(self.project)(y))
    }
}

impl<A: ?Sized, O, F, K> Order<A> for OrderOn<O, F, K>
where
    O: Order<K>,
    F: Fn(&A) -> K,
{
    #[inline]
    fn compare(&self, x: &A, y: &A) -> Ordering {
        self.order.compare(&(self.project)(x), &(self.project)(y))
    }
}

impl<O: Clone, F: Clone, K> Clone for OrderOn<O, F, K> {
    fn clone(&self) -> Self {
        Self::new(self.order.clone(), self.project.clone())
    }
}

impl<O: fmt::Debug, F, K> fmt::Debug for OrderOn<O, F, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OrderOn")
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ThenOrder
// =============================================================================

/// Lexicographic composition: compare with `first`, break ties with `second`.
#[derive(Debug, Clone, Copy)]
pub struct ThenOrder<O1, O2> {
    first: O1,
    second: O2,
}

impl<O1, O2> ThenOrder<O1, O2> {
    /// Composes two orders.
    pub const fn new(first: O1, second: O2) -> Self {
        Self { first, second }
    }
}

impl<A: ?Sized, O1: Order<A>, O2: Order<A>> Setoid<A> for ThenOrder<O1, O2> {
    #[inline]
    fn equals(&self, x: &A, y: &A) -> bool {
        self.compare(x, y) == Ordering::Equal
    }
}

impl<A: ?Sized, O1: Order<A>, O2: Order<A>> Order<A> for ThenOrder<O1, O2> {
    #[inline]
    fn compare(&self, x: &A, y: &A) -> Ordering {
        self.first
            .compare(x, y)
            .then_with(|| self.second.compare(x, y))
    }
}

// =============================================================================
// Reversed
// =============================================================================

/// The dual of an order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<O>(pub O);

impl<A: ?Sized, O: Order<A>> Setoid<A> for Reversed<O> {
    #[inline]
    fn equals(&self, x: &A, y: &A) -> bool {
        self.0.equals(x, y)
    }
}

impl<A: ?Sized, O: Order<A>> Order<A> for Reversed<O> {
    #[inline]
    fn compare(&self, x: &A, y: &A) -> Ordering {
        self.0.compare(y, x)
    }
}

// =============================================================================
// OrderSemigroup
// =============================================================================

/// The semigroup of orders under [`ThenOrder`] composition.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fpstd::typeclass::{DynOrder, FromOrd, Order, OrderOn, OrderSemigroup, Semigroup};
///
/// let by_length: DynOrder<'_, &str> = Box::new(OrderOn::new(FromOrd, |s: &&str| s.len()));
/// let alphabetical: DynOrder<'_, &str> = Box::new(FromOrd);
/// let combined = OrderSemigroup.concat(by_length, alphabetical);
///
/// assert_eq!(combined.compare(&"b", &"a"), Ordering::Greater);
/// assert_eq!(combined.compare(&"b", &"aa"), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderSemigroup;

impl<'a, A: ?Sized + 'a> Semigroup<DynOrder<'a, A>> for OrderSemigroup {
    fn concat(&self, x: DynOrder<'a, A>, y: DynOrder<'a, A>) -> DynOrder<'a, A> {
        Box::new(ThenOrder::new(x, y))
    }
}
