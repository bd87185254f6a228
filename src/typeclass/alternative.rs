//! Plus and Alternative - choice and failure on type constructors.
//!
//! - [`Plus`]: an associative `alt` with a `zero` identity
//! - [`Alternative`]: an applicative that is also a `Plus`, adding `guard`,
//!   `optional` and `choice`
//! - [`AlternativeVec`]: the same operations for `Vec`, whose applicative
//!   lives in [`ApplicativeVec`](super::ApplicativeVec)
//!
//! For `Option`, `alt` keeps the first `Some`. For `Vec`, `alt` concatenates,
//! which models non-deterministic choice.
//!
//! # Laws
//!
//! ```text
//! zero().alt(x) == x                           (left identity)
//! x.alt(zero()) == x                           (right identity)
//! x.alt(y).alt(z) == x.alt(y.alt(z))           (associativity)
//! x.alt(y).fmap(f) == x.fmap(f).alt(y.fmap(f)) (distributivity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::{Alternative, Functor, Plus};
//!
//! let first: Option<i32> = None;
//! assert_eq!(first.alt(Some(42)), Some(42));
//!
//! fn filter_positive(n: i32) -> Option<i32> {
//!     <Option<()>>::guard(n > 0).fmap(move |()| n)
//! }
//! assert_eq!(filter_positive(5), Some(5));
//! assert_eq!(filter_positive(-3), None);
//! ```

use super::applicative::Applicative;
use super::higher::TypeConstructor;

/// A type constructor with an associative choice and an identity for it.
pub trait Plus: TypeConstructor {
    /// The identity of `alt`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Plus;
    ///
    /// let none: Option<i32> = <Option<()>>::zero();
    /// assert_eq!(none, None);
    /// let empty: Vec<&str> = Vec::<()>::zero();
    /// assert!(empty.is_empty());
    /// ```
    fn zero<B>() -> Self::WithType<B>;

    /// Combines two values, preferring or accumulating per instance.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;
}

/// An applicative functor with a monoid structure.
pub trait Alternative: Applicative + Plus {
    /// Succeeds with `()` when `condition` holds and fails with `zero` otherwise.
    fn guard(condition: bool) -> Self::WithType<()>;

    /// Makes a computation optional: failure becomes a successful `None`.
    fn optional(self) -> Self::WithType<Option<Self::Inner>>;

    /// Combines every alternative with `alt`, starting from `zero`.
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Plus for Option<A> {
    #[inline]
    fn zero<B>() -> Option<B> {
        None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn guard(condition: bool) -> Option<()> {
        condition.then_some(())
    }

    #[inline]
    fn optional(self) -> Option<Self> {
        Some(self)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives.into_iter().find(Self::is_some).flatten()
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Plus for Vec<T> {
    #[inline]
    fn zero<B>() -> Vec<B> {
        Vec::new()
    }

    fn alt(mut self, alternative: Self) -> Self {
        self.extend(alternative);
        self
    }
}

/// `Alternative` operations for `Vec`.
pub trait AlternativeVec: Plus + Sized {
    /// The element type of the Vec.
    type VecInner;

    /// `vec![()]` if the condition holds, otherwise an empty Vec.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::AlternativeVec;
    ///
    /// assert_eq!(Vec::<()>::guard(true), vec![()]);
    /// assert!(Vec::<()>::guard(false).is_empty());
    /// ```
    #[must_use]
    fn guard(condition: bool) -> Vec<()> {
        if condition { vec![()] } else { Vec::new() }
    }

    /// Wraps each element in `Some` and appends a final `None`.
    fn optional(self) -> Vec<Option<Self::VecInner>>;

    /// Concatenates every alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::AlternativeVec;
    ///
    /// let result: Vec<i32> = Vec::choice(vec![vec![1, 2], vec![3], vec![4, 5]]);
    /// assert_eq!(result, vec![1, 2, 3, 4, 5]);
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>;
}

impl<T> AlternativeVec for Vec<T> {
    type VecInner = T;

    fn optional(self) -> Vec<Option<T>> {
        self.into_iter()
            .map(Some)
            .chain(std::iter::once(None))
            .collect()
    }

    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Option<A> Tests
    // =========================================================================

    #[rstest]
    #[case(None, Some(2), Some(2))]
    #[case(Some(1), None, Some(1))]
    #[case(Some(1), Some(2), Some(1))]
    #[case(None, None, None)]
    fn option_alt(#[case] first: Option<i32>, #[case] second: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(first.alt(second), expected);
    }

    #[rstest]
    fn option_zero_is_identity() {
        let value = Some("x");
        assert_eq!(<Option<()>>::zero().alt(value), value);
        assert_eq!(value.alt(<Option<()>>::zero()), value);
    }

    #[rstest]
    #[case(true, Some(()))]
    #[case(false, None)]
    fn option_guard(#[case] condition: bool, #[case] expected: Option<()>) {
        assert_eq!(<Option<()>>::guard(condition), expected);
    }

    #[rstest]
    fn option_optional_never_fails() {
        assert_eq!(Some(3).optional(), Some(Some(3)));
        assert_eq!(None::<i32>.optional(), Some(None));
    }

    #[rstest]
    #[case(vec![None, Some(2), Some(3)], Some(2))]
    #[case(vec![None, None], None)]
    #[case(vec![], None)]
    fn option_choice(#[case] alternatives: Vec<Option<i32>>, #[case] expected: Option<i32>) {
        assert_eq!(Option::choice(alternatives), expected);
    }

    // =========================================================================
    // Vec<T> Tests
    // =========================================================================

    #[rstest]
    #[case(vec![1, 2], vec![3], vec![1, 2, 3])]
    #[case(vec![], vec![3], vec![3])]
    #[case(vec![1], vec![], vec![1])]
    fn vec_alt_concatenates(#[case] first: Vec<i32>, #[case] second: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(first.alt(second), expected);
    }

    #[rstest]
    fn vec_optional_appends_none() {
        assert_eq!(vec![1, 2].optional(), vec![Some(1), Some(2), None]);
        assert_eq!(Vec::<i32>::new().optional(), vec![None]);
    }

    #[rstest]
    fn vec_choice_of_nothing_is_zero() {
        let result: Vec<i32> = Vec::choice(Vec::<Vec<i32>>::new());
        assert!(result.is_empty());
    }
}
