//! Foldable type class - reducing structures to summary values.
//!
//! # Laws
//!
//! For finite structures, folding with a monoid agrees in both directions:
//!
//! ```text
//! fa.fold_left(M.empty(), |b, a| M.concat(b, f(a)))
//!     == fa.fold_right(M.empty(), |a, b| M.concat(f(a), b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::{Foldable, Sum};
//!
//! let values = vec![1, 2, 3, 4, 5];
//! let total = values.clone().fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(total, 15);
//!
//! assert_eq!(values.fold_map(&Sum, |n| n * 2), 30);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds left to right: `function(function(init, a0), a1) ...`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Foldable;
    ///
    /// let digits = vec![1, 2, 3].fold_left(String::new(), |s, n| format!("{s}{n}"));
    /// assert_eq!(digits, "123");
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds right to left: `function(a0, function(a1, ... init))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Foldable;
    ///
    /// let digits = vec![1, 2, 3].fold_right(String::new(), |n, s| format!("{s}{n}"));
    /// assert_eq!(digits, "321");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a monoid and combines the results left to right.
    fn fold_map<B, M, F>(self, monoid: &M, mut function: F) -> B
    where
        M: Monoid<B>,
        F: FnMut(Self::Inner) -> B,
        Self: Sized,
    {
        self.fold_left(monoid.empty(), |accumulator, element| {
            monoid.concat(accumulator, function(element))
        })
    }

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Collects the elements into a `Vec` in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut list, element| {
            list.push(element);
            list
        })
    }

    /// Returns the first element satisfying the predicate.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if any element satisfies the predicate.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Returns `true` if every element satisfies the predicate
    /// (vacuously `true` when empty).
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }

    #[inline]
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.as_ref().is_some_and(predicate)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(element) => function(init, element),
            Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(element) => function(element, init),
            Err(_) => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_ok())
    }

    #[inline]
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.as_ref().is_ok_and(predicate)
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }

    fn find<P>(self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.into_iter().find(|element| predicate(element))
    }

    #[inline]
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }
}
