//! Setoid - equality as an explicit witness value.
//!
//! A setoid is a type together with an equivalence relation. Instead of
//! attaching equality to the type (as `PartialEq` does), a `Setoid` witness
//! is a separate value passed to the combinators that need it, so one type
//! can be compared in several ways.
//!
//! # Laws
//!
//! For all `x`, `y`, `z`:
//!
//! ```text
//! S.equals(x, x)                                      (reflexivity)
//! S.equals(x, y) == S.equals(y, x)                    (symmetry)
//! S.equals(x, y) && S.equals(y, z) => S.equals(x, z)  (transitivity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::{FromEq, Setoid, SetoidBy, SetoidOn};
//!
//! assert!(FromEq.equals(&1, &1));
//!
//! let case_insensitive = SetoidBy::new(|x: &String, y: &String| {
//!     x.eq_ignore_ascii_case(y)
//! });
//! assert!(case_insensitive.equals(&"Rust".to_string(), &"RUST".to_string()));
//!
//! let by_length = SetoidOn::new(FromEq, |s: &&str| s.len());
//! assert!(by_length.equals(&"abc", &"xyz"));
//! ```

use std::fmt;
use std::marker::PhantomData;

/// An equality witness over `A`.
pub trait Setoid<A: ?Sized> {
    /// Returns `true` if `x` and `y` are equivalent.
    fn equals(&self, x: &A, y: &A) -> bool;
}

impl<A: ?Sized, S: Setoid<A> + ?Sized> Setoid<A> for &S {
    #[inline]
    fn equals(&self, x: &A, y: &A) -> bool {
        (**self).equals(x, y)
    }
}

impl<A: ?Sized, S: Setoid<A> + ?Sized> Setoid<A> for Box<S> {
    #[inline]
    fn equals(&self, x: &A, y: &A) -> bool {
        (**self).equals(x, y)
    }
}

// =============================================================================
// FromEq
// =============================================================================

/// The setoid given by a type's own `Eq` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FromEq;

impl<A: Eq + ?Sized> Setoid<A> for FromEq {
    #[inline]
    fn equals(&self, x: &A, y: &A) -> bool {
        x == y
    }
}

// =============================================================================
// SetoidBy
// =============================================================================

/// A setoid defined by an equivalence function.
///
/// The function must be an equivalence relation for the setoid laws to hold.
#[derive(Clone, Copy)]
pub struct SetoidBy<F> {
    equals: F,
}

impl<F> SetoidBy<F> {
    /// Wraps an equivalence function.
    pub const fn new(equals: F) -> Self {
        Self { equals }
    }
}

impl<A: ?Sized, F> Setoid<A> for SetoidBy<F>
where
    F: Fn(&A, &A) -> bool,
{
    #[inline]
    fn equals(&self, x: &A, y: &A) -> bool {
        (self.equals)(x, y)
    }
}

impl<F> fmt::Debug for SetoidBy<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SetoidBy(<function>)")
    }
}

// =============================================================================
// SetoidOn
// =============================================================================

/// Compares values by a projected key using a setoid over the key
/// (the contravariant map of a setoid).
pub struct SetoidOn<S, F, K> {
    setoid: S,
    project: F,
    key: PhantomData<fn() -> K>,
}

impl<S, F, K> SetoidOn<S, F, K> {
    /// Builds a setoid that compares `project(x)` with `project(y)`.
    pub const fn new(setoid: S, project: F) -> Self {
        Self {
            setoid,
            project,
            key: PhantomData,
        }
    }
}

impl<A: ?Sized, S, F, K> Setoid<A> for SetoidOn<S, F, K>
where
    S: Setoid<K>,
    F: Fn(&A) -> K,
{
    #[inline]
    fn equals(&self, x: &A, y: &A) -> bool {
        self.setoid.equals(&(self.project)(x), &(self.project)(y))
    }
}

impl<S: Clone, F: Clone, K> Clone for SetoidOn<S, F, K> {
    fn clone(&self) -> Self {
        Self::new(self.setoid.clone(), self.project.clone())
    }
}

impl<S: fmt::Debug, F, K> fmt::Debug for SetoidOn<S, F, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SetoidOn")
            .field("setoid", &self.setoid)
            .finish_non_exhaustive()
    }
}
