//! Traversable type class - mapping with effects and collecting results.
//!
//! A `Traversable` structure can have an effectful function applied to each
//! element while the results are collected inside the effect: a `Vec<&str>`
//! parsed element by element becomes `Some(Vec<i32>)` when every parse
//! succeeds and `None` as soon as one fails.
//!
//! Without higher-kinded types a single method cannot be generic over every
//! applicative, so the trait provides specialised methods for the two
//! effects used most often. [`crate::data::array::traverse`] covers the
//! general case for slices.
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::Traversable;
//!
//! let strings = vec!["1", "2", "3"];
//! let numbers: Option<Vec<i32>> = strings.traverse_option(|s| s.parse().ok());
//! assert_eq!(numbers, Some(vec![1, 2, 3]));
//!
//! let with_error = vec!["1", "not a number", "3"];
//! let result: Option<Vec<i32>> = with_error.traverse_option(|s| s.parse().ok());
//! assert_eq!(result, None);
//! ```

use super::foldable::Foldable;
use super::functor::FunctorMut;
use super::higher::TypeConstructor;

/// A type class for structures that can be traversed with effects.
///
/// # Laws
///
/// ## Identity
///
/// ```text
/// fa.traverse_option(Some) == Some(fa)
/// ```
///
/// ## Naturality
///
/// For any natural transformation `t` from `Option` to another effect:
///
/// ```text
/// t(fa.traverse_option(f)) == fa.traverse_<effect>(t . f)
/// ```
pub trait Traversable: FunctorMut + Foldable {
    /// Applies a function returning `Option` to each element.
    ///
    /// Returns `Some` with the collected values if every application
    /// returns `Some`, and `None` otherwise.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies a function returning `Result` to each element.
    ///
    /// Returns `Ok` with the collected values if every application returns
    /// `Ok`, and the first `Err` encountered otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Traversable;
    ///
    /// fn validate_positive(number: i32) -> Result<i32, String> {
    ///     if number > 0 { Ok(number) } else { Err(format!("{number} is not positive")) }
    /// }
    ///
    /// assert_eq!(vec![1, 2, 3].traverse_result(validate_positive), Ok(vec![1, 2, 3]));
    /// assert_eq!(
    ///     vec![1, -2, -3].traverse_result(validate_positive),
    ///     Err("-2 is not positive".to_string())
    /// );
    /// ```
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns a structure of `Option`s inside out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Traversable;
    ///
    /// assert_eq!(vec![Some(1), Some(2)].sequence_option(), Some(vec![1, 2]));
    /// assert_eq!(vec![Some(1), None].sequence_option(), None);
    /// ```
    fn sequence_option<B>(self) -> Option<Self::WithType<B>>
    where
        Self: Sized + TypeConstructor<Inner = Option<B>>,
    {
        self.traverse_option(|element| element)
    }

    /// Turns a structure of `Result`s inside out, keeping the first error.
    fn sequence_result<B, E>(self) -> Result<Self::WithType<B>, E>
    where
        Self: Sized + TypeConstructor<Inner = Result<B, E>>,
    {
        self.traverse_result(|element| element)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Traversable for Result<T, E> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Result<B, E>>
    where
        F: FnMut(T) -> Option<B>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Some(Err(error)),
        }
    }

    fn traverse_result<B, E2, F>(self, mut function: F) -> Result<Result<B, E>, E2>
    where
        F: FnMut(T) -> Result<B, E2>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Ok(Err(error)),
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Traversable for Vec<T> {
    fn traverse_option<B, F>(self, function: F) -> Option<Vec<B>>
    where
        F: FnMut(T) -> Option<B>,
    {
        self.into_iter().map(function).collect()
    }

    fn traverse_result<B, E, F>(self, function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        self.into_iter().map(function).collect()
    }
}
