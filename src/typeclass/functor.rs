//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::{Functor, FunctorMut};
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let numbers = vec![1, 2, 3];
//! assert_eq!(numbers.fmap_mut(|n| n * 2), vec![2, 4, 6]);
//! ```

use super::higher::TypeConstructor;

/// A type class for containers holding at most one value that can have a
/// function mapped over their contents.
///
/// Because such a container holds at most one value, the mapped function is
/// `FnOnce`. Containers with many elements implement [`FunctorMut`].
///
/// # Examples
///
/// ```rust
/// use fpstd::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.fmap(|n| n * 2), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the functor itself untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// let y: Option<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Some(5));
    /// assert_eq!(x, Some("hello".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(None::<i32>.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// Mapping with a reusable function, for containers with any number of
/// elements.
///
/// `Vec` implements only this trait; single-value containers implement both.
///
/// # Examples
///
/// ```rust
/// use fpstd::typeclass::FunctorMut;
///
/// let numbers = vec![1, 2, 3];
/// let doubled: Vec<i32> = numbers.fmap_mut(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies a mutable function to each element, preserving order.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a mutable function to references of each element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> FunctorMut for Option<A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

impl<T, E: Clone> FunctorMut for Result<T, E> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnMut(&T) -> B,
    {
        self.fmap_ref(function)
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}
