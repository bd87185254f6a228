//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends `Applicative` with `flat_map`, where the next computation
//! depends on the result of the previous one.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                   (left identity)
//! m.flat_map(pure) == m                                         (right identity)
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))  (associativity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|n| *n > 0)
//! }
//!
//! assert_eq!(Some("42").flat_map(parse_positive), Some(42));
//! assert_eq!(Some("-1").flat_map(parse_positive), None);
//! ```

use super::applicative::Applicative;

/// A type class for applicatives whose next step can depend on the previous
/// result.
pub trait Monad: Applicative {
    /// Applies a function returning a monadic value and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Monad;
    ///
    /// let x: Result<i32, &str> = Ok(4);
    /// assert_eq!(x.flat_map(|n| if n % 2 == 0 { Ok(n / 2) } else { Err("odd") }), Ok(2));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` following Rust's naming.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Vec<A> Implementation
//
// The bind function runs once per element, so it is FnMut and lives on a
// separate trait.
// =============================================================================

/// Monad-like operations for `Vec`.
///
/// `flat_map` collects the sub-sequences first and then copies them into a
/// single allocation sized to the total output length.
///
/// # Examples
///
/// ```rust
/// use fpstd::typeclass::MonadVec;
///
/// let numbers = vec![1, 2, 3];
/// let result = numbers.flat_map(|n| vec![n, n * 10]);
/// assert_eq!(result, vec![1, 10, 2, 20, 3, 30]);
/// ```
pub trait MonadVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Applies a function to each element and concatenates the results in order.
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>;

    /// Alias for `flat_map` following Rust's naming.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>,
    {
        self.flat_map(function)
    }

    /// For each element of `self`, includes the whole of `next`.
    fn then<B: Clone>(self, next: Vec<B>) -> Vec<B>;

    /// Concatenates a nested Vec one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::MonadVec;
    ///
    /// let nested = vec![vec![1, 2], vec![], vec![3]];
    /// let flat: Vec<i32> = nested.flatten();
    /// assert_eq!(flat, vec![1, 2, 3]);
    /// ```
    fn flatten<B>(self) -> Vec<B>
    where
        Self::VecInner: IntoIterator<Item = B>;
}

impl<A> MonadVec for Vec<A> {
    type VecInner = A;

    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        let parts: Vec<Vec<B>> = self.into_iter().map(function).collect();
        let total = parts.iter().map(Vec::len).sum();
        let mut result = Vec::with_capacity(total);
        for part in parts {
            result.extend(part);
        }
        result
    }

    #[inline]
    fn then<B: Clone>(self, next: Vec<B>) -> Vec<B> {
        let capacity = self.len().saturating_mul(next.len());
        let mut result = Vec::with_capacity(capacity);
        for _ in self {
            result.extend(next.iter().cloned());
        }
        result
    }

    fn flatten<B>(self) -> Vec<B>
    where
        A: IntoIterator<Item = B>,
    {
        self.into_iter().flat_map(IntoIterator::into_iter).collect()
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
    #[case(Some(4), Some(2))]
    #[case(Some(3), None)]
    #[case(None, None)]
    fn option_flat_map_halves_even(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        let result = input.flat_map(|n| if n % 2 == 0 { Some(n / 2) } else { None });
        assert_eq!(result, expected);
    }

    #[rstest]
    fn option_left_identity() {
        let function = |n: i32| Some(n + 1);
        assert_eq!(<Option<()>>::pure(1).flat_map(function), function(1));
    }

    // =========================================================================
    // Result<T, E> Tests
    // =========================================================================

    #[rstest]
    fn result_flat_map_err_short_circuits() {
        let x: Result<i32, &str> = Err("boom");
        let mut called = false;
        let result = x.flat_map(|n| {
            called = true;
            Ok::<i32, &str>(n)
        });
        assert_eq!(result, Err("boom"));
        assert!(!called);
    }

    #[rstest]
    fn result_then_ok() {
        let x: Result<i32, &str> = Ok(1);
        assert_eq!(x.then(Ok("next")), Ok("next"));
    }

    // =========================================================================
    // Vec<A> Tests
    // =========================================================================

    #[rstest]
    fn vec_flat_map_expands_elements() {
        let result = vec![1, 2, 3].flat_map(|n| vec![n; n as usize]);
        assert_eq!(result, vec![1, 2, 2, 3, 3, 3]);
    }

    #[rstest]
    fn vec_then_multiplies() {
        assert_eq!(vec![1, 2].then(vec!['a', 'b']), vec!['a', 'b', 'a', 'b']);
    }

    #[rstest]
    fn vec_flatten_empty() {
        let nested: Vec<Vec<i32>> = vec![];
        assert!(nested.flatten().is_empty());
    }

    #[rstest]
    fn vec_associativity() {
        let values = vec![1, 2, 3];
        let function1 = |n: i32| vec![n, n + 1];
        let function2 = |n: i32| vec![n * 10];

        let left = values.clone().flat_map(function1).flat_map(function2);
        let right = values.flat_map(|x| function1(x).flat_map(function2));
        assert_eq!(left, right);
    }
}
