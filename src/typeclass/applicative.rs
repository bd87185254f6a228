//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `pure`: lift a plain value into the context
//! - `map2` / `map3`: combine independent values in the context
//! - `apply`: apply a function held in the context
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v                                  (identity)
//! pure(f).apply(pure(x)) == pure(f(x))                       (homomorphism)
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)                (interchange)
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))  (composition)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
//! assert_eq!(Some(1).product(Some("one")), Some((1, "one")));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// When either side of a combination has failed (in the sense of the
/// specific applicative), the result fails; when both have failed, the
/// failure of `self` wins, so left-to-right folds report the earliest one.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Applicative;
    ///
    /// let y: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, Ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the values of two applicatives.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the value of `self`, running both effects.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the value of `other`, running both effects.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies the function held in `self` to the value held in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(41)), Some(42));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Vec<A> Implementation
//
// Combining Vecs takes the cartesian product, so the element values are
// cloned. That bound lives on a separate trait to keep `Applicative` clean.
// =============================================================================

/// Applicative-like operations for `Vec`: non-deterministic computation.
///
/// Combinations enumerate every element of `self` in the outer loop and
/// every element of `other` in the inner loop.
///
/// # Examples
///
/// ```rust
/// use fpstd::typeclass::ApplicativeVec;
///
/// let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
/// assert_eq!(functions.apply(vec![1, 2]), vec![2, 3, 10, 20]);
/// ```
pub trait ApplicativeVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Lifts a pure value into a singleton Vec.
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Combines two Vecs using a binary function (cartesian product).
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner, B) -> C;

    /// Creates the cartesian product of two Vecs as tuples.
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(Self::VecInner, B)>
    where
        Self::VecInner: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies every function in this Vec to every value in `other`,
    /// functions outer and values inner.
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        Self::VecInner: FnMut(B) -> Output;
}

impl<A> ApplicativeVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        F: FnMut(A, B) -> C,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    #[inline]
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        A: FnMut(B) -> Output,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for mut function in self {
            for b in &other {
                result.push(function(b.clone()));
            }
        }
        result
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
    #[case(Some(1), Some(2), Some(3))]
    #[case(Some(1), None, None)]
    #[case(None, Some(2), None)]
    #[case(None, None, None)]
    fn option_map2_adds(
        #[case] first: Option<i32>,
        #[case] second: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(first.map2(second, |x, y| x + y), expected);
    }

    #[rstest]
    fn option_map3_all_some() {
        let result = Some(1).map3(Some(2), Some(3), |a, b, c| a + b + c);
        assert_eq!(result, Some(6));
    }

    #[rstest]
    fn option_product_left_and_right() {
        assert_eq!(Some(1).product_left(Some("x")), Some(1));
        assert_eq!(Some(1).product_right(Some("x")), Some("x"));
        assert_eq!(Some(1).product_right(None::<&str>), None);
    }

    #[rstest]
    fn option_apply_with_none_function() {
        let function: Option<fn(i32) -> i32> = None;
        assert_eq!(function.apply(Some(5)), None);
    }

    // =========================================================================
    // Result<T, E> Tests
    // =========================================================================

    #[rstest]
    fn result_map2_err_err_returns_first() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(first.map2(second, |x, y| x + y), Err("first"));
    }

    #[rstest]
    fn result_map3_reports_earliest_error() {
        let first: Result<i32, &str> = Ok(1);
        let second: Result<i32, &str> = Err("second");
        let third: Result<i32, &str> = Err("third");
        assert_eq!(first.map3(second, third, |a, b, c| a + b + c), Err("second"));
    }

    #[rstest]
    fn result_apply_with_function() {
        let function: Result<fn(i32) -> i32, &str> = Ok(|x| x * 2);
        assert_eq!(function.apply(Ok(21)), Ok(42));
    }

    // =========================================================================
    // Vec<A> Tests
    // =========================================================================

    #[rstest]
    fn vec_pure_creates_singleton() {
        assert_eq!(<Vec<()>>::pure(5), vec![5]);
    }

    #[rstest]
    fn vec_map2_all_combinations_in_order() {
        let result = vec![1, 2].map2(vec![10, 20], |a, b| a + b);
        assert_eq!(result, vec![11, 21, 12, 22]);
    }

    #[rstest]
    fn vec_map2_with_empty() {
        let result = vec![1, 2].map2(Vec::<i32>::new(), |a, b| a + b);
        assert!(result.is_empty());
    }

    #[rstest]
    fn vec_product_creates_tuples() {
        let result = vec![1, 2].product(vec!['a', 'b']);
        assert_eq!(result, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    }

    #[rstest]
    fn vec_apply_functions_outer() {
        let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 2];
        assert_eq!(functions.apply(vec![10, 20]), vec![11, 21, 20, 40]);
    }
}
