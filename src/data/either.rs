//! Either type - a value that is one of two types.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. It is right-biased: `Functor`,
//! `Applicative`, `Monad`, `Foldable` and `Traversable` act on the `Right`
//! value and pass a `Left` through unchanged, so `Left` conventionally
//! carries a failure or an alternate result.
//!
//! # Examples
//!
//! ```rust
//! use fpstd::data::either::Either;
//! use fpstd::typeclass::Monad;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21").flat_map(|n| Either::Right(n * 2));
//! assert_eq!(doubled, Either::Right(42));
//! assert!(parse("x").is_left());
//!
//! let message = parse("7").fold(|error| error, |n| format!("got {n}"));
//! assert_eq!(message, "got 7");
//! ```

use std::fmt;

use crate::typeclass::{
    Applicative, Extend, Foldable, Functor, FunctorMut, Monad, Setoid, Traversable,
    TypeConstructor,
};

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally a failure or the alternate result.
    Left(L),
    /// The right variant, conventionally the success value.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds `Right(value)` from `Some(value)` and `Left(on_none())` from `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::data::either::Either;
    ///
    /// assert_eq!(Either::from_option(Some(1), || "missing"), Either::Right(1));
    /// assert_eq!(Either::from_option(None::<i32>, || "missing"), Either::Left("missing"));
    /// ```
    #[inline]
    pub fn from_option<F>(option: Option<R>, on_none: F) -> Self
    where
        F: FnOnce() -> L,
    {
        option.map_or_else(|| Self::Left(on_none()), Self::Right)
    }

    /// Keeps `value` on the right when it satisfies `predicate`, and moves it
    /// to the left through `on_false` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::data::either::Either;
    ///
    /// let positive = |n: i32| Either::from_predicate(n, |n| *n > 0, |n| format!("{n} <= 0"));
    /// assert_eq!(positive(3), Either::Right(3));
    /// assert_eq!(positive(-1), Either::Left("-1 <= 0".to_string()));
    /// ```
    #[inline]
    pub fn from_predicate<P, F>(value: R, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        if predicate(&value) {
            Self::Right(value)
        } else {
            Self::Left(on_false(value))
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Option<L>`, discarding a right value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a left value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts `&Either<L, R>` into `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies `function` to a left value, leaving a right value unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::data::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `function` to a right value, leaving a left value unchanged.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps both sides at once.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the `Either` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::data::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns `(Some(l), None)` for `Left(l)` and `(None, Some(r))` for `Right(r)`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or `R::default()` for a left value.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)` and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)` and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Setoid
// =============================================================================

/// Equality on `Either` from a setoid for each side. Values on different
/// sides are never equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct EitherSetoid<SL, SR> {
    left: SL,
    right: SR,
}

/// Derives equality on `Either<L, R>` from equality on `L` and on `R`.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::either::{self, Either};
/// use fpstd::typeclass::{FromEq, Setoid, SetoidBy};
///
/// let witness = either::setoid(FromEq, SetoidBy::new(|x: &i32, y: &i32| x % 10 == y % 10));
/// assert!(witness.equals(&Either::<&str, i32>::Right(3), &Either::Right(13)));
/// assert!(!witness.equals(&Either::Left("a"), &Either::Right(3)));
/// ```
pub const fn setoid<SL, SR>(left: SL, right: SR) -> EitherSetoid<SL, SR> {
    EitherSetoid { left, right }
}

impl<L, R, SL, SR> Setoid<Either<L, R>> for EitherSetoid<SL, SR>
where
    SL: Setoid<L>,
    SR: Setoid<R>,
{
    fn equals(&self, x: &Either<L, R>, y: &Either<L, R>) -> bool {
        match (x, y) {
            (Either::Left(a), Either::Left(b)) => self.left.equals(a, b),
            (Either::Right(a), Either::Right(b)) => self.right.equals(a, b),
            _ => false,
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> FunctorMut for Either<L, R> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnMut(R) -> B,
    {
        self.map_right(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnMut(&R) -> B,
    {
        self.fmap_ref(function)
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => Either::Right(function(a, b, c)),
            (Self::Left(error), _, _) | (_, Either::Left(error), _) | (_, _, Either::Left(error)) => {
                Either::Left(error)
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }
}

impl<L, R> Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(value, init),
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_right())
    }

    #[inline]
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&R) -> bool,
    {
        self.right_ref().is_some_and(predicate)
    }
}

impl<L: Clone, R> Traversable for Either<L, R> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Either<L, B>>
    where
        F: FnMut(R) -> Option<B>,
    {
        match self {
            Self::Left(value) => Some(Either::Left(value)),
            Self::Right(value) => function(value).map(Either::Right),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Either<L, B>, E>
    where
        F: FnMut(R) -> Result<B, E>,
    {
        match self {
            Self::Left(value) => Ok(Either::Left(value)),
            Self::Right(value) => function(value).map(Either::Right),
        }
    }
}

impl<L: Clone, R> Extend for Either<L, R> {
    #[inline]
    fn extend<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&Self) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(_) => Either::Right(function(self)),
        }
    }
}

static_assertions::assert_impl_all!(Either<String, i32>: Monad, Traversable, Extend, Send, Sync);
static_assertions::assert_not_impl_any!(Either<std::rc::Rc<i32>, i32>: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{FromEq, Semigroup, Sum};
    use rstest::rstest;

    type Parsed = Either<String, i32>;

    fn left(message: &str) -> Parsed {
        Either::Left(message.to_string())
    }

    #[rstest]
    #[case(Either::Right(2), Either::Right(3), Either::Right(5))]
    #[case(left("a"), Either::Right(3), left("a"))]
    #[case(Either::Right(2), left("b"), left("b"))]
    #[case(left("a"), left("b"), left("a"))]
    fn map2_keeps_first_left(#[case] x: Parsed, #[case] y: Parsed, #[case] expected: Parsed) {
        assert_eq!(x.map2(y, |a, b| a + b), expected);
    }

    #[rstest]
    fn map3_reports_earliest_left() {
        let result = Parsed::Right(1).map3(left("second"), left("third"), |a, b, c| a + b + c);
        assert_eq!(result, left("second"));
    }

    #[rstest]
    fn flat_map_short_circuits() {
        let mut called = false;
        let result = left("stop").flat_map(|n| {
            called = true;
            Parsed::Right(n)
        });
        assert_eq!(result, left("stop"));
        assert!(!called);
    }

    #[rstest]
    fn fmap_ref_clones_left_only() {
        let value = left("kept");
        assert_eq!(value.fmap_ref(|n| n + 1), left("kept"));
        assert_eq!(Parsed::Right(1).fmap_ref(|n| n + 1), Parsed::Right(2));
    }

    #[rstest]
    fn foldable_ignores_left() {
        assert_eq!(Parsed::Right(4).fold_map(&Sum, |n| n), 4);
        assert_eq!(left("x").fold_left(10, |accumulator, n| accumulator + n), 10);
        assert_eq!(left("x").length(), 0);
    }

    #[rstest]
    fn traverse_option_over_either() {
        assert_eq!(Parsed::Right(4).traverse_option(|n| (n > 0).then_some(n)), Some(Parsed::Right(4)));
        assert_eq!(Parsed::Right(-4).traverse_option(|n| (n > 0).then_some(n)), None);
        assert_eq!(left("x").traverse_option(|n| Some(n)), Some(left("x")));
    }

    #[rstest]
    fn extend_sees_whole_value() {
        let describe = |value: &Parsed| format!("{value:?}");
        assert_eq!(Parsed::Right(1).extend(describe), Either::Right("Right(1)".to_string()));
        assert_eq!(left("e").extend(describe), Either::Left("e".to_string()));
    }

    #[rstest]
    fn setoid_compares_same_side_only() {
        let witness = setoid(FromEq, FromEq);
        assert!(witness.equals(&Parsed::Right(1), &Parsed::Right(1)));
        assert!(witness.equals(&left("a"), &left("a")));
        assert!(!witness.equals(&left("1"), &Parsed::Right(1)));
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Parsed = ok.into();
        assert_eq!(either, Either::Right(42));
        let back: Result<i32, String> = either.into();
        assert_eq!(back, Ok(42));
    }

    #[rstest]
    fn question_mark_through_result() {
        fn add(x: Parsed, y: Parsed) -> Result<i32, String> {
            Ok(Result::from(x)? + Result::from(y)?)
        }
        assert_eq!(add(Either::Right(1), Either::Right(2)), Ok(3));
        assert_eq!(add(left("bad"), Either::Right(2)), Err("bad".to_string()));
    }

    #[rstest]
    fn derived_ord_puts_left_first() {
        assert!(Parsed::Left("z".to_string()) < Parsed::Right(0));
        let keep_last = crate::typeclass::Last;
        assert_eq!(keep_last.concat(Parsed::Right(1), left("x")), left("x"));
    }
}
