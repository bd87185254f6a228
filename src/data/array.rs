//! Free functions over sequences.
//!
//! Every function borrows its input as a slice and returns a freshly
//! allocated result, so the caller's sequence is never modified. Partial
//! operations (lookups, index edits, searches) return `Option` instead of
//! panicking.
//!
//! Witnesses for sequences are built from element witnesses:
//! [`setoid`] compares element-wise, [`order`] compares lexicographically
//! with an explicit length tie-break, and [`monoid`] concatenates.
//!
//! # Examples
//!
//! ```rust
//! use fpstd::data::array;
//! use fpstd::typeclass::{FromEq, FromOrd, Order};
//!
//! let values = [1, 2, 2, 3, 1];
//! assert_eq!(array::uniq(&FromEq, &values).into_owned(), vec![1, 2, 3]);
//! assert_eq!(array::rotate(2, &[1, 2, 3, 4, 5]).into_owned(), vec![4, 5, 1, 2, 3]);
//! assert_eq!(array::index(-1, &values), None);
//!
//! let ordering = array::order(FromOrd);
//! assert!(ordering.less_than(&[1, 2][..], &[1, 2, 3][..]));
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::either::Either;
use crate::typeclass::{
    Applicative, ApplicativeVec, DynOrder, Monoid, Order, OrderSemigroup, Semigroup,
    Setoid, TypeConstructor, Unfoldable,
};

// =============================================================================
// Witnesses
// =============================================================================

/// Element-wise equality on sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArraySetoid<S>(S);

/// Derives equality on sequences from equality on elements.
///
/// Two sequences are equal iff they have the same length and every pair of
/// corresponding elements is equal under `element`.
pub const fn setoid<S>(element: S) -> ArraySetoid<S> {
    ArraySetoid(element)
}

impl<A, S: Setoid<A>> Setoid<[A]> for ArraySetoid<S> {
    fn equals(&self, x: &[A], y: &[A]) -> bool {
        x.len() == y.len() && x.iter().zip(y).all(|(a, b)| self.0.equals(a, b))
    }
}

impl<A, S: Setoid<A>> Setoid<Vec<A>> for ArraySetoid<S> {
    #[inline]
    fn equals(&self, x: &Vec<A>, y: &Vec<A>) -> bool {
        Setoid::<[A]>::equals(self, x, y)
    }
}

/// Lexicographic order on sequences with a length tie-break.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayOrder<O>(O);

/// Derives an order on sequences from an order on elements.
///
/// Elements are compared pairwise in index order and the first non-equal
/// comparison decides. When the shorter sequence is exhausted without a
/// difference, the lengths decide: the shorter sequence sorts first.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fpstd::data::array;
/// use fpstd::typeclass::{FromOrd, Order};
///
/// let witness = array::order(FromOrd);
/// assert_eq!(witness.compare(&[1, 2][..], &[1, 2, 3][..]), Ordering::Less);
/// assert_eq!(witness.compare(&[1, 3][..], &[1, 2, 3][..]), Ordering::Greater);
/// ```
pub const fn order<O>(element: O) -> ArrayOrder<O> {
    ArrayOrder(element)
}

impl<A, O: Order<A>> Setoid<[A]> for ArrayOrder<O> {
    fn equals(&self, x: &[A], y: &[A]) -> bool {
        setoid(&self.0).equals(x, y)
    }
}

impl<A, O: Order<A>> Order<[A]> for ArrayOrder<O> {
    fn compare(&self, x: &[A], y: &[A]) -> Ordering {
        x.iter()
            .zip(y)
            .map(|(a, b)| self.0.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len()))
    }
}

impl<A, O: Order<A>> Setoid<Vec<A>> for ArrayOrder<O> {
    #[inline]
    fn equals(&self, x: &Vec<A>, y: &Vec<A>) -> bool {
        Setoid::<[A]>::equals(self, x, y)
    }
}

impl<A, O: Order<A>> Order<Vec<A>> for ArrayOrder<O> {
    #[inline]
    fn compare(&self, x: &Vec<A>, y: &Vec<A>) -> Ordering {
        Order::<[A]>::compare(self, x, y)
    }
}

/// Concatenation, with the empty sequence as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArrayMonoid;

/// The concatenation monoid on sequences.
pub const fn monoid() -> ArrayMonoid {
    ArrayMonoid
}

impl<A> Semigroup<Vec<A>> for ArrayMonoid {
    #[inline]
    fn concat(&self, mut x: Vec<A>, y: Vec<A>) -> Vec<A> {
        x.extend(y);
        x
    }
}

impl<A> Monoid<Vec<A>> for ArrayMonoid {
    #[inline]
    fn empty(&self) -> Vec<A> {
        Vec::new()
    }
}

// =============================================================================
// Structural Transformations
// =============================================================================

/// `result[i] = function(&values[i])`.
pub fn map<A, B, F>(values: &[A], function: F) -> Vec<B>
where
    F: FnMut(&A) -> B,
{
    values.iter().map(function).collect()
}

/// The single-element sequence `[value]`.
#[inline]
pub fn of<A>(value: A) -> Vec<A> {
    vec![value]
}

/// Maps every element to a sequence and concatenates the results in order.
///
/// The sub-sequences are collected first so the output is allocated once,
/// sized to the total length.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
///
/// assert_eq!(array::chain(&[1_usize, 2, 3], |n| vec![*n; *n]), vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn chain<A, B, F>(values: &[A], function: F) -> Vec<B>
where
    F: FnMut(&A) -> Vec<B>,
{
    let parts: Vec<Vec<B>> = values.iter().map(function).collect();
    let mut output = Vec::with_capacity(parts.iter().map(Vec::len).sum());
    for part in parts {
        output.extend(part);
    }
    output
}

/// Applies every function to every value, functions in the outer loop.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
///
/// let functions: [fn(&i32) -> i32; 2] = [|n| n + 1, |n| n * 10];
/// assert_eq!(array::ap(&functions, &[1, 2]), vec![2, 3, 10, 20]);
/// ```
pub fn ap<A, B, F>(functions: &[F], values: &[A]) -> Vec<B>
where
    F: Fn(&A) -> B,
{
    chain(functions, |function| map(values, function))
}

/// Concatenates nested sequences into one allocation sized to the total.
pub fn flatten<A: Clone>(nested: &[Vec<A>]) -> Vec<A> {
    let mut output = Vec::with_capacity(nested.iter().map(Vec::len).sum());
    for inner in nested {
        output.extend_from_slice(inner);
    }
    output
}

/// `result[i] = function(&values[i..])`.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
///
/// let sums = array::extend(&[1, 2, 3], |suffix| suffix.iter().sum::<i32>());
/// assert_eq!(sums, vec![6, 5, 3]);
/// ```
pub fn extend<A, B, F>(values: &[A], mut function: F) -> Vec<B>
where
    F: FnMut(&[A]) -> B,
{
    (0..values.len()).map(|start| function(&values[start..])).collect()
}

/// Concatenation of two sequences.
pub fn alt<A: Clone>(first: &[A], second: &[A]) -> Vec<A> {
    [first, second].concat()
}

/// The empty sequence.
#[inline]
pub const fn zero<A>() -> Vec<A> {
    Vec::new()
}

// =============================================================================
// Folding and Scanning
// =============================================================================

/// Left fold: `accumulator = function(accumulator, &values[i])` for increasing `i`.
pub fn reduce<A, B, F>(values: &[A], initial: B, function: F) -> B
where
    F: FnMut(B, &A) -> B,
{
    values.iter().fold(initial, function)
}

/// Every intermediate state of a left fold, starting with `initial`.
///
/// The output has `values.len() + 1` elements.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
///
/// assert_eq!(array::scan_left(&[1, 2, 3], 10, |b, a| b - a), vec![10, 9, 7, 4]);
/// ```
pub fn scan_left<A, B, F>(values: &[A], initial: B, mut function: F) -> Vec<B>
where
    F: FnMut(&B, &A) -> B,
{
    let mut output = Vec::with_capacity(values.len() + 1);
    output.push(initial);
    for value in values {
        let next = output.last().map(|previous| function(previous, value));
        output.extend(next);
    }
    output
}

/// Every intermediate state of a right fold, ending with `initial`.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
///
/// assert_eq!(array::scan_right(&[1, 2, 3], 10, |a, b| b - a), vec![4, 5, 7, 10]);
/// ```
pub fn scan_right<A, B, F>(values: &[A], initial: B, mut function: F) -> Vec<B>
where
    F: FnMut(&A, &B) -> B,
{
    let mut output = Vec::with_capacity(values.len() + 1);
    output.push(initial);
    for value in values.iter().rev() {
        let next = output.last().map(|previous| function(value, previous));
        output.extend(next);
    }
    output.reverse();
    output
}

/// Builds a sequence from `seed` until `step` returns `None`.
///
/// There is no iteration cap: `step` must eventually return `None`.
pub fn unfoldr<A, B, F>(seed: B, step: F) -> Vec<A>
where
    F: FnMut(B) -> Option<(A, B)>,
{
    <Vec<A> as Unfoldable>::unfoldr(seed, step)
}

/// Maps every element into an applicative and collects the results inside it.
///
/// Effects are combined in input order, so for `Option`, `Result` and
/// `Either` the first failure in the sequence is the one reported.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
///
/// let parsed: Option<Vec<i32>> = array::traverse(&["1", "2"], |s| s.parse().ok());
/// assert_eq!(parsed, Some(vec![1, 2]));
///
/// let failed: Result<Vec<i32>, String> =
///     array::traverse(&["1", "x", "y"], |s| s.parse().map_err(|_| format!("bad {s}")));
/// assert_eq!(failed, Err("bad x".to_string()));
/// ```
pub fn traverse<A, B, FB, FV, G>(values: &[A], mut function: G) -> FV
where
    FV: Applicative<Inner = Vec<B>>,
    FV: TypeConstructor<WithType<B> = FB>,
    FV: TypeConstructor<WithType<Vec<B>> = FV>,
    G: FnMut(&A) -> FB,
{
    values.iter().fold(FV::pure::<Vec<B>>(Vec::new()), |accumulator, value| {
        accumulator.map2::<B, Vec<B>, _>(function(value), |mut collected, element| {
            collected.push(element);
            collected
        })
    })
}

/// [`traverse`] into the list applicative: every way of picking one element
/// from each `function(value)`, earlier positions varying slowest.
///
/// An empty input yields `vec![vec![]]`; an empty choice anywhere yields `vec![]`.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
///
/// let combos = array::traverse_vec(&[1, 2], |n| vec![*n, n * 10]);
/// assert_eq!(combos, vec![vec![1, 2], vec![1, 20], vec![10, 2], vec![10, 20]]);
/// ```
pub fn traverse_vec<A, B, G>(values: &[A], mut function: G) -> Vec<Vec<B>>
where
    B: Clone,
    G: FnMut(&A) -> Vec<B>,
{
    values.iter().fold(vec![Vec::new()], |accumulator, value| {
        accumulator.map2(function(value), |mut collected, element| {
            collected.push(element);
            collected
        })
    })
}

/// Case analysis on the first element: `empty` for an empty sequence,
/// otherwise `cons(head, tail)`.
pub fn fold<A, B, F>(values: &[A], empty: B, cons: F) -> B
where
    F: FnOnce(&A, &[A]) -> B,
{
    match values {
        [] => empty,
        [head, tail @ ..] => cons(head, tail),
    }
}

/// Like [`fold`], computing the empty case lazily.
pub fn fold_l<A, B, N, F>(values: &[A], nil: N, cons: F) -> B
where
    N: FnOnce() -> B,
    F: FnOnce(&A, &[A]) -> B,
{
    match values {
        [] => nil(),
        [head, tail @ ..] => cons(head, tail),
    }
}

// =============================================================================
// Index-based Access and Editing
// =============================================================================

/// `true` for the empty sequence.
#[inline]
pub const fn is_empty<A>(values: &[A]) -> bool {
    values.is_empty()
}

/// `true` when `i` is negative or not smaller than the length.
#[inline]
pub fn is_out_of_bound<A>(i: isize, values: &[A]) -> bool {
    checked_index(i, values.len()).is_none()
}

fn checked_index(i: isize, limit: usize) -> Option<usize> {
    usize::try_from(i).ok().filter(|i| *i < limit)
}

/// The element at `i`, or `None` when `i` is out of `[0, len)`.
#[inline]
pub fn index<A>(i: isize, values: &[A]) -> Option<&A> {
    checked_index(i, values.len()).map(|i| &values[i])
}

/// `value` followed by `values`.
pub fn cons<A: Clone>(value: A, values: &[A]) -> Vec<A> {
    let mut output = Vec::with_capacity(values.len() + 1);
    output.push(value);
    output.extend_from_slice(values);
    output
}

/// `values` followed by `value`.
pub fn snoc<A: Clone>(values: &[A], value: A) -> Vec<A> {
    let mut output = Vec::with_capacity(values.len() + 1);
    output.extend_from_slice(values);
    output.push(value);
    output
}

/// The first element.
#[inline]
pub fn head<A>(values: &[A]) -> Option<&A> {
    values.first()
}

/// The last element.
#[inline]
pub fn last<A>(values: &[A]) -> Option<&A> {
    values.last()
}

/// A copy of everything after the first element.
pub fn tail<A: Clone>(values: &[A]) -> Option<Vec<A>> {
    values.split_first().map(|(_, rest)| rest.to_vec())
}

/// A copy of everything before the last element.
pub fn init<A: Clone>(values: &[A]) -> Option<Vec<A>> {
    values.split_last().map(|(_, rest)| rest.to_vec())
}

/// The first `count` elements (all of them when `count` exceeds the length).
pub fn take<A: Clone>(count: usize, values: &[A]) -> Vec<A> {
    values[..count.min(values.len())].to_vec()
}

/// Everything after the first `count` elements.
pub fn drop<A: Clone>(count: usize, values: &[A]) -> Vec<A> {
    values[count.min(values.len())..].to_vec()
}

/// A shallow copy.
#[inline]
pub fn copy<A: Clone>(values: &[A]) -> Vec<A> {
    values.to_vec()
}

fn unsafe_insert_at<A: Clone>(i: usize, value: A, values: &[A]) -> Vec<A> {
    debug_assert!(i <= values.len());
    let mut output = Vec::with_capacity(values.len() + 1);
    output.extend_from_slice(&values[..i]);
    output.push(value);
    output.extend_from_slice(&values[i..]);
    output
}

fn unsafe_update_at<A: Clone>(i: usize, value: A, values: &[A]) -> Vec<A> {
    debug_assert!(i < values.len());
    let mut output = values.to_vec();
    output[i] = value;
    output
}

fn unsafe_delete_at<A: Clone>(i: usize, values: &[A]) -> Vec<A> {
    debug_assert!(i < values.len());
    let mut output = Vec::with_capacity(values.len() - 1);
    output.extend_from_slice(&values[..i]);
    output.extend_from_slice(&values[i + 1..]);
    output
}

/// Inserts `value` before position `i`; `i == len` appends.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
///
/// assert_eq!(array::insert_at(3, 9, &[1, 2, 3]), Some(vec![1, 2, 3, 9]));
/// assert_eq!(array::insert_at(5, 9, &[1, 2, 3]), None);
/// ```
pub fn insert_at<A: Clone>(i: isize, value: A, values: &[A]) -> Option<Vec<A>> {
    checked_index(i, values.len() + 1).map(|i| unsafe_insert_at(i, value, values))
}

/// Replaces the element at `i`.
pub fn update_at<A: Clone>(i: isize, value: A, values: &[A]) -> Option<Vec<A>> {
    checked_index(i, values.len()).map(|i| unsafe_update_at(i, value, values))
}

/// Removes the element at `i`.
pub fn delete_at<A: Clone>(i: isize, values: &[A]) -> Option<Vec<A>> {
    checked_index(i, values.len()).map(|i| unsafe_delete_at(i, values))
}

/// Replaces the element at `i` with `function` applied to it.
pub fn modify_at<A, F>(i: isize, values: &[A], function: F) -> Option<Vec<A>>
where
    A: Clone,
    F: FnOnce(&A) -> A,
{
    checked_index(i, values.len()).map(|i| unsafe_update_at(i, function(&values[i]), values))
}

// =============================================================================
// Predicate-driven Partitioning
// =============================================================================

/// The two halves of a sequence split by [`span`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span<A> {
    /// The longest prefix whose elements all satisfy the predicate.
    pub init: Vec<A>,
    /// Everything after that prefix.
    pub rest: Vec<A>,
}

/// The two outputs of [`partition_map`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Separated<L, R> {
    /// Every `Left` payload, in input order.
    pub left: Vec<L>,
    /// Every `Right` payload, in input order.
    pub right: Vec<R>,
}

fn span_index<A, P>(values: &[A], mut predicate: P) -> usize
where
    P: FnMut(&A) -> bool,
{
    values
        .iter()
        .position(|value| !predicate(value))
        .unwrap_or(values.len())
}

/// Splits off the longest prefix satisfying `predicate`.
///
/// The predicate is evaluated left to right and not called again after the
/// first element that fails it.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array::{self, Span};
///
/// let split = array::span(&[1, 2, 3, 4, 1], |n| *n < 3);
/// assert_eq!(split, Span { init: vec![1, 2], rest: vec![3, 4, 1] });
/// ```
pub fn span<A: Clone, P>(values: &[A], predicate: P) -> Span<A>
where
    P: FnMut(&A) -> bool,
{
    let (init, rest) = values.split_at(span_index(values, predicate));
    Span {
        init: init.to_vec(),
        rest: rest.to_vec(),
    }
}

/// The prefix [`span`] would return as `init`.
pub fn take_while<A: Clone, P>(values: &[A], predicate: P) -> Vec<A>
where
    P: FnMut(&A) -> bool,
{
    values[..span_index(values, predicate)].to_vec()
}

/// The remainder [`span`] would return as `rest`.
pub fn drop_while<A: Clone, P>(values: &[A], predicate: P) -> Vec<A>
where
    P: FnMut(&A) -> bool,
{
    values[span_index(values, predicate)..].to_vec()
}

/// Position of the first element satisfying `predicate`.
pub fn find_index<A, P>(values: &[A], predicate: P) -> Option<usize>
where
    P: FnMut(&A) -> bool,
{
    values.iter().position(predicate)
}

/// The first element satisfying `predicate`.
pub fn find_first<A, P>(values: &[A], mut predicate: P) -> Option<&A>
where
    P: FnMut(&A) -> bool,
{
    values.iter().find(|value| predicate(value))
}

/// The last element satisfying `predicate`, scanning from the right.
pub fn find_last<A, P>(values: &[A], mut predicate: P) -> Option<&A>
where
    P: FnMut(&A) -> bool,
{
    values.iter().rev().find(|value| predicate(value))
}

/// Routes every element to the left or right output by `function`.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
/// use fpstd::data::either::Either;
///
/// let parts = array::partition_map(&[1, 2, 3, 4], |n| {
///     if n % 2 == 0 { Either::Right(*n) } else { Either::Left(n.to_string()) }
/// });
/// assert_eq!(parts.left, vec!["1", "3"]);
/// assert_eq!(parts.right, vec![2, 4]);
/// ```
pub fn partition_map<A, L, R, F>(values: &[A], mut function: F) -> Separated<L, R>
where
    F: FnMut(&A) -> Either<L, R>,
{
    let mut separated = Separated {
        left: Vec::new(),
        right: Vec::new(),
    };
    for value in values {
        match function(value) {
            Either::Left(left) => separated.left.push(left),
            Either::Right(right) => separated.right.push(right),
        }
    }
    separated
}

/// The elements satisfying `predicate`, in order.
pub fn filter<A: Clone, P>(values: &[A], mut predicate: P) -> Vec<A>
where
    P: FnMut(&A) -> bool,
{
    values.iter().filter(|value| predicate(value)).cloned().collect()
}

/// Keeps the elements `refinement` narrows to a `B`, as copies of that `B`.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
///
/// enum Shape { Circle(f64), Square(u32) }
///
/// let shapes = [Shape::Square(2), Shape::Circle(1.0), Shape::Square(5)];
/// let sides = array::refine(&shapes, |shape| match shape {
///     Shape::Square(side) => Some(side),
///     Shape::Circle(_) => None,
/// });
/// assert_eq!(sides, vec![2, 5]);
/// ```
pub fn refine<'a, A, B, F>(values: &'a [A], refinement: F) -> Vec<B>
where
    B: Clone + 'a,
    F: FnMut(&'a A) -> Option<&'a B>,
{
    values.iter().filter_map(refinement).cloned().collect()
}

/// Keeps the `Some` results of `function`, unwrapped, in order.
pub fn map_option<A, B, F>(values: &[A], function: F) -> Vec<B>
where
    F: FnMut(&A) -> Option<B>,
{
    values.iter().filter_map(function).collect()
}

/// The `Some` payloads, in order.
pub fn cat_options<A: Clone>(values: &[Option<A>]) -> Vec<A> {
    values.iter().flatten().cloned().collect()
}

/// The `Right` payloads, in order.
pub fn rights<L, R: Clone>(values: &[Either<L, R>]) -> Vec<R> {
    values.iter().filter_map(Either::right_ref).cloned().collect()
}

/// The `Left` payloads, in order.
pub fn lefts<L: Clone, R>(values: &[Either<L, R>]) -> Vec<L> {
    values.iter().filter_map(Either::left_ref).cloned().collect()
}

/// `true` if some element equals `value` under `setoid`.
pub fn member<A, S>(setoid: &S, values: &[A], value: &A) -> bool
where
    S: Setoid<A> + ?Sized,
{
    values.iter().any(|element| setoid.equals(element, value))
}

// =============================================================================
// Reordering
// =============================================================================

/// A reversed copy.
pub fn reverse<A: Clone>(values: &[A]) -> Vec<A> {
    values.iter().rev().cloned().collect()
}

/// A stably sorted copy of `values`.
pub fn sort<A, O>(order: &O, values: &[A]) -> Vec<A>
where
    A: Clone,
    O: Order<A> + ?Sized,
{
    let mut output = values.to_vec();
    output.sort_by(|x, y| order.compare(x, y));
    output
}

/// A sorting function from one or more orders, applied left to right: each
/// order breaks the ties of the ones before it.
///
/// Returns `None` when `orders` is empty.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
/// use fpstd::typeclass::{DynOrder, FromOrd, OrderOn};
///
/// type Person = (&'static str, u32);
///
/// fn name(person: &Person) -> &'static str {
///     person.0
/// }
///
/// let by_age: DynOrder<'_, Person> = Box::new(OrderOn::new(FromOrd, |p: &Person| p.1));
/// let by_name: DynOrder<'_, Person> = Box::new(OrderOn::new(FromOrd, name));
///
/// let sort = array::sort_by(vec![by_age, by_name]).expect("two orders");
/// let people = [("b", 30), ("c", 20), ("a", 30)];
/// assert_eq!(sort(&people), vec![("c", 20), ("a", 30), ("b", 30)]);
///
/// assert!(array::sort_by::<i32>(vec![]).is_none());
/// ```
pub fn sort_by<'a, A: Clone + 'a>(orders: Vec<DynOrder<'a, A>>) -> Option<impl Fn(&[A]) -> Vec<A>> {
    let mut orders = orders.into_iter();
    orders.next().map(|head| sort_by1(head, orders.collect()))
}

/// [`sort_by`] with at least one order, so it cannot fail.
pub fn sort_by1<'a, A: Clone + 'a>(head: DynOrder<'a, A>, tail: Vec<DynOrder<'a, A>>) -> impl Fn(&[A]) -> Vec<A> {
    let combined = tail
        .into_iter()
        .fold(head, |accumulator, next| OrderSemigroup.concat(accumulator, next));
    move |values: &[A]| sort(&combined, values)
}

/// Rotates right by `steps`; negative `steps` rotates left.
///
/// Borrows the input when the rotation is the identity (`steps` is zero or
/// a multiple of the length, or the sequence has at most one element).
/// Amounts larger than the length wrap around.
pub fn rotate<A: Clone>(steps: isize, values: &[A]) -> Cow<'_, [A]> {
    let length = values.len();
    if length <= 1 {
        return Cow::Borrowed(values);
    }
    let magnitude = steps.unsigned_abs() % length;
    let right = if steps >= 0 {
        magnitude
    } else {
        (length - magnitude) % length
    };
    if right == 0 {
        return Cow::Borrowed(values);
    }
    let (front, back) = values.split_at(length - right);
    Cow::Owned([back, front].concat())
}

/// Keeps the first element of each equivalence class, preserving order.
///
/// Borrows the input when there are no duplicates.
pub fn uniq<'a, A, S>(setoid: &S, values: &'a [A]) -> Cow<'a, [A]>
where
    A: Clone,
    S: Setoid<A> + ?Sized,
{
    let mut kept: Vec<&A> = Vec::with_capacity(values.len());
    for value in values {
        if !kept.iter().any(|seen| setoid.equals(seen, value)) {
            kept.push(value);
        }
    }
    if kept.len() == values.len() {
        Cow::Borrowed(values)
    } else {
        Cow::Owned(kept.into_iter().cloned().collect())
    }
}

// =============================================================================
// Pairing
// =============================================================================

/// Combines elements pairwise up to the shorter length.
pub fn zip_with<A, B, C, F>(first: &[A], second: &[B], mut function: F) -> Vec<C>
where
    F: FnMut(&A, &B) -> C,
{
    first
        .iter()
        .zip(second)
        .map(|(a, b)| function(a, b))
        .collect()
}

/// Pairs elements up to the shorter length.
///
/// # Examples
///
/// ```rust
/// use fpstd::data::array;
///
/// assert_eq!(array::zip(&[1, 2, 3], &['a', 'b']), vec![(1, 'a'), (2, 'b')]);
/// ```
pub fn zip<A: Clone, B: Clone>(first: &[A], second: &[B]) -> Vec<(A, B)> {
    zip_with(first, second, |a, b| (a.clone(), b.clone()))
}

// =============================================================================
// Parallel
// =============================================================================

/// [`map`] evaluated on the rayon thread pool. Output order matches the input.
#[cfg(feature = "rayon")]
pub fn par_map<A, B, F>(values: &[A], function: F) -> Vec<B>
where
    A: Sync,
    B: Send,
    F: Fn(&A) -> B + Sync + Send,
{
    values.par_iter().map(function).collect()
}
