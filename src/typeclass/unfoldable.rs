//! Unfoldable - building a structure from a seed.
//!
//! `unfoldr` is the dual of `fold_right`: the step function either stops
//! with `None` or yields the next element and the next seed.
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::Unfoldable;
//!
//! let countdown: Vec<u32> = Vec::<u32>::unfoldr(3, |n| (n > 0).then(|| (n, n - 1)));
//! assert_eq!(countdown, vec![3, 2, 1]);
//! ```

use super::higher::TypeConstructor;

/// A type constructor that can be built by repeatedly applying a step function.
pub trait Unfoldable: TypeConstructor {
    /// Unfolds from `seed` until `function` returns `None`.
    ///
    /// The step function is expected to terminate; there is no iteration cap.
    fn unfoldr<A, B, F>(seed: B, function: F) -> Self::WithType<A>
    where
        F: FnMut(B) -> Option<(A, B)>;
}

impl<T> Unfoldable for Vec<T> {
    fn unfoldr<A, B, F>(seed: B, mut function: F) -> Vec<A>
    where
        F: FnMut(B) -> Option<(A, B)>,
    {
        let mut output = Vec::new();
        let mut current = seed;
        while let Some((element, next)) = function(current) {
            output.push(element);
            current = next;
        }
        output
    }
}

impl<T> Unfoldable for Option<T> {
    /// Keeps only the first step.
    fn unfoldr<A, B, F>(seed: B, mut function: F) -> Option<A>
    where
        F: FnMut(B) -> Option<(A, B)>,
    {
        function(seed).map(|(element, _)| element)
    }
}
