//! Extend - applying a function to a whole structure at every position.
//!
//! `extend` is the dual of `flat_map`: instead of a function producing a
//! structure from one element, it takes a function consuming a structure and
//! places its result where each element was.
//!
//! For `Option`, the function sees the whole option once. For `Vec`, position
//! `i` receives the suffix starting at `i`.
//!
//! # Laws
//!
//! ```text
//! w.extend(f).extend(g) == w.extend(|w2| g(&w2.extend(f)))   (associativity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::ExtendVec;
//!
//! let sums = vec![1, 2, 3].extend_suffixes(|suffix| suffix.iter().sum::<i32>());
//! assert_eq!(sums, vec![6, 5, 3]);
//! ```

use super::functor::Functor;

/// A functor that can be extended with a function over the whole structure.
pub trait Extend: Functor {
    /// Applies `function` to the whole structure in the position of its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::Extend;
    ///
    /// assert_eq!(Some(3).extend(|value| value.map_or(0, |n| n * 2)), Some(6));
    /// assert_eq!(None::<i32>.extend(|_| 1), None);
    /// ```
    fn extend<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self) -> B;

    /// Nests the structure inside itself.
    fn duplicate(&self) -> Self::WithType<Self>
    where
        Self: Clone,
    {
        self.extend(Clone::clone)
    }
}

impl<A> Extend for Option<A> {
    #[inline]
    fn extend<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&Self) -> B,
    {
        self.as_ref().map(|_| function(self))
    }
}

/// `Extend` for `Vec`, where each position sees its suffix.
pub trait ExtendVec {
    /// The element type of the Vec.
    type VecInner;

    /// Applies `function` to every suffix, from the longest to the shortest.
    fn extend_suffixes<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&[Self::VecInner]) -> B;

    /// Every suffix, as owned vectors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpstd::typeclass::ExtendVec;
    ///
    /// assert_eq!(vec![1, 2, 3].duplicate(), vec![vec![1, 2, 3], vec![2, 3], vec![3]]);
    /// ```
    fn duplicate(&self) -> Vec<Vec<Self::VecInner>>
    where
        Self::VecInner: Clone,
    {
        self.extend_suffixes(<[Self::VecInner]>::to_vec)
    }
}

impl<T> ExtendVec for Vec<T> {
    type VecInner = T;

    fn extend_suffixes<B, F>(&self, mut function: F) -> Vec<B>
    where
        F: FnMut(&[T]) -> B,
    {
        (0..self.len()).map(|start| function(&self[start..])).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_duplicate() {
        assert_eq!(Some(1).duplicate(), Some(Some(1)));
        assert_eq!(None::<i32>.duplicate(), None);
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![3, 2, 1])]
    #[case(vec![], vec![])]
    fn vec_suffix_lengths(#[case] values: Vec<i32>, #[case] expected: Vec<usize>) {
        assert_eq!(values.extend_suffixes(<[i32]>::len), expected);
    }

    #[rstest]
    fn vec_extend_associativity_sample() {
        let values = vec![1, 2, 3, 4];
        let sum = |suffix: &[i32]| suffix.iter().sum::<i32>();
        let first = |suffix: &[i32]| suffix.first().copied().unwrap_or_default();

        let left = values.extend_suffixes(sum).extend_suffixes(first);
        let right = values.extend_suffixes(|suffix| first(&suffix.to_vec().extend_suffixes(sum)));
        assert_eq!(left, right);
    }
}
