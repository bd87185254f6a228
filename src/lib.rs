//! # fpstd
//!
//! A functional programming standard-library extension for Rust: type
//! classes, explicit equality/order/monoid witnesses, and instances for
//! sequences, `Option` and `Either`.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Traversable,
//!   Plus, Alternative, Extend, Unfoldable
//! - **Witnesses**: Setoid, Order, Semigroup, Monoid as values passed
//!   explicitly to the combinators that need them
//! - **Data**: `array` (free functions over slices), `option`, `either`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and witnesses
//! - `data`: The `array`, `option` and `either` modules
//! - `serde`: `Serialize`/`Deserialize` for `Either`, `Span`, `Separated`
//! - `rayon`: Parallel `array::par_map`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpstd::data::array;
//! use fpstd::typeclass::FromOrd;
//!
//! let ordered = array::sort(&FromOrd, &[3, 1, 2]);
//! assert_eq!(ordered, vec![1, 2, 3]);
//!
//! let pairs = array::chain(&[1, 2], |n| vec![*n, n * 10]);
//! assert_eq!(pairs, vec![1, 10, 2, 20]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the type class traits, the witness values and the data modules.
///
/// # Usage
///
/// ```rust
/// use fpstd::prelude::*;
///
/// let doubled = vec![1, 2, 3].fmap_mut(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "data")]
pub mod data;
