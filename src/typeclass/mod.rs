//! Type class traits and witnesses.
//!
//! Two flavours of abstraction live here.
//!
//! Container type classes are traits implemented on the containers
//! themselves, using Generic Associated Types to emulate higher-kinded types:
//!
//! - [`Functor`], [`FunctorMut`]: mapping over contained values
//! - [`Applicative`], [`ApplicativeVec`]: combining independent computations
//! - [`Monad`], [`MonadVec`]: sequencing dependent computations
//! - [`Foldable`]: reducing to a summary value
//! - [`Traversable`]: mapping with effects
//! - [`Plus`], [`Alternative`], [`AlternativeVec`]: choice and failure
//! - [`Extend`], [`ExtendVec`]: mapping over whole sub-structures
//! - [`Unfoldable`]: building from a seed
//!
//! Algebraic type classes are witness values passed explicitly to the
//! functions that need them, so one type can carry several instances:
//!
//! - [`Setoid`]: equivalence
//! - [`Order`]: total order, refining a setoid
//! - [`Semigroup`]: associative combination
//! - [`Monoid`]: combination with an identity
//!
//! # Examples
//!
//! ```rust
//! use fpstd::typeclass::{FromOrd, Monoid, Order, OrderOn, Reversed, Sum};
//!
//! assert_eq!(Sum.concat_all(vec![1, 2, 3]), 6);
//!
//! let by_length = OrderOn::new(FromOrd, |s: &&str| s.len());
//! assert!(by_length.less_than(&"ab", &"abc"));
//! assert!(Reversed(FromOrd).less_than(&2, &1));
//! ```

mod alternative;
mod applicative;
mod extend;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod order;
mod semigroup;
mod setoid;
mod traversable;
mod unfoldable;

pub use alternative::{Alternative, AlternativeVec, Plus};
pub use applicative::{Applicative, ApplicativeVec};
pub use extend::{Extend, ExtendVec};
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::{Monad, MonadVec};
pub use monoid::{All, Any, Monoid, Product, StringMonoid, Sum};
pub use order::{DynOrder, FromOrd, Order, OrderBy, OrderOn, OrderSemigroup, Reversed, ThenOrder};
pub use semigroup::{First, Last, MaxOf, MinOf, Semigroup};
pub use setoid::{FromEq, Setoid, SetoidBy, SetoidOn};
pub use traversable::Traversable;
pub use unfoldable::Unfoldable;
