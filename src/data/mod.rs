//! Data-type modules.
//!
//! - [`array`]: free functions over slices, plus sequence witnesses
//! - [`option`]: witnesses and helpers for `Option`
//! - [`either`]: the [`Either`] type and its witness
//!
//! The modules are used through their paths (`array::map`, `option::order`)
//! since many of their function names overlap.

pub mod array;
pub mod either;
pub mod option;

pub use array::{ArrayMonoid, ArrayOrder, ArraySetoid, Separated, Span};
pub use either::{Either, EitherSetoid};
pub use option::{FirstSome, LastSome, OptionMonoid, OptionOrder, OptionSetoid};
