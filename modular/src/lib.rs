#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Integers modulo a fixed compile-time modulus.
//!
//! [`Modular<P>`] stores one signed representative and keeps it in the canonical range
//! `[0, P)` after every public operation:
//!
//! - construction from a raw integer of any sign and magnitude reduces it;
//! - `+`, `-`, `*` and unary `-` reduce their raw result;
//! - `/` and `%` divide the representatives as ordinary integers (this is *not* field
//!   division) and fail with [`ModularError::DivisionByZero`] on a zero divisor;
//! - comparisons look at the representatives;
//! - [`Display`](std::fmt::Display) and [`FromStr`](std::str::FromStr) use decimal text.
//!
//! Raw [`Residue`] integers can appear on either side of any operator and are promoted before
//! the operation.
//!
//! ```
//! use modular::Modular;
//!
//! let a = Modular::<5>::new(45);
//! assert_eq!(a.to_string(), "0");
//!
//! let b: Modular<7> = "-8".parse().unwrap();
//! assert_eq!((10 - b).value(), 4);
//! assert!((b % 0).is_err());
//! ```

mod cmp;
mod distribution;
mod io;
mod macros;
mod ops;
mod serde_support;
mod value;

pub mod error;
pub mod reduce;

pub use error::ModularError;
pub use reduce::{Reduce, ReduceAssign};
pub use value::Modular;

/// The type of a representative, and of the raw integers mixed into operations.
pub type Residue = i64;

/// The widened type raw sums and products are computed in before reduction.
pub(crate) type Wide = i128;
