//! Eager zip combinators for collections, iterators, and dynamic values.
//!
//! This library provides one operation, `zip`, over two surfaces:
//!
//! - The [`Zip`] trait combines tuples, arrays, and vecs of anything
//!   iterable into a fully materialized table of rows. Rows are produced
//!   until every input is exhausted; an input that runs out early
//!   contributes `None` for the remaining rows.
//! - The [`zip`], [`zip_with`], and [`zip_sources`] functions operate on
//!   dynamically typed [`Value`]s, validating their arguments at runtime.
//!   Keyed inputs are read in insertion order and their keys are
//!   discarded; the output is always positional.
//!
//! # Examples
//!
//! Zip heterogenous collections through the trait:
//!
//! ```rust
//! use collection_zip::prelude::*;
//!
//! let labels = vec!["one", "two", "three"];
//! let numbers = vec![1, 2, 3];
//! let rows = (labels, numbers).zip();
//!
//! assert_eq!(rows[0], (Some("one"), Some(1)));
//! assert_eq!(rows.len(), 3);
//! ```
//!
//! Zip dynamic values, with runtime validation:
//!
//! ```rust
//! use collection_zip::{zip, Value};
//!
//! let rows = zip(vec![
//!     Value::from_iter(["one", "two"]),
//!     Value::from_iter([1, 2]),
//! ])?;
//! assert_eq!(rows.len(), 2);
//! # Ok::<(), collection_zip::ZipError>(())
//! ```
//!
//! # Limitations
//!
//! Results are materialized eagerly: inputs are consumed front to back in
//! a single pass and the full table is built before returning. Infinite
//! iterators are therefore not supported.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

mod error;
mod source;
mod value;

pub mod zip;

pub use error::{BoxError, ZipError};
pub use source::{IntoSource, Source};
pub use value::{Key, Value};
pub use zip::{zip, zip_padded, zip_sources, zip_sources_with, zip_with, Zip};

/// The collection-zip prelude.
pub mod prelude {
    pub use super::source::IntoSource as _;
    pub use super::zip::Zip as _;
}
