//! ‘Zips up’ multiple collections into a table of positionally aligned rows.
//!
//! # Examples
//!
//! ```rust
//! use collection_zip::prelude::*;
//!
//! let rows = (vec!["a", "b"], vec![1, 2, 3]).zip();
//! assert_eq!(rows[2], (None, Some(3)));
//! ```

use smallvec::SmallVec;

use crate::error::{BoxError, ZipError};
use crate::source::{IntoSource, Source};
use crate::value::Value;

mod array;
mod tuple;
mod vec;

/// ‘Zips up’ multiple collections into a table of rows.
///
/// Implemented for tuples, arrays, and vecs of anything iterable. Rows
/// are produced until every input is exhausted; an input that runs out
/// early contributes `None` for the remaining rows.
pub trait Zip {
    /// What does a single row of output look like?
    type Row;

    /// Combine multiple collections into one row per position.
    fn zip(self) -> Vec<Self::Row>;

    /// Like [`zip`][Zip::zip], but passes every row through `combiner`
    /// and collects its return values.
    fn zip_with<F, R>(self, combiner: F) -> Vec<R>
    where
        Self: Sized,
        F: FnMut(Self::Row) -> R,
    {
        self.zip().into_iter().map(combiner).collect()
    }
}

/// Zips dynamic collections into rows of positionally aligned values.
///
/// Every element of `collections` must be a [`Value::Seq`] or a
/// [`Value::Map`]; the first other value aborts the call with
/// [`ZipError::NotACollection`] carrying its 1-based position, scanning
/// left to right. Map keys are discarded; association is positional,
/// never by key.
///
/// The first collection drives the iteration: the result has exactly one
/// row per value of the first collection. Collections that run out early
/// contribute [`Value::Null`] (see [`zip_padded`] for a different fill),
/// and values of longer collections beyond that point are ignored. Each
/// row is a [`Value::Seq`] of the per-collection values.
///
/// # Examples
///
/// ```rust
/// use collection_zip::{zip, Value};
///
/// let rows = zip(vec![
///     Value::from_iter(["one", "two", "three"]),
///     Value::from_iter([1, 2, 3]),
/// ])?;
/// assert_eq!(rows[1], Value::Seq(vec!["two".into(), 2.into()]));
/// # Ok::<(), collection_zip::ZipError>(())
/// ```
pub fn zip(collections: Vec<Value>) -> Result<Vec<Value>, ZipError> {
    run(validate(collections)?, Value::Null, None)
}

/// Zips dynamic collections, padding exhausted ones with `fill`.
///
/// Identical to [`zip`] except for the value substituted once a
/// collection shorter than the first one runs out.
pub fn zip_padded(collections: Vec<Value>, fill: Value) -> Result<Vec<Value>, ZipError> {
    run(validate(collections)?, fill, None)
}

/// Zips dynamic collections through a combiner.
///
/// The combiner is invoked exactly once per row, left to right, with the
/// positionally aligned values in collection order; its return value
/// becomes the row. An error from the combiner aborts the whole call
/// (no partial result is returned) and is carried unmodified inside
/// [`ZipError::Combiner`]. The combiner is never invoked when the first
/// collection is empty.
///
/// # Examples
///
/// ```rust
/// use collection_zip::{zip_with, Value};
///
/// let rows = zip_with(
///     vec![Value::from_iter([1, 2]), Value::from_iter([10, 20])],
///     |row| Ok(Value::Str(row.iter().map(ToString::to_string).collect())),
/// )?;
/// assert_eq!(rows, vec![Value::Str("110".into()), Value::Str("220".into())]);
/// # Ok::<(), collection_zip::ZipError>(())
/// ```
pub fn zip_with<F>(collections: Vec<Value>, mut combiner: F) -> Result<Vec<Value>, ZipError>
where
    F: FnMut(&[Value]) -> Result<Value, BoxError>,
{
    run(validate(collections)?, Value::Null, Some(&mut combiner))
}

/// Zips pre-built [`Source`]s, bypassing runtime validation.
///
/// This is the entry point for single-pass pair enumerables
/// ([`Source::pairs`]), which cannot be expressed as a [`Value`]. The
/// semantics are those of [`zip`].
///
/// # Examples
///
/// ```rust
/// use collection_zip::{zip_sources, Key, Source, Value};
///
/// let pairs = Source::pairs(vec![
///     (Key::from("foo"), Value::Int(1)),
///     (Key::from("bar"), Value::Int(2)),
/// ]);
/// let rows = zip_sources(vec![pairs])?;
/// assert_eq!(rows[0], Value::Seq(vec![Value::Int(1)]));
/// # Ok::<(), collection_zip::ZipError>(())
/// ```
pub fn zip_sources<S>(sources: Vec<S>) -> Result<Vec<Value>, ZipError>
where
    S: IntoSource,
{
    run(collect_sources(sources), Value::Null, None)
}

/// Zips pre-built [`Source`]s through a combiner.
///
/// The combiner contract is that of [`zip_with`].
pub fn zip_sources_with<S, F>(sources: Vec<S>, mut combiner: F) -> Result<Vec<Value>, ZipError>
where
    S: IntoSource,
    F: FnMut(&[Value]) -> Result<Value, BoxError>,
{
    run(collect_sources(sources), Value::Null, Some(&mut combiner))
}

type Sources = SmallVec<[Source; 4]>;
type Combiner<'a> = &'a mut dyn FnMut(&[Value]) -> Result<Value, BoxError>;

fn validate(collections: Vec<Value>) -> Result<Sources, ZipError> {
    collections
        .into_iter()
        .enumerate()
        .map(|(index, value)| Source::from_value(value, index + 1))
        .collect()
}

fn collect_sources<S: IntoSource>(sources: Vec<S>) -> Sources {
    sources.into_iter().map(IntoSource::into_source).collect()
}

fn run(
    sources: Sources,
    fill: Value,
    mut combiner: Option<Combiner<'_>>,
) -> Result<Vec<Value>, ZipError> {
    if sources.is_empty() {
        return Err(ZipError::NoCollections);
    }

    let mut columns: SmallVec<[std::vec::IntoIter<Value>; 4]> = sources
        .into_iter()
        .map(|source| source.into_values().into_iter())
        .collect();

    // The first collection drives: one row per value it holds.
    let height = columns[0].len();
    let mut rows = Vec::with_capacity(height);
    let mut row: SmallVec<[Value; 8]> = SmallVec::with_capacity(columns.len());

    for _ in 0..height {
        row.clear();
        for column in columns.iter_mut() {
            row.push(column.next().unwrap_or_else(|| fill.clone()));
        }
        match combiner.as_mut() {
            Some(combiner) => rows.push(combiner(&row).map_err(ZipError::Combiner)?),
            None => rows.push(Value::Seq(row.to_vec())),
        }
    }

    Ok(rows)
}

/// A non-fused iterator that yields again after returning `None`.
#[cfg(test)]
pub(crate) struct Stutter(std::vec::IntoIter<Option<i32>>);

#[cfg(test)]
impl Stutter {
    pub(crate) fn new(values: Vec<Option<i32>>) -> Self {
        Self(values.into_iter())
    }
}

#[cfg(test)]
impl Iterator for Stutter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.0.next().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Value {
        values.into_iter().collect()
    }

    #[test]
    fn no_collections_is_a_usage_error() {
        let err = zip(Vec::new()).unwrap_err();
        assert!(matches!(err, ZipError::NoCollections));
    }

    #[test]
    fn validation_stops_at_the_first_offender() {
        let err = zip(vec![Value::Null, Value::Bool(true)]).unwrap_err();
        assert!(matches!(err, ZipError::NotACollection { param: 1 }));
    }

    #[test]
    fn custom_fill_replaces_missing_values() {
        let rows = zip_padded(
            vec![seq([1, 2]), seq([9])],
            Value::Str("absent".into()),
        )
        .unwrap();
        assert_eq!(
            rows[1],
            Value::Seq(vec![Value::Int(2), Value::Str("absent".into())])
        );
    }

    #[test]
    fn longer_trailing_collections_are_truncated() {
        let rows = zip(vec![seq([1]), seq([10, 20, 30])]).unwrap();
        assert_eq!(rows, vec![Value::Seq(vec![Value::Int(1), Value::Int(10)])]);
    }
}
