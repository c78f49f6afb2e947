use core::fmt;

use indexmap::IndexMap;

use crate::error::ZipError;
use crate::value::{Key, Value};

/// A source of positionally ordered values.
///
/// This is the capability the zip engine consumes: "producible as an
/// ordered sequence of values". It comes in exactly two shapes: a
/// materialized container, or a single-pass enumerable of key-value
/// pairs. Keys are stripped on consumption; values keep their iteration
/// order, so duplicate keys never lose values.
pub enum Source {
    /// A materialized ordered container.
    Seq(Vec<Value>),
    /// A single-pass enumerable of key-value pairs.
    ///
    /// Consumed at most once; the engine never attempts to re-read it.
    Pairs(Box<dyn Iterator<Item = (Key, Value)>>),
}

impl Source {
    /// Wraps a single-pass enumerable of key-value pairs.
    pub fn pairs<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
        I::IntoIter: 'static,
    {
        Source::Pairs(Box::new(iter.into_iter()))
    }

    /// Validates `value` as the `param`-th (1-based) collection argument.
    pub(crate) fn from_value(value: Value, param: usize) -> Result<Self, ZipError> {
        match value {
            Value::Seq(values) => Ok(Source::Seq(values)),
            Value::Map(map) => Ok(Source::Seq(map.into_values().collect())),
            _ => Err(ZipError::NotACollection { param }),
        }
    }

    /// Consumes the source, yielding its values in iteration order.
    pub(crate) fn into_values(self) -> Vec<Value> {
        match self {
            Source::Seq(values) => values,
            Source::Pairs(pairs) => pairs.map(|(_, value)| value).collect(),
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Seq(values) => f.debug_tuple("Seq").field(values).finish(),
            Source::Pairs(_) => f.debug_struct("Pairs").finish_non_exhaustive(),
        }
    }
}

/// Conversion into a [`Source`].
pub trait IntoSource {
    /// Converts `self` into a source of ordered values.
    fn into_source(self) -> Source;
}

impl IntoSource for Source {
    fn into_source(self) -> Source {
        self
    }
}

impl<T: Into<Value>> IntoSource for Vec<T> {
    fn into_source(self) -> Source {
        Source::Seq(self.into_iter().map(Into::into).collect())
    }
}

impl IntoSource for IndexMap<Key, Value> {
    fn into_source(self) -> Source {
        Source::Seq(self.into_values().collect())
    }
}
