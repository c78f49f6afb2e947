use core::fmt;

/// A type-erased error returned by a row combiner.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error produced by the dynamic zip functions.
///
/// All variants abort the call before any rows are returned; zip never
/// yields a partial result alongside an error.
#[derive(Debug)]
pub enum ZipError {
    /// A positional argument was not an ordered or keyed container.
    NotACollection {
        /// 1-based position of the offending argument.
        param: usize,
    },
    /// The call supplied no collections at all.
    NoCollections,
    /// The combiner failed while building a row.
    ///
    /// The inner error is carried unmodified and is reachable through
    /// [`std::error::Error::source`].
    Combiner(BoxError),
}

impl fmt::Display for ZipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZipError::NotACollection { param } => write!(
                f,
                "zip() expects parameter {param} to be array or instance of Traversable"
            ),
            ZipError::NoCollections => f.write_str("zip() expects at least one collection"),
            ZipError::Combiner(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ZipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZipError::Combiner(err) => {
                let err: &(dyn std::error::Error + 'static) = &**err;
                Some(err)
            }
            _ => None,
        }
    }
}
