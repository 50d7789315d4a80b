//! Serialization error types.

use core::fmt;

/// An error raised while serializing mappings.
///
/// Every variant reports a broken invariant in how the inputs were put
/// together, not a recoverable condition: a registry built through
/// [`SourceMapGenerator::add_mapping`](crate::SourceMapGenerator::add_mapping)
/// can never trigger one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A mapping referenced a source missing from the source registry.
    UnknownSource {
        /// The unregistered source.
        source: String,
    },

    /// A mapping referenced a name missing from the name registry.
    UnknownName {
        /// The unregistered name.
        name: String,
    },

    /// The VLQ layer rejected a digit.
    Vlq(vlq::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSource { source } => {
                write!(f, "mapping references unknown source \"{source}\"")
            }
            Error::UnknownName { name } => {
                write!(f, "mapping references unknown name \"{name}\"")
            }
            Error::Vlq(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Vlq(err) => Some(err),
            _ => None,
        }
    }
}

impl From<vlq::Error> for Error {
    fn from(err: vlq::Error) -> Self {
        Error::Vlq(err)
    }
}
