//! Crate error taxonomy.
//!
//! Every failure the pipeline can hit is a distinct, inspectable variant.
//! The transform is a one-shot pass over static input, so all errors are
//! terminal for the operation that raised them; there is no retry layer.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::encode::Field;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the corpus pipeline.
#[derive(Debug)]
pub enum Error {
    /// The source path does not resolve to a readable file.
    MissingFile {
        /// Path that failed to resolve.
        path: PathBuf,
    },

    /// The source document is not valid JSON.
    MalformedDocument {
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// A formatter was configured with a field name no card exposes.
    UnknownField {
        /// The unrecognized field name.
        name: String,
    },

    /// A hint was requested for a field that has no vector encoding.
    UnhintableField {
        /// The field that cannot be hinted.
        field: Field,
    },

    /// A card value was absent from the scanned vocabulary during
    /// vector encoding.
    UnknownToken {
        /// Field the value came from.
        field: Field,
        /// The token that missed the vocabulary.
        token: String,
    },

    /// A batch was requested that is larger than the corpus.
    BatchTooLarge {
        /// Requested batch size.
        requested: usize,
        /// Number of records available.
        len: usize,
    },

    /// An I/O failure at the encoded-batch boundary.
    Io {
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An encoded batch failed to decode.
    MalformedBatch {
        /// Underlying codec error.
        source: bincode::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingFile { path } => {
                write!(f, "source file not found: {}", path.display())
            }
            Error::MalformedDocument { source } => {
                write!(f, "source document is not valid JSON: {source}")
            }
            Error::UnknownField { name } => {
                write!(f, "unrecognized card field: {name}")
            }
            Error::UnhintableField { field } => {
                write!(f, "field {field} has no vector encoding")
            }
            Error::UnknownToken { field, token } => {
                write!(f, "token {token:?} in field {field} is not in the vocabulary")
            }
            Error::BatchTooLarge { requested, len } => {
                write!(f, "batch of {requested} requested from a corpus of {len}")
            }
            Error::Io { source } => write!(f, "batch store I/O failure: {source}"),
            Error::MalformedBatch { source } => {
                write!(f, "encoded batch failed to decode: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MalformedDocument { source } => Some(source),
            Error::Io { source } => Some(source),
            Error::MalformedBatch { source } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_missing_file() {
        let err = Error::MissingFile {
            path: PathBuf::from("AllSets.json"),
        };
        assert_eq!(format!("{err}"), "source file not found: AllSets.json");
    }

    #[test]
    fn test_display_unknown_token() {
        let err = Error::UnknownToken {
            field: Field::Types,
            token: "Tribal".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Tribal"));
        assert!(msg.contains("types"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let inner = io::Error::new(io::ErrorKind::Other, "disk gone");
        let err = Error::from(inner);
        assert!(err.source().is_some());

        let err = Error::BatchTooLarge {
            requested: 10,
            len: 3,
        };
        assert!(err.source().is_none());
    }
}
