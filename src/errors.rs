use std::fmt;

use thiserror::Error;

/// Expected shape named in JSON-forms and element-value coercion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedKind {
    Int,
    Float,
    Date,
    DateTime,
    File,
    Principal,
    List,
    Dict,
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpectedKind::Int => "a int",
            ExpectedKind::Float => "a float",
            ExpectedKind::Date => "a date following ISO 8601 format",
            ExpectedKind::DateTime => "a date-time following ISO 8601 format",
            ExpectedKind::File => "a file",
            ExpectedKind::Principal => "a principal",
            ExpectedKind::List => "a list",
            ExpectedKind::Dict => "a dict",
        };
        write!(f, "{label}")
    }
}

/// Unified error type surfaced by the utilities.
///
/// Every variant describes a misuse by the calling code (wrong code, wrong
/// path, wrong type); none of them is transient.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// A required typed element value had no matching entry.
    #[error("Value is required!")]
    ValueRequired,

    #[error("Array index out of bound: {index}")]
    IndexOutOfBounds { index: usize },

    /// A `get_*` JSON-forms reader could not resolve its path.
    #[error("Property value doesn't exist")]
    PropertyValueMissing,

    /// A JSON-forms write could not resolve its path.
    #[error("Property {path} doesn't exist")]
    PropertyNotFound { path: String },

    #[error("Property {path} is not {expected}")]
    TypeMismatch { path: String, expected: ExpectedKind },

    /// A stored element value could not be coerced to the requested type.
    #[error("Value {value:?} is not {expected}")]
    InvalidElementValue { value: String, expected: ExpectedKind },

    #[error("Incorrect property path {segment}, {reason}")]
    PathInconsistency { segment: String, reason: String },

    #[error("Unsupported value {0}")]
    UnsupportedValue(String),
}

impl Error {
    pub(crate) fn type_mismatch(path: &str, expected: ExpectedKind) -> Self {
        Error::TypeMismatch {
            path: path.to_string(),
            expected,
        }
    }

    pub(crate) fn path_inconsistency(segment: &str, reason: impl Into<String>) -> Self {
        Error::PathInconsistency {
            segment: segment.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the failure means "nothing there" rather than "wrong shape".
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Error::ValueRequired | Error::PropertyValueMissing | Error::PropertyNotFound { .. }
        )
    }
}

/// Convenience alias for fallible results.
pub type Result<T, E = Error> = std::result::Result<T, E>;
