//! String-backed identifier newtypes for open enumerations.
//!
//! The REST API occasionally introduces new values for fields that the SDK
//! models as enumerations. These newtypes keep any received value verbatim
//! (so it survives a read-modify-write cycle) while exposing the known values
//! as constants.
//!
//! ```ignore
//! use kuflow_rest::PrincipalType;
//!
//! let kind: PrincipalType = "USER".into();
//! assert_eq!(kind, PrincipalType::user());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generates a string wrapper newtype.
///
/// Each generated type:
/// - Keeps the input value untouched (no trimming, no case folding)
/// - Implements `From<&str>`, `From<String>`, `Into<String>`
/// - Implements `Display` for string formatting
/// - Serializes/deserializes as a plain string
macro_rules! string_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

string_id_type!(
    PrincipalType,
    "Principal kind (e.g., \"USER\", \"APPLICATION\", \"SYSTEM\")."
);

impl PrincipalType {
    pub const USER: &'static str = "USER";
    pub const APPLICATION: &'static str = "APPLICATION";
    pub const SYSTEM: &'static str = "SYSTEM";

    pub fn user() -> Self {
        Self::new(Self::USER)
    }

    pub fn application() -> Self {
        Self::new(Self::APPLICATION)
    }

    pub fn system() -> Self {
        Self::new(Self::SYSTEM)
    }
}
