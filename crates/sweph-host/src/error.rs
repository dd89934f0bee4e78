//! Errors raised by host shims.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for host calls
pub type HostResult<T> = Result<T, HostError>;

/// Everything a host call can fail with.
///
/// Only [`ArgumentCount`](HostError::ArgumentCount) and
/// [`Native`](HostError::Native) originate in the binding itself; the other two
/// stand in for the generic errors a dynamic host runtime would raise.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    /// Argument count outside the shim's accepted range
    #[error("wrong number of arguments")]
    ArgumentCount,

    /// Negative status from the native library, message verbatim
    #[error("{0}")]
    Native(String),

    /// An argument could not be coerced to the type the shim needs
    #[error("{function}: argument {position} {expected}")]
    Type {
        function: String,
        position: usize,
        expected: String,
    },

    #[error("undefined function '{0}'")]
    UnknownFunction(String),
}

impl HostError {
    pub fn type_error(function: &str, position: usize, expected: impl Into<String>) -> Self {
        HostError::Type {
            function: function.to_string(),
            position,
            expected: expected.into(),
        }
    }

    /// Short machine-readable kind, as used by the shell protocol
    pub fn kind(&self) -> ErrorKind {
        match self {
            HostError::ArgumentCount => ErrorKind::Argument,
            HostError::Native(_) => ErrorKind::Native,
            HostError::Type { .. } => ErrorKind::Type,
            HostError::UnknownFunction(_) => ErrorKind::Unknown,
        }
    }
}

/// Error kind codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Argument,
    Native,
    Type,
    Unknown,
}

/// Native failures keep their message; anything else the typed layer rejects
/// (interior NUL bytes, bad calendar codes) becomes a type error on the first
/// argument. Shims that know the offending position map it themselves.
impl From<sweph::Error> for HostError {
    fn from(err: sweph::Error) -> Self {
        match err {
            sweph::Error::Native(message) => HostError::Native(message),
            other => HostError::Type {
                function: "sweph".to_string(),
                position: 0,
                expected: format!("rejected: {other}"),
            },
        }
    }
}
