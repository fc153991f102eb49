//! Dictionary error type.

use std::error::Error;
use std::fmt;

use floatvec::{ErrorKind, VecError};

/// Errors from dictionary operations.
#[derive(Clone, Debug, PartialEq)]
pub enum DictError {
    /// Keys must be non-empty.
    InvalidKey,
    /// `insert` or `create` found the key already present.
    DuplicateKey {
        /// The existing key.
        key: String,
    },
    /// The key is not in the dictionary.
    KeyNotFound {
        /// The missing key.
        key: String,
    },
    /// A [`DictConfig`](crate::DictConfig) failed validation.
    InvalidConfig {
        /// What was wrong.
        reason: String,
    },
    /// An operation on a stored vector failed.
    Vector(VecError),
}

impl DictError {
    /// The shared taxonomy class of this error.
    ///
    /// Missing keys count as `OutOfRange`; key and configuration
    /// problems as `InvalidArgument`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidKey | Self::DuplicateKey { .. } | Self::InvalidConfig { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::KeyNotFound { .. } => ErrorKind::OutOfRange,
            Self::Vector(e) => e.kind(),
        }
    }
}

impl fmt::Display for DictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "dictionary keys must be non-empty"),
            Self::DuplicateKey { key } => write!(f, "key '{key}' already exists"),
            Self::KeyNotFound { key } => write!(f, "key '{key}' not found"),
            Self::InvalidConfig { reason } => write!(f, "invalid dictionary config: {reason}"),
            Self::Vector(e) => write!(f, "vector operation failed: {e}"),
        }
    }
}

impl Error for DictError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Vector(e) => Some(e),
            _ => None,
        }
    }
}

impl From<VecError> for DictError {
    fn from(e: VecError) -> Self {
        Self::Vector(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_errors_keep_their_kind_and_source() {
        let err = DictError::from(VecError::FixedCapacity { capacity: 2 });
        assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
        assert!(err.source().is_some());
    }

    #[test]
    fn display_names_the_key() {
        let err = DictError::KeyNotFound { key: "temp".into() };
        assert_eq!(err.to_string(), "key 'temp' not found");
        assert!(err.source().is_none());
    }
}
