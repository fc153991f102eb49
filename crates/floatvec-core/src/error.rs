//! Error types for floatvec containers.
//!
//! Every fallible operation returns [`VecError`]. Variants are grouped
//! into four [`ErrorKind`] classes so callers can branch on the class
//! without matching every variant.

use std::error::Error;
use std::fmt;

use crate::scalar::Scalar;

/// Broad failure classes shared by every container operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: zero capacity, NaN search inputs, negative
    /// tolerance, or an operation the storage kind does not allow.
    InvalidArgument,
    /// An index outside the valid bounds of the container.
    OutOfRange,
    /// The container holds fewer elements than the operation requires.
    Empty,
    /// No room to grow: allocation failure, full fixed storage, or a
    /// byte size the platform cannot address.
    ResourceExhausted,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidArgument => "invalid argument",
            Self::OutOfRange => "out of range",
            Self::Empty => "empty",
            Self::ResourceExhausted => "resource exhausted",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VecError {
    /// An argument was rejected before any state was touched.
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: &'static str,
    },
    /// `index` is not a valid position for a container of length `len`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
    /// The operation needs at least `required` elements.
    Empty {
        /// Minimum element count the operation needs.
        required: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
    /// A fixed container is full and cannot reallocate.
    FixedCapacity {
        /// The fixed capacity in elements.
        capacity: usize,
    },
    /// The allocator could not provide the requested buffer.
    AllocationFailed {
        /// Size of the rejected allocation in bytes.
        requested_bytes: usize,
    },
    /// Capacity arithmetic overflowed or exceeded `isize::MAX` bytes.
    CapacityOverflow {
        /// Element count that could not be represented.
        requested: usize,
    },
}

impl VecError {
    /// The taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::Empty { .. } => ErrorKind::Empty,
            Self::FixedCapacity { .. }
            | Self::AllocationFailed { .. }
            | Self::CapacityOverflow { .. } => ErrorKind::ResourceExhausted,
        }
    }

    pub(crate) fn invalid(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Empty { required, len } => {
                write!(f, "operation needs at least {required} element(s), length is {len}")
            }
            Self::FixedCapacity { capacity } => {
                write!(f, "fixed storage is full at capacity {capacity}")
            }
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation of {requested_bytes} bytes failed")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity of {requested} elements overflows addressable memory")
            }
        }
    }
}

impl Error for VecError {}

/// Flat sentinel conversion for value-returning operations.
///
/// `Scalar` results map to [`Scalar::SENTINEL`] and indices/counts to
/// `usize::MAX`. The sentinel alone is ambiguous: a container may legally
/// store `f32::MAX`. Check the `Result` first; this adapter exists for
/// callers that forward values to a sentinel-based interface.
pub trait OrSentinel {
    /// The flat value type.
    type Output;

    /// Return the success value, or the documented sentinel on error.
    fn or_sentinel(self) -> Self::Output;
}

impl<T: Scalar> OrSentinel for Result<T, VecError> {
    type Output = T;

    fn or_sentinel(self) -> T {
        self.unwrap_or(T::SENTINEL)
    }
}

impl OrSentinel for Result<usize, VecError> {
    type Output = usize;

    fn or_sentinel(self) -> usize {
        self.unwrap_or(usize::MAX)
    }
}

impl OrSentinel for Result<Option<usize>, VecError> {
    type Output = usize;

    fn or_sentinel(self) -> usize {
        self.ok().flatten().unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_taxonomy() {
        assert_eq!(VecError::invalid("x").kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            VecError::OutOfRange { index: 3, len: 2 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            VecError::Empty { required: 1, len: 0 }.kind(),
            ErrorKind::Empty
        );
        assert_eq!(
            VecError::FixedCapacity { capacity: 4 }.kind(),
            ErrorKind::ResourceExhausted
        );
        assert_eq!(
            VecError::AllocationFailed { requested_bytes: 8 }.kind(),
            ErrorKind::ResourceExhausted
        );
        assert_eq!(
            VecError::CapacityOverflow { requested: usize::MAX }.kind(),
            ErrorKind::ResourceExhausted
        );
    }

    #[test]
    fn display_mentions_index_and_len() {
        let msg = VecError::OutOfRange { index: 7, len: 3 }.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn sentinel_for_scalar_errors() {
        let err: Result<f32, VecError> = Err(VecError::Empty { required: 1, len: 0 });
        assert_eq!(err.or_sentinel(), f32::MAX);
        let ok: Result<f32, VecError> = Ok(1.5);
        assert_eq!(ok.or_sentinel(), 1.5);
    }

    #[test]
    fn sentinel_for_index_results() {
        let missing: Result<Option<usize>, VecError> = Ok(None);
        assert_eq!(missing.or_sentinel(), usize::MAX);
        let found: Result<Option<usize>, VecError> = Ok(Some(2));
        assert_eq!(found.or_sentinel(), 2);
        let failed: Result<usize, VecError> = Err(VecError::invalid("bad"));
        assert_eq!(failed.or_sentinel(), usize::MAX);
    }
}
