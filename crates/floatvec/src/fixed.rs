//! Fixed-capacity vector over a caller-owned buffer.
//!
//! [`FixedVector`] borrows its storage, typically a stack array, for the
//! lifetime `'a`. It never reallocates and never frees: pushes past the
//! buffer length fail with `FixedCapacity`, and [`Release::release`]
//! is rejected because the buffer belongs to the caller's scope.

use std::fmt;
use std::ops::Index;

use floatvec_core::{Container, Scalar, StorageKind, VecError};

use crate::guard::{Rejected, Release};
use crate::storage::Storage;

/// A vector whose capacity is the length of a borrowed buffer.
pub struct FixedVector<'a, T: Scalar = f32> {
    data: &'a mut [T],
    len: usize,
}

impl<'a, T: Scalar> FixedVector<'a, T> {
    /// Wrap `buffer` as an empty vector of capacity `buffer.len()`.
    ///
    /// The buffer is zeroed. Fails with `InvalidArgument` for an empty
    /// buffer.
    ///
    /// ```
    /// use floatvec::prelude::*;
    ///
    /// let mut buf = [0.0f32; 3];
    /// let mut v = FixedVector::new(&mut buf).unwrap();
    /// v.push_back(1.0).unwrap();
    /// assert_eq!(v.capacity(), 3);
    /// ```
    pub fn new(buffer: &'a mut [T]) -> Result<Self, VecError> {
        if buffer.is_empty() {
            return Err(VecError::InvalidArgument {
                reason: "fixed buffer must have non-zero capacity",
            });
        }
        buffer.fill(T::ZERO);
        Ok(Self {
            data: buffer,
            len: 0,
        })
    }
}

impl<T: Scalar> Container for FixedVector<'_, T> {
    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Fixed
    }
}

impl<T: Scalar> Storage<T> for FixedVector<'_, T> {
    fn slots(&self) -> &[T] {
        &*self.data
    }

    fn slots_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }

    fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.data.len());
        self.len = len;
    }

    fn reserve_one(&mut self) -> Result<(), VecError> {
        if self.len < self.data.len() {
            Ok(())
        } else {
            Err(VecError::FixedCapacity {
                capacity: self.data.len(),
            })
        }
    }

    fn shrink_to_len(&mut self) -> Result<(), VecError> {
        Err(VecError::InvalidArgument {
            reason: "fixed storage cannot be trimmed",
        })
    }
}

impl<T: Scalar> Release for FixedVector<'_, T> {
    /// Always rejected: the buffer is owned by the caller. The vector
    /// comes back inside the [`Rejected`] error with its data intact.
    fn release(self) -> Result<(), Rejected<Self>> {
        tracing::warn!(
            capacity = self.data.len(),
            "rejected release of fixed storage"
        );
        Err(Rejected::new(
            self,
            VecError::InvalidArgument {
                reason: "fixed storage is owned by the caller and cannot be released",
            },
        ))
    }
}

impl<T: Scalar> Index<usize> for FixedVector<'_, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        &self.data[..self.len][index]
    }
}

impl<T: Scalar> fmt::Debug for FixedVector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedVector")
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .field("data", &&self.data[..self.len])
            .finish()
    }
}
