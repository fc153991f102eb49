//! Capacity growth policy.
//!
//! Growable containers double their capacity until the buffer reaches
//! the threshold size, then grow by a fixed increment. Thresholds are
//! configured in bytes and converted to element counts for each scalar
//! type, so an `f64` vector switches to linear growth at half the
//! element count of an `f32` vector.

use std::mem::size_of;

use crate::error::VecError;

/// Configuration for the capacity growth policy.
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Buffer size in bytes below which capacity doubles.
    threshold_bytes: usize,
    /// Bytes added per growth step once the threshold is reached.
    increment_bytes: usize,
}

impl GrowthPolicy {
    /// Default doubling threshold: 1 MiB.
    pub const DEFAULT_THRESHOLD_BYTES: usize = 1024 * 1024;

    /// Default linear increment: 1 MiB.
    pub const DEFAULT_INCREMENT_BYTES: usize = 1024 * 1024;

    /// Create a policy with custom byte thresholds.
    ///
    /// `increment_bytes` must hold at least one `f64`, so that every
    /// supported scalar type grows by at least one element per step.
    pub fn new(threshold_bytes: usize, increment_bytes: usize) -> Result<Self, VecError> {
        if increment_bytes < size_of::<f64>() {
            return Err(VecError::invalid(
                "growth increment must hold at least one element",
            ));
        }
        Ok(Self {
            threshold_bytes,
            increment_bytes,
        })
    }

    /// Doubling threshold expressed in elements of `T`.
    pub fn threshold_elems<T>(&self) -> usize {
        self.threshold_bytes / elem_size::<T>()
    }

    /// Linear increment expressed in elements of `T` (at least one).
    pub fn increment_elems<T>(&self) -> usize {
        (self.increment_bytes / elem_size::<T>()).max(1)
    }

    /// Capacity that follows `current` under this policy.
    ///
    /// `0 -> 1`, then doubling while below the threshold, then linear
    /// increments. Fails with [`VecError::CapacityOverflow`] instead of
    /// wrapping when the result cannot be addressed.
    pub fn next_capacity<T>(&self, current: usize) -> Result<usize, VecError> {
        let next = if current == 0 {
            Some(1)
        } else if current < self.threshold_elems::<T>() {
            current.checked_mul(2)
        } else {
            current.checked_add(self.increment_elems::<T>())
        };
        let next = next.ok_or(VecError::CapacityOverflow { requested: current })?;
        checked_bytes::<T>(next)?;
        Ok(next)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            threshold_bytes: Self::DEFAULT_THRESHOLD_BYTES,
            increment_bytes: Self::DEFAULT_INCREMENT_BYTES,
        }
    }
}

/// Byte size of `count` elements of `T`.
///
/// Fails if the multiplication overflows or the result exceeds
/// `isize::MAX`, the largest allocation Rust can address.
pub fn checked_bytes<T>(count: usize) -> Result<usize, VecError> {
    count
        .checked_mul(size_of::<T>())
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or(VecError::CapacityOverflow { requested: count })
}

fn elem_size<T>() -> usize {
    size_of::<T>().max(1)
}
