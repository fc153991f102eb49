//! Heap-backed growable vector.
//!
//! [`Vector`] owns a zero-initialised buffer whose length always equals
//! the logical capacity. Growth follows the [`GrowthPolicy`] carried by
//! the vector: doubling below the threshold, linear increments above.
//! The replacement buffer is reserved before any field changes, so an
//! allocation failure leaves the vector untouched.

use std::fmt;
use std::ops::Index;

use floatvec_core::policy::checked_bytes;
use floatvec_core::{Container, GrowthPolicy, Scalar, StorageKind, VecError};

use crate::guard::{Rejected, Release};
use crate::storage::Storage;

/// A growable vector of scalars with an explicit capacity policy.
#[derive(Clone)]
pub struct Vector<T: Scalar = f32> {
    /// Backing storage. `data.len()` is the capacity; slots past `len`
    /// are zero.
    data: Vec<T>,
    /// Number of logically valid elements.
    len: usize,
    policy: GrowthPolicy,
}

impl<T: Scalar> Vector<T> {
    /// Create an empty vector with `capacity` zeroed slots.
    ///
    /// Fails with `InvalidArgument` for a zero capacity and with a
    /// `ResourceExhausted` error if the buffer cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self, VecError> {
        Self::with_policy(capacity, GrowthPolicy::default())
    }

    /// Create an empty vector that grows according to `policy`.
    pub fn with_policy(capacity: usize, policy: GrowthPolicy) -> Result<Self, VecError> {
        if capacity == 0 {
            return Err(VecError::InvalidArgument {
                reason: "initial capacity must be non-zero",
            });
        }
        let mut data = Vec::new();
        reserve_zeroed(&mut data, capacity)?;
        Ok(Self {
            data,
            len: 0,
            policy,
        })
    }

    /// Create a vector holding a copy of `values`.
    ///
    /// Capacity equals `values.len()`, or one slot for an empty slice.
    pub fn from_slice(values: &[T]) -> Result<Self, VecError> {
        let mut vector = Self::new(values.len().max(1))?;
        vector.data[..values.len()].copy_from_slice(values);
        vector.len = values.len();
        Ok(vector)
    }

    /// The growth policy this vector follows.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }

    /// Copy the logical contents into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data[..self.len].to_vec()
    }

    fn grow_to(&mut self, new_capacity: usize) -> Result<(), VecError> {
        let old = self.data.len();
        reserve_zeroed(&mut self.data, new_capacity)?;
        tracing::debug!(old, new = new_capacity, "vector grew");
        Ok(())
    }
}

/// Extend `data` with zeroes up to `capacity` elements.
///
/// The reservation happens first; if it fails `data` is unchanged.
fn reserve_zeroed<T: Scalar>(data: &mut Vec<T>, capacity: usize) -> Result<(), VecError> {
    let requested_bytes = checked_bytes::<T>(capacity)?;
    let additional = capacity.saturating_sub(data.len());
    data.try_reserve_exact(additional)
        .map_err(|_| VecError::AllocationFailed { requested_bytes })?;
    data.resize(capacity, T::ZERO);
    Ok(())
}

impl<T: Scalar> Container for Vector<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Growable
    }
}

impl<T: Scalar> Storage<T> for Vector<T> {
    fn slots(&self) -> &[T] {
        &self.data
    }

    fn slots_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.data.len());
        self.len = len;
    }

    fn reserve_one(&mut self) -> Result<(), VecError> {
        if self.len < self.data.len() {
            return Ok(());
        }
        let next = self.policy.next_capacity::<T>(self.data.len())?;
        self.grow_to(next)
    }

    fn shrink_to_len(&mut self) -> Result<(), VecError> {
        let target = self.len.max(1);
        if target < self.data.len() {
            let old = self.data.len();
            self.data.truncate(target);
            self.data.shrink_to_fit();
            tracing::debug!(old, new = target, "vector trimmed");
        }
        Ok(())
    }
}

impl<T: Scalar> Release for Vector<T> {
    /// Free the buffer. Never rejected; consuming `self` makes a second
    /// release impossible.
    fn release(self) -> Result<(), Rejected<Self>> {
        tracing::trace!(capacity = self.data.len(), "releasing vector");
        drop(self);
        Ok(())
    }
}

impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`. Use `VectorOps::get` for a checked read.
    fn index(&self, index: usize) -> &T {
        &self.data[..self.len][index]
    }
}

impl<'v, T: Scalar> IntoIterator for &'v Vector<T> {
    type Item = &'v T;
    type IntoIter = std::slice::Iter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data[..self.len].iter()
    }
}

impl<T: Scalar> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .field("data", &&self.data[..self.len])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::VectorOps;

    #[test]
    fn new_creates_zeroed_storage() {
        let v = Vector::<f32>::new(10).unwrap();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.storage_kind(), StorageKind::Growable);
        assert!(v.slots().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(
            Vector::<f32>::new(0),
            Err(VecError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn oversized_capacity_is_rejected_not_truncated() {
        let result = Vector::<f32>::new(usize::MAX / 2);
        assert!(matches!(result, Err(VecError::CapacityOverflow { .. })));
    }

    #[test]
    fn growth_follows_policy_sequence() {
        let mut v = Vector::<f32>::new(1).unwrap();
        let mut caps = vec![v.capacity()];
        for i in 0..9 {
            v.push_back(i as f32).unwrap();
            if *caps.last().unwrap() != v.capacity() {
                caps.push(v.capacity());
            }
        }
        assert_eq!(caps, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn growth_keeps_tail_zeroed() {
        let mut v = Vector::<f32>::new(2).unwrap();
        for x in [1.0, 2.0, 3.0] {
            v.push_back(x).unwrap();
        }
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.slots()[3], 0.0);
    }

    #[test]
    fn custom_policy_grows_linearly() {
        // 16-byte threshold = 4 f32s, 8-byte increment = 2 f32s.
        let policy = GrowthPolicy::new(16, 8).unwrap();
        let mut v = Vector::<f32>::with_policy(4, policy).unwrap();
        for i in 0..5 {
            v.push_back(i as f32).unwrap();
        }
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn policy_is_carried_by_vector() {
        let policy = GrowthPolicy::new(64, 16).unwrap();
        let v = Vector::<f64>::with_policy(2, policy).unwrap();
        assert_eq!(v.policy(), policy);
        assert_eq!(v.policy().threshold_elems::<f64>(), 8);
        assert_eq!(Vector::<f32>::new(1).unwrap().policy(), GrowthPolicy::default());
    }

    #[test]
    fn from_slice_copies_values() {
        let v = Vector::from_slice(&[1.0f64, 2.0, 3.0]).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_empty_slice_keeps_one_slot() {
        let v = Vector::<f32>::from_slice(&[]).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn shrink_releases_spare_capacity() {
        let mut v = Vector::<f32>::new(32).unwrap();
        v.push_back(1.0).unwrap();
        v.push_back(2.0).unwrap();
        v.shrink_to_len().unwrap();
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn index_reads_logical_elements() {
        let v = Vector::from_slice(&[4.0f32, 5.0]).unwrap();
        assert_eq!(v[1], 5.0);
    }

    #[test]
    #[should_panic]
    fn index_past_len_panics() {
        let mut v = Vector::<f32>::new(8).unwrap();
        v.push_back(1.0).unwrap();
        let _ = v[1];
    }

    #[test]
    fn memory_bytes_tracks_capacity() {
        let v = Vector::<f64>::new(16).unwrap();
        assert_eq!(v.memory_bytes(), 16 * 8);
    }

    #[test]
    fn debug_shows_only_logical_data() {
        let mut v = Vector::<f32>::new(4).unwrap();
        v.push_back(1.5).unwrap();
        let text = format!("{v:?}");
        assert!(text.contains("len: 1"));
        assert!(text.contains("capacity: 4"));
        assert!(text.contains("[1.5]"));
    }

    #[test]
    fn release_consumes_vector() {
        let v = Vector::<f32>::new(4).unwrap();
        assert!(v.release().is_ok());
    }

    #[test]
    fn iterates_by_reference() {
        let v = Vector::from_slice(&[1.0f32, 2.0, 3.0]).unwrap();
        let total: f32 = (&v).into_iter().sum();
        assert_eq!(total, 6.0);
    }
}
