//! The operation surface shared by growable and fixed vectors.
//!
//! [`VectorOps`] is implemented for every type that implements the
//! crate-private storage trait, i.e. [`Vector`] and
//! [`FixedVector`](crate::FixedVector). All methods check their
//! preconditions before writing, so an `Err` means the container is
//! unchanged.

use std::slice;

use floatvec_core::{Scalar, SortOrder, VecError};

use crate::growable::Vector;
use crate::storage::Storage;
use crate::{search, sort, stats};

/// Element access, mutation, ordering, search, and statistics.
pub trait VectorOps<T: Scalar>: Storage<T> {
    /// The element at `index`.
    fn get(&self, index: usize) -> Result<T, VecError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(VecError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    /// The logical contents.
    fn as_slice(&self) -> &[T] {
        &self.slots()[..self.len()]
    }

    /// The logical contents, mutably. Writes cannot change the length.
    fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        &mut self.slots_mut()[..len]
    }

    /// Iterate over the logical contents.
    fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// The unused slots past the logical length. Always all zero.
    fn spare_capacity(&self) -> &[T] {
        &self.slots()[self.len()..]
    }

    /// Append `value`, growing first if the container is full.
    ///
    /// Fixed storage at capacity fails with
    /// [`VecError::FixedCapacity`].
    fn push_back(&mut self, value: T) -> Result<(), VecError> {
        self.reserve_one()?;
        let len = self.len();
        self.slots_mut()[len] = value;
        self.set_len(len + 1);
        Ok(())
    }

    /// Insert `value` at index 0, shifting everything right.
    fn push_front(&mut self, value: T) -> Result<(), VecError> {
        self.insert(value, 0)
    }

    /// Insert `value` at `index`, shifting `[index, len)` right.
    ///
    /// `index == len` appends. Anything larger is `OutOfRange`.
    fn insert(&mut self, value: T, index: usize) -> Result<(), VecError> {
        let len = self.len();
        if index > len {
            return Err(VecError::OutOfRange { index, len });
        }
        self.reserve_one()?;
        let slots = self.slots_mut();
        slots.copy_within(index..len, index + 1);
        slots[index] = value;
        self.set_len(len + 1);
        Ok(())
    }

    /// Remove and return the last element.
    fn pop_back(&mut self) -> Result<T, VecError> {
        let len = self.len();
        self.pop_at(len.saturating_sub(1))
    }

    /// Remove and return the first element.
    fn pop_front(&mut self) -> Result<T, VecError> {
        self.pop_at(0)
    }

    /// Remove and return the element at `index`, closing the gap.
    ///
    /// An empty container reports `Empty` before the index is checked.
    /// The vacated slot at the old end is zeroed.
    fn pop_at(&mut self, index: usize) -> Result<T, VecError> {
        let len = self.len();
        if len == 0 {
            return Err(VecError::Empty { required: 1, len });
        }
        if index >= len {
            return Err(VecError::OutOfRange { index, len });
        }
        let slots = self.slots_mut();
        let value = slots[index];
        slots.copy_within(index + 1..len, index);
        slots[len - 1] = T::ZERO;
        self.set_len(len - 1);
        Ok(value)
    }

    /// Overwrite the element at `index`, returning the previous value.
    fn update(&mut self, index: usize, value: T) -> Result<T, VecError> {
        let len = self.len();
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(VecError::OutOfRange { index, len }),
        }
    }

    /// Reverse the logical contents in place.
    fn reverse(&mut self) -> Result<(), VecError> {
        if self.is_empty() {
            return Err(VecError::Empty {
                required: 1,
                len: 0,
            });
        }
        self.as_mut_slice().reverse();
        Ok(())
    }

    /// Exchange the elements at `a` and `b`.
    fn swap(&mut self, a: usize, b: usize) -> Result<(), VecError> {
        let len = self.len();
        if let Some(index) = [a, b].into_iter().find(|&i| i >= len) {
            return Err(VecError::OutOfRange { index, len });
        }
        self.as_mut_slice().swap(a, b);
        Ok(())
    }

    /// Drop every element. Capacity is kept.
    fn clear(&mut self) {
        self.as_mut_slice().fill(T::ZERO);
        self.set_len(0);
    }

    /// Shrink capacity to the logical length (one slot minimum).
    ///
    /// Fixed storage cannot reallocate and fails with `InvalidArgument`.
    fn trim(&mut self) -> Result<(), VecError> {
        self.shrink_to_len()
    }

    /// Sort in place. See [`sort::sort`] for NaN placement.
    fn sort(&mut self, order: SortOrder) {
        sort::sort(self.as_mut_slice(), order);
    }

    /// Find an element within `tolerance` of `value`.
    ///
    /// With `sort_first` the contents are sorted ascending before the
    /// search; otherwise they must already be ascending. Arguments are
    /// validated before any sorting happens. See
    /// [`search::binary_search`] for the match rule and tie-break.
    fn binary_search(
        &mut self,
        value: T,
        tolerance: T,
        sort_first: bool,
    ) -> Result<Option<usize>, VecError> {
        search::validate_query(value, tolerance)?;
        if sort_first {
            self.sort(SortOrder::Ascending);
        }
        search::binary_search(self.as_slice(), value, tolerance)
    }

    /// Smallest element.
    fn min(&self) -> Result<T, VecError> {
        stats::min(self.as_slice())
    }

    /// Largest element.
    fn max(&self) -> Result<T, VecError> {
        stats::max(self.as_slice())
    }

    /// Sum of all elements.
    fn sum(&self) -> Result<T, VecError> {
        stats::sum(self.as_slice())
    }

    /// Arithmetic mean.
    fn average(&self) -> Result<T, VecError> {
        stats::mean(self.as_slice())
    }

    /// Population standard deviation; needs two or more elements.
    fn stdev(&self) -> Result<T, VecError> {
        stats::stdev(self.as_slice())
    }

    /// A new growable vector of running sums.
    fn cum_sum(&self) -> Result<Vector<T>, VecError> {
        Vector::from_slice(&stats::cumulative_sum(self.as_slice())?)
    }

    /// Copy the contents into a new growable vector.
    fn to_vector(&self) -> Result<Vector<T>, VecError> {
        Vector::from_slice(self.as_slice())
    }
}

impl<T: Scalar, S: Storage<T>> VectorOps<T> for S {}
