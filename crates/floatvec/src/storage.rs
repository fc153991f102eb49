//! Slot-level access shared by both storage kinds.
//!
//! This trait lives in a private module so only this crate can call
//! `set_len` and friends; downstream code sees it solely as the
//! supertrait of [`VectorOps`](crate::VectorOps).

use floatvec_core::{Container, Scalar, VecError};

/// Raw slot access and growth for a container.
///
/// `slots()` always spans the full capacity. Implementors keep every
/// slot at or past `len()` zeroed; callers that shrink the logical
/// length must zero the vacated slots themselves before `set_len`.
pub trait Storage<T: Scalar>: Container {
    /// All `capacity()` slots.
    fn slots(&self) -> &[T];

    /// All `capacity()` slots, mutably.
    fn slots_mut(&mut self) -> &mut [T];

    /// Commit a new logical length. `len` must not exceed capacity.
    fn set_len(&mut self, len: usize);

    /// Make room for at least one more element.
    ///
    /// On failure the container is unchanged.
    fn reserve_one(&mut self) -> Result<(), VecError>;

    /// Release capacity beyond the logical length.
    fn shrink_to_len(&mut self) -> Result<(), VecError>;
}
