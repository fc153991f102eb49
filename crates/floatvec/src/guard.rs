//! Explicit release, the release-and-clear helper, and a scope guard.
//!
//! Dropping a [`Vector`] frees its buffer, so most code never calls
//! [`Release::release`]. The explicit form exists for callers that want
//! the release to be visible, and so that releasing fixed storage is
//! reported as an error rather than ignored.

use std::error::Error;
use std::fmt;
use std::ops::{Deref, DerefMut};

use floatvec_core::{Scalar, VecError};

use crate::growable::Vector;

/// Consume a container and free its storage.
pub trait Release: Sized {
    /// Release the container.
    ///
    /// On rejection the container is handed back unchanged inside
    /// [`Rejected`].
    fn release(self) -> Result<(), Rejected<Self>>;
}

/// A refused release: the container, untouched, plus the reason.
pub struct Rejected<C> {
    container: C,
    error: VecError,
}

impl<C> Rejected<C> {
    pub(crate) fn new(container: C, error: VecError) -> Self {
        Self { container, error }
    }

    /// Why the release was refused.
    pub fn error(&self) -> &VecError {
        &self.error
    }

    /// Take the container back.
    pub fn into_inner(self) -> C {
        self.container
    }

    /// Split into the container and the error.
    pub fn into_parts(self) -> (C, VecError) {
        (self.container, self.error)
    }
}

impl<C> fmt::Debug for Rejected<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<C> fmt::Display for Rejected<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "release rejected: {}", self.error)
    }
}

impl<C> Error for Rejected<C> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

/// Release the container in `slot` and leave `None` behind.
///
/// Calling this on an already-empty slot is a no-op, so a slot can be
/// released any number of times through this helper. A rejected
/// release puts the container back into the slot.
pub fn release_slot<C: Release>(slot: &mut Option<C>) -> Result<(), VecError> {
    let Some(container) = slot.take() else {
        return Ok(());
    };
    container.release().map_err(|rejected| {
        let (container, error) = rejected.into_parts();
        *slot = Some(container);
        error
    })
}

/// Scope guard that releases a [`Vector`] on every exit path.
///
/// Dereferences to the vector. Use [`VectorGuard::into_inner`] to keep
/// the vector past the guard's scope.
///
/// ```
/// use floatvec::prelude::*;
///
/// fn total(values: &[f32]) -> Result<f32, floatvec::VecError> {
///     let mut v = VectorGuard::new(Vector::<f32>::new(values.len().max(1))?);
///     for &x in values {
///         v.push_back(x)?; // early return still releases the vector
///     }
///     v.sum()
/// }
/// assert_eq!(total(&[1.0, 2.0]).unwrap(), 3.0);
/// ```
pub struct VectorGuard<T: Scalar = f32> {
    slot: Option<Vector<T>>,
}

impl<T: Scalar> VectorGuard<T> {
    /// Take ownership of `vector` until the guard is dropped.
    pub fn new(vector: Vector<T>) -> Self {
        Self { slot: Some(vector) }
    }

    /// Disarm the guard and return the vector.
    pub fn into_inner(mut self) -> Vector<T> {
        self.slot
            .take()
            .expect("guard holds its vector until dropped or disarmed")
    }
}

impl<T: Scalar> Deref for VectorGuard<T> {
    type Target = Vector<T>;

    fn deref(&self) -> &Vector<T> {
        self.slot
            .as_ref()
            .expect("guard holds its vector until dropped or disarmed")
    }
}

impl<T: Scalar> DerefMut for VectorGuard<T> {
    fn deref_mut(&mut self) -> &mut Vector<T> {
        self.slot
            .as_mut()
            .expect("guard holds its vector until dropped or disarmed")
    }
}

impl<T: Scalar> Drop for VectorGuard<T> {
    fn drop(&mut self) {
        // Growable release is never rejected.
        let _ = release_slot(&mut self.slot);
    }
}

impl<T: Scalar> fmt::Debug for VectorGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VectorGuard").field(&self.slot).finish()
    }
}
