//! Growable and fixed-capacity vectors of floating-point scalars.
//!
//! Two storage kinds share one operation surface:
//!
//! ```text
//! VectorOps<T> (push/pop/insert, sort, search, statistics)
//! └── Storage<T> (sealed: slot access, growth)
//!     ├── Vector<T>          heap buffer, grows per GrowthPolicy
//!     └── FixedVector<'a, T> caller buffer, never reallocates
//! ```
//!
//! Every slot past the logical length holds zero. Operations validate
//! their arguments before touching any state, so a failed call leaves
//! the container exactly as it was.
//!
//! # Threading
//!
//! Containers carry no internal locking. Mutation goes through
//! `&mut self`; sharing a container across threads requires external
//! synchronization.
//!
//! # Example
//!
//! ```
//! use floatvec::prelude::*;
//!
//! let mut v = Vector::<f32>::new(4).unwrap();
//! for x in [3.0, 1.0, 2.0] {
//!     v.push_back(x).unwrap();
//! }
//! v.sort(SortOrder::Ascending);
//! assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
//! assert_eq!(v.binary_search(2.0, 0.0, false).unwrap(), Some(1));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixed;
pub mod growable;
pub mod guard;
pub mod ops;
pub mod search;
pub mod sort;
pub mod stats;
mod storage;

pub use fixed::FixedVector;
pub use floatvec_core::{
    alloc, size, Container, ErrorKind, GrowthPolicy, OrSentinel, Scalar, SortOrder, StorageKind,
    VecError,
};
pub use growable::Vector;
pub use guard::{release_slot, Rejected, Release, VectorGuard};
pub use ops::VectorOps;

/// Everything needed to build and operate on vectors.
pub mod prelude {
    pub use crate::{
        Container, FixedVector, OrSentinel, Release, SortOrder, Vector, VectorGuard, VectorOps,
    };
}
