//! Core types and traits for floatvec containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared by the vector engine and the
//! dictionaries: the [`Scalar`] element trait, the error taxonomy,
//! the capacity growth policy, and the [`Container`] query trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod order;
pub mod policy;
pub mod scalar;
pub mod traits;

pub use error::{ErrorKind, OrSentinel, VecError};
pub use order::SortOrder;
pub use policy::GrowthPolicy;
pub use scalar::Scalar;
pub use traits::{alloc, size, Container, StorageKind};
