//! String-keyed dictionaries built on floatvec containers.
//!
//! [`Table`] is a separate-chaining hash table keyed by non-empty
//! strings. Two specialisations sit on top of it:
//!
//! - [`ScalarDict`] maps names to single scalars and can export its
//!   values as a [`Vector`](floatvec::Vector).
//! - [`VecDict`] maps names to owned growable vectors and releases them
//!   all on [`VecDict::clear`] or drop.
//!
//! Iteration order is unspecified for every type in this crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod scalar_dict;
pub mod table;
pub mod vec_dict;

pub use config::DictConfig;
pub use error::DictError;
pub use scalar_dict::ScalarDict;
pub use table::Table;
pub use vec_dict::VecDict;
