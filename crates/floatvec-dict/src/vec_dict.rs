//! Name-to-vector dictionary.
//!
//! Every stored [`Vector`] is owned by the dictionary. [`VecDict::clear`]
//! releases them all; dropping the dictionary does the same. Vectors
//! taken out with [`VecDict::remove`] become the caller's to release.

use floatvec::{Release, Scalar, Vector, VectorOps};

use crate::config::DictConfig;
use crate::error::DictError;
use crate::table::Table;

/// Maps non-empty names to owned growable vectors.
#[derive(Debug, Default)]
pub struct VecDict<T: Scalar = f32> {
    table: Table<Vector<T>>,
}

impl<T: Scalar> VecDict<T> {
    /// Create an empty dictionary with default sizing.
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    /// Create an empty dictionary with custom sizing.
    pub fn with_config(config: DictConfig) -> Result<Self, DictError> {
        Ok(Self {
            table: Table::with_config(config)?,
        })
    }

    /// Allocate a new empty vector of `capacity` under `name` and
    /// return it.
    ///
    /// Name validation and the duplicate check happen before any
    /// allocation.
    pub fn create(&mut self, name: &str, capacity: usize) -> Result<&mut Vector<T>, DictError> {
        if name.is_empty() {
            return Err(DictError::InvalidKey);
        }
        if self.table.contains_key(name) {
            return Err(DictError::DuplicateKey { key: name.into() });
        }
        self.table.insert(name, Vector::new(capacity)?)?;
        self.get_mut(name)
            .ok_or_else(|| DictError::KeyNotFound { key: name.into() })
    }

    /// Store an existing vector under `name`.
    ///
    /// On failure the vector is dropped.
    pub fn insert(&mut self, name: &str, vector: Vector<T>) -> Result<(), DictError> {
        self.table.insert(name, vector)
    }

    /// Borrow the vector named `name`.
    pub fn get(&self, name: &str) -> Option<&Vector<T>> {
        self.table.get(name)
    }

    /// Mutably borrow the vector named `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vector<T>> {
        self.table.get_mut(name)
    }

    /// Take the vector named `name` out of the dictionary.
    pub fn remove(&mut self, name: &str) -> Result<Vector<T>, DictError> {
        self.table.remove(name)
    }

    /// Append `value` to the vector named `name`.
    pub fn push(&mut self, name: &str, value: T) -> Result<(), DictError> {
        let vector = self
            .table
            .get_mut(name)
            .ok_or_else(|| DictError::KeyNotFound { key: name.into() })?;
        vector.push_back(value)?;
        Ok(())
    }

    /// Whether a vector named `name` exists.
    pub fn contains_key(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Number of stored vectors.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no vectors are stored.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Every name, in unspecified order.
    pub fn names(&self) -> Vec<String> {
        self.table.keys().map(String::from).collect()
    }

    /// Call `f` with each name, vector and the caller context.
    pub fn for_each<C, F>(&self, ctx: &mut C, f: F)
    where
        F: FnMut(&str, &Vector<T>, &mut C),
    {
        self.table.for_each(ctx, f);
    }

    /// Release every stored vector and empty the dictionary.
    pub fn clear(&mut self) {
        let count = self.table.len();
        for (_, vector) in self.table.drain() {
            // Growable release is never rejected.
            let _ = vector.release();
        }
        if count > 0 {
            tracing::trace!(count, "released dictionary vectors");
        }
    }
}

impl<T: Scalar> Drop for VecDict<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
