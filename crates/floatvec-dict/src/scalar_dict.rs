//! Name-to-scalar dictionary.

use floatvec::{Scalar, Vector};

use crate::config::DictConfig;
use crate::error::DictError;
use crate::table::Table;

/// Maps non-empty names to single scalar values.
///
/// ```
/// use floatvec_dict::ScalarDict;
///
/// let mut d = ScalarDict::<f32>::new();
/// d.insert("gain", 1.5).unwrap();
/// assert_eq!(d.update("gain", 2.25).unwrap(), 1.5);
/// assert_eq!(d.get("gain"), Some(2.25));
/// ```
#[derive(Debug, Default)]
pub struct ScalarDict<T: Scalar = f32> {
    table: Table<T>,
}

impl<T: Scalar> ScalarDict<T> {
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

    /// Add `key`. Fails with `DuplicateKey` if it exists.
    pub fn insert(&mut self, key: &str, value: T) -> Result<(), DictError> {
        self.table.insert(key, value)
    }

    /// The value under `key`.
    pub fn get(&self, key: &str) -> Option<T> {
        self.table.get(key).copied()
    }

    /// Replace the value under `key`, returning the old one.
    pub fn update(&mut self, key: &str, value: T) -> Result<T, DictError> {
        self.table.update(key, value)
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Result<T, DictError> {
        self.table.remove(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Every key, in unspecified order.
    pub fn keys(&self) -> Vec<String> {
        self.table.keys().map(String::from).collect()
    }

    /// Every value collected into a growable vector, in the same order
    /// as [`keys`](Self::keys) while the dictionary is not modified.
    ///
    /// An empty dictionary yields an empty vector with one slot.
    pub fn values(&self) -> Result<Vector<T>, DictError> {
        let values: Vec<T> = self.table.values().copied().collect();
        Ok(Vector::from_slice(&values)?)
    }

    /// Call `f` with each key, value and the caller context.
    pub fn for_each<C, F>(&self, ctx: &mut C, mut f: F)
    where
        F: FnMut(&str, T, &mut C),
    {
        self.table.for_each(ctx, |key, &value, ctx| f(key, value, ctx));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatvec::{Container, VectorOps};

    #[test]
    fn values_align_with_keys() {
        let mut d = ScalarDict::<f64>::new();
        for (k, v) in [("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)] {
            d.insert(k, v).unwrap();
        }
        let keys = d.keys();
        let values = d.values().unwrap();
        assert_eq!(keys.len(), values.len());
        for (k, &v) in keys.iter().zip(values.iter()) {
            assert_eq!(d.get(k), Some(v));
        }
        assert_eq!(values.sum(), Ok(10.0));
    }

    #[test]
    fn empty_dictionary_values() {
        let d = ScalarDict::<f32>::new();
        let values = d.values().unwrap();
        assert!(values.is_empty());
        assert_eq!(values.capacity(), 1);
        assert!(d.keys().is_empty());
    }

    #[test]
    fn for_each_passes_values_by_copy() {
        let mut d = ScalarDict::<f32>::new();
        d.insert("x", 2.0).unwrap();
        d.insert("y", 5.0).unwrap();
        let mut seen = Vec::new();
        d.for_each(&mut seen, |k, v, acc| acc.push((k.to_owned(), v)));
        seen.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(seen, vec![("x".to_owned(), 2.0), ("y".to_owned(), 5.0)]);
    }

    #[test]
    fn stored_sentinel_is_a_normal_value() {
        let mut d = ScalarDict::<f32>::new();
        d.insert("max", f32::MAX).unwrap();
        assert_eq!(d.get("max"), Some(f32::MAX));
        assert_eq!(d.get("missing"), None);
    }
}
