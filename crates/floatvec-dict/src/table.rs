//! Separate-chaining hash table keyed by strings.
//!
//! Keys are hashed with xxh3 and mapped onto a bucket array by modulo.
//! Each bucket is a short inline chain; the bucket array doubles before
//! an insertion would push `len / buckets` past the configured maximum
//! load factor.

use std::fmt;

use smallvec::SmallVec;
use xxhash_rust::xxh3::xxh3_64;

use crate::config::DictConfig;
use crate::error::DictError;

struct Entry<V> {
    key: Box<str>,
    value: V,
}

/// Most chains hold zero to two entries at the load factors allowed by
/// [`DictConfig`].
type Bucket<V> = SmallVec<[Entry<V>; 2]>;

/// A hash table from non-empty string keys to `V`.
pub struct Table<V> {
    buckets: Vec<Bucket<V>>,
    len: usize,
    config: DictConfig,
}

impl<V> Table<V> {
    /// Create an empty table with [`DictConfig::default`].
    pub fn new() -> Self {
        Self::build(DictConfig::default())
    }

    /// Create an empty table with a validated custom configuration.
    pub fn with_config(config: DictConfig) -> Result<Self, DictError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: DictConfig) -> Self {
        Self {
            buckets: empty_buckets(config.initial_buckets),
            len: 0,
            config,
        }
    }

    /// The configuration this table was built with.
    pub fn config(&self) -> DictConfig {
        self.config
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current size of the bucket array.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// `len / bucket_count`.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Add a new entry. Fails with `DuplicateKey` if `key` is present
    /// and with `InvalidKey` if it is empty; the table is unchanged on
    /// failure.
    pub fn insert(&mut self, key: &str, value: V) -> Result<(), DictError> {
        validate_key(key)?;
        if self.contains_key(key) {
            return Err(DictError::DuplicateKey { key: key.into() });
        }
        self.reserve_one();
        let index = self.bucket_of(key);
        self.buckets[index].push(Entry {
            key: key.into(),
            value,
        });
        self.len += 1;
        Ok(())
    }

    /// Borrow the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key).map(|entry| &entry.value)
    }

    /// Mutably borrow the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_of(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| &*entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Replace the value under an existing key, returning the old one.
    pub fn update(&mut self, key: &str, value: V) -> Result<V, DictError> {
        match self.get_mut(key) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(not_found(key)),
        }
    }

    /// Remove `key` and return its value.
    pub fn remove(&mut self, key: &str) -> Result<V, DictError> {
        let index = self.bucket_of(key);
        let bucket = &mut self.buckets[index];
        let pos = bucket
            .iter()
            .position(|entry| &*entry.key == key)
            .ok_or_else(|| not_found(key))?;
        self.len -= 1;
        Ok(bucket.swap_remove(pos).value)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Iterate over keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Iterate over values.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (&*entry.key, &entry.value))
    }

    /// Call `f` once per entry with the key, the value and `ctx`.
    ///
    /// `ctx` threads caller state through the walk. Order is
    /// unspecified.
    pub fn for_each<C, F>(&self, ctx: &mut C, mut f: F)
    where
        F: FnMut(&str, &V, &mut C),
    {
        for (key, value) in self.iter() {
            f(key, value, ctx);
        }
    }

    /// Remove every entry and shrink back to the initial bucket count.
    ///
    /// The entries are returned by value; dropping the iterator drops
    /// whatever it has not yielded.
    pub fn drain(&mut self) -> impl Iterator<Item = (String, V)> {
        let buckets = std::mem::replace(
            &mut self.buckets,
            empty_buckets(self.config.initial_buckets),
        );
        self.len = 0;
        buckets
            .into_iter()
            .flatten()
            .map(|entry| (String::from(entry.key), entry.value))
    }

    fn find(&self, key: &str) -> Option<&Entry<V>> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|entry| &*entry.key == key)
    }

    fn bucket_of(&self, key: &str) -> usize {
        (xxh3_64(key.as_bytes()) % self.buckets.len() as u64) as usize
    }

    /// Grow the bucket array so that one more entry stays within the
    /// maximum load factor.
    fn reserve_one(&mut self) {
        let needed = (self.len + 1) as f64;
        let mut target = self.buckets.len();
        while needed > self.config.max_load_factor * target as f64 {
            match target.checked_mul(2) {
                Some(next) => target = next,
                None => break,
            }
        }
        if target != self.buckets.len() {
            self.rehash(target);
        }
    }

    fn rehash(&mut self, bucket_count: usize) {
        let old = std::mem::replace(&mut self.buckets, empty_buckets(bucket_count));
        let old_count = old.len();
        for entry in old.into_iter().flatten() {
            let index = self.bucket_of(&entry.key);
            self.buckets[index].push(entry);
        }
        tracing::debug!(
            old = old_count,
            new = bucket_count,
            len = self.len,
            "dictionary resized"
        );
    }
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Table<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn empty_buckets<V>(count: usize) -> Vec<Bucket<V>> {
    (0..count).map(|_| Bucket::new()).collect()
}

fn validate_key(key: &str) -> Result<(), DictError> {
    if key.is_empty() {
        Err(DictError::InvalidKey)
    } else {
        Ok(())
    }
}

fn not_found(key: &str) -> DictError {
    DictError::KeyNotFound { key: key.into() }
}
