//! Dictionary sizing configuration.

use crate::error::DictError;

/// Bucket sizing for a [`Table`](crate::Table).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DictConfig {
    /// Bucket count of a freshly created table. Must be non-zero.
    pub initial_buckets: usize,
    /// Load factor (`len / buckets`) above which the bucket array
    /// doubles. Must lie in `(0, 1]`.
    pub max_load_factor: f64,
}

impl DictConfig {
    /// Default initial bucket count.
    pub const DEFAULT_INITIAL_BUCKETS: usize = 3;

    /// Default maximum load factor.
    pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.7;

    /// Create a validated configuration.
    pub fn new(initial_buckets: usize, max_load_factor: f64) -> Result<Self, DictError> {
        let config = Self {
            initial_buckets,
            max_load_factor,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants documented on each field.
    pub fn validate(&self) -> Result<(), DictError> {
        if self.initial_buckets == 0 {
            return Err(DictError::InvalidConfig {
                reason: "initial_buckets must be non-zero".into(),
            });
        }
        if !(self.max_load_factor > 0.0 && self.max_load_factor <= 1.0) {
            return Err(DictError::InvalidConfig {
                reason: format!(
                    "max_load_factor must be in (0, 1], got {}",
                    self.max_load_factor
                ),
            });
        }
        Ok(())
    }
}

impl Default for DictConfig {
    fn default() -> Self {
        Self {
            initial_buckets: Self::DEFAULT_INITIAL_BUCKETS,
            max_load_factor: Self::DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}
