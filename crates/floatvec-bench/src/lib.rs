//! Benchmark workloads for floatvec.
//!
//! - [`Workload`]: named input sizes shared by every bench
//! - [`random_values`]: seeded uniform values in `[-1, 1)`
//! - [`random_keys`]: seeded dictionary keys

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use floatvec::{Vector, VecError, VectorOps};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A named input size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Workload {
    /// Label used in benchmark ids.
    pub name: &'static str,
    /// Number of elements or entries.
    pub len: usize,
}

/// Fits in L1: exercises the insertion-sort cutoff and doubling growth.
pub const SMALL: Workload = Workload {
    name: "small",
    len: 1_000,
};

/// Crosses the default 1 MiB doubling threshold for `f32`.
pub const LARGE: Workload = Workload {
    name: "large",
    len: 400_000,
};

/// All workloads, smallest first.
pub const WORKLOADS: [Workload; 2] = [SMALL, LARGE];

/// `n` uniform values in `[-1, 1)` from a ChaCha8 stream seeded with `seed`.
pub fn random_values(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            // Top 24 bits give every representable step of an f32 mantissa.
            let unit = (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32;
            unit * 2.0 - 1.0
        })
        .collect()
}

/// A growable vector holding [`random_values`].
pub fn random_vector(n: usize, seed: u64) -> Result<Vector<f32>, VecError> {
    let values = random_values(n, seed);
    let mut v = Vector::new(n.max(1))?;
    for x in values {
        v.push_back(x)?;
    }
    Ok(v)
}

/// `n` distinct keys with seeded hexadecimal suffixes.
pub fn random_keys(n: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| format!("k{i}_{:016x}", rng.next_u64()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_deterministic_and_bounded() {
        let a = random_values(1000, 7);
        let b = random_values(1000, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|&x| (-1.0..1.0).contains(&x)));
        assert_ne!(a, random_values(1000, 8));
    }

    #[test]
    fn random_vector_matches_values() {
        let v = random_vector(64, 3).unwrap();
        assert_eq!(v.as_slice(), random_values(64, 3).as_slice());
    }

    #[test]
    fn keys_are_unique() {
        let keys = random_keys(500, 1);
        let unique: std::collections::HashSet<&String> = keys.iter().collect();
        assert_eq!(unique.len(), 500);
    }

    #[test]
    fn large_workload_crosses_threshold() {
        let policy = floatvec::GrowthPolicy::default();
        assert!(LARGE.len > policy.threshold_elems::<f32>());
        assert!(SMALL.len < policy.threshold_elems::<f32>());
    }
}
