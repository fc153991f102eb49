//! Reference datasets.
//!
//! Deterministic inputs with known answers, shared by the integration
//! tests and the benches so both exercise the same shapes.

/// Dataset whose population standard deviation is exactly `sqrt(2)`.
pub const STDEV_DATASET: [f64; 4] = [2.0, 4.0, 4.0, 6.0];

/// Input for the running-sum check.
pub const CUM_SUM_INPUT: [f32; 4] = [1.0, -2.0, 3.0, -4.0];

/// Running sums of [`CUM_SUM_INPUT`].
pub const CUM_SUM_EXPECTED: [f32; 4] = [1.0, -1.0, 2.0, -2.0];

/// `n` values in a scrambled but reproducible order.
///
/// Uses a multiplicative permutation modulo a prime larger than `n`,
/// so values are distinct when `n < 1_000_003`.
pub fn scrambled(n: usize) -> Vec<f32> {
    const PRIME: u64 = 1_000_003;
    (0..n as u64)
        .map(|i| ((i * 7919) % PRIME) as f32)
        .collect()
}

/// `0.0, 1.0, ..., n - 1`.
pub fn ascending(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32).collect()
}

/// `n - 1, ..., 1.0, 0.0`.
pub fn descending(n: usize) -> Vec<f32> {
    (0..n).rev().map(|i| i as f32).collect()
}

/// Organ-pipe input: rises to the middle then falls. A classic
/// quicksort adversary for naive pivot choices.
pub fn organ_pipe(n: usize) -> Vec<f32> {
    (0..n).map(|i| i.min(n.saturating_sub(1 + i)) as f32).collect()
}

/// `count` distinct dictionary keys with a shared prefix.
pub fn keys(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}{i}")).collect()
}
