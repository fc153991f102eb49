//! Test fixtures and assertion helpers for floatvec development.
//!
//! Builders for populated vectors of either storage kind, checks for the
//! zero-tail and ordering invariants, and the reference datasets used
//! across the integration tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use floatvec::{FixedVector, Scalar, SortOrder, Vector, VectorOps};

/// Build a growable vector holding `values`, grown one push at a time
/// from a single slot so the growth path is exercised.
pub fn grown_vector<T: Scalar>(values: &[T]) -> Vector<T> {
    let mut v = Vector::new(1).expect("one-slot vector");
    for &x in values {
        v.push_back(x).expect("growable push");
    }
    v
}

/// Wrap `buffer` and fill it with `values`.
///
/// # Panics
///
/// Panics if `values` does not fit in `buffer`.
pub fn fixed_vector<'a, T: Scalar>(buffer: &'a mut [T], values: &[T]) -> FixedVector<'a, T> {
    let mut v = FixedVector::new(buffer).expect("non-empty buffer");
    for &x in values {
        v.push_back(x).expect("values fit in the fixed buffer");
    }
    v
}

/// Assert every slot past the logical length is zero.
#[track_caller]
pub fn assert_zero_tail<T: Scalar, V: VectorOps<T>>(v: &V) {
    let tail = v.spare_capacity();
    assert!(
        tail.iter().all(|&x| x == T::ZERO),
        "slots past len {} are not zero: {tail:?}",
        v.len()
    );
}

/// Whether `values` is ordered by `order`, ignoring NaNs.
pub fn is_sorted_by<T: Scalar>(values: &[T], order: SortOrder) -> bool {
    let real: Vec<T> = values.iter().copied().filter(|x| !x.is_nan()).collect();
    real.windows(2).all(|w| !order.precedes(w[1], w[0]))
}

/// Assert two floats agree to within `eps`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() <= eps,
        "expected {expected}, got {actual} (eps {eps})"
    );
}
