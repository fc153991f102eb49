//! In-place quicksort for scalar slices.
//!
//! Median-of-three pivot (first, middle, last), three-way partition,
//! and insertion sort once a partition is shorter than the threshold.
//! The loop always recurses into the smaller side and iterates on the
//! larger one, so stack depth stays O(log n) on any input.
//!
//! The sort is not stable. NaN placement is implementation-defined:
//! element count is preserved and the non-NaN elements end up in order,
//! but where the NaNs land among them is unspecified.

use std::cmp::Ordering;

use floatvec_core::{Scalar, SortOrder};

/// Partitions shorter than this are finished with insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = 10;

/// Sort `values` in place in the given direction.
pub fn sort<T: Scalar>(values: &mut [T], order: SortOrder) {
    sort_with_threshold(values, order, INSERTION_SORT_THRESHOLD);
}

/// Sort with a custom insertion-sort cutoff.
///
/// A threshold below 2 is treated as 2.
pub fn sort_with_threshold<T: Scalar>(values: &mut [T], order: SortOrder, threshold: usize) {
    let threshold = threshold.max(2);
    let mut part = values;
    loop {
        if part.len() < threshold {
            insertion_sort(part, order);
            return;
        }
        let (lt, gt) = partition(part, order);
        let (left, rest) = std::mem::take(&mut part).split_at_mut(lt);
        let right = &mut rest[gt - lt..];
        if left.len() < right.len() {
            sort_with_threshold(left, order, threshold);
            part = right;
        } else {
            sort_with_threshold(right, order, threshold);
            part = left;
        }
    }
}

/// Straight insertion sort. NaNs sink to the end of the slice.
pub fn insertion_sort<T: Scalar>(values: &mut [T], order: SortOrder) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && goes_before(key, values[j - 1], order) {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}

/// `order.precedes`, extended so every real value goes before NaN.
fn goes_before<T: Scalar>(a: T, b: T, order: SortOrder) -> bool {
    if b.is_nan() {
        !a.is_nan()
    } else {
        order.precedes(a, b)
    }
}

/// Index of the median of `values[a]`, `values[b]`, `values[c]`.
fn median_of_three<T: Scalar>(
    values: &[T],
    a: usize,
    b: usize,
    c: usize,
    order: SortOrder,
) -> usize {
    let (x, y, z) = (values[a], values[b], values[c]);
    if order.precedes(x, y) {
        if order.precedes(y, z) {
            b
        } else if order.precedes(x, z) {
            c
        } else {
            a
        }
    } else if order.precedes(x, z) {
        a
    } else if order.precedes(y, z) {
        c
    } else {
        b
    }
}

/// Where `x` belongs relative to `pivot`.
///
/// A NaN pivot collects only NaNs; everything else goes before it. A
/// NaN element against a real pivot joins the equal block, which is
/// never recursed into.
fn classify<T: Scalar>(x: T, pivot: T, order: SortOrder) -> Ordering {
    if pivot.is_nan() {
        return if x.is_nan() {
            Ordering::Equal
        } else {
            Ordering::Less
        };
    }
    if order.precedes(x, pivot) {
        Ordering::Less
    } else if order.precedes(pivot, x) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Dutch-flag partition around a median-of-three pivot.
///
/// Returns `(lt, gt)` with `[0, lt)` before the pivot, `[lt, gt)` equal
/// to it and `[gt, len)` after it. The equal block is never empty.
fn partition<T: Scalar>(values: &mut [T], order: SortOrder) -> (usize, usize) {
    let last = values.len() - 1;
    let pivot = values[median_of_three(values, 0, last / 2, last, order)];
    let (mut lt, mut i, mut gt) = (0, 0, values.len());
    while i < gt {
        match classify(values[i], pivot, order) {
            Ordering::Less => {
                values.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                values.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}
