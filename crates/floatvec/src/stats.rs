//! Aggregate statistics over scalar slices.
//!
//! All functions read only the slice they are given and fail with
//! [`VecError::Empty`] when it holds fewer elements than they need.

use floatvec_core::{Scalar, VecError};

fn require<T>(values: &[T], required: usize) -> Result<(), VecError> {
    if values.len() < required {
        Err(VecError::Empty {
            required,
            len: values.len(),
        })
    } else {
        Ok(())
    }
}

/// Smallest element.
///
/// A NaN never replaces a running minimum, since every comparison with
/// it is false. A leading NaN is returned only if no later element
/// compares below it.
pub fn min<T: Scalar>(values: &[T]) -> Result<T, VecError> {
    require(values, 1)?;
    Ok(values[1..]
        .iter()
        .fold(values[0], |best, &x| if x < best { x } else { best }))
}

/// Largest element. NaN handling mirrors [`min`].
pub fn max<T: Scalar>(values: &[T]) -> Result<T, VecError> {
    require(values, 1)?;
    Ok(values[1..]
        .iter()
        .fold(values[0], |best, &x| if x > best { x } else { best }))
}

/// Sum of all elements, accumulated left to right.
pub fn sum<T: Scalar>(values: &[T]) -> Result<T, VecError> {
    require(values, 1)?;
    Ok(fold_sum(values))
}

/// Arithmetic mean.
pub fn mean<T: Scalar>(values: &[T]) -> Result<T, VecError> {
    require(values, 1)?;
    Ok(fold_sum(values) / T::from_count(values.len()))
}

/// Population standard deviation: `sqrt(sum((x - mean)^2) / n)`.
///
/// Needs at least two elements. The divisor is the element count, not
/// `n - 1`, so `[2, 4, 4, 6]` yields exactly `sqrt(2)`.
pub fn stdev<T: Scalar>(values: &[T]) -> Result<T, VecError> {
    require(values, 2)?;
    let n = T::from_count(values.len());
    let mean = fold_sum(values) / n;
    let squares = values.iter().fold(T::ZERO, |acc, &x| {
        let d = x - mean;
        acc + d * d
    });
    Ok((squares / n).sqrt())
}

/// Running sums: element `i` of the result is `values[0] + ... + values[i]`.
pub fn cumulative_sum<T: Scalar>(values: &[T]) -> Result<Vec<T>, VecError> {
    require(values, 1)?;
    let mut total = T::ZERO;
    Ok(values
        .iter()
        .map(|&x| {
            total = total + x;
            total
        })
        .collect())
}

fn fold_sum<T: Scalar>(values: &[T]) -> T {
    values.iter().fold(T::ZERO, |acc, &x| acc + x)
}
