//! Tolerance-based binary search.

use floatvec_core::{Scalar, VecError};

/// Reject NaN inputs and negative tolerances.
pub fn validate_query<T: Scalar>(value: T, tolerance: T) -> Result<(), VecError> {
    if value.is_nan() || tolerance.is_nan() {
        return Err(VecError::InvalidArgument {
            reason: "search value and tolerance must not be NaN",
        });
    }
    if tolerance < T::ZERO {
        return Err(VecError::InvalidArgument {
            reason: "search tolerance must be non-negative",
        });
    }
    Ok(())
}

/// Binary search over ascending `values` for an element within
/// `tolerance` of `value`.
///
/// Returns the first index the halving search probes whose element
/// satisfies `|x - value| <= tolerance` (or equals `value`, which covers
/// infinities). Among several qualifying elements the result is the one
/// nearest the probe path, not necessarily the lowest index. `Ok(None)`
/// means no probed element qualified.
pub fn binary_search<T: Scalar>(
    values: &[T],
    value: T,
    tolerance: T,
) -> Result<Option<usize>, VecError> {
    validate_query(value, tolerance)?;
    if values.is_empty() {
        return Err(VecError::Empty {
            required: 1,
            len: 0,
        });
    }
    let (mut lo, mut hi) = (0, values.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let x = values[mid];
        if x == value || (x - value).abs() <= tolerance {
            return Ok(Some(mid));
        }
        if x < value {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_at_sorted_index() {
        let v = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        for (i, &x) in v.iter().enumerate() {
            assert_eq!(binary_search(&v, x, 0.0), Ok(Some(i)));
        }
    }

    #[test]
    fn tolerance_miss_is_not_found() {
        let v = [1.0f32, 2.0, 3.0];
        assert_eq!(binary_search(&v, 2.5, 0.1), Ok(None));
    }

    #[test]
    fn tolerance_hit() {
        let v = [1.0f32, 2.0, 3.0];
        assert_eq!(binary_search(&v, 2.05, 0.1), Ok(Some(1)));
    }

    #[test]
    fn negative_tolerance_rejected() {
        let v = [1.0f32];
        assert!(matches!(
            binary_search(&v, 1.0, -0.1),
            Err(VecError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn nan_inputs_rejected() {
        let v = [1.0f32];
        assert!(binary_search(&v, f32::NAN, 0.0).is_err());
        assert!(binary_search(&v, 1.0, f32::NAN).is_err());
    }

    #[test]
    fn empty_slice_reports_empty() {
        let v: [f64; 0] = [];
        assert_eq!(
            binary_search(&v, 1.0, 0.0),
            Err(VecError::Empty { required: 1, len: 0 })
        );
    }

    #[test]
    fn finds_infinity() {
        let v = [1.0f32, 2.0, f32::INFINITY];
        assert_eq!(binary_search(&v, f32::INFINITY, 0.0), Ok(Some(2)));
    }

    #[test]
    fn value_outside_range_not_found() {
        let v = [1.0f32, 2.0, 3.0];
        assert_eq!(binary_search(&v, -10.0, 0.5), Ok(None));
        assert_eq!(binary_search(&v, 10.0, 0.5), Ok(None));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn finds_every_present_value(
                mut values in proptest::collection::vec(-1000i32..1000, 1..100),
                pick in any::<proptest::sample::Index>(),
            ) {
                values.sort_unstable();
                values.dedup();
                let floats: Vec<f32> = values.iter().map(|&v| v as f32).collect();
                let idx = pick.index(floats.len());
                prop_assert_eq!(binary_search(&floats, floats[idx], 0.0), Ok(Some(idx)));
            }

            #[test]
            fn hit_is_within_tolerance(
                mut values in proptest::collection::vec(-1000f32..1000.0, 1..100),
                target in -1000f32..1000.0,
                tol in 0f32..50.0,
            ) {
                values.sort_by(|a, b| a.partial_cmp(b).unwrap());
                if let Ok(Some(i)) = binary_search(&values, target, tol) {
                    prop_assert!((values[i] - target).abs() <= tol);
                }
            }
        }
    }
}
