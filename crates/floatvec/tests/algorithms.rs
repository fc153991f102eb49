//! Sorting, search and statistics through the public operation surface.

use floatvec::prelude::*;
use floatvec::ErrorKind;
use floatvec_test_utils::fixtures::{
    ascending, descending, organ_pipe, scrambled, CUM_SUM_EXPECTED, CUM_SUM_INPUT, STDEV_DATASET,
};
use floatvec_test_utils::{assert_close, fixed_vector, grown_vector, is_sorted_by};

#[test]
fn sorts_adversarial_shapes_both_directions() {
    for input in [ascending(5000), descending(5000), organ_pipe(5000), scrambled(5000)] {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let mut v = grown_vector(&input);
            v.sort(order);
            assert!(is_sorted_by(v.as_slice(), order));
            assert_eq!(v.len(), input.len());
        }
    }
}

#[test]
fn ascending_then_descending_reverses() {
    let mut v = grown_vector(&scrambled(300));
    v.sort(SortOrder::Ascending);
    let mut expected = v.to_vec();
    expected.reverse();
    v.sort(SortOrder::Descending);
    assert_eq!(v.to_vec(), expected);
}

#[test]
fn sort_fixed_storage_in_place() {
    let mut buf = [0.0f32; 16];
    let mut v = fixed_vector(&mut buf, &[3.0, 1.0, 2.0]);
    v.sort(SortOrder::Ascending);
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    drop(v);
    assert_eq!(&buf[..4], &[1.0, 2.0, 3.0, 0.0]);
}

#[test]
fn nan_elements_are_kept() {
    let mut v = grown_vector(&[3.0f32, f32::NAN, 1.0, f32::NAN, 2.0]);
    v.sort(SortOrder::Ascending);
    assert_eq!(v.iter().filter(|x| x.is_nan()).count(), 2);
    assert!(is_sorted_by(v.as_slice(), SortOrder::Ascending));
}

#[test]
fn exact_search_finds_sorted_index() {
    let mut v = grown_vector(&scrambled(257));
    v.sort(SortOrder::Ascending);
    let sorted = v.to_vec();
    for (i, &x) in sorted.iter().enumerate() {
        assert_eq!(v.binary_search(x, 0.0, false), Ok(Some(i)));
    }
}

#[test]
fn tolerance_search() {
    let mut v = grown_vector(&[1.0f32, 2.0, 3.0]);
    assert_eq!(v.binary_search(2.5, 0.1, false), Ok(None));
    assert_eq!(v.binary_search(2.5, 0.1, false).or_sentinel(), usize::MAX);
    assert_eq!(v.binary_search(2.95, 0.1, false), Ok(Some(2)));
}

#[test]
fn search_on_empty_vector() {
    let mut v = Vector::<f32>::new(1).unwrap();
    assert_eq!(
        v.binary_search(1.0, 0.0, true).unwrap_err().kind(),
        ErrorKind::Empty
    );
}

#[test]
fn statistics_reference_values() {
    let v = grown_vector(&STDEV_DATASET);
    assert_close(v.stdev().unwrap(), 2.0f64.sqrt(), 1e-12);
    assert_eq!(v.average(), Ok(4.0));

    let flat = grown_vector(&[2.0f64, 2.0, 2.0]);
    assert_eq!(flat.stdev(), Ok(0.0));

    let one = grown_vector(&[2.0f64]);
    assert_eq!(one.stdev().unwrap_err().kind(), ErrorKind::Empty);
    assert_eq!(one.stdev().or_sentinel(), f64::MAX);
}

#[test]
fn cumulative_sum_reference_values() {
    let v = grown_vector(&CUM_SUM_INPUT);
    let sums = v.cum_sum().unwrap();
    assert_eq!(sums.as_slice(), &CUM_SUM_EXPECTED);
    assert_eq!(sums.len(), v.len());
}

#[test]
fn aggregates_fail_on_empty() {
    let v = Vector::<f32>::new(4).unwrap();
    for result in [v.min(), v.max(), v.sum(), v.average(), v.stdev()] {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Empty);
    }
    assert_eq!(v.cum_sum().unwrap_err().kind(), ErrorKind::Empty);
}
