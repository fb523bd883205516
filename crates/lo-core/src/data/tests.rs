//! Tests for data module

use approx::assert_abs_diff_eq;
use ndarray::array;

use super::*;

#[test]
fn test_quantile_type7() {
    let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];

    assert_abs_diff_eq!(quantile(&data, 0.0).unwrap(), 1.0);
    assert_abs_diff_eq!(quantile(&data, 1.0).unwrap(), 9.0);
    // sorted: 1 1 2 3 4 5 6 9, idx = 7 * 0.25 = 1.75
    assert_abs_diff_eq!(quantile(&data, 0.25).unwrap(), 1.75, epsilon = 1e-12);
    assert_abs_diff_eq!(quantile(&data, 0.5).unwrap(), 3.5, epsilon = 1e-12);

    let qs = quantiles(&data, &[0.25, 0.75]).unwrap();
    assert_abs_diff_eq!(qs[1], 5.25, epsilon = 1e-12);
}

#[test]
fn test_quantile_errors() {
    assert!(matches!(quantile(&[], 0.5), Err(DataError::Empty(_))));
    assert!(matches!(
        quantile(&[1.0, 2.0], 1.5),
        Err(DataError::InvalidParameter(_))
    ));
}

#[test]
fn test_five_number_and_whiskers() {
    let data: Vec<f64> = (1..=10).map(f64::from).chain([100.0]).collect();

    let stats = five_number(&data).unwrap();
    assert_eq!(stats, [1.0, 3.5, 6.0, 8.5, 100.0]);

    // fence is 8.5 + 1.5 * 5 = 16, so 100 is an outlier
    let (lo, hi) = whisker_range(&data).unwrap();
    assert_eq!(lo, 1.0);
    assert_eq!(hi, 10.0);
}

#[test]
fn test_finite_range_skips_infinities() {
    let data = [f64::NEG_INFINITY, -2.0, 0.5, f64::NAN, 3.0, f64::INFINITY];
    assert_eq!(finite_range(&data), Some((-2.0, 3.0)));
    assert_eq!(finite_range(&[f64::NAN]), None);
}

#[test]
fn test_ppoints() {
    let small = ppoints(5);
    assert_abs_diff_eq!(small[0], (1.0 - 0.375) / 5.25, epsilon = 1e-12);

    let large = ppoints(20);
    assert_abs_diff_eq!(large[0], 0.5 / 20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(large[19], 19.5 / 20.0, epsilon = 1e-12);
}

#[test]
fn test_normal_quantile() {
    assert_abs_diff_eq!(normal_quantile(0.5).unwrap(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(normal_quantile(0.975).unwrap(), 1.959964, epsilon = 1e-5);
    assert_abs_diff_eq!(normal_quantile(0.25).unwrap(), -0.6744898, epsilon = 1e-6);
}

#[test]
fn test_order_ascending_is_stable() {
    let sums = [5.0, 1.0, 5.0, 0.5];
    assert_eq!(order_ascending(&sums), vec![3, 1, 0, 2]);
}

#[test]
fn test_reshaping() {
    let m = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];

    assert_eq!(column_sums(m.view()), array![9.0, 12.0]);
    assert_eq!(flatten_columns(m.view()), vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
    assert_eq!(tile_indices(3, 2), vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);
    assert_eq!(repeat_each(&[1, 2], 3), vec![1, 1, 1, 2, 2, 2]);
    assert_eq!(Shape::of(&m), Shape::new(3, 2));
    assert_eq!(Shape::new(3, 2).to_string(), "3×2");
}

#[test]
fn test_labeled_matrix() {
    let m = LabeledMatrix::new(
        vec!["sp1".to_string(), "sp2".to_string()],
        vec!["Intercept".to_string(), "theta.LV1".to_string()],
        array![[0.5, 1.0], [-0.2, 0.3]],
    )
    .unwrap();

    assert_eq!(m.get("sp2", "theta.LV1"), Some(0.3));
    assert_eq!(m.get("sp3", "Intercept"), None);
    assert!(m.to_string().contains("theta.LV1"));

    let err = LabeledMatrix::new(vec!["a".to_string()], vec![], array![[1.0]]).unwrap_err();
    assert!(matches!(err, DataError::LabelMismatch { .. }));
}

#[test]
fn test_labeled_vector() {
    let v = LabeledVector::new(vec!["sp1".to_string()], array![2.5]).unwrap();
    assert_eq!(v.get("sp1"), Some(2.5));
    assert_eq!(v.len(), 1);
    assert!(LabeledVector::new(vec![], array![1.0]).is_err());
}
