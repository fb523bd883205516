//! Tests for residual sets

use ndarray::array;

use super::*;

#[test]
fn test_mismatched_linear_predictors_are_rejected() {
    let err = ResidualSet::new(Array2::zeros((3, 2)), Array2::zeros((2, 3))).unwrap_err();
    assert!(matches!(err, DataError::DimensionMismatch { .. }));
}

#[test]
fn test_validate_against_model_shape() {
    let set = ResidualSet::new(Array2::zeros((4, 3)), Array2::zeros((4, 3))).unwrap();
    assert!(set.validate_against(Shape::new(4, 3)).is_ok());
    assert!(set.validate_against(Shape::new(3, 4)).is_err());
}

#[test]
fn test_select_responses_reorders_columns() {
    let set = ResidualSet::new(
        array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
        array![[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]],
    )
    .unwrap();

    let picked = set.select_responses(&[2, 0]);
    assert_eq!(picked.residuals(), &array![[3.0, 1.0], [6.0, 4.0]]);
    assert_eq!(picked.linear_predictors(), &array![[0.3, 0.1], [0.6, 0.4]]);
}
