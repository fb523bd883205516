//! Tests for graphics parameters

use super::*;

#[test]
fn test_automatic_grid() {
    let params = PlotParams::default();
    assert_eq!(params.grid_for(1), (1, 1));
    assert_eq!(params.grid_for(2), (1, 2));
    assert_eq!(params.grid_for(4), (2, 2));
    assert_eq!(params.grid_for(5), (2, 3));
}

#[test]
fn test_explicit_grid_wins() {
    let params = PlotParams {
        grid: Some((5, 1)),
        ..PlotParams::default()
    };
    assert_eq!(params.grid_for(5), (5, 1));
}
