//! Test data generation utilities.
//!
//! This module provides grids sampled from known analytic surfaces so that
//! interpolated values can be compared against the truth.

use bathygrid::{Axis, DataGrid, InterpType};

/// Nine nodes at 1, 2, ..., 9
pub fn unit_axis() -> Axis {
    Axis::linear(1.0, 1.0, 9).expect("valid axis")
}

/// `f(x, y) = x^3` on a 9x9 grid over `[1, 9] x [1, 9]`.
pub fn cubic_grid(kind: InterpType, edge_limit: bool) -> DataGrid {
    DataGrid::from_fn(unit_axis(), unit_axis(), |x, _| x * x * x)
        .with_interp_type(kind)
        .with_edge_limit(edge_limit)
}

/// Plane `f(x, y) = a + b x + c y`.
pub fn plane(a: f64, b: f64, c: f64) -> impl Fn(f64, f64) -> f64 {
    move |x, y| a + b * x + c * y
}

/// Bathymetry-like grid with a decreasing latitude axis and an increasing
/// longitude axis, sampled from `surface`.
pub fn bathymetry_grid<F>(surface: F, kind: InterpType) -> DataGrid
where
    F: Fn(f64, f64) -> f64,
{
    let latitude = Axis::linear(24.6, -0.4, 22).expect("valid axis");
    let longitude = Axis::linear(-164.4, 0.5, 18).expect("valid axis");
    DataGrid::from_fn(latitude, longitude, surface).with_interp_type(kind)
}
