//! Nearest neighbor interpolation.
//!
//! This method selects the value of the nearest grid point.
//! It's the simplest interpolation method, offering the fastest
//! performance but with less smooth results compared to higher-order methods.

use super::common::{cell_fraction, Cell};
use super::Interpolator;
use crate::grid::DataGrid;

/// Nearest neighbor interpolator
pub struct NearestInterpolator<'a> {
    grid: &'a DataGrid,
}

impl<'a> NearestInterpolator<'a> {
    pub fn new(grid: &'a DataGrid) -> Self {
        Self { grid }
    }
}

impl Interpolator for NearestInterpolator<'_> {
    fn interpolate(&self, cell: &Cell, derivative: Option<&mut [f64; 2]>) -> f64 {
        let mut node = [0usize; 2];
        for (dim, n) in node.iter_mut().enumerate() {
            let k = cell.index[dim];
            let u = cell_fraction(self.grid.axis(dim), k, cell.location[dim]);
            *n = if u < 0.5 { k } else { k + 1 };
        }

        // piecewise constant surface
        if let Some(derivative) = derivative {
            *derivative = [0.0, 0.0];
        }

        self.grid.value(node[0], node[1])
    }

    fn name(&self) -> &str {
        "nearest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use ndarray::array;

    fn grid_3x3() -> DataGrid {
        // 3x3 grid with values increasing from left to right, top to bottom
        let axis = Axis::linear(0.0, 1.0, 3).unwrap();
        let values = array![
            [1.0, 2.0, 3.0], // row 0
            [4.0, 5.0, 6.0], // row 1
            [7.0, 8.0, 9.0], // row 2
        ];
        DataGrid::new(axis.clone(), axis, values).unwrap()
    }

    fn cell(index: [usize; 2], location: [f64; 2]) -> Cell {
        Cell { index, location }
    }

    #[test]
    fn test_nearest_interpolation_2d() {
        let grid = grid_3x3();
        let interpolator = NearestInterpolator::new(&grid);

        // Corners
        assert_eq!(interpolator.interpolate(&cell([0, 0], [0.0, 0.0]), None), 1.0);
        assert_eq!(interpolator.interpolate(&cell([0, 1], [0.0, 2.0]), None), 3.0);
        assert_eq!(interpolator.interpolate(&cell([1, 0], [2.0, 0.0]), None), 7.0);
        assert_eq!(interpolator.interpolate(&cell([1, 1], [2.0, 2.0]), None), 9.0);

        // Center
        assert_eq!(interpolator.interpolate(&cell([1, 1], [1.0, 1.0]), None), 5.0);

        // Fractional locations
        assert_eq!(interpolator.interpolate(&cell([0, 1], [0.7, 1.3]), None), 5.0);
        assert_eq!(interpolator.interpolate(&cell([1, 1], [1.2, 1.7]), None), 6.0);

        // Exactly halfway rounds up
        assert_eq!(interpolator.interpolate(&cell([0, 0], [0.5, 0.5]), None), 5.0);
    }

    #[test]
    fn test_nearest_extrapolation_uses_boundary_nodes() {
        let grid = grid_3x3();
        let interpolator = NearestInterpolator::new(&grid);

        assert_eq!(interpolator.interpolate(&cell([0, 0], [-3.0, -1.0]), None), 1.0);
        assert_eq!(interpolator.interpolate(&cell([1, 1], [7.0, 4.0]), None), 9.0);
    }

    #[test]
    fn test_nearest_derivative_is_zero() {
        let grid = grid_3x3();
        let interpolator = NearestInterpolator::new(&grid);

        let mut derivative = [f64::NAN; 2];
        let value = interpolator.interpolate(&cell([0, 0], [0.3, 0.6]), Some(&mut derivative));
        assert_eq!(value, 2.0);
        assert_eq!(derivative, [0.0, 0.0]);
        assert_eq!(interpolator.name(), "nearest");
    }
}
