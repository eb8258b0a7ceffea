//! Finite-difference derivative fields for bicubic interpolation.
//!
//! [`DerivativeField::compute`] estimates the x, y and mixed xy partials at
//! every grid node once, so that each bicubic query only has to read them.
//!
//! Every node falls into one of nine stencil regions: four corners, four
//! edges and the interior. Along each axis a node is either the first node
//! (forward difference), the last node (backward difference) or an interior
//! node (centered difference); the region is the pair of both positions.
//! Differences are divided by a dimensionless normalization increment
//!
//! ```text
//! inc(k) = 2                                        k = 0 or k = n - 1
//! inc(k) = (spacing(k-1) + spacing(k+1)) / spacing(k)   otherwise
//! ```
//!
//! which makes the results slopes per cell rather than per unit coordinate,
//! the scale the unit-square Hermite system expects.

use ndarray::Array2;
use tracing::trace;

use crate::axis::Axis;
use crate::grid::DataGrid;

/// Position of a node along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    First,
    Interior,
    Last,
}

impl AxisPosition {
    /// First is checked before Last.
    pub fn classify(index: usize, size: usize) -> Self {
        if index == 0 {
            AxisPosition::First
        } else if index + 1 == size {
            AxisPosition::Last
        } else {
            AxisPosition::Interior
        }
    }

    /// Lower and upper node of the difference taken at `index`.
    #[inline]
    pub fn neighbors(self, index: usize) -> (usize, usize) {
        match self {
            AxisPosition::First => (index, index + 1),
            AxisPosition::Interior => (index - 1, index + 1),
            AxisPosition::Last => (index - 1, index),
        }
    }
}

/// One of the nine stencil regions of a 2-D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StencilRegion {
    pub row: AxisPosition,
    pub col: AxisPosition,
}

impl StencilRegion {
    pub fn classify(row: usize, col: usize, shape: (usize, usize)) -> Self {
        Self {
            row: AxisPosition::classify(row, shape.0),
            col: AxisPosition::classify(col, shape.1),
        }
    }

    pub fn name(&self) -> &'static str {
        use AxisPosition::*;
        match (self.row, self.col) {
            (First, First) => "top-left corner",
            (First, Last) => "top-right corner",
            (Last, First) => "bottom-left corner",
            (Last, Last) => "bottom-right corner",
            (First, Interior) => "top row",
            (Last, Interior) => "bottom row",
            (Interior, First) => "left column",
            (Interior, Last) => "right column",
            (Interior, Interior) => "interior",
        }
    }

    pub fn is_corner(&self) -> bool {
        self.row != AxisPosition::Interior && self.col != AxisPosition::Interior
    }
}

/// Normalization increment for every node of `axis`.
pub fn normalization_increments(axis: &Axis) -> Vec<f64> {
    let last = axis.size() - 1;
    (0..=last)
        .map(|k| {
            if k == 0 || k == last {
                2.0
            } else {
                (axis.increment(k - 1) + axis.increment(k + 1)) / axis.increment(k)
            }
        })
        .collect()
}

/// Partial derivatives of the grid samples at every node.
#[derive(Debug, Clone)]
pub struct DerivativeField {
    fx: Array2<f64>,
    fy: Array2<f64>,
    fxy: Array2<f64>,
}

impl DerivativeField {
    pub fn compute(grid: &DataGrid) -> Self {
        let shape = grid.shape();
        let inc_x = normalization_increments(grid.axis(0));
        let inc_y = normalization_increments(grid.axis(1));

        let mut fx = Array2::zeros(shape);
        let mut fy = Array2::zeros(shape);
        let mut fxy = Array2::zeros(shape);

        for i in 0..shape.0 {
            for j in 0..shape.1 {
                let region = StencilRegion::classify(i, j, shape);
                let (i0, i1) = region.row.neighbors(i);
                let (j0, j1) = region.col.neighbors(j);
                trace!(row = i, col = j, region = region.name(), "derivative stencil");

                fx[[i, j]] = (grid.value(i1, j) - grid.value(i0, j)) / inc_x[i];
                fy[[i, j]] = (grid.value(i, j1) - grid.value(i, j0)) / inc_y[j];
                fxy[[i, j]] = (grid.value(i1, j1) - grid.value(i1, j0) - grid.value(i0, j1)
                    + grid.value(i0, j0))
                    / (inc_x[i] * inc_y[j]);
            }
        }

        Self { fx, fy, fxy }
    }

    /// Partial along axis 0.
    pub fn fx(&self) -> &Array2<f64> {
        &self.fx
    }

    /// Partial along axis 1.
    pub fn fy(&self) -> &Array2<f64> {
        &self.fy
    }

    /// Mixed partial.
    pub fn fxy(&self) -> &Array2<f64> {
        &self.fxy
    }

    pub fn shape(&self) -> (usize, usize) {
        self.fx.dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 grid with a non-uniform axis 0 so that interior increments differ.
    fn sample_grid() -> DataGrid {
        let axis0 = Axis::new(vec![0.0, 1.0, 3.0, 4.0]).unwrap();
        let axis1 = Axis::linear(0.0, 1.0, 4).unwrap();
        let values = Array2::from_shape_fn((4, 4), |(i, j)| {
            let (i, j) = (i as f64, j as f64);
            10.0 * i + j * j + i * j
        });
        DataGrid::new(axis0, axis1, values).unwrap()
    }

    #[test]
    fn test_normalization_increments() {
        let axis = Axis::new(vec![0.0, 1.0, 3.0, 4.0]).unwrap();
        assert_eq!(normalization_increments(&axis), vec![2.0, 1.0, 3.0, 2.0]);

        let axis = Axis::linear(5.0, -0.5, 5).unwrap();
        assert_eq!(normalization_increments(&axis), vec![2.0; 5]);
    }

    #[test]
    fn test_region_classification() {
        let shape = (4, 4);
        assert_eq!(StencilRegion::classify(0, 0, shape).name(), "top-left corner");
        assert_eq!(StencilRegion::classify(0, 3, shape).name(), "top-right corner");
        assert_eq!(StencilRegion::classify(3, 0, shape).name(), "bottom-left corner");
        assert_eq!(StencilRegion::classify(3, 3, shape).name(), "bottom-right corner");
        assert_eq!(StencilRegion::classify(0, 2, shape).name(), "top row");
        assert_eq!(StencilRegion::classify(3, 1, shape).name(), "bottom row");
        assert_eq!(StencilRegion::classify(1, 0, shape).name(), "left column");
        assert_eq!(StencilRegion::classify(2, 3, shape).name(), "right column");
        assert_eq!(StencilRegion::classify(2, 1, shape).name(), "interior");

        assert!(StencilRegion::classify(3, 0, shape).is_corner());
        assert!(!StencilRegion::classify(3, 1, shape).is_corner());
    }

    #[test]
    fn test_all_stencil_regions() {
        let field = DerivativeField::compute(&sample_grid());
        assert_eq!(field.shape(), (4, 4));

        // (row, col, fx, fy, fxy)
        let expected = [
            (0, 0, 5.0, 0.5, 0.25),
            (0, 3, 6.5, 2.5, 0.25),
            (3, 0, 5.0, 2.0, 0.25),
            (3, 3, 6.5, 4.0, 0.25),
            (0, 1, 5.5, 2.0, 0.5),
            (1, 0, 20.0, 1.0, 1.0),
            (2, 3, 26.0 / 3.0, 3.5, 1.0 / 3.0),
            (3, 2, 6.0, 7.0, 0.5),
            (1, 1, 22.0, 3.0, 2.0),
            (2, 2, 8.0, 6.0, 2.0 / 3.0),
        ];

        for (i, j, fx, fy, fxy) in expected {
            assert!((field.fx()[[i, j]] - fx).abs() < 1e-12, "fx at ({}, {})", i, j);
            assert!((field.fy()[[i, j]] - fy).abs() < 1e-12, "fy at ({}, {})", i, j);
            assert!((field.fxy()[[i, j]] - fxy).abs() < 1e-12, "fxy at ({}, {})", i, j);
        }
    }

    #[test]
    fn test_constant_grid_has_zero_derivatives() {
        let axis = Axis::linear(0.0, 1.0, 5).unwrap();
        let grid = DataGrid::from_fn(axis.clone(), axis, |_, _| 3.0);
        let field = DerivativeField::compute(&grid);
        assert!(field.fx().iter().all(|&v| v == 0.0));
        assert!(field.fy().iter().all(|&v| v == 0.0));
        assert!(field.fxy().iter().all(|&v| v == 0.0));
    }
}
