//! Bilinear interpolation.
//!
//! This method performs linear interpolation in two dimensions using
//! the four corners of the enclosing cell.

use super::common::Cell;
use super::Interpolator;
use crate::grid::DataGrid;

/// Bilinear interpolator
pub struct BilinearInterpolator<'a> {
    grid: &'a DataGrid,
}

impl<'a> BilinearInterpolator<'a> {
    pub fn new(grid: &'a DataGrid) -> Self {
        Self { grid }
    }
}

impl Interpolator for BilinearInterpolator<'_> {
    fn interpolate(&self, cell: &Cell, derivative: Option<&mut [f64; 2]>) -> f64 {
        let [k0, k1] = cell.index;
        let [x, y] = cell.location;
        let axis0 = self.grid.axis(0);
        let axis1 = self.grid.axis(1);

        let (x1, x2) = (axis0.get(k0), axis0.get(k0 + 1));
        let (y1, y2) = (axis1.get(k1), axis1.get(k1 + 1));
        let f11 = self.grid.value(k0, k1);
        let f21 = self.grid.value(k0 + 1, k1);
        let f12 = self.grid.value(k0, k1 + 1);
        let f22 = self.grid.value(k0 + 1, k1 + 1);
        let area = (x2 - x1) * (y2 - y1);

        if let Some(derivative) = derivative {
            derivative[0] = ((f21 - f11) * (y2 - y) + (f22 - f12) * (y - y1)) / area;
            derivative[1] = ((f12 - f11) * (x2 - x) + (f22 - f21) * (x - x1)) / area;
        }

        (f11 * (x2 - x) * (y2 - y)
            + f21 * (x - x1) * (y2 - y)
            + f12 * (x2 - x) * (y - y1)
            + f22 * (x - x1) * (y - y1))
            / area
    }

    fn name(&self) -> &str {
        "bilinear"
    }
}
