//! Bicubic Hermite (PCHIP) interpolation.
//!
//! The cell is mapped onto the unit square and the surface
//!
//! ```text
//! g(t, u) = sum_{i=0..3} sum_{j=0..3} a_ij * t^i * u^j
//! ```
//!
//! is built from the values and precomputed derivatives at its four
//! corners. Evaluation is closed-form; no recursive subdivision is needed.

use tracing::trace;

use super::coefficients::bicubic_coefficients;
use super::common::{clamp_index, Cell};
use super::derivatives::DerivativeField;
use super::Interpolator;
use crate::grid::DataGrid;

/// Corner offsets in field vector order.
const CORNERS: [(isize, isize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Bicubic interpolator
pub struct BicubicInterpolator<'a> {
    grid: &'a DataGrid,
    derivatives: &'a DerivativeField,
}

impl<'a> BicubicInterpolator<'a> {
    pub fn new(grid: &'a DataGrid, derivatives: &'a DerivativeField) -> Self {
        Self { grid, derivatives }
    }

    /// Corner values and derivatives of the cell starting at `index`.
    fn field(&self, index: [usize; 2]) -> [f64; 16] {
        let (rows, cols) = self.grid.shape();
        let mut field = [0.0; 16];
        for (n, &(di, dj)) in CORNERS.iter().enumerate() {
            let i = clamp_index(index[0] as isize + di, rows);
            let j = clamp_index(index[1] as isize + dj, cols);
            field[n] = self.grid.value(i, j);
            field[n + 4] = self.derivatives.fx()[[i, j]];
            field[n + 8] = self.derivatives.fy()[[i, j]];
            field[n + 12] = self.derivatives.fxy()[[i, j]];
        }
        field
    }
}

impl Interpolator for BicubicInterpolator<'_> {
    fn interpolate(&self, cell: &Cell, derivative: Option<&mut [f64; 2]>) -> f64 {
        let [k0, k1] = cell.index;
        let axis0 = self.grid.axis(0);
        let axis1 = self.grid.axis(1);

        let coeff = bicubic_coefficients(&self.field(cell.index));

        let norm0 = axis0.get(k0 + 1) - axis0.get(k0);
        let norm1 = axis1.get(k1 + 1) - axis1.get(k1);
        let t = (cell.location[0] - axis0.get(k0)) / norm0;
        let u = (cell.location[1] - axis1.get(k1)) / norm1;
        trace!(k0, k1, t, u, "bicubic cell");

        let tp = [1.0, t, t * t, t * t * t];
        let up = [1.0, u, u * u, u * u * u];

        let mut value = 0.0;
        for i in 0..4 {
            for j in 0..4 {
                value += coeff[4 * i + j] * tp[i] * up[j];
            }
        }

        if let Some(derivative) = derivative {
            let mut dt = 0.0;
            for i in 1..4 {
                for j in 0..4 {
                    dt += i as f64 * coeff[4 * i + j] * tp[i - 1] * up[j];
                }
            }
            let mut du = 0.0;
            for i in 0..4 {
                for j in 1..4 {
                    du += j as f64 * coeff[4 * i + j] * tp[i] * up[j - 1];
                }
            }
            // back from unit-square to axis units
            derivative[0] = dt / norm0;
            derivative[1] = du / norm1;
        }

        value
    }

    fn name(&self) -> &str {
        "bicubic"
    }
}
