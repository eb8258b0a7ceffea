//! The 2-D data grid consumed by the fast interpolation engine.
//!
//! A [`DataGrid`] pairs two [`Axis`] objects with an R×C array of samples and
//! carries the per-axis interpolation settings. Values are stored row-major:
//! the row index runs along axis 0 and the column index along axis 1.

use ndarray::Array2;

use crate::axis::Axis;
use crate::error::{GridError, Result};
use crate::interpolation::InterpType;

/// Rectangular grid of scalar samples over two monotonic axes.
#[derive(Debug, Clone)]
pub struct DataGrid {
    axes: [Axis; 2],
    values: Array2<f64>,
    interp_type: [InterpType; 2],
    edge_limit: [bool; 2],
}

impl DataGrid {
    /// Wrap an existing value array.
    ///
    /// Interpolation defaults to bilinear with edge limiting on both axes.
    ///
    /// # Errors
    /// If the array shape is not `(axis0.size(), axis1.size())`.
    pub fn new(axis0: Axis, axis1: Axis, values: Array2<f64>) -> Result<Self> {
        let expected = (axis0.size(), axis1.size());
        if values.dim() != expected {
            return Err(GridError::ShapeMismatch {
                message: format!(
                    "values have shape {:?} but the axes require {:?}",
                    values.dim(),
                    expected
                ),
            });
        }

        Ok(Self {
            axes: [axis0, axis1],
            values,
            interp_type: [InterpType::default(); 2],
            edge_limit: [true; 2],
        })
    }

    /// Sample `f(x, y)` at every node.
    pub fn from_fn<F>(axis0: Axis, axis1: Axis, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let values = Array2::from_shape_fn((axis0.size(), axis1.size()), |(i, j)| {
            f(axis0.get(i), axis1.get(j))
        });
        Self {
            axes: [axis0, axis1],
            values,
            interp_type: [InterpType::default(); 2],
            edge_limit: [true; 2],
        }
    }

    /// Axis along dimension `dim` (0 for rows, 1 for columns).
    ///
    /// # Panics
    /// If `dim > 1`.
    pub fn axis(&self, dim: usize) -> &Axis {
        &self.axes[dim]
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Number of rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Sample at `(row, col)`.
    ///
    /// # Panics
    /// If the index is outside the grid.
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[[row, col]]
    }

    pub fn set_value(&mut self, row: usize, col: usize, value: f64) {
        self.values[[row, col]] = value;
    }

    pub fn interp_type(&self, dim: usize) -> InterpType {
        self.interp_type[dim]
    }

    pub fn set_interp_type(&mut self, dim: usize, kind: InterpType) -> Result<()> {
        check_dim(dim)?;
        self.interp_type[dim] = kind;
        Ok(())
    }

    pub fn edge_limit(&self, dim: usize) -> bool {
        self.edge_limit[dim]
    }

    pub fn set_edge_limit(&mut self, dim: usize, limit: bool) -> Result<()> {
        check_dim(dim)?;
        self.edge_limit[dim] = limit;
        Ok(())
    }

    /// Use `kind` along both axes.
    pub fn with_interp_type(mut self, kind: InterpType) -> Self {
        self.interp_type = [kind; 2];
        self
    }

    /// Turn edge limiting on or off along both axes.
    pub fn with_edge_limit(mut self, limit: bool) -> Self {
        self.edge_limit = [limit; 2];
        self
    }
}

fn check_dim(dim: usize) -> Result<()> {
    if dim > 1 {
        return Err(GridError::InvalidParameter {
            param: "dim".to_string(),
            message: format!("grid has 2 dimensions, got index {}", dim),
        });
    }
    Ok(())
}
