//! Fast non-recursive interpolation over a 2-D data grid.
//!
//! [`FastGrid`] wraps a [`DataGrid`], precomputes its derivative fields once
//! and then answers point queries in closed form. The algorithm is selected
//! by the grid's interpolation type, which must be the same on both axes.
//!
//! All per-query scratch lives on the stack of the call, so a `FastGrid` can
//! be shared between threads and queried through `&self`.

use ndarray::{Array2, Zip};
use std::borrow::Cow;
use tracing::trace;

use crate::error::{GridError, Result};
use crate::grid::DataGrid;
use crate::interpolation::bicubic::BicubicInterpolator;
use crate::interpolation::bilinear::BilinearInterpolator;
use crate::interpolation::common::{self, Cell};
use crate::interpolation::derivatives::DerivativeField;
use crate::interpolation::nearest::NearestInterpolator;
use crate::interpolation::{InterpType, Interpolator};
use crate::logging::{log_error, log_grid_stats, log_timed_operation};

/// Interpolation engine over a borrowed or owned [`DataGrid`].
#[derive(Debug, Clone)]
pub struct FastGrid<'a> {
    grid: Cow<'a, DataGrid>,
    derivatives: DerivativeField,
    interp_type: InterpType,
}

impl<'a> FastGrid<'a> {
    /// Build an engine over `grid`.
    ///
    /// With `copy_data` the engine keeps its own copy of the grid, otherwise
    /// it borrows the caller's grid for its whole lifetime.
    ///
    /// # Errors
    /// If the two axes are configured with different interpolation types.
    pub fn new(grid: &'a DataGrid, copy_data: bool) -> Result<Self> {
        let grid = if copy_data {
            Cow::Owned(grid.clone())
        } else {
            Cow::Borrowed(grid)
        };
        Self::build(grid)
    }

    fn build(grid: Cow<'a, DataGrid>) -> Result<Self> {
        let interp_type = grid.interp_type(0);
        if grid.interp_type(1) != interp_type {
            let err = GridError::InvalidParameter {
                param: "interp_type".to_string(),
                message: format!(
                    "both axes must use the same interpolation type, got {} and {}",
                    interp_type,
                    grid.interp_type(1)
                ),
            };
            log_error(&err, "fast grid construction");
            return Err(err);
        }

        let derivatives =
            log_timed_operation("derivative_precompute", || DerivativeField::compute(&grid));

        let (rows, cols) = grid.shape();
        log_grid_stats(rows, cols, interp_type, matches!(grid, Cow::Owned(_)));

        Ok(Self {
            grid,
            derivatives,
            interp_type,
        })
    }

    pub fn grid(&self) -> &DataGrid {
        &self.grid
    }

    pub fn derivatives(&self) -> &DerivativeField {
        &self.derivatives
    }

    pub fn interp_type(&self) -> InterpType {
        self.interp_type
    }

    /// Place `location` inside a grid cell, applying each axis' edge limit.
    pub fn locate(&self, location: [f64; 2]) -> Cell {
        let mut cell = Cell {
            index: [0; 2],
            location,
        };
        for dim in 0..2 {
            let (index, coordinate) = common::locate(
                self.grid.axis(dim),
                location[dim],
                self.grid.edge_limit(dim),
            );
            cell.index[dim] = index;
            cell.location[dim] = coordinate;
        }
        trace!(
            k0 = cell.index[0],
            k1 = cell.index[1],
            x = cell.location[0],
            y = cell.location[1],
            "located query"
        );
        cell
    }

    /// Interpolate at a single location.
    ///
    /// When `derivative` is given it receives the partial derivatives with
    /// respect to axis 0 and axis 1. Locations outside the grid are clamped
    /// or extrapolated depending on the edge limit of each axis.
    pub fn interpolate(&self, location: [f64; 2], derivative: Option<&mut [f64; 2]>) -> f64 {
        let cell = self.locate(location);
        match self.interp_type {
            InterpType::Nearest => NearestInterpolator::new(&self.grid).interpolate(&cell, derivative),
            InterpType::Bilinear => {
                BilinearInterpolator::new(&self.grid).interpolate(&cell, derivative)
            }
            InterpType::Bicubic => BicubicInterpolator::new(&self.grid, &self.derivatives)
                .interpolate(&cell, derivative),
        }
    }

    /// Interpolate at a series of locations.
    ///
    /// `x` holds the axis 0 coordinates and `y` the axis 1 coordinates of
    /// each query. Values go to `result`; when `derivatives` is given the
    /// partials go to its two arrays. All arrays must share one shape, which
    /// is checked before anything is written.
    pub fn interpolate_array(
        &self,
        x: &Array2<f64>,
        y: &Array2<f64>,
        result: &mut Array2<f64>,
        derivatives: Option<(&mut Array2<f64>, &mut Array2<f64>)>,
    ) -> Result<()> {
        let shape = x.dim();
        check_shape("y", shape, y.dim())?;
        check_shape("result", shape, result.dim())?;

        match derivatives {
            None => {
                Zip::from(result)
                    .and(x)
                    .and(y)
                    .for_each(|r, &x, &y| *r = self.interpolate([x, y], None));
            }
            Some((dx, dy)) => {
                check_shape("dx", shape, dx.dim())?;
                check_shape("dy", shape, dy.dim())?;
                Zip::from(result)
                    .and(dx)
                    .and(dy)
                    .and(x)
                    .and(y)
                    .for_each(|r, dx, dy, &x, &y| {
                        let mut derivative = [0.0; 2];
                        *r = self.interpolate([x, y], Some(&mut derivative));
                        *dx = derivative[0];
                        *dy = derivative[1];
                    });
            }
        }
        Ok(())
    }
}

impl FastGrid<'static> {
    /// Build an engine that takes ownership of `grid`.
    pub fn from_owned(grid: DataGrid) -> Result<Self> {
        Self::build(Cow::Owned(grid))
    }
}

fn check_shape(name: &str, expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected != actual {
        return Err(GridError::ShapeMismatch {
            message: format!(
                "{} has shape {:?} but the query coordinates have shape {:?}",
                name, actual, expected
            ),
        });
    }
    Ok(())
}
