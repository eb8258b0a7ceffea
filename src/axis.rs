//! Coordinate axes for structured grids.
//!
//! An [`Axis`] is a strictly monotonic sequence of finite coordinates. Both
//! increasing and decreasing axes are supported; bathymetry products often
//! store latitude from north to south.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Strictly monotonic coordinate sequence along one grid dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Axis {
    values: Vec<f64>,
}

impl Axis {
    /// Smallest axis the stencil classification can handle without a node
    /// being both the first and the last one.
    pub const MIN_SIZE: usize = 3;

    /// Build an axis from explicit coordinates.
    ///
    /// # Errors
    /// * If fewer than [`Axis::MIN_SIZE`] coordinates are given
    /// * If any coordinate is not finite
    /// * If the coordinates are not strictly increasing or strictly decreasing
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.len() < Self::MIN_SIZE {
            return Err(GridError::InvalidAxis {
                message: format!(
                    "axis needs at least {} nodes, got {}",
                    Self::MIN_SIZE,
                    values.len()
                ),
            });
        }

        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(GridError::InvalidAxis {
                message: format!("coordinate {} is not finite: {}", pos, values[pos]),
            });
        }

        let ascending = values[1] > values[0];
        for (i, pair) in values.windows(2).enumerate() {
            let monotonic = if ascending {
                pair[1] > pair[0]
            } else {
                pair[1] < pair[0]
            };
            if !monotonic {
                return Err(GridError::InvalidAxis {
                    message: format!(
                        "coordinates must be strictly monotonic, found {} followed by {} at index {}",
                        pair[0],
                        pair[1],
                        i + 1
                    ),
                });
            }
        }

        Ok(Self { values })
    }

    /// Build an evenly spaced axis of `size` nodes starting at `first`.
    ///
    /// A negative `increment` yields a decreasing axis.
    pub fn linear(first: f64, increment: f64, size: usize) -> Result<Self> {
        if increment == 0.0 || !increment.is_finite() {
            return Err(GridError::InvalidAxis {
                message: format!("increment must be finite and non-zero, got {}", increment),
            });
        }
        Self::new((0..size).map(|i| first + increment * i as f64).collect())
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Coordinate of node `index`.
    ///
    /// # Panics
    /// If `index` is not less than [`Axis::size`].
    pub fn get(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn first(&self) -> f64 {
        self.values[0]
    }

    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    pub fn is_ascending(&self) -> bool {
        self.values[1] > self.values[0]
    }

    /// Signed spacing `x[index + 1] - x[index]`.
    ///
    /// The last node has no interval of its own and reports the spacing of
    /// the final interval.
    pub fn increment(&self, index: usize) -> f64 {
        let last = self.values.len() - 1;
        let k = index.min(last - 1);
        self.values[k + 1] - self.values[k]
    }

    /// Index of the node at or below `coordinate` in axis order.
    ///
    /// The result is clamped into `[0, size - 2]` so that `index + 1` is
    /// always a valid node. Coordinates beyond either end therefore map onto
    /// the boundary interval, which is what extrapolation uses.
    pub fn find_index(&self, coordinate: f64) -> usize {
        let count = if self.is_ascending() {
            self.values.partition_point(|&v| v <= coordinate)
        } else {
            self.values.partition_point(|&v| v >= coordinate)
        };
        count.saturating_sub(1).min(self.values.len() - 2)
    }
}

impl TryFrom<Vec<f64>> for Axis {
    type Error = GridError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<Axis> for Vec<f64> {
    fn from(axis: Axis) -> Self {
        axis.values
    }
}
