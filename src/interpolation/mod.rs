//! Interpolation algorithms for 2-D structured grids.
//!
//! Each algorithm evaluates a query that has already been placed inside a
//! grid cell (see [`common::Cell`]). The bicubic evaluator additionally
//! relies on the precomputed [`derivatives::DerivativeField`] and the
//! constant [`coefficients::INV_BICUBIC_COEFF`] matrix.

pub mod bicubic;
pub mod bilinear;
pub mod coefficients;
pub mod common;
pub mod derivatives;
pub mod nearest;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, Result};
use common::Cell;

/// Trait for interpolation methods
pub trait Interpolator {
    /// Interpolate the value inside `cell`, optionally writing the partial
    /// derivatives with respect to axis 0 and axis 1 into `derivative`.
    fn interpolate(&self, cell: &Cell, derivative: Option<&mut [f64; 2]>) -> f64;

    /// Get the name of this interpolation method
    fn name(&self) -> &str;
}

/// Interpolation algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpType {
    /// Value of the closest grid node
    Nearest,
    /// Area-weighted blend of the four cell corners
    #[default]
    #[serde(alias = "linear")]
    Bilinear,
    /// Piecewise cubic Hermite surface built from corner values and derivatives
    #[serde(alias = "pchip")]
    Bicubic,
}

impl InterpType {
    pub fn name(&self) -> &'static str {
        match self {
            InterpType::Nearest => "nearest",
            InterpType::Bilinear => "bilinear",
            InterpType::Bicubic => "bicubic",
        }
    }

    /// Legacy integer code: -1 nearest, 0 linear, 1 pchip.
    pub fn code(&self) -> i32 {
        match self {
            InterpType::Nearest => -1,
            InterpType::Bilinear => 0,
            InterpType::Bicubic => 1,
        }
    }
}

impl fmt::Display for InterpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Get an interpolation type by name
impl FromStr for InterpType {
    type Err = GridError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "nearest" => Ok(InterpType::Nearest),
            "bilinear" | "linear" => Ok(InterpType::Bilinear),
            "bicubic" | "pchip" => Ok(InterpType::Bicubic),
            _ => Err(GridError::UnsupportedInterpolation {
                value: name.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for InterpType {
    type Error = GridError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            -1 => Ok(InterpType::Nearest),
            0 => Ok(InterpType::Bilinear),
            1 => Ok(InterpType::Bicubic),
            _ => Err(GridError::UnsupportedInterpolation {
                value: code.to_string(),
            }),
        }
    }
}
