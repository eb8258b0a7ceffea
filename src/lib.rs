//! # bathygrid
//!
//! Fast, non-recursive interpolation over 2-D structured grids.
//!
//! This library answers many point queries cheaply against a fixed grid of
//! samples, such as a bathymetry product, with optional analytic partial
//! derivatives at every query.
//!
//! ## Key Features
//!
//! - **Nearest, bilinear and bicubic Hermite (PCHIP)** interpolation
//! - **One-time precomputation** of boundary-aware derivative fields
//! - **Closed-form bicubic evaluation** through a constant 16×16 transform
//! - **Edge limiting or extrapolation**, chosen per axis
//! - **Vectorized queries** over `ndarray` coordinate arrays
//!
//! ## Example
//!
//! ```
//! use bathygrid::{Axis, DataGrid, FastGrid, InterpType};
//!
//! let axis = Axis::linear(1.0, 1.0, 9)?;
//! let grid = DataGrid::from_fn(axis.clone(), axis, |x, _| x * x * x)
//!     .with_interp_type(InterpType::Bicubic);
//! let engine = FastGrid::new(&grid, false)?;
//!
//! let mut derivative = [0.0; 2];
//! let depth = engine.interpolate([2.8753, 3.3265], Some(&mut derivative));
//! assert!((depth - 23.77).abs() < 0.2);
//! assert!(derivative[1].abs() < 1e-12);
//! # Ok::<(), bathygrid::GridError>(())
//! ```

pub mod axis;
pub mod config;
pub mod error;
pub mod fast_grid;
pub mod grid;
pub mod interpolation;
pub mod logging;

pub use axis::Axis;
pub use config::Config;
pub use error::{GridError, Result};
pub use fast_grid::FastGrid;
pub use grid::DataGrid;
pub use interpolation::derivatives::DerivativeField;
pub use interpolation::InterpType;
pub use logging::{init_tracing, log_error, log_timed_operation};
