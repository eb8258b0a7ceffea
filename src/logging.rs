//! Structured logging for grid construction and configuration.
//!
//! Events use fixed field names (`operation`, `elapsed_ms`, `kind`) so that
//! engine builds and config loads can be filtered the same way everywhere.

use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::error::GridError;
use crate::interpolation::InterpType;

/// Install a `fmt` subscriber filtered at `log_level`.
///
/// `RUST_LOG` wins over `log_level` when set. Only the first call installs a
/// subscriber; later calls are ignored.
pub fn init_tracing(log_level: &str) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .try_init();
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1e3
}

pub fn log_operation_start(operation: &str, details: Option<&str>) {
    match details {
        Some(details) => info!(operation, details, "begin"),
        None => info!(operation, "begin"),
    }
}

pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let elapsed_ms = elapsed_ms(start_time);
    if success {
        info!(operation, elapsed_ms, "done");
    } else {
        warn!(operation, elapsed_ms, "failed");
    }
}

/// Run `f` and log how long it took at debug level.
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    debug!(operation, "begin");
    let result = f();
    debug!(operation, elapsed_ms = elapsed_ms(start), "done");
    result
}

/// Shape, method and approximate footprint of a freshly built engine.
pub fn log_grid_stats(rows: usize, cols: usize, interpolation: InterpType, owned: bool) {
    // three derivative fields, plus the values when the grid was copied
    let arrays = if owned { 4 } else { 3 };
    let footprint_kb = arrays * rows * cols * std::mem::size_of::<f64>() / 1024;

    info!(
        operation = "grid_build",
        rows,
        cols,
        interpolation = %interpolation,
        owned,
        footprint_kb,
        "fast grid ready"
    );
}

/// Short machine-friendly name of an error variant.
pub fn error_kind(error: &GridError) -> &'static str {
    match error {
        GridError::UnsupportedInterpolation { .. } => "unsupported_interpolation",
        GridError::InvalidAxis { .. } => "invalid_axis",
        GridError::ShapeMismatch { .. } => "shape_mismatch",
        GridError::InvalidParameter { .. } => "invalid_parameter",
        GridError::Config { .. } => "config",
        GridError::Io(_) => "io",
        GridError::Json(_) => "json",
    }
}

pub fn log_error(error: &GridError, context: &str) {
    error!(%error, context, kind = error_kind(error), "grid error");
}
