//! Error types for bathygrid.
//!
//! A single error enum covers every failure the crate can report: bad axes,
//! mismatched shapes, unsupported interpolation selectors and configuration
//! problems. Out-of-range query coordinates are not errors.

use thiserror::Error;

/// The main error type for bathygrid operations.
#[derive(Error, Debug)]
pub enum GridError {
    /// Interpolation selector outside nearest, linear and bicubic
    #[error("Unsupported interpolation type: {value}. Must be one of: nearest, linear, bicubic")]
    UnsupportedInterpolation { value: String },

    /// Axis construction errors
    #[error("Invalid axis: {message}")]
    InvalidAxis { message: String },

    /// Array shapes that do not agree with each other
    #[error("Shape mismatch: {message}")]
    ShapeMismatch { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with GridError
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GridError::UnsupportedInterpolation {
            value: "spline".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported interpolation type: spline. Must be one of: nearest, linear, bicubic"
        );

        let err = GridError::InvalidParameter {
            param: "dim".to_string(),
            message: "must be 0 or 1".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid parameter: dim - must be 0 or 1");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GridError = json_err.into();
        assert!(matches!(err, GridError::Json(_)));
    }
}
