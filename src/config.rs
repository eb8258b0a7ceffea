//! Configuration management for bathygrid.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Environment variables (highest priority)
//! 2. JSON config file
//! 3. Default values (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

use crate::error::{GridError, Result};
use crate::grid::DataGrid;
use crate::interpolation::InterpType;
use crate::logging::{log_error, log_operation_end, log_operation_start};

/// Environment variable selecting the interpolation type of both axes
pub const ENV_INTERPOLATION: &str = "BATHYGRID_INTERPOLATION";
/// Environment variable toggling edge limiting on both axes
pub const ENV_EDGE_LIMIT: &str = "BATHYGRID_EDGE_LIMIT";
/// Environment variable for the log level
pub const ENV_LOG_LEVEL: &str = "BATHYGRID_LOG_LEVEL";

/// Per-axis interpolation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Interpolation method (nearest, bilinear, bicubic)
    #[serde(default = "default_interpolation")]
    pub interpolation: String,

    /// Clamp queries outside the axis range instead of extrapolating
    #[serde(default = "default_edge_limit")]
    pub edge_limit: bool,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Settings for axis 0 (grid rows)
    #[serde(default)]
    pub axis0: AxisConfig,

    /// Settings for axis 1 (grid columns)
    #[serde(default)]
    pub axis1: AxisConfig,

    /// Whether the engine keeps its own copy of the grid
    #[serde(default = "default_copy_data")]
    pub copy_data: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let start = Instant::now();
        let details = path.map(|p| p.display().to_string());
        log_operation_start("config_load", details.as_deref());

        let result = Self::load_layers(path);
        if let Err(e) = &result {
            log_error(e, "config_load");
        }
        log_operation_end("config_load", start, result.is_ok());
        result
    }

    fn load_layers(path: Option<&Path>) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(path) = path {
            let json_config = Self::load_from_file(path)?;
            config.merge(json_config);
        }

        // Override with environment variables
        config.apply_overrides(|key| std::env::var(key).ok())?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.axis0 = other.axis0;
        self.axis1 = other.axis1;
        self.copy_data = other.copy_data;
        self.log_level = other.log_level;
    }

    /// Apply overrides from a key lookup, normally the process environment
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(interpolation) = lookup(ENV_INTERPOLATION) {
            self.axis0.interpolation = interpolation.clone();
            self.axis1.interpolation = interpolation;
        }

        if let Some(edge_limit) = lookup(ENV_EDGE_LIMIT) {
            let edge_limit = parse_bool(&edge_limit).ok_or_else(|| GridError::Config {
                message: format!(
                    "Invalid value for {}: {}. Must be true or false",
                    ENV_EDGE_LIMIT, edge_limit
                ),
            })?;
            self.axis0.edge_limit = edge_limit;
            self.axis1.edge_limit = edge_limit;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(GridError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        // Validate interpolation methods
        let kind0 = self.interp_type(0)?;
        let kind1 = self.interp_type(1)?;
        if kind0 != kind1 {
            return Err(GridError::Config {
                message: format!(
                    "Both axes must use the same interpolation method, got {} and {}",
                    kind0, kind1
                ),
            });
        }

        Ok(())
    }

    /// Interpolation type configured for axis `dim`
    pub fn interp_type(&self, dim: usize) -> Result<InterpType> {
        self.axis(dim)?.interpolation.parse()
    }

    fn axis(&self, dim: usize) -> Result<&AxisConfig> {
        match dim {
            0 => Ok(&self.axis0),
            1 => Ok(&self.axis1),
            _ => Err(GridError::InvalidParameter {
                param: "dim".to_string(),
                message: format!("grid has 2 dimensions, got index {}", dim),
            }),
        }
    }

    /// Push the per-axis settings onto a grid
    pub fn apply_to(&self, grid: &mut DataGrid) -> Result<()> {
        for dim in 0..2 {
            grid.set_interp_type(dim, self.interp_type(dim)?)?;
            grid.set_edge_limit(dim, self.axis(dim)?.edge_limit)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            axis0: AxisConfig::default(),
            axis1: AxisConfig::default(),
            copy_data: default_copy_data(),
            log_level: default_log_level(),
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            interpolation: default_interpolation(),
            edge_limit: default_edge_limit(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Default value functions for serde
fn default_interpolation() -> String {
    "bilinear".to_string()
}

fn default_edge_limit() -> bool {
    true
}

fn default_copy_data() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
