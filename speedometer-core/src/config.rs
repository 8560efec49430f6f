use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Upper bound of the default scale.
pub const DEFAULT_MAX_VALUE: f64 = 100_000.0;

/// Needle angle at zero progress, in degrees.
pub const DEFAULT_START_ANGLE: f64 = -135.0;

/// Needle angle at full progress, in degrees.
pub const DEFAULT_END_ANGLE: f64 = 135.0;

/// Default checkpoints along the dial. Each consecutive pair gets the same
/// share of the sweep.
pub const DEFAULT_SCALE_MARKS: [f64; 7] =
    [0.0, 1_000.0, 5_000.0, 10_000.0, 25_000.0, 50_000.0, 100_000.0];

/// Dial geometry and scale used by the value mapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    /// Values above this are clamped before mapping.
    #[serde(default = "default_max_value")]
    pub max_value: f64,

    /// Needle angle in degrees at progress 0.
    #[serde(default = "default_start_angle")]
    pub start_angle: f64,

    /// Needle angle in degrees at progress 1.
    #[serde(default = "default_end_angle")]
    pub end_angle: f64,

    /// Ascending scale marks, starting at the bottom of the dial.
    #[serde(default = "default_scale_marks")]
    pub scale_marks: Vec<f64>,
}

fn default_max_value() -> f64 {
    DEFAULT_MAX_VALUE
}

fn default_start_angle() -> f64 {
    DEFAULT_START_ANGLE
}

fn default_end_angle() -> f64 {
    DEFAULT_END_ANGLE
}

fn default_scale_marks() -> Vec<f64> {
    DEFAULT_SCALE_MARKS.to_vec()
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            max_value: default_max_value(),
            start_angle: default_start_angle(),
            end_angle: default_end_angle(),
            scale_marks: default_scale_marks(),
        }
    }
}

impl GaugeConfig {
    /// Check that the scale can be mapped onto.
    pub fn validate(&self) -> Result<()> {
        if !self.max_value.is_finite() || self.max_value <= 0.0 {
            return Err(Error::config(format!(
                "max_value must be a positive number, got {}",
                self.max_value
            )));
        }

        if !self.start_angle.is_finite() || !self.end_angle.is_finite() {
            return Err(Error::config("start_angle and end_angle must be finite"));
        }

        if self.scale_marks.len() < 2 {
            return Err(Error::config("scale_marks needs at least two marks"));
        }

        if let Some(mark) = self.scale_marks.iter().find(|m| !m.is_finite()) {
            return Err(Error::config(format!(
                "scale_marks must be finite, got {}",
                mark
            )));
        }

        if let Some(pair) = self.scale_marks.windows(2).find(|w| w[0] >= w[1]) {
            return Err(Error::config(format!(
                "scale_marks must be strictly ascending ({} >= {})",
                pair[0], pair[1]
            )));
        }

        Ok(())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Common logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Load a configuration file in JSON5 format.
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    json5::from_str(&content).map_err(|e| {
        Error::config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a configuration from a JSON5 string.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    Ok(json5::from_str(content)?)
}
