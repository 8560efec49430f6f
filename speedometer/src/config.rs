//! Configuration for the speedometer front end.

use std::path::Path;

use serde::{Deserialize, Serialize};
use speedometer_core::{Error, GaugeConfig, LoggingConfig, Result, load_config};

use crate::readout::OutputFormat;

/// Complete front-end configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dial scale and sweep.
    #[serde(default)]
    pub gauge: GaugeConfig,

    /// Readout settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Value shown once at startup, before any input is read.
    #[serde(default)]
    pub startup_value: Option<f64>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Readout configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Readout format: "text" or "json".
    #[serde(default)]
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from a JSON5 file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let config: Self = load_config(path)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.gauge.validate()?;

        match self.startup_value {
            Some(value) if !value.is_finite() || value < 0.0 => {
                return Err(Error::config(format!(
                    "startup_value must be a non-negative number, got {}",
                    value
                )));
            }
            _ => {}
        }

        Ok(())
    }
}
