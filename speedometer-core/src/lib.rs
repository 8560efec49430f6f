//! Speedometer Core Library
//!
//! Maps raw values onto a gauge dial. The caller hands in a number and gets
//! back a progress fraction, a needle angle and readout text:
//!
//! - [`mapping`] - `ValueMapper`, `MappedValue` and the default-scale helpers
//! - [`formatting`] - Readout and tick label text
//! - [`input`] - Validation of text input
//! - [`config`] - Dial configuration and loading (JSON5 format)
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use speedometer_core::{DEFAULT_MAX_VALUE, build_mapped_value, validate_input};
//!
//! assert!(validate_input("5000"));
//!
//! let mapped = build_mapped_value(100_000.0, DEFAULT_MAX_VALUE);
//! assert_eq!(mapped.display_text(), "100.0k");
//! assert_eq!(mapped.progress(), 1.0);
//! assert_eq!(mapped.needle_angle(), 135.0);
//! ```

pub mod config;
pub mod error;
pub mod formatting;
pub mod input;
pub mod mapping;

// Re-export commonly used types at the crate root
pub use config::{
    DEFAULT_END_ANGLE, DEFAULT_MAX_VALUE, DEFAULT_SCALE_MARKS, DEFAULT_START_ANGLE, GaugeConfig,
    LogFormat, LoggingConfig, load_config, parse_config,
};
pub use error::{Error, Result};
pub use formatting::{format_scale_label, format_value};
pub use input::{InputError, parse_input, validate_input};
pub use mapping::{
    MappedValue, ScaleTick, ValueMapper, build_mapped_value, calculate_needle_angle,
    calculate_progress, scale_marks,
};

/// Initialize tracing with the given configuration.
///
/// Logs are written to stderr. `RUST_LOG` takes precedence over
/// `config.level`. Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .try_init()
                .map_err(|e| Error::config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .with(filter)
                .try_init()
                .map_err(|e| Error::config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
