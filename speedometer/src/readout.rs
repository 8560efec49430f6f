//! Rendering of mapped values as output lines.

use serde::{Deserialize, Serialize};
use speedometer_core::{MappedValue, ScaleTick};

/// How readouts are written.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned line per value (default).
    #[default]
    Text,
    /// One JSON object per value.
    Json,
}

/// Render a mapped value as a single line, without the trailing newline.
pub fn render(value: &MappedValue, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}  progress={:.4}  angle={:.1}°",
            value.display_text(),
            value.progress(),
            value.needle_angle()
        )),
        OutputFormat::Json => serde_json::to_string(value),
    }
}

/// Render a scale tick as a single line.
pub fn render_tick(tick: &ScaleTick, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{:>6}  {:>7.1}°", tick.label, tick.angle)),
        OutputFormat::Json => serde_json::to_string(tick),
    }
}
