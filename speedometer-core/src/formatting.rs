//! Readout and tick label formatting for the gauge.

/// Values at or above this are shown in thousands.
const THOUSAND: f64 = 1_000.0;

/// Scale labels at or above this collapse into [`SCALE_CEILING_LABEL`].
const SCALE_CEILING: f64 = 100_000.0;

/// Label shown for the top of the dial.
pub const SCALE_CEILING_LABEL: &str = "100k+";

/// Format a raw value for the center readout.
///
/// - Values >= 1K display as "X.Xk", never capped ("150.0k")
/// - Smaller values display as an integer, fraction truncated
pub fn format_value(value: f64) -> String {
    if value >= THOUSAND {
        format!("{:.1}k", value / THOUSAND)
    } else {
        format!("{}", value as i64)
    }
}

/// Format a scale mark for a dial tick.
///
/// - Values >= 100K display as "100k+" regardless of the configured maximum
/// - Values >= 1K display as whole thousands ("5k")
/// - Smaller values display as an integer
pub fn format_scale_label(value: f64) -> String {
    if value >= SCALE_CEILING {
        SCALE_CEILING_LABEL.to_string()
    } else if value >= THOUSAND {
        format!("{}k", (value / THOUSAND) as i64)
    } else {
        format!("{}", value as i64)
    }
}
