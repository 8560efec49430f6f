//! Validation of raw text input before it reaches the mapper.

use thiserror::Error;

/// Reasons a piece of text is rejected as a gauge value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a finite number")]
    NotFinite(String),

    #[error("{0} is negative")]
    Negative(f64),
}

/// Parse text into a non-negative, finite gauge value.
///
/// The text is taken as-is: surrounding whitespace is not trimmed, so
/// `" 5"` is rejected. Callers reading lines should trim first.
pub fn parse_input(text: &str) -> Result<f64, InputError> {
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let value: f64 = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;

    // `f64::from_str` accepts "inf" and "NaN"
    if !value.is_finite() {
        return Err(InputError::NotFinite(text.to_string()));
    }

    if value < 0.0 {
        return Err(InputError::Negative(value));
    }

    Ok(value)
}

/// Returns `true` if `text` is a real number `>= 0`.
pub fn validate_input(text: &str) -> bool {
    parse_input(text).is_ok()
}
