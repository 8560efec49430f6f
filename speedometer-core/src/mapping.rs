//! Mapping of raw values onto the dial.
//!
//! A [`ValueMapper`] turns a raw magnitude into a [`MappedValue`]: a progress
//! fraction along the scale, the needle angle for that progress and the
//! readout text. Everything here is pure; the mapper holds only its
//! configuration and can be shared freely.
//!
//! The scale is piecewise linear. Consecutive scale marks bound segments of
//! unequal width, and every segment covers the same share of the sweep, so
//! with the default marks `0..1000` takes as much of the dial as
//! `50000..100000`.

use serde::Serialize;
use tracing::trace;

use crate::config::{DEFAULT_END_ANGLE, DEFAULT_SCALE_MARKS, DEFAULT_START_ANGLE, GaugeConfig};
use crate::formatting::{format_scale_label, format_value};

/// Progress at the top of the dial.
const FULL_SCALE: f64 = 1.0;

/// Progress reported when a value falls outside every segment.
const FALLBACK_PROGRESS: f64 = FULL_SCALE;

/// A raw value together with everything needed to draw it.
///
/// Built fresh for every update and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedValue {
    raw_value: f64,
    display_text: String,
    progress: f64,
    needle_angle: f64,
}

impl MappedValue {
    /// The unclamped input.
    pub fn raw_value(&self) -> f64 {
        self.raw_value
    }

    /// Abbreviated readout of the raw value, e.g. "5.0k".
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Position along the scale, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Needle rotation in degrees.
    pub fn needle_angle(&self) -> f64 {
        self.needle_angle
    }
}

/// A labelled tick on the dial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleTick {
    /// The scale mark.
    pub value: f64,
    /// Compact label, e.g. "25k".
    pub label: String,
    /// Angle of the tick in degrees.
    pub angle: f64,
}

/// Maps raw values onto a configured dial.
#[derive(Debug, Clone, Default)]
pub struct ValueMapper {
    config: GaugeConfig,
}

impl ValueMapper {
    /// Create a mapper for the given dial.
    pub fn new(config: GaugeConfig) -> Self {
        Self { config }
    }

    /// The dial configuration.
    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// The configured scale marks, ascending.
    pub fn scale_marks(&self) -> &[f64] {
        &self.config.scale_marks
    }

    /// Progress of `value` along the scale.
    pub fn progress(&self, value: f64) -> f64 {
        progress_on_marks(value, self.config.max_value, &self.config.scale_marks)
    }

    /// Needle angle for an already clamped `progress`.
    pub fn needle_angle(&self, progress: f64) -> f64 {
        angle_on_sweep(progress, self.config.start_angle, self.config.end_angle)
    }

    /// Build the full mapped value for `raw_value`.
    pub fn map(&self, raw_value: f64) -> MappedValue {
        let progress = self.progress(raw_value);
        let needle_angle = self.needle_angle(progress);
        let display_text = format_value(raw_value);

        trace!(raw_value, progress, needle_angle, %display_text, "Mapped value");

        MappedValue {
            raw_value,
            display_text,
            progress,
            needle_angle,
        }
    }

    /// Ticks for every scale mark, bottom of the dial first.
    pub fn scale_ticks(&self) -> Vec<ScaleTick> {
        self.config
            .scale_marks
            .iter()
            .map(|&value| ScaleTick {
                value,
                label: format_scale_label(value),
                angle: self.needle_angle(self.progress(value)),
            })
            .collect()
    }
}

/// Progress of `value` on the default scale, clamped at `max_value`.
pub fn calculate_progress(value: f64, max_value: f64) -> f64 {
    progress_on_marks(value, max_value, &DEFAULT_SCALE_MARKS)
}

/// Needle angle for `progress` on the default 270 degree sweep.
pub fn calculate_needle_angle(progress: f64) -> f64 {
    angle_on_sweep(progress, DEFAULT_START_ANGLE, DEFAULT_END_ANGLE)
}

/// Build a [`MappedValue`] with the default marks and sweep.
///
/// Pass [`DEFAULT_MAX_VALUE`](crate::config::DEFAULT_MAX_VALUE) for the
/// standard scale.
pub fn build_mapped_value(raw_value: f64, max_value: f64) -> MappedValue {
    ValueMapper::new(GaugeConfig {
        max_value,
        ..GaugeConfig::default()
    })
    .map(raw_value)
}

/// The default scale marks.
pub fn scale_marks() -> &'static [f64] {
    &DEFAULT_SCALE_MARKS
}

fn progress_on_marks(value: f64, max_value: f64, marks: &[f64]) -> f64 {
    // At or above the maximum the needle is at full scale, wherever the
    // maximum falls among the marks
    if value >= max_value {
        return FULL_SCALE;
    }

    let segments = marks.len().saturating_sub(1);

    for (index, pair) in marks.windows(2).enumerate() {
        let (lo, hi) = (pair[0], pair[1]);
        if lo <= value && value <= hi {
            // Repeated marks form an empty segment; treat it as fully crossed
            let fraction = if hi > lo { (value - lo) / (hi - lo) } else { 1.0 };
            return (index as f64 + fraction) / segments as f64;
        }
    }

    // Negative values and values past the last mark land here
    FALLBACK_PROGRESS
}

fn angle_on_sweep(progress: f64, start: f64, end: f64) -> f64 {
    start + (end - start) * progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_VALUE;

    const EPSILON: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(calculate_progress(0.0, 100_000.0), 0.0);
        assert_eq!(calculate_progress(100_000.0, 100_000.0), 1.0);
        assert_eq!(calculate_progress(150_000.0, 100_000.0), 1.0);
    }

    #[test]
    fn test_progress_at_marks() {
        // Each mark sits on a sixth of the sweep
        for (index, &mark) in DEFAULT_SCALE_MARKS.iter().enumerate() {
            let expected = index as f64 / 6.0;
            let progress = calculate_progress(mark, DEFAULT_MAX_VALUE);
            assert!(
                approx(progress, expected),
                "mark {} gave {}, expected {}",
                mark,
                progress,
                expected
            );
        }
    }

    #[test]
    fn test_progress_interpolates_within_segment() {
        // Halfway between 1000 and 5000 is halfway through the second segment
        let progress = calculate_progress(3000.0, DEFAULT_MAX_VALUE);
        assert!(approx(progress, 1.5 / 6.0));

        let progress = calculate_progress(500.0, DEFAULT_MAX_VALUE);
        assert!(approx(progress, 0.5 / 6.0));

        let progress = calculate_progress(75_000.0, DEFAULT_MAX_VALUE);
        assert!(approx(progress, 5.5 / 6.0));
    }

    #[test]
    fn test_progress_fallback() {
        assert_eq!(calculate_progress(-1.0, DEFAULT_MAX_VALUE), 1.0);
        assert_eq!(calculate_progress(f64::NAN, DEFAULT_MAX_VALUE), 1.0);

        // max beyond the last mark leaves values past it unbracketed
        assert_eq!(calculate_progress(150_000.0, 200_000.0), 1.0);
    }

    #[test]
    fn test_progress_with_smaller_max() {
        // 10000 is only the fourth mark, but reaching the max is full scale
        assert_eq!(calculate_progress(10_000.0, 10_000.0), 1.0);
        assert_eq!(calculate_progress(20_000.0, 10_000.0), 1.0);
        assert_eq!(calculate_progress(80_000.0, 10_000.0), 1.0);

        // Below the max the marks still drive the interpolation
        assert!(approx(calculate_progress(7_500.0, 10_000.0), 2.5 / 6.0));
    }

    #[test]
    fn test_build_mapped_value_with_smaller_max() {
        let at_max = build_mapped_value(10_000.0, 10_000.0);
        assert_eq!(at_max.progress(), 1.0);
        assert_eq!(at_max.needle_angle(), 135.0);
        assert_eq!(at_max.display_text(), "10.0k");

        let above_max = build_mapped_value(20_000.0, 10_000.0);
        assert_eq!(above_max.progress(), 1.0);
        assert_eq!(above_max.needle_angle(), 135.0);
        assert_eq!(above_max.display_text(), "20.0k");

        let below_max = build_mapped_value(5_000.0, 10_000.0);
        assert!(approx(below_max.progress(), 2.0 / 6.0));
    }

    #[test]
    fn test_mapper_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<ValueMapper>();
        assert_send_sync::<GaugeConfig>();
        assert_send_sync::<MappedValue>();
        assert_send_sync::<ScaleTick>();
    }

    #[test]
    fn test_needle_angle() {
        assert_eq!(calculate_needle_angle(0.0), -135.0);
        assert_eq!(calculate_needle_angle(1.0), 135.0);
        assert_eq!(calculate_needle_angle(0.5), 0.0);
    }

    #[test]
    fn test_needle_angle_does_not_clamp() {
        assert_eq!(calculate_needle_angle(2.0), 405.0);
    }

    #[test]
    fn test_build_mapped_value() {
        let mapped = build_mapped_value(5000.0, DEFAULT_MAX_VALUE);

        assert_eq!(mapped.raw_value(), 5000.0);
        assert_eq!(mapped.display_text(), "5.0k");
        assert!(approx(mapped.progress(), 2.0 / 6.0));
        assert!(approx(mapped.needle_angle(), -135.0 + 270.0 * 2.0 / 6.0));
    }

    #[test]
    fn test_mapped_value_above_max() {
        let mapped = build_mapped_value(150_000.0, DEFAULT_MAX_VALUE);

        assert_eq!(mapped.raw_value(), 150_000.0);
        assert_eq!(mapped.display_text(), "150.0k");
        assert_eq!(mapped.progress(), 1.0);
        assert_eq!(mapped.needle_angle(), 135.0);
    }

    #[test]
    fn test_mapped_value_equality() {
        let a = build_mapped_value(2500.0, DEFAULT_MAX_VALUE);
        let b = build_mapped_value(2500.0, DEFAULT_MAX_VALUE);
        let c = build_mapped_value(2600.0, DEFAULT_MAX_VALUE);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_custom_sweep() {
        let mapper = ValueMapper::new(GaugeConfig {
            max_value: 200.0,
            start_angle: -90.0,
            end_angle: 90.0,
            scale_marks: vec![0.0, 100.0, 200.0],
        });

        assert_eq!(mapper.map(0.0).needle_angle(), -90.0);
        assert_eq!(mapper.map(100.0).needle_angle(), 0.0);
        assert_eq!(mapper.map(200.0).needle_angle(), 90.0);
        assert_eq!(mapper.map(50.0).progress(), 0.25);
    }

    #[test]
    fn test_degenerate_marks() {
        let mapper = ValueMapper::new(GaugeConfig {
            scale_marks: vec![],
            ..GaugeConfig::default()
        });
        assert_eq!(mapper.progress(10.0), 1.0);
        assert!(mapper.scale_ticks().is_empty());
    }

    #[test]
    fn test_repeated_marks_stay_in_range() {
        let mapper = ValueMapper::new(GaugeConfig {
            scale_marks: vec![0.0, 1000.0, 1000.0, 2000.0],
            max_value: 2000.0,
            ..GaugeConfig::default()
        });
        assert!(approx(mapper.progress(1000.0), 1.0 / 3.0));
        assert!(approx(mapper.progress(1500.0), 2.5 / 3.0));
    }

    #[test]
    fn test_scale_ticks() {
        let ticks = ValueMapper::default().scale_ticks();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();

        assert_eq!(labels, vec!["0", "1k", "5k", "10k", "25k", "50k", "100k+"]);
        assert_eq!(ticks[0].angle, -135.0);
        assert_eq!(ticks[6].angle, 135.0);
        assert!(approx(ticks[3].angle, 0.0));
    }

    #[test]
    fn test_scale_marks() {
        assert_eq!(
            scale_marks(),
            &[0.0, 1000.0, 5000.0, 10000.0, 25000.0, 50000.0, 100000.0]
        );
        assert_eq!(ValueMapper::default().scale_marks(), scale_marks());
    }
}
