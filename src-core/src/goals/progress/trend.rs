//! Trend of a metric within its period.
//!
//! The sample sequence is split in two halves that share the midpoint value.
//! Comparing the average step of each half tells whether the metric is
//! speeding up or slowing down; the recent step size is then extrapolated
//! linearly to the end of the period.

use crate::goals::goal_progress_model::Trend;
use crate::goals::progress::rounding::round_dp;

/// Fewer samples than this carry no trend
pub const MIN_TREND_SAMPLES: usize = 3;
/// Acceleration must exceed this share of the early step size to count
pub const RELATIVE_ACCELERATION_THRESHOLD: f64 = 0.1;
pub const MIN_ACCELERATION_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendAnalysis {
    pub trend: Trend,
    pub projected_end_value: Option<f64>,
}

impl TrendAnalysis {
    fn unknown() -> Self {
        TrendAnalysis {
            trend: Trend::Unknown,
            projected_end_value: None,
        }
    }
}

pub fn compute_trend(values: &[f64], days_remaining: i64) -> TrendAnalysis {
    let n = values.len();
    if n < MIN_TREND_SAMPLES {
        return TrendAnalysis::unknown();
    }

    let midpoint = n / 2;
    let early_change = average_change(&values[..=midpoint]);
    let recent_change = average_change(&values[midpoint..]);

    let acceleration = recent_change - early_change;
    let threshold =
        (early_change.abs() * RELATIVE_ACCELERATION_THRESHOLD).max(MIN_ACCELERATION_THRESHOLD);

    let trend = if acceleration.abs() < threshold {
        Trend::Stable
    } else if acceleration > 0.0 {
        Trend::Accelerating
    } else {
        Trend::Decelerating
    };

    let projected_end_value = values
        .last()
        .copied()
        .filter(|last| last.is_finite())
        .map(|last| last + recent_change * days_remaining as f64)
        .filter(|projected| projected.is_finite())
        .map(|projected| round_dp(projected, 2));

    TrendAnalysis {
        trend,
        projected_end_value,
    }
}

/// Mean step between consecutive values. Steps starting from zero are skipped.
pub fn average_change(window: &[f64]) -> f64 {
    let (sum, count) = window
        .windows(2)
        .filter(|pair| pair[0] != 0.0 && pair[0].is_finite() && pair[1].is_finite())
        .fold((0.0, 0usize), |(sum, count), pair| {
            (sum + (pair[1] - pair[0]), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
