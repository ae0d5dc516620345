//! Goal progress engine.
//!
//! A pure computation over (goal, cadence, samples, now): nothing here
//! fetches, caches or stores data, so every function is safe to call from
//! any number of threads at once.

pub mod calculator;
pub mod period;
pub mod rounding;
pub mod status;
pub mod trend;
pub mod values;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::goals::goal_progress_model::{GoalProgress, Thresholds};
use crate::goals::goals_model::{Cadence, Goal, Sample};

pub use calculator::{compute_progress, ProgressComputation};
pub use period::{compute_period_bounds, PeriodBounds};
pub use status::{classify_status, is_decline, resolve_display_target};
pub use trend::{compute_trend, TrendAnalysis};
pub use values::{extract_values, ExtractedValues};

/// Computes goal progress with the default thresholds.
pub fn compute_goal_progress(
    goal: &Goal,
    cadence: Cadence,
    samples_in_period: &[Sample],
    now: DateTime<Utc>,
) -> GoalProgress {
    compute_goal_progress_with(goal, cadence, samples_in_period, now, Thresholds::default())
}

/// Computes goal progress against `base_thresholds`, with the goal's own
/// on-track override applied on top.
///
/// `samples_in_period` must be sorted ascending and restricted to the active
/// period; samples outside it are reported but not dropped.
pub fn compute_goal_progress_with(
    goal: &Goal,
    cadence: Cadence,
    samples_in_period: &[Sample],
    now: DateTime<Utc>,
    base_thresholds: Thresholds,
) -> GoalProgress {
    if !goal.target_value.is_finite() {
        warn!(
            "Goal {} has non-finite target {}; progress falls back to 0",
            goal.id, goal.target_value
        );
    }

    let period = compute_period_bounds(cadence, now);
    let outside = samples_in_period
        .iter()
        .filter(|sample| !period.contains(sample.timestamp))
        .count();
    if outside > 0 {
        warn!(
            "Goal {}: {} of {} samples fall outside period {} - {}",
            goal.id,
            outside,
            samples_in_period.len(),
            period.start,
            period.end
        );
    }

    let values: Vec<f64> = values::well_formed_values(samples_in_period).collect();
    if values.len() < samples_in_period.len() {
        warn!(
            "Goal {}: ignoring {} malformed samples",
            goal.id,
            samples_in_period.len() - values.len()
        );
    }

    let extracted = extract_values(goal, samples_in_period);
    let progress = compute_progress(
        goal,
        extracted.baseline_value,
        extracted.current_value,
        period.days_elapsed,
        period.days_total,
    );
    let trend = compute_trend(&values, period.days_remaining);

    let thresholds = base_thresholds.for_goal(goal);
    let status = classify_status(
        progress.progress_percent,
        progress.expected_progress_percent,
        &thresholds,
        progress.early_exit,
    );

    debug!(
        "Goal {} progress {}% (expected {}%): {:?}, trend {:?}",
        goal.id, progress.progress_percent, progress.expected_progress_percent, status, trend.trend
    );

    GoalProgress {
        goal_id: goal.id.clone(),
        computed_at: now,
        period_start: period.start,
        period_end: period.end,
        days_total: period.days_total,
        days_elapsed: period.days_elapsed,
        days_remaining: period.days_remaining,
        baseline_value: extracted.baseline_value,
        current_value: extracted.current_value,
        target_value: goal.target_value,
        display_target: resolve_display_target(goal, extracted.baseline_value),
        progress_percent: progress.progress_percent,
        expected_progress_percent: progress.expected_progress_percent,
        growth_percent: progress.growth_percent,
        status,
        trend: trend.trend,
        projected_end_value: trend.projected_end_value,
        is_decline: is_decline(extracted.baseline_value, extracted.current_value),
    }
}
