use crate::goals::goal_progress_model::EarlyExit;
use crate::goals::goals_model::{Goal, GoalType};
use crate::goals::progress::rounding::{finite_or, round_percent};

/// Relative progress never reads below this, however far the metric falls
pub const RELATIVE_PROGRESS_FLOOR: f64 = -100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressComputation {
    pub progress_percent: f64,
    pub expected_progress_percent: f64,
    pub growth_percent: Option<f64>,
    pub early_exit: Option<EarlyExit>,
}

impl ProgressComputation {
    fn early(exit: EarlyExit, expected_progress_percent: f64) -> Self {
        ProgressComputation {
            progress_percent: 0.0,
            expected_progress_percent,
            growth_percent: None,
            early_exit: Some(exit),
        }
    }
}

/// Percent-of-target progress plus the time-based expectation it is judged against.
///
/// Degenerate inputs never fail: missing data and unusable baselines are
/// reported through `early_exit`, and a zero target yields zero progress.
pub fn compute_progress(
    goal: &Goal,
    baseline_value: Option<f64>,
    current_value: Option<f64>,
    days_elapsed: i64,
    days_total: i64,
) -> ProgressComputation {
    let expected_progress_percent = expected_progress(days_elapsed, days_total);

    let Some(current) = current_value else {
        return ProgressComputation::early(EarlyExit::NoData, expected_progress_percent);
    };

    match goal.goal_type {
        GoalType::Absolute => {
            let progress = if goal.target_value == 0.0 {
                0.0
            } else {
                current / goal.target_value * 100.0
            };
            ProgressComputation {
                progress_percent: round_percent(finite_or(progress, 0.0)),
                expected_progress_percent,
                growth_percent: None,
                early_exit: None,
            }
        }
        GoalType::Relative => {
            let baseline = match baseline_value {
                Some(baseline) if baseline != 0.0 && baseline.is_finite() => baseline,
                _ => {
                    return ProgressComputation::early(
                        EarlyExit::InvalidBaseline,
                        expected_progress_percent,
                    )
                }
            };

            let growth = (current - baseline) / baseline * 100.0;
            let progress = if goal.target_value == 0.0 {
                0.0
            } else {
                (growth / goal.target_value * 100.0).max(RELATIVE_PROGRESS_FLOOR)
            };

            ProgressComputation {
                progress_percent: round_percent(finite_or(progress, 0.0)),
                expected_progress_percent,
                growth_percent: growth.is_finite().then(|| round_percent(growth)),
                early_exit: None,
            }
        }
    }
}

/// Share of the period already elapsed, in percent.
pub fn expected_progress(days_elapsed: i64, days_total: i64) -> f64 {
    let days_total = days_total.max(1);
    round_percent(finite_or(
        days_elapsed as f64 / days_total as f64 * 100.0,
        0.0,
    ))
}
