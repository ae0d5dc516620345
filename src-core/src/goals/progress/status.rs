use crate::goals::goal_progress_model::{EarlyExit, GoalStatus, Thresholds};
use crate::goals::goals_model::{Goal, GoalType};

/// Maps progress against the time-based expectation onto a status.
///
/// `thresholds` must already carry the goal's on-track override.
pub fn classify_status(
    progress_percent: f64,
    expected_progress_percent: f64,
    thresholds: &Thresholds,
    early_exit: Option<EarlyExit>,
) -> GoalStatus {
    if let Some(exit) = early_exit {
        return exit.into();
    }

    if progress_percent >= thresholds.exceeded {
        return GoalStatus::Exceeded;
    }

    let on_track_target = expected_progress_percent * thresholds.on_track / 100.0;
    let behind_target = expected_progress_percent * thresholds.behind / 100.0;

    if progress_percent >= on_track_target {
        GoalStatus::OnTrack
    } else if progress_percent >= behind_target {
        GoalStatus::Behind
    } else {
        GoalStatus::AtRisk
    }
}

/// True when the metric sits below where it started
pub fn is_decline(baseline_value: Option<f64>, current_value: Option<f64>) -> bool {
    matches!((baseline_value, current_value), (Some(baseline), Some(current)) if current < baseline)
}

/// Value the metric needs to reach, as shown next to the current value.
pub fn resolve_display_target(goal: &Goal, baseline_value: Option<f64>) -> Option<f64> {
    match goal.goal_type {
        GoalType::Absolute => Some(goal.target_value),
        GoalType::Relative => baseline_value
            .map(|baseline| baseline * (1.0 + goal.target_value / 100.0))
            .filter(|target| target.is_finite()),
    }
}
