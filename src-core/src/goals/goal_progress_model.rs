use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::goals::goals_model::Goal;

/// Where a goal stands within its current period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Exceeded,
    OnTrack,
    Behind,
    AtRisk,
    /// No samples yet this period
    NoData,
    /// Relative goal without a usable baseline
    InvalidBaseline,
}

/// Terminal outcomes that skip threshold classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarlyExit {
    NoData,
    InvalidBaseline,
}

impl From<EarlyExit> for GoalStatus {
    fn from(exit: EarlyExit) -> Self {
        match exit {
            EarlyExit::NoData => GoalStatus::NoData,
            EarlyExit::InvalidBaseline => GoalStatus::InvalidBaseline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Accelerating,
    Decelerating,
    Stable,
    Unknown,
}

/// Status cut-offs, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Thresholds {
    /// Progress at or above this is `exceeded`
    pub exceeded: f64,
    /// Share of expected progress that still counts as on track
    pub on_track: f64,
    /// Share of expected progress below which a goal is at risk
    pub behind: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            exceeded: 100.0,
            on_track: 80.0,
            behind: 50.0,
        }
    }
}

impl Thresholds {
    /// Parse thresholds from a JSON settings blob; missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let thresholds: Thresholds = serde_json::from_str(raw)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<()> {
        for value in [self.exceeded, self.on_track, self.behind] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidThreshold(value).into());
            }
        }
        if self.behind > self.on_track {
            return Err(ValidationError::InvalidInput(format!(
                "Behind threshold {} is above on-track threshold {}",
                self.behind, self.on_track
            ))
            .into());
        }
        Ok(())
    }

    /// Applies the goal's on-track override. Only `on_track` is goal-configurable.
    ///
    /// An override below `behind` pulls `behind` down with it, so the
    /// `behind` band is empty and every miss is `at_risk`.
    pub fn for_goal(self, goal: &Goal) -> Self {
        match goal.on_track_threshold {
            Some(on_track) if on_track.is_finite() => Thresholds {
                on_track,
                behind: self.behind.min(on_track),
                ..self
            },
            _ => self,
        }
    }
}

/// Progress of a goal within its active period, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub computed_at: DateTime<Utc>,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub days_total: i64,
    pub days_elapsed: i64,
    pub days_remaining: i64,
    pub baseline_value: Option<f64>,
    pub current_value: Option<f64>,
    pub target_value: f64,
    /// Value the metric has to reach; for relative goals derived from the baseline
    pub display_target: Option<f64>,
    pub progress_percent: f64,
    /// Share of the period already elapsed
    pub expected_progress_percent: f64,
    /// Only set for relative goals
    pub growth_percent: Option<f64>,
    pub status: GoalStatus,
    pub trend: Trend,
    pub projected_end_value: Option<f64>,
    pub is_decline: bool,
}
