use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// How a goal's target is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    /// Target is a literal value the metric must reach
    Absolute,
    /// Target is a percentage growth over the baseline
    Relative,
}

/// Recurring window over which goal progress resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
}

/// One observation of a tracked metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Sample { timestamp, value }
    }

    /// NaN and infinite values are not observations
    pub fn is_well_formed(&self) -> bool {
        self.value.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    /// Metric the goal is tracked against
    pub metric_id: String,
    pub goal_type: GoalType,
    pub target_value: f64,
    /// Frozen at creation time; wins over any sample-derived baseline
    pub baseline_value: Option<f64>,
    /// Percent of expected progress that still counts as on track
    pub on_track_threshold: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub title: String,
    pub metric_id: String,
    pub goal_type: GoalType,
    pub target_value: f64,
    pub baseline_value: Option<f64>,
    pub on_track_threshold: Option<f64>,
}

impl Goal {
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(
            &self.title,
            &self.metric_id,
            self.target_value,
            self.baseline_value,
            self.on_track_threshold,
        )
    }
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(
            &self.title,
            &self.metric_id,
            self.target_value,
            self.baseline_value,
            self.on_track_threshold,
        )
    }
}

fn validate_goal_fields(
    title: &str,
    metric_id: &str,
    target_value: f64,
    baseline_value: Option<f64>,
    on_track_threshold: Option<f64>,
) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::InvalidInput("Goal title must not be empty".to_string()).into());
    }
    if metric_id.trim().is_empty() {
        return Err(
            ValidationError::InvalidInput("Goal must be bound to a metric".to_string()).into(),
        );
    }
    if !target_value.is_finite() {
        return Err(ValidationError::NonFiniteTarget.into());
    }
    if let Some(baseline) = baseline_value {
        if !baseline.is_finite() {
            return Err(ValidationError::InvalidInput(format!(
                "Baseline value {} is not a finite number",
                baseline
            ))
            .into());
        }
    }
    if let Some(threshold) = on_track_threshold {
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 100.0 {
            return Err(ValidationError::InvalidThreshold(threshold).into());
        }
    }
    Ok(())
}
