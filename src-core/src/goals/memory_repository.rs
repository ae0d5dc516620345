//! In-memory goal and metric stores backed by `DashMap`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::errors::{Error, Result};
use crate::goals::goals_model::{Cadence, Goal, NewGoal, Sample};
use crate::goals::goals_traits::{GoalRepositoryTrait, MetricRepositoryTrait};

#[derive(Debug, Default)]
pub struct InMemoryGoalRepository {
    goals: DashMap<String, Goal>,
}

impl InMemoryGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryGoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        let mut goals: Vec<Goal> = self.goals.iter().map(|entry| entry.value().clone()).collect();
        goals.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(goals)
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goals
            .get(goal_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound(format!("Goal '{}' not found", goal_id)))
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let id = new_goal
            .id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let entry = match self.goals.entry(id.clone()) {
            Entry::Occupied(_) => {
                return Err(Error::Repository(format!("Goal '{}' already exists", id)))
            }
            Entry::Vacant(vacant) => vacant,
        };

        let goal = Goal {
            id,
            title: new_goal.title,
            metric_id: new_goal.metric_id,
            goal_type: new_goal.goal_type,
            target_value: new_goal.target_value,
            baseline_value: new_goal.baseline_value,
            on_track_threshold: new_goal.on_track_threshold,
            created_at: Utc::now(),
        };
        entry.insert(goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, goal_update: Goal) -> Result<Goal> {
        match self.goals.get_mut(&goal_update.id) {
            Some(mut entry) => {
                *entry = goal_update.clone();
                Ok(goal_update)
            }
            None => Err(Error::NotFound(format!(
                "Goal '{}' not found",
                goal_update.id
            ))),
        }
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        Ok(self.goals.remove(&goal_id_to_delete).map_or(0, |_| 1))
    }
}

/// Per-metric cadence and samples, kept sorted by timestamp
#[derive(Debug, Default)]
pub struct InMemoryMetricRepository {
    cadences: DashMap<String, Cadence>,
    samples: DashMap<String, Vec<Sample>>,
}

impl InMemoryMetricRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cadence(&self, metric_id: &str, cadence: Cadence) {
        self.cadences.insert(metric_id.to_string(), cadence);
    }

    /// Adds a sample, keeping the series ordered by timestamp
    pub fn append_sample(&self, metric_id: &str, sample: Sample) {
        let mut series = self.samples.entry(metric_id.to_string()).or_default();
        let position = series.partition_point(|s| s.timestamp <= sample.timestamp);
        series.insert(position, sample);
    }
}

impl MetricRepositoryTrait for InMemoryMetricRepository {
    fn get_cadence(&self, metric_id: &str) -> Result<Cadence> {
        self.cadences
            .get(metric_id)
            .map(|entry| *entry.value())
            .ok_or_else(|| Error::NotFound(format!("Metric '{}' has no cadence", metric_id)))
    }

    fn get_samples_in_range(
        &self,
        metric_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Sample>> {
        Ok(self
            .samples
            .get(metric_id)
            .map(|series| {
                series
                    .iter()
                    .filter(|s| start <= s.timestamp && s.timestamp <= end)
                    .copied()
                    .collect()
            })
            .unwrap_or_default())
    }
}
