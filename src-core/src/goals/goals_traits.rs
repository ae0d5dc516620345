use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::goals::goal_progress_model::GoalProgress;
use crate::goals::goals_model::{Cadence, Goal, NewGoal, Sample};

/// Store that owns goal configuration
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_update: Goal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
}

/// Source of metric samples and the cadence configured for each metric
pub trait MetricRepositoryTrait: Send + Sync {
    fn get_cadence(&self, metric_id: &str) -> Result<Cadence>;

    /// Samples with `start <= timestamp <= end`, ascending by timestamp
    fn get_samples_in_range(
        &self,
        metric_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Sample>>;
}

#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, updated_goal_data: Goal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
    fn get_goal_progress(&self, goal_id: &str, now: DateTime<Utc>) -> Result<GoalProgress>;
    fn get_all_goal_progress(&self, now: DateTime<Utc>) -> Result<Vec<GoalProgress>>;
}
