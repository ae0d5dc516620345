use crate::errors::Result;
use crate::goals::goal_progress_model::{GoalProgress, Thresholds};
use crate::goals::goals_model::{Goal, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait, MetricRepositoryTrait};
use crate::goals::progress::{compute_goal_progress_with, compute_period_bounds};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::sync::Arc;

pub struct GoalService<T: GoalRepositoryTrait, M: MetricRepositoryTrait> {
    goal_repo: Arc<T>,
    metric_repo: Arc<M>,
    thresholds: Thresholds,
}

impl<T: GoalRepositoryTrait, M: MetricRepositoryTrait> GoalService<T, M> {
    pub fn new(goal_repo: Arc<T>, metric_repo: Arc<M>) -> Self {
        GoalService {
            goal_repo,
            metric_repo,
            thresholds: Thresholds::default(),
        }
    }

    /// Replaces the base thresholds. A goal's own on-track threshold still wins.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Result<Self> {
        thresholds.validate()?;
        self.thresholds = thresholds;
        Ok(self)
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Calculate progress of one goal at `now`
    ///
    /// Resolves the cadence of the goal's metric, loads the samples of the
    /// period containing `now` and hands everything to the engine.
    pub fn calculate_goal_progress(&self, goal: &Goal, now: DateTime<Utc>) -> Result<GoalProgress> {
        let cadence = self.metric_repo.get_cadence(&goal.metric_id)?;
        let period = compute_period_bounds(cadence, now);

        let samples =
            self.metric_repo
                .get_samples_in_range(&goal.metric_id, period.start, period.end)?;
        debug!(
            "Loaded {} samples of metric {} for goal {} ({:?})",
            samples.len(),
            goal.metric_id,
            goal.id,
            cadence
        );

        Ok(compute_goal_progress_with(
            goal,
            cadence,
            &samples,
            now,
            self.thresholds,
        ))
    }
}

#[async_trait]
impl<T: GoalRepositoryTrait, M: MetricRepositoryTrait> GoalServiceTrait for GoalService<T, M> {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        self.goal_repo.insert_new_goal(new_goal).await
    }

    async fn update_goal(&self, updated_goal_data: Goal) -> Result<Goal> {
        updated_goal_data.validate()?;
        self.goal_repo.update_goal(updated_goal_data).await
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        self.goal_repo.delete_goal(goal_id_to_delete).await
    }

    fn get_goal_progress(&self, goal_id: &str, now: DateTime<Utc>) -> Result<GoalProgress> {
        let goal = self.goal_repo.get_goal(goal_id)?;
        self.calculate_goal_progress(&goal, now)
    }

    /// Progress of every goal. Goals whose metric cannot be read are skipped.
    fn get_all_goal_progress(&self, now: DateTime<Utc>) -> Result<Vec<GoalProgress>> {
        let goals = self.goal_repo.load_goals()?;
        let mut progress = Vec::with_capacity(goals.len());

        for goal in &goals {
            match self.calculate_goal_progress(goal, now) {
                Ok(p) => progress.push(p),
                Err(e) => warn!("Skipping progress for goal {}: {}", goal.id, e),
            }
        }

        Ok(progress)
    }
}
