pub mod goal_progress_model;
pub mod goals_model;
pub mod goals_service;
pub mod goals_traits;
pub mod memory_repository;
pub mod progress;

pub use goal_progress_model::{GoalProgress, GoalStatus, Thresholds, Trend};
pub use goals_model::{Cadence, Goal, GoalType, NewGoal, Sample};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait, MetricRepositoryTrait};
pub use memory_repository::{InMemoryGoalRepository, InMemoryMetricRepository};
pub use progress::compute_goal_progress;
