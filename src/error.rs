//! Error types for the exploration search.

use thiserror::Error;

/// Ways a circle-path exploration can fail.
///
/// None of these are fatal to the heuristic: the lifecycle controller
/// logs the failure, leaves the circle path empty, and queries fall back
/// to straight-line distance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplorationError {
    /// The open set drained without any circle overlapping the goal.
    #[error("no circle path connects the start and goal poses")]
    NoPathFound,

    /// The start pose has zero obstacle clearance.
    #[error("start pose has no free-space clearance")]
    StartBlocked,

    /// The goal pose has zero obstacle clearance.
    #[error("goal pose has no free-space clearance")]
    GoalBlocked,

    /// The search processed more nodes than the configured cap.
    #[error("exploration exceeded {0} processed nodes")]
    IterationLimitExceeded(usize),
}
