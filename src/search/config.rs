//! Tuning knobs for the circle-path exploration.

use serde::{Deserialize, Serialize};

/// Configuration for [`SpaceExplorer`](super::SpaceExplorer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationConfig {
    /// Number of candidate directions sampled on a parent circumference
    /// per revolution.
    pub circumference_samples: usize,

    /// Shrink applied to a child's clearance radius (meters), keeping
    /// circle rims off the walls.
    pub safety_margin: f32,

    /// Smallest usable child radius (meters).
    ///
    /// Candidates at or below this are discarded, which bounds progress
    /// per expansion from below and keeps the search out of dead-end
    /// slivers near obstacles.
    pub min_radius: f32,

    /// Overlap factor for the closed-set duplicate test.
    ///
    /// Strict: only near-identical circles are pruned.
    pub duplicate_overlap_factor: f32,

    /// Overlap factor for the goal-reached test.
    ///
    /// Lax: a large relative overlap with the goal circle counts as
    /// arrived.
    pub goal_overlap_factor: f32,

    /// Maximum number of processed nodes before the search gives up.
    pub max_iterations: usize,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            circumference_samples: 36,
            safety_margin: 0.25,
            min_radius: 1.5,
            duplicate_overlap_factor: 0.1,
            goal_overlap_factor: 0.5,
            max_iterations: 100_000,
        }
    }
}
