//! Heuristic lifecycle: rebuild-on-change and query evaluation.

use crate::core::{Point2D, Pose2D};
use crate::grid::ClearanceGrid;
use crate::path::CirclePath;
use crate::search::{ExplorationConfig, SpaceExplorer};

/// Holonomic cost-to-go estimator for a Hybrid A* planner.
///
/// Owns the circle path produced by [`SpaceExplorer`] and serves travel
/// estimates that respect obstacles while ignoring the vehicle's turning
/// constraints. The path is goal-anchored: it is rebuilt when the grid
/// reports a change or the goal moves, never merely because the vehicle
/// advanced along it.
#[derive(Debug, Clone)]
pub struct HolonomicHeuristic {
    explorer: SpaceExplorer,
    goal: Pose2D,
    circle_path: CirclePath,
}

impl HolonomicHeuristic {
    /// Create a heuristic with the given exploration configuration.
    pub fn new(config: ExplorationConfig) -> Self {
        Self {
            explorer: SpaceExplorer::new(config),
            goal: Pose2D::default(),
            circle_path: CirclePath::empty(),
        }
    }

    /// Create a heuristic with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ExplorationConfig::default())
    }

    /// Refresh the circle path for this planner tick.
    ///
    /// Rebuilds iff the grid changed since its flag was last read or the
    /// goal pose differs from the cached one. A failed exploration
    /// leaves the path empty; queries then fall back to straight-line
    /// distance to the goal.
    pub fn update<G: ClearanceGrid>(&mut self, grid: &G, start: Pose2D, goal: Pose2D) {
        if !grid.has_changed() && goal == self.goal {
            return;
        }

        self.goal = goal;
        self.circle_path = CirclePath::empty();

        match self
            .explorer
            .explore(grid, start.position(), goal.position())
        {
            Ok(path) => self.circle_path = path,
            Err(error) => {
                tracing::warn!(%error, "no circle path between start and goal");
            }
        }
    }

    /// Estimated travel distance for `probe`.
    ///
    /// Returns the path cost up to the circle nearest the probe plus the
    /// straight-line remainder to that circle's centre, or plain
    /// Euclidean distance to the goal when no path exists. Never
    /// negative, never fails.
    pub fn value(&self, probe: Point2D) -> f32 {
        match self.circle_path.nearest_waypoint(probe) {
            Some(waypoint) => waypoint.g + probe.distance(&waypoint.circle.center),
            None => probe.distance(&self.goal.position()),
        }
    }

    /// The current circle path (empty when the last exploration failed).
    pub fn circle_path(&self) -> &CirclePath {
        &self.circle_path
    }

    /// The goal pose the current circle path is anchored to.
    pub fn goal(&self) -> Pose2D {
        self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DistanceGrid;
    use approx::assert_relative_eq;

    fn open_grid() -> DistanceGrid {
        DistanceGrid::new(60, 60, 1.0, Point2D::ZERO)
    }

    fn pose(x: f32, y: f32) -> Pose2D {
        Pose2D::new(x, y, 0.0)
    }

    #[test]
    fn test_fallback_before_first_update() {
        let heuristic = HolonomicHeuristic::with_defaults();
        // No path yet: straight-line distance to the default goal pose.
        assert_relative_eq!(heuristic.value(Point2D::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_update_installs_path() {
        let grid = open_grid();
        let mut heuristic = HolonomicHeuristic::with_defaults();

        heuristic.update(&grid, pose(10.0, 10.0), pose(50.0, 50.0));

        assert!(!heuristic.circle_path().is_empty());
        assert_eq!(heuristic.goal(), pose(50.0, 50.0));
        assert!(heuristic.value(Point2D::new(30.0, 30.0)) > 0.0);
    }

    #[test]
    fn test_start_change_alone_does_not_rebuild() {
        let grid = open_grid();
        let mut heuristic = HolonomicHeuristic::with_defaults();

        heuristic.update(&grid, pose(10.0, 10.0), pose(50.0, 50.0));
        let root = heuristic.circle_path().first().unwrap().circle.center;
        assert_eq!(root, Point2D::new(10.0, 10.0));

        // Same goal, unchanged grid, different start: the path stays
        // anchored at the old start because no rebuild runs.
        heuristic.update(&grid, pose(20.0, 20.0), pose(50.0, 50.0));
        let root_after = heuristic.circle_path().first().unwrap().circle.center;
        assert_eq!(root_after, Point2D::new(10.0, 10.0));
    }

    #[test]
    fn test_goal_change_triggers_rebuild() {
        let grid = open_grid();
        let mut heuristic = HolonomicHeuristic::with_defaults();

        heuristic.update(&grid, pose(10.0, 10.0), pose(50.0, 50.0));
        heuristic.update(&grid, pose(10.0, 10.0), pose(40.0, 10.0));

        let last = heuristic.circle_path().last().unwrap().circle.center;
        assert_eq!(last, Point2D::new(40.0, 10.0));
    }

    #[test]
    fn test_failed_exploration_leaves_fallback() {
        let mut grid = open_grid();
        grid.set_occupied(50, 50);
        let mut heuristic = HolonomicHeuristic::with_defaults();

        // Goal inside the occupied cell: exploration fails.
        heuristic.update(&grid, pose(10.0, 10.0), pose(50.5, 50.5));

        assert!(heuristic.circle_path().is_empty());
        let probe = Point2D::new(20.0, 20.0);
        assert_relative_eq!(
            heuristic.value(probe),
            probe.distance(&Point2D::new(50.5, 50.5))
        );
    }
}
