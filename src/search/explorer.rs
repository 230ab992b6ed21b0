//! The space-exploration search driver.
//!
//! Grows a tree of maximal free-space circles from the start toward the
//! goal. The main loop alternates one pop from the nearest-to-goal queue
//! with one pop from the largest-radius queue: the first is greedy and
//! can get trapped hugging obstacles, the second favours spacious
//! corridors and finds detours around large obstacles. Alternating
//! combines the two drives at equal weight without a tuned trade-off
//! scalar.

use crate::core::{Circle, Point2D};
use crate::error::ExplorationError;
use crate::grid::ClearanceGrid;
use crate::path::{CirclePath, CircleWaypoint};

use super::config::ExplorationConfig;
use super::expansion::expand_circle;
use super::frontier::DualFrontier;
use super::node::CircleNode;

/// Circle-based free-space search between two points.
#[derive(Debug, Clone)]
pub struct SpaceExplorer {
    config: ExplorationConfig,
}

impl SpaceExplorer {
    /// Create an explorer with the given configuration.
    pub fn new(config: ExplorationConfig) -> Self {
        Self { config }
    }

    /// Create an explorer with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ExplorationConfig::default())
    }

    /// Access the configuration.
    pub fn config(&self) -> &ExplorationConfig {
        &self.config
    }

    /// Search for a circle path from `start` to `goal`.
    ///
    /// Returns the rebuilt path on success. All nodes created during the
    /// search are released before this method returns, whatever the
    /// outcome; the returned path owns fresh copies.
    pub fn explore<G: ClearanceGrid>(
        &self,
        grid: &G,
        start: Point2D,
        goal: Point2D,
    ) -> Result<CirclePath, ExplorationError> {
        let mut state = SearchState::new(&self.config, grid, start, goal)?;
        state.run()
    }
}

/// Transient state of one exploration run. Dropping it releases the
/// arena and both queues.
struct SearchState<'a, G: ClearanceGrid> {
    config: &'a ExplorationConfig,
    grid: &'a G,
    goal_circle: Circle,
    arena: Vec<CircleNode>,
    frontier: DualFrontier,
    closed: Vec<usize>,
    processed: usize,
}

impl<'a, G: ClearanceGrid> SearchState<'a, G> {
    /// Seed a run with the start circle, rejecting blocked endpoints.
    fn new(
        config: &'a ExplorationConfig,
        grid: &'a G,
        start: Point2D,
        goal: Point2D,
    ) -> Result<Self, ExplorationError> {
        let start_clearance = grid.clearance(start);
        if start_clearance <= 0.0 {
            return Err(ExplorationError::StartBlocked);
        }

        let goal_clearance = grid.clearance(goal);
        if goal_clearance <= 0.0 {
            return Err(ExplorationError::GoalBlocked);
        }

        let mut state = Self {
            config,
            grid,
            goal_circle: Circle::new(goal, goal_clearance),
            arena: vec![CircleNode {
                circle: Circle::new(start, start_clearance),
                g: 0.0,
                f: start.distance(&goal),
                parent: None,
                explored: false,
            }],
            frontier: DualFrontier::new(),
            closed: Vec::new(),
            processed: 0,
        };
        state.frontier.push(0, state.arena[0].f, start_clearance);
        Ok(state)
    }

    /// Drain the open sets, alternating between the two queues.
    fn run(&mut self) -> Result<CirclePath, ExplorationError> {
        while let Some(index) = self.frontier.pop_nearest() {
            if let Some(path) = self.process(index)? {
                return Ok(path);
            }

            if let Some(index) = self.frontier.pop_largest() {
                if let Some(path) = self.process(index)? {
                    return Ok(path);
                }
            }
        }

        tracing::debug!(
            processed = self.processed,
            "open set exhausted without reaching the goal circle"
        );
        Err(ExplorationError::NoPathFound)
    }

    /// Resolve one popped node: skip it, or expand it and test the goal.
    ///
    /// Returns the rebuilt path when the node's circle overlaps the goal
    /// circle.
    fn process(&mut self, index: usize) -> Result<Option<CirclePath>, ExplorationError> {
        if self.arena[index].explored {
            return Ok(None);
        }

        // Re-test novelty at pop time: the admission-time check cannot
        // see siblings admitted by the same expansion.
        let circle = self.arena[index].circle;
        let parent = self.arena[index].parent;
        if self.conflicts_with_closed(&circle, parent) {
            self.arena[index].explored = true;
            return Ok(None);
        }

        self.processed += 1;
        if self.processed > self.config.max_iterations {
            tracing::warn!(
                limit = self.config.max_iterations,
                "exploration exceeded the processed-node cap"
            );
            return Err(ExplorationError::IterationLimitExceeded(
                self.config.max_iterations,
            ));
        }

        self.arena[index].explored = true;
        self.closed.push(index);

        let children = expand_circle(
            &self.arena[index],
            index,
            self.goal_circle.center,
            self.grid,
            self.config,
        );
        for child in children {
            if !self.conflicts_with_closed(&child.circle, child.parent) {
                let f = child.f;
                let radius = child.circle.radius;
                self.arena.push(child);
                self.frontier.push(self.arena.len() - 1, f, radius);
            }
        }

        if circle.overlaps(&self.goal_circle, self.config.goal_overlap_factor) {
            return Ok(Some(self.rebuild_path(index)));
        }

        Ok(None)
    }

    /// Whether `circle` overlaps any closed node other than its parent
    /// under the duplicate factor.
    ///
    /// Every child overlaps its own parent substantially by
    /// construction, so the parent is excluded from the scan.
    fn conflicts_with_closed(&self, circle: &Circle, parent: Option<usize>) -> bool {
        self.closed.iter().any(|&closed_index| {
            Some(closed_index) != parent
                && self.arena[closed_index]
                    .circle
                    .overlaps(circle, self.config.duplicate_overlap_factor)
        })
    }

    /// Rebuild the final polyline from the overlapping node's parent
    /// chain.
    ///
    /// The expansion-time `g` (accumulated parent radii) is replaced by
    /// the cumulative chord length from the root; the circle order and
    /// the circle set are unchanged. The goal circle becomes the
    /// terminal waypoint.
    fn rebuild_path(&self, overlap_index: usize) -> CirclePath {
        let mut chain = Vec::new();
        let mut cursor = Some(overlap_index);
        while let Some(index) = cursor {
            chain.push(index);
            cursor = self.arena[index].parent;
        }
        chain.reverse();

        let mut waypoints: Vec<CircleWaypoint> = Vec::with_capacity(chain.len() + 1);
        let mut g = 0.0;
        for &index in &chain {
            let circle = self.arena[index].circle;
            if let Some(previous) = waypoints.last() {
                g += previous.circle.center.distance(&circle.center);
            }
            waypoints.push(CircleWaypoint { circle, g });
        }

        if let Some(previous) = waypoints.last() {
            g += previous.circle.center.distance(&self.goal_circle.center);
        }
        waypoints.push(CircleWaypoint {
            circle: self.goal_circle,
            g,
        });

        CirclePath::new(waypoints)
    }
}
