//! # holonomic-heuristic
//!
//! Holonomic cost-to-go heuristic for Hybrid A* motion planners.
//!
//! The crate answers one query: given an obstacle map, a start pose, a
//! goal pose, and an arbitrary probe point, what is a cheap but
//! informative estimate of the remaining travel distance that respects
//! obstacles while ignoring the vehicle's minimum turning radius?
//!
//! ## How it works
//!
//! - **Space exploration**: a search grows a tree of maximal free-space
//!   circles from the start toward the goal. Each circle is centred in
//!   free space with radius equal to the obstacle clearance at its
//!   centre; children are sampled on the parent's circumference, so
//!   consecutive centres are joined by obstacle-free chords.
//! - **Dual open sets**: the main loop alternates between a queue
//!   ordered by estimated total cost (greedy toward the goal) and a
//!   queue ordered by radius (drawn to wide corridors). The combination
//!   finds detours around large obstacles without a tuned trade-off
//!   weight.
//! - **Circle path**: on success the discovered parent chain is rebuilt
//!   into a polyline with cumulative chord lengths. Queries return the
//!   path cost up to the circle nearest the probe plus the straight-line
//!   remainder, and fall back to plain Euclidean distance when no path
//!   exists.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use holonomic_heuristic::{DistanceGrid, HolonomicHeuristic, Point2D, Pose2D};
//!
//! let mut grid = DistanceGrid::new(200, 200, 0.05, Point2D::ZERO);
//! grid.set_occupied(100, 80);
//!
//! let mut heuristic = HolonomicHeuristic::with_defaults();
//! heuristic.update(&grid, Pose2D::new(1.0, 1.0, 0.0), Pose2D::new(8.0, 8.0, 0.0));
//!
//! let estimate = heuristic.value(Point2D::new(4.0, 4.0));
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod path;
pub mod search;

pub use core::{Circle, Point2D, Pose2D, normalize_angle};
pub use error::ExplorationError;
pub use grid::{ClearanceGrid, DistanceGrid};
pub use heuristic::HolonomicHeuristic;
pub use path::{CirclePath, CircleWaypoint};
pub use search::{ExplorationConfig, SpaceExplorer};
