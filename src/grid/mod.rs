//! The occupancy-map seam consumed by the exploration search.
//!
//! The heuristic never owns map data; it reads a [`ClearanceGrid`]
//! provided by the surrounding planner. [`DistanceGrid`] is a concrete
//! implementation backed by an occupancy bitmap with a Brushfire distance
//! field, suitable for tests, benches, and standalone use.

mod distance_grid;

pub use distance_grid::DistanceGrid;

use crate::core::Point2D;

/// Obstacle-clearance queries the exploration search needs from a map.
pub trait ClearanceGrid {
    /// Whether `point` lies inside the mapped area on traversable ground.
    fn is_valid_point(&self, point: Point2D) -> bool;

    /// Euclidean distance from `point` to the nearest obstacle, in meters.
    ///
    /// Points outside the mapped area have zero clearance.
    fn clearance(&self, point: Point2D) -> f32;

    /// World extent of the mapped area as (width, height) in meters.
    fn extent(&self) -> (f32, f32);

    /// Whether the map content changed since this flag was last read.
    ///
    /// Reading clears the flag.
    fn has_changed(&self) -> bool;
}
