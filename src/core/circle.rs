//! Free-space circles and the overlap predicate used by the search.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// A disk of free space: centre plus clearance radius.
///
/// By construction the radius equals the obstacle clearance at the
/// centre, so the whole disk lies in free space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Centre in world coordinates
    pub center: Point2D,
    /// Radius in meters
    pub radius: f32,
}

impl Circle {
    /// Create a new circle.
    #[inline]
    pub fn new(center: Point2D, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Test whether this circle overlaps `other`.
    ///
    /// The criterion is asymmetric on purpose:
    /// `distance(centres) − max(r) < factor × min(r)`. It tolerates a
    /// small circle enclosed by a large one, the common case where a
    /// corridor circle meets a room circle.
    pub fn overlaps(&self, other: &Circle, factor: f32) -> bool {
        let (smaller, greater) = if self.radius > other.radius {
            (other.radius, self.radius)
        } else {
            (self.radius, other.radius)
        };

        self.center.distance(&other.center) - greater < factor * smaller
    }
}
