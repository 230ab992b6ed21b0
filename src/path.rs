//! The circle path produced by a successful exploration.
//!
//! A [`CirclePath`] is an ordered sequence of overlapping free-space
//! circles whose centres form an obstacle-free polyline from the start
//! to the goal. Heuristic queries read it without modifying it.

use serde::{Deserialize, Serialize};

use crate::core::{Circle, Point2D};

/// One circle along the path, with the cumulative polyline length from
/// the path root to its centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleWaypoint {
    /// The free-space circle.
    pub circle: Circle,
    /// Chord-length sum from the first waypoint's centre to this centre.
    pub g: f32,
}

/// An ordered sequence of overlapping free-space circles, root first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CirclePath {
    waypoints: Vec<CircleWaypoint>,
}

impl CirclePath {
    /// Build a path from waypoints ordered root-first with cumulative `g`.
    pub fn new(waypoints: Vec<CircleWaypoint>) -> Self {
        Self { waypoints }
    }

    /// A path with no circles.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the path has no circles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Number of circles along the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// All waypoints, root first.
    #[inline]
    pub fn waypoints(&self) -> &[CircleWaypoint] {
        &self.waypoints
    }

    /// The first waypoint (the start circle), if any.
    #[inline]
    pub fn first(&self) -> Option<&CircleWaypoint> {
        self.waypoints.first()
    }

    /// The last waypoint (the goal circle), if any.
    #[inline]
    pub fn last(&self) -> Option<&CircleWaypoint> {
        self.waypoints.last()
    }

    /// Total polyline length in meters.
    pub fn total_length(&self) -> f32 {
        self.waypoints.last().map_or(0.0, |waypoint| waypoint.g)
    }

    /// The waypoint whose centre is nearest to `probe`, with a one-step
    /// look-ahead.
    ///
    /// When the probe already lies past the nearest circle along the
    /// path — the successor's centre is closer to the probe than to the
    /// nearest centre — the successor is selected instead, so the
    /// estimate does not count a backtrack leg.
    pub fn nearest_waypoint(&self, probe: Point2D) -> Option<&CircleWaypoint> {
        if self.waypoints.is_empty() {
            return None;
        }

        let mut nearest = 0;
        let mut best = probe.distance_squared(&self.waypoints[0].circle.center);

        for (i, waypoint) in self.waypoints.iter().enumerate().skip(1) {
            let d = probe.distance_squared(&waypoint.circle.center);
            if d < best {
                best = d;
                nearest = i;
            }
        }

        if let Some(next) = self.waypoints.get(nearest + 1) {
            let current = &self.waypoints[nearest];
            if current.circle.center.distance_squared(&next.circle.center)
                > probe.distance_squared(&next.circle.center)
            {
                return Some(next);
            }
        }

        Some(&self.waypoints[nearest])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn collinear_path() -> CirclePath {
        CirclePath::new(vec![
            CircleWaypoint {
                circle: Circle::new(Point2D::new(0.0, 0.0), 5.0),
                g: 0.0,
            },
            CircleWaypoint {
                circle: Circle::new(Point2D::new(10.0, 0.0), 5.0),
                g: 10.0,
            },
            CircleWaypoint {
                circle: Circle::new(Point2D::new(20.0, 0.0), 5.0),
                g: 20.0,
            },
        ])
    }

    #[test]
    fn test_empty_path_has_no_nearest() {
        let path = CirclePath::empty();
        assert!(path.is_empty());
        assert!(path.nearest_waypoint(Point2D::ZERO).is_none());
        assert_eq!(path.total_length(), 0.0);
    }

    #[test]
    fn test_nearest_without_look_ahead() {
        let path = collinear_path();
        // Probe behind the middle circle: plain nearest-centre selection.
        let waypoint = path.nearest_waypoint(Point2D::new(9.0, 0.0)).unwrap();
        assert_eq!(waypoint.circle.center, Point2D::new(10.0, 0.0));
    }

    #[test]
    fn test_look_ahead_selects_successor() {
        let path = collinear_path();
        let probe = Point2D::new(11.0, 0.0);

        // The probe sits past the middle circle: 100 = |nm|² > |pm|² = 81,
        // so the successor at (20, 0) is selected.
        let waypoint = path.nearest_waypoint(probe).unwrap();
        assert_eq!(waypoint.circle.center, Point2D::new(20.0, 0.0));

        let estimate = waypoint.g + probe.distance(&waypoint.circle.center);
        assert_relative_eq!(estimate, 29.0);
    }

    #[test]
    fn test_look_ahead_not_applied_at_path_end() {
        let path = collinear_path();
        let waypoint = path.nearest_waypoint(Point2D::new(25.0, 0.0)).unwrap();
        assert_eq!(waypoint.circle.center, Point2D::new(20.0, 0.0));
    }

    #[test]
    fn test_tie_resolves_to_first_found() {
        let path = collinear_path();
        // Equidistant from the first two centres; the scan keeps the
        // first one, and from this probe the look-ahead does not fire.
        let waypoint = path.nearest_waypoint(Point2D::new(5.0, 12.0)).unwrap();
        assert_eq!(waypoint.circle.center, Point2D::new(0.0, 0.0));
    }

    #[test]
    fn test_total_length_is_last_g() {
        let path = collinear_path();
        assert_relative_eq!(path.total_length(), 20.0);
        assert_eq!(path.len(), 3);
        assert_eq!(path.first().unwrap().g, 0.0);
        assert_eq!(path.last().unwrap().g, 20.0);
    }
}
