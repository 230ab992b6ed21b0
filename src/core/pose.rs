//! Planar poses in the world frame.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Normalize an angle to [-π, π].
pub fn normalize_angle(angle: f32) -> f32 {
    let mut result = angle;
    while result > std::f32::consts::PI {
        result -= std::f32::consts::TAU;
    }
    while result < -std::f32::consts::PI {
        result += std::f32::consts::TAU;
    }
    result
}

/// A planar pose: position in meters plus heading in radians.
///
/// Heading is normalized to [-π, π] at construction. Pose equality is
/// exact; the heuristic compares poses to detect goal changes between
/// planner ticks. The heading itself is carried for the surrounding
/// planner — the circle search only reads the position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters
    pub x: f32,
    /// Y position in meters
    pub y: f32,
    /// Heading in radians, normalized to [-π, π]
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose with theta normalized to [-π, π].
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Position component of the pose.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_theta_normalized_at_construction() {
        let p = Pose2D::new(1.0, 2.0, TAU + 0.5);
        assert_relative_eq!(p.theta, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_position() {
        let p = Pose2D::new(3.0, -1.5, 0.2);
        assert_eq!(p.position(), Point2D::new(3.0, -1.5));
    }

    #[test]
    fn test_normalize_angle() {
        assert_relative_eq!(normalize_angle(0.0), 0.0);
        assert_relative_eq!(normalize_angle(PI), PI);
        assert!(normalize_angle(TAU).abs() < 1e-5);
        assert!(normalize_angle(-TAU).abs() < 1e-5);
    }

    #[test]
    fn test_equality_detects_goal_change() {
        let a = Pose2D::new(1.0, 2.0, 0.0);
        let b = Pose2D::new(1.0, 2.0, 0.0);
        let c = Pose2D::new(1.0, 2.5, 0.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
