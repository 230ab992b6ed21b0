//! Child-circle generation on a parent's circumference.

use std::f32::consts::TAU;

use crate::core::{Circle, Point2D};
use crate::grid::ClearanceGrid;

use super::config::ExplorationConfig;
use super::node::CircleNode;

/// Sample candidate children on the circumference of `parent`.
///
/// Centres lie on the parent circle itself, so the chord from the parent
/// centre to any child centre stays inside the parent's free disk and is
/// therefore obstacle-free. Candidates outside the map and candidates
/// whose shrunken clearance radius is at or below the usable floor are
/// dropped.
pub(crate) fn expand_circle<G: ClearanceGrid>(
    parent: &CircleNode,
    parent_index: usize,
    goal: Point2D,
    grid: &G,
    config: &ExplorationConfig,
) -> Vec<CircleNode> {
    let step = TAU / config.circumference_samples as f32;
    let mut children = Vec::new();

    // Inclusive sweep: both endpoints of [0, 2π] are sampled.
    for i in 0..=config.circumference_samples {
        let angle = i as f32 * step;
        let center = Point2D::new(
            parent.circle.center.x + parent.circle.radius * angle.cos(),
            parent.circle.center.y + parent.circle.radius * angle.sin(),
        );

        if !grid.is_valid_point(center) {
            continue;
        }

        let radius = grid.clearance(center) - config.safety_margin;
        if radius <= config.min_radius {
            continue;
        }

        // Step cost is the parent radius: the exact chord length to a
        // point on the circumference, with no sqrt per sample.
        let g = parent.g + parent.circle.radius;

        children.push(CircleNode {
            circle: Circle::new(center, radius),
            g,
            f: g + center.distance(&goal),
            parent: Some(parent_index),
            explored: false,
        });
    }

    children
}
