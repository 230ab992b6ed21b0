//! Occupancy grid with a pre-computed obstacle distance field.

use std::cell::Cell;
use std::collections::VecDeque;
use std::f32::consts::SQRT_2;

use super::ClearanceGrid;
use crate::core::Point2D;

/// 8-connected neighbour offsets with step lengths in cells.
const NEIGHBORS: [(i32, i32, f32); 8] = [
    (-1, 0, 1.0),
    (1, 0, 1.0),
    (0, -1, 1.0),
    (0, 1, 1.0),
    (-1, -1, SQRT_2),
    (1, -1, SQRT_2),
    (-1, 1, SQRT_2),
    (1, 1, SQRT_2),
];

/// Occupancy grid backed by a Brushfire distance field.
///
/// The distance field is maintained eagerly: marking a cell occupied
/// lowers the distances around it with a bounded BFS wave, and freeing a
/// cell recomputes the field from the remaining obstacles. The BFS metric
/// is the usual 8-connected chamfer approximation of Euclidean distance.
///
/// Clearance is additionally clamped by the distance to the map border,
/// so a free disk never extends past the mapped area — without the clamp
/// an obstacle-free map would report unbounded clearance everywhere.
///
/// The changed flag follows a read-clears contract: it starts raised,
/// is raised again by every mutation, and is consumed by
/// [`ClearanceGrid::has_changed`].
#[derive(Debug, Clone)]
pub struct DistanceGrid {
    width: usize,
    height: usize,
    resolution: f32,
    origin: Point2D,
    occupied: Vec<bool>,
    /// Distance from each cell to the nearest occupied cell, in meters
    /// (`f32::MAX` while the map has no obstacles).
    distance_field: Vec<f32>,
    changed: Cell<bool>,
}

impl DistanceGrid {
    /// Create an obstacle-free grid with the given dimensions.
    pub fn new(width: usize, height: usize, resolution: f32, origin: Point2D) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            resolution,
            origin,
            occupied: vec![false; size],
            distance_field: vec![f32::MAX; size],
            changed: Cell::new(true),
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resolution in meters per cell.
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Grid origin in world coordinates.
    #[inline]
    pub fn origin(&self) -> Point2D {
        self.origin
    }

    /// Whether the cell at (x, y) is occupied. Cells outside the grid
    /// count as occupied.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cell_index(x, y)
            .map(|index| self.occupied[index])
            .unwrap_or(true)
    }

    /// Mark the cell at (x, y) as occupied.
    ///
    /// Lowers the distance field around the cell and raises the changed
    /// flag. Out-of-range coordinates are ignored.
    pub fn set_occupied(&mut self, x: usize, y: usize) {
        let Some(index) = self.cell_index(x, y) else {
            return;
        };
        if self.occupied[index] {
            return;
        }

        self.occupied[index] = true;
        self.changed.set(true);

        self.distance_field[index] = 0.0;
        let mut queue = VecDeque::new();
        queue.push_back(index);
        self.relax_distances(&mut queue);
    }

    /// Mark the cell at (x, y) as free.
    ///
    /// Raising distances is non-local, so the field is recomputed from
    /// the remaining obstacles. Out-of-range coordinates are ignored.
    pub fn set_free(&mut self, x: usize, y: usize) {
        let Some(index) = self.cell_index(x, y) else {
            return;
        };
        if !self.occupied[index] {
            return;
        }

        self.occupied[index] = false;
        self.changed.set(true);
        self.recompute_field();
    }

    fn cell_index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn world_to_cell(&self, point: Point2D) -> Option<usize> {
        let cx = ((point.x - self.origin.x) / self.resolution).floor() as i32;
        let cy = ((point.y - self.origin.y) / self.resolution).floor() as i32;

        if cx < 0 || cy < 0 || cx >= self.width as i32 || cy >= self.height as i32 {
            return None;
        }
        Some(cy as usize * self.width + cx as usize)
    }

    /// Brushfire relaxation: propagate shorter obstacle distances
    /// outward from the seeded cells until no cell improves.
    fn relax_distances(&mut self, queue: &mut VecDeque<usize>) {
        while let Some(index) = queue.pop_front() {
            let x = (index % self.width) as i32;
            let y = (index / self.width) as i32;
            let current = self.distance_field[index];

            for &(dx, dy, step) in &NEIGHBORS {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || ny < 0 || nx >= self.width as i32 || ny >= self.height as i32 {
                    continue;
                }

                let neighbor = ny as usize * self.width + nx as usize;
                let candidate = current + step * self.resolution;
                if candidate < self.distance_field[neighbor] {
                    self.distance_field[neighbor] = candidate;
                    queue.push_back(neighbor);
                }
            }
        }
    }

    fn recompute_field(&mut self) {
        self.distance_field.fill(f32::MAX);

        let mut queue = VecDeque::new();
        for (index, &occupied) in self.occupied.iter().enumerate() {
            if occupied {
                self.distance_field[index] = 0.0;
                queue.push_back(index);
            }
        }
        self.relax_distances(&mut queue);
    }
}

impl ClearanceGrid for DistanceGrid {
    fn is_valid_point(&self, point: Point2D) -> bool {
        self.world_to_cell(point)
            .is_some_and(|index| !self.occupied[index])
    }

    fn clearance(&self, point: Point2D) -> f32 {
        let Some(index) = self.world_to_cell(point) else {
            return 0.0;
        };

        let (width, height) = self.extent();
        let border = (point.x - self.origin.x)
            .min(self.origin.x + width - point.x)
            .min(point.y - self.origin.y)
            .min(self.origin.y + height - point.y)
            .max(0.0);

        self.distance_field[index].min(border)
    }

    fn extent(&self) -> (f32, f32) {
        (
            self.width as f32 * self.resolution,
            self.height as f32 * self.resolution,
        )
    }

    fn has_changed(&self) -> bool {
        self.changed.replace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid_20x20() -> DistanceGrid {
        DistanceGrid::new(20, 20, 1.0, Point2D::ZERO)
    }

    #[test]
    fn test_clearance_near_obstacle() {
        let mut grid = grid_20x20();
        grid.set_occupied(10, 10);

        // Two cells to the right of the obstacle.
        assert_relative_eq!(grid.clearance(Point2D::new(12.5, 10.5)), 2.0);
        // Inside the occupied cell.
        assert_eq!(grid.clearance(Point2D::new(10.5, 10.5)), 0.0);
    }

    #[test]
    fn test_clearance_clamped_by_border() {
        let grid = grid_20x20();
        assert_relative_eq!(grid.clearance(Point2D::new(3.25, 10.0)), 3.25);
        assert_relative_eq!(grid.clearance(Point2D::new(10.0, 18.5)), 1.5);
    }

    #[test]
    fn test_clearance_outside_grid_is_zero() {
        let grid = grid_20x20();
        assert_eq!(grid.clearance(Point2D::new(-1.0, 5.0)), 0.0);
        assert_eq!(grid.clearance(Point2D::new(5.0, 25.0)), 0.0);
    }

    #[test]
    fn test_point_validity() {
        let mut grid = grid_20x20();
        grid.set_occupied(4, 4);

        assert!(grid.is_valid_point(Point2D::new(10.0, 10.0)));
        assert!(!grid.is_valid_point(Point2D::new(4.5, 4.5)));
        assert!(!grid.is_valid_point(Point2D::new(-0.5, 10.0)));
    }

    #[test]
    fn test_changed_flag_read_clears() {
        let mut grid = grid_20x20();

        // Raised at construction.
        assert!(grid.has_changed());
        assert!(!grid.has_changed());

        grid.set_occupied(3, 3);
        assert!(grid.has_changed());
        assert!(!grid.has_changed());

        // Re-occupying an occupied cell is not a change.
        grid.set_occupied(3, 3);
        assert!(!grid.has_changed());
    }

    #[test]
    fn test_set_free_recomputes_field() {
        let mut grid = grid_20x20();
        grid.set_occupied(5, 5);
        assert_relative_eq!(grid.clearance(Point2D::new(8.5, 5.5)), 3.0);

        grid.set_free(5, 5);
        // Back to border-limited clearance.
        assert_relative_eq!(grid.clearance(Point2D::new(8.5, 5.5)), 5.5);
        assert!(grid.has_changed());
    }

    #[test]
    fn test_diagonal_distance_uses_chamfer_steps() {
        let mut grid = grid_20x20();
        grid.set_occupied(10, 10);

        let d = grid.clearance(Point2D::new(13.5, 13.5));
        assert_relative_eq!(d, 3.0 * SQRT_2, epsilon = 1e-4);
    }

    #[test]
    fn test_extent() {
        let grid = DistanceGrid::new(40, 20, 0.5, Point2D::new(-1.0, -1.0));
        assert_eq!(grid.extent(), (20.0, 10.0));
    }
}
