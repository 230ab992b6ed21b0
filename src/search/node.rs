//! Search-tree nodes and priority-queue entries.

use std::cmp::Ordering;

use crate::core::Circle;

/// A node of the exploration tree: a free-space circle plus search
/// bookkeeping.
///
/// Nodes live in an arena (`Vec<CircleNode>`); `parent` is an index into
/// that arena. Dropping the arena releases every node the search created,
/// on success and failure alike.
#[derive(Debug, Clone)]
pub(crate) struct CircleNode {
    pub circle: Circle,

    /// Cost from the root.
    ///
    /// During the search this accumulates parent radii — the
    /// centre-to-centre step to a child on the circumference, known
    /// without computing a square root. The rebuild pass rewrites it to
    /// the cumulative chord length along the installed polyline.
    pub g: f32,

    /// Priority key: `g` plus the Euclidean distance to the goal centre.
    pub f: f32,

    /// Arena index of the parent node; `None` for the root.
    pub parent: Option<usize>,

    /// Set the first time the node is popped and resolved. The same node
    /// sits in both open queues; the second pop sees the flag and is
    /// skipped.
    pub explored: bool,
}

/// Entry of the nearest-to-goal queue.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NearestEntry {
    pub index: usize,
    pub f: f32,
}

impl PartialEq for NearestEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f
    }
}

impl Eq for NearestEntry {}

impl Ord for NearestEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lower f = higher priority)
        other.f.partial_cmp(&self.f).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for NearestEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Entry of the largest-radius queue.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LargestEntry {
    pub index: usize,
    pub radius: f32,
}

impl PartialEq for LargestEntry {
    fn eq(&self, other: &Self) -> bool {
        self.radius == other.radius
    }
}

impl Eq for LargestEntry {}

impl Ord for LargestEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural ordering: BinaryHeap pops the largest radius first.
        self.radius
            .partial_cmp(&other.radius)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for LargestEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
