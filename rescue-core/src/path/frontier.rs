//! Min-heap entries for the search frontier.

use std::cmp::Ordering;

use crate::graph::NodeId;

/// Tentative distance to `node`, ordered so that `BinaryHeap` pops the
/// smallest cost first. Equal costs pop the smaller node ID first, which
/// keeps searches deterministic regardless of heap internals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct FrontierEntry {
    pub(super) cost: f64,
    pub(super) node: NodeId,
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
