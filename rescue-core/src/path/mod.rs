//! Shortest-path search over a [`RoadGraph`](crate::RoadGraph).
//!
//! Two entry points share one search routine:
//!
//! - [`Dijkstra`] answers a single `start -> target` query and stops as soon
//!   as the target leaves the frontier.
//! - [`SearchTree`] explores everything reachable from one origin and then
//!   answers any number of `origin -> target` queries. Its answers are the
//!   same as the per-pair search, including the chosen path on ties.
//!
//! Unreachable targets are reported with [`UNREACHABLE_COST`] and an empty
//! node list rather than an error. All edge weights must be non-negative;
//! negative weights produce unspecified (but terminating) results.

mod dijkstra;
mod frontier;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::{NodeId, RoadGraph};

pub use dijkstra::{Dijkstra, SearchTree};

/// Cost reported for a target that cannot be reached.
///
/// Real path costs are never negative, so the value is out of band.
pub const UNREACHABLE_COST: f64 = -1.0;

/// Result of a shortest-path query.
///
/// A reachable result lists the nodes from start to target inclusive. An
/// unreachable result has cost [`UNREACHABLE_COST`] and no nodes.
///
/// # Examples
/// ```
/// use rescue_core::{RoadGraph, ShortestPath, shortest_path};
///
/// let graph = RoadGraph::from_edges([(1, 2, 1.0), (1, 3, 4.0), (2, 3, 1.0)]);
/// let path = shortest_path(&graph, 1, 3);
/// assert_eq!(path.cost, 2.0);
/// assert_eq!(path.nodes, vec![1, 2, 3]);
///
/// assert_eq!(shortest_path(&graph, 3, 1), ShortestPath::unreachable());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShortestPath {
    /// Sum of edge weights along `nodes`, or [`UNREACHABLE_COST`].
    pub cost: f64,
    /// Nodes from start to target inclusive; empty when unreachable.
    pub nodes: Vec<NodeId>,
}

impl ShortestPath {
    /// The zero-length path that starts and ends at `node`.
    #[must_use]
    pub fn trivial(node: NodeId) -> Self {
        Self {
            cost: 0.0,
            nodes: vec![node],
        }
    }

    /// The unreachable sentinel.
    #[must_use]
    pub const fn unreachable() -> Self {
        Self {
            cost: UNREACHABLE_COST,
            nodes: Vec::new(),
        }
    }

    /// Whether the query found a path.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Convert the sentinel form into an `Option`.
    #[must_use]
    pub fn into_leg(self) -> Option<Self> {
        self.is_reachable().then_some(self)
    }

    /// Nodes after the first, i.e. what a route already standing on the
    /// start node needs to append.
    #[must_use]
    pub fn continuation(&self) -> &[NodeId] {
        self.nodes.split_first().map_or(&[], |(_, rest)| rest)
    }
}

/// Answer `start -> target` shortest-path queries.
///
/// Implementations must return [`ShortestPath::trivial`] when
/// `start == target` and [`ShortestPath::unreachable`] when no path exists.
pub trait PathFinder {
    /// Find the cheapest path from `start` to `target`.
    fn shortest_path(&self, start: NodeId, target: NodeId) -> ShortestPath;
}

/// Run a single per-pair search on `graph`.
///
/// Shorthand for `Dijkstra::new(graph).shortest_path(start, target)`.
#[must_use]
pub fn shortest_path(graph: &RoadGraph, start: NodeId, target: NodeId) -> ShortestPath {
    Dijkstra::new(graph).shortest_path(start, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn trivial_path_has_zero_cost() {
        let path = ShortestPath::trivial(5);
        assert!(path.is_reachable());
        assert_eq!(path.nodes, vec![5]);
        assert!(path.continuation().is_empty());
    }

    #[rstest]
    fn unreachable_is_not_a_leg() {
        let path = ShortestPath::unreachable();
        assert!(!path.is_reachable());
        assert!(path.into_leg().is_none());
    }

    #[rstest]
    fn continuation_skips_start_node() {
        let path = ShortestPath {
            cost: 2.0,
            nodes: vec![1, 2, 3],
        };
        assert_eq!(path.continuation(), &[2, 3]);
    }
}
