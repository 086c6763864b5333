//! Lazy-deletion Dijkstra search.
//!
//! The frontier is a plain binary heap without decrease-key: improved
//! distances are pushed again and stale entries are skipped when popped.
//! Settled nodes are never relaxed again, so a search always terminates even
//! when negative weights slip through.

use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::{NodeId, RoadGraph};

use super::frontier::FrontierEntry;
use super::{PathFinder, ShortestPath};

/// Distance and parent labels produced by one search.
#[derive(Debug, Clone, Default)]
struct Labels {
    distance: HashMap<NodeId, f64>,
    parent: HashMap<NodeId, NodeId>,
}

impl Labels {
    /// Search from `origin`, stopping once `stop_at` is popped if given.
    #[expect(
        clippy::float_arithmetic,
        reason = "edge relaxation sums floating-point weights"
    )]
    fn search(graph: &RoadGraph, origin: NodeId, stop_at: Option<NodeId>) -> Self {
        let mut labels = Self::default();
        let mut frontier = BinaryHeap::new();
        let mut settled = HashSet::new();

        labels.distance.insert(origin, 0.0);
        frontier.push(FrontierEntry {
            cost: 0.0,
            node: origin,
        });

        while let Some(FrontierEntry { cost, node }) = frontier.pop() {
            if labels.distance.get(&node).is_some_and(|&best| cost > best) {
                continue;
            }
            if !settled.insert(node) {
                continue;
            }
            if stop_at == Some(node) {
                break;
            }
            for edge in graph.neighbours(node) {
                if settled.contains(&edge.to) {
                    continue;
                }
                let candidate = cost + edge.weight;
                let improves = labels
                    .distance
                    .get(&edge.to)
                    .is_none_or(|&best| candidate < best);
                if improves {
                    labels.distance.insert(edge.to, candidate);
                    labels.parent.insert(edge.to, node);
                    frontier.push(FrontierEntry {
                        cost: candidate,
                        node: edge.to,
                    });
                }
            }
        }
        labels
    }

    fn path(&self, origin: NodeId, target: NodeId) -> ShortestPath {
        let Some(&cost) = self.distance.get(&target) else {
            return ShortestPath::unreachable();
        };

        let mut nodes = vec![target];
        let mut current = target;
        while current != origin {
            let Some(&previous) = self.parent.get(&current) else {
                return ShortestPath::unreachable();
            };
            nodes.push(previous);
            current = previous;
        }
        nodes.reverse();
        ShortestPath { cost, nodes }
    }
}

/// Per-pair shortest-path search over a borrowed graph.
///
/// Each query runs a fresh search from `start` and stops as soon as
/// `target` is settled.
///
/// # Examples
/// ```
/// use rescue_core::{Dijkstra, PathFinder, RoadGraph};
///
/// let graph = RoadGraph::from_edges([(1, 2, 2.0), (2, 3, 2.0)]);
/// let finder = Dijkstra::new(&graph);
///
/// let path = finder.shortest_path(1, 3);
/// assert_eq!(path.nodes, vec![1, 2, 3]);
/// assert_eq!(finder.shortest_path(4, 4).cost, 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<'g> {
    graph: &'g RoadGraph,
}

impl<'g> Dijkstra<'g> {
    /// Create a finder over `graph`.
    #[must_use]
    pub const fn new(graph: &'g RoadGraph) -> Self {
        Self { graph }
    }

    /// The graph being searched.
    #[must_use]
    pub const fn graph(&self) -> &'g RoadGraph {
        self.graph
    }
}

impl PathFinder for Dijkstra<'_> {
    fn shortest_path(&self, start: NodeId, target: NodeId) -> ShortestPath {
        if start == target {
            return ShortestPath::trivial(start);
        }
        Labels::search(self.graph, start, Some(target)).path(start, target)
    }
}

/// Every shortest path out of one origin.
///
/// Growing a tree costs one full search; afterwards each
/// [`SearchTree::path_to`] call only walks parent labels. Results match
/// [`Dijkstra::shortest_path`] for the same origin exactly.
///
/// # Examples
/// ```
/// use rescue_core::{RoadGraph, SearchTree};
///
/// let graph = RoadGraph::from_edges([(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)]);
/// let tree = SearchTree::grow(&graph, 1);
///
/// assert_eq!(tree.path_to(3).nodes, vec![1, 2, 3]);
/// assert_eq!(tree.cost_to(2), Some(1.0));
/// assert_eq!(tree.cost_to(9), None);
/// ```
#[derive(Debug, Clone)]
pub struct SearchTree {
    origin: NodeId,
    labels: Labels,
}

impl SearchTree {
    /// Explore everything reachable from `origin`.
    #[must_use]
    pub fn grow(graph: &RoadGraph, origin: NodeId) -> Self {
        Self {
            origin,
            labels: Labels::search(graph, origin, None),
        }
    }

    /// Node the tree was grown from.
    #[must_use]
    pub const fn origin(&self) -> NodeId {
        self.origin
    }

    /// Number of nodes reached, the origin included.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.labels.distance.len()
    }

    /// Cost of the cheapest path to `target`, if any.
    #[must_use]
    pub fn cost_to(&self, target: NodeId) -> Option<f64> {
        if target == self.origin {
            return Some(0.0);
        }
        self.labels.distance.get(&target).copied()
    }

    /// Cheapest path from the origin to `target`.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> ShortestPath {
        if target == self.origin {
            return ShortestPath::trivial(self.origin);
        }
        self.labels.path(self.origin, target)
    }
}
