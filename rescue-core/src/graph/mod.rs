//! Adjacency-list road graph.
//!
//! [`RoadGraph`] maps each node to its outgoing weighted edges. The store is
//! append-only: edges are inserted while the graph is built and the graph is
//! then only read while routing. Nodes without outgoing edges have no entry
//! and behave as leaves.

mod record;

use std::collections::HashMap;

pub use record::{EdgeRecord, EdgeState};

/// Opaque node identifier.
///
/// Identifiers carry no meaning beyond identity; hosts typically reuse the
/// IDs of the map data the graph was derived from.
pub type NodeId = i64;

/// A directed edge stored under its source node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Destination node.
    pub to: NodeId,
    /// Travel cost of the edge. Must be non-negative for searches to be exact.
    pub weight: f64,
}

/// Directed, weighted multigraph keyed by [`NodeId`].
///
/// Parallel edges and self loops are kept as inserted; searches consider all
/// of them. No weight validation happens here, see
/// [`PlanRequest::validate`](crate::PlanRequest::validate) for the boundary
/// check.
///
/// # Examples
/// ```
/// use rescue_core::RoadGraph;
///
/// let mut graph = RoadGraph::new();
/// graph.add_edge(1, 2, 1.5);
/// graph.add_edge(1, 3, 4.0);
///
/// assert_eq!(graph.neighbours(1).len(), 2);
/// assert!(graph.neighbours(2).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadGraph {
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl RoadGraph {
    /// Construct an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from host edge records.
    ///
    /// Each record is inserted through [`RoadGraph::add_record`], so edge
    /// states scale the stored weights and two-way records add both
    /// directions.
    #[must_use]
    pub fn from_records(records: &[EdgeRecord]) -> Self {
        let mut graph = Self::new();
        for record in records {
            graph.add_record(record);
        }
        graph
    }

    /// Build a graph from raw `(from, to, weight)` triples.
    ///
    /// # Examples
    /// ```
    /// use rescue_core::RoadGraph;
    ///
    /// let graph = RoadGraph::from_edges([(1, 2, 1.0), (2, 1, 1.0)]);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    #[must_use]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId, f64)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Append a directed edge `from -> to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to, weight });
    }

    /// Append edges in both directions with the same weight.
    pub fn add_two_way(&mut self, a: NodeId, b: NodeId, weight: f64) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Insert a host edge record using its state-adjusted travel cost.
    pub fn add_record(&mut self, record: &EdgeRecord) {
        let cost = record.travel_cost();
        if record.two_way {
            self.add_two_way(record.from, record.to, cost);
        } else {
            self.add_edge(record.from, record.to, cost);
        }
    }

    /// Outgoing edges of `node`, empty when the node has no entry.
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Whether `node` has an adjacency entry, i.e. at least one out-edge.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of nodes with at least one outgoing edge.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of stored edges, parallel edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
