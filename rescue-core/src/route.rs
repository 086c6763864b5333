//! Vehicle routes produced by a planner.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// The path one vehicle drives, from its depot through its assigned
/// survivors and back to the nearest reachable pickup node.
///
/// # Examples
/// ```
/// use rescue_core::Route;
///
/// let route = Route::new(0, vec![1, 2, 3, 2, 1], 4.0, vec![2, 3]);
/// assert_eq!(route.depot(), Some(1));
/// assert_eq!(route.terminus(), Some(1));
/// assert_eq!(route.into_nodes(), vec![1, 2, 3, 2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    /// Index of the vehicle in the request's pickup list.
    pub vehicle: usize,
    /// Visited nodes in order, starting at the depot.
    pub nodes: Vec<NodeId>,
    /// Total travel cost, closing leg included.
    pub distance: f64,
    /// Survivor nodes in the order they were picked up.
    pub served: Vec<NodeId>,
}

impl Route {
    /// Construct a route.
    #[must_use]
    pub const fn new(vehicle: usize, nodes: Vec<NodeId>, distance: f64, served: Vec<NodeId>) -> Self {
        Self {
            vehicle,
            nodes,
            distance,
            served,
        }
    }

    /// First node of the route.
    #[must_use]
    pub fn depot(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node of the route.
    #[must_use]
    pub fn terminus(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Consume the route, keeping only the node sequence.
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_preserves_order() {
        let route = Route::new(2, vec![5, 6, 7], 2.0, vec![7]);
        assert_eq!(route.vehicle, 2);
        assert_eq!(route.nodes, vec![5, 6, 7]);
        assert_eq!(route.served, vec![7]);
    }

    #[test]
    fn empty_route_has_no_endpoints() {
        let route = Route::new(0, Vec::new(), 0.0, Vec::new());
        assert_eq!(route.depot(), None);
        assert_eq!(route.terminus(), None);
    }
}
