//! Test-only graph fixtures and path checks shared by unit, behaviour and
//! property tests across the workspace.

use crate::{EdgeRecord, NodeId, RoadGraph, Survivor};

/// Build a survivor without validation.
#[must_use]
pub const fn survivor(id: NodeId, urgency: u32, count: u32) -> Survivor {
    Survivor { id, urgency, count }
}

/// Two-way triangle `1-2 (1)`, `2-3 (1)`, `1-3 (5)`.
///
/// The direct `1-3` road is always beaten by the detour through `2`.
#[must_use]
pub fn triangle_records() -> Vec<EdgeRecord> {
    vec![
        EdgeRecord::new(1, 2, 1.0).two_way(),
        EdgeRecord::new(2, 3, 1.0).two_way(),
        EdgeRecord::new(1, 3, 5.0).two_way(),
    ]
}

/// [`triangle_records`] loaded into a graph.
#[must_use]
pub fn triangle_graph() -> RoadGraph {
    RoadGraph::from_records(&triangle_records())
}

/// Two-way `width × height` lattice with uniform edge weight.
///
/// Node IDs are `row * width + column + 1`, so the top-left corner is `1`.
#[must_use]
pub fn grid_records(width: i64, height: i64, weight: f64) -> Vec<EdgeRecord> {
    let node = |row: i64, column: i64| row * width + column + 1;
    let mut records = Vec::new();
    for row in 0..height {
        for column in 0..width {
            let here = node(row, column);
            if column + 1 < width {
                let right = node(row, column + 1);
                records.push(EdgeRecord::new(here, right, weight).two_way());
            }
            if row + 1 < height {
                let below = node(row + 1, column);
                records.push(EdgeRecord::new(here, below, weight).two_way());
            }
        }
    }
    records
}

/// Cost of walking `nodes` through `graph`, taking the cheapest parallel
/// edge between each pair.
///
/// Returns `None` when two consecutive nodes are not joined by an edge.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "path cost sums floating-point edge weights"
)]
pub fn walk_cost(graph: &RoadGraph, nodes: &[NodeId]) -> Option<f64> {
    nodes.windows(2).try_fold(0.0, |total, pair| {
        let [from, to] = pair else {
            return None;
        };
        graph
            .neighbours(*from)
            .iter()
            .filter(|edge| edge.to == *to)
            .map(|edge| edge.weight)
            .min_by(f64::total_cmp)
            .map(|weight| total + weight)
    })
}
