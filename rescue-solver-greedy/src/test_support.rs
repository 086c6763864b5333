//! Test-only utilities for `rescue-solver-greedy`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use rescue_core::test_support::{survivor, triangle_records};
use rescue_core::{EdgeRecord, NodeId, PlanRequest, Survivor};

/// Assemble a [`PlanRequest`] from its parts.
#[must_use]
pub const fn request(
    survivors: Vec<Survivor>,
    pickups: Vec<NodeId>,
    edges: Vec<EdgeRecord>,
) -> PlanRequest {
    PlanRequest {
        survivors,
        pickups,
        edges,
    }
}

/// The two-way triangle with one pickup at `1` and survivors at `2`
/// (urgency 3, count 5) and `3` (urgency 1, count 1).
///
/// The greedy plan is `[1, 2, 3, 2, 1]` with distance `4`.
#[must_use]
pub fn triangle_request() -> PlanRequest {
    request(
        vec![survivor(2, 3, 5), survivor(3, 1, 1)],
        vec![1],
        triangle_records(),
    )
}
