#![expect(
    clippy::expect_used,
    reason = "regression tests use expect for readable failures"
)]

//! Golden routes regression tests for the greedy planner.
//!
//! Each test loads a plan request from JSON, plans it with the default
//! configuration and with per-pair searches, and verifies both plans match
//! the recorded routes exactly.

use std::fs;
use std::path::PathBuf;

use rescue_core::{NodeId, PlanRequest, PlanResponse, Planner};
use rescue_solver_greedy::{GreedyPlanner, GreedyPlannerConfig};
use rstest::rstest;
use serde::Deserialize;

/// Deserialised golden route test case.
#[derive(Debug, Deserialize)]
struct GoldenRoute {
    name: String,
    #[expect(dead_code, reason = "kept for documentation in JSON files")]
    description: String,
    request: PlanRequest,
    expected: ExpectedResult,
}

/// Expected result from JSON.
#[derive(Debug, Deserialize)]
struct ExpectedResult {
    paths: Vec<Vec<NodeId>>,
    distances: Vec<f64>,
    unassigned: Vec<NodeId>,
}

/// Load a golden route from the data directory.
fn load_golden_route(filename: &str) -> GoldenRoute {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden_routes/data")
        .join(filename);
    let content = fs::read_to_string(&path).expect("failed to read golden route file");
    serde_json::from_str(&content).expect("failed to parse golden route JSON")
}

fn assert_matches(golden: &GoldenRoute, response: &PlanResponse) {
    assert_eq!(
        response.paths(),
        golden.expected.paths,
        "{}: route mismatch",
        golden.name
    );

    let distances: Vec<f64> = response.routes.iter().map(|route| route.distance).collect();
    assert_eq!(
        distances.len(),
        golden.expected.distances.len(),
        "{}: route count mismatch",
        golden.name
    );
    for (actual, expected) in distances.iter().zip(&golden.expected.distances) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{}: distance {actual} differs from expected {expected}",
            golden.name
        );
    }

    let unassigned: Vec<NodeId> = response
        .unassigned
        .iter()
        .map(|survivor| survivor.id)
        .collect();
    assert_eq!(
        unassigned, golden.expected.unassigned,
        "{}: unassigned survivors mismatch",
        golden.name
    );
}

#[rstest]
#[case("triangle.json")]
#[case("two_depots.json")]
#[case("blocked_road.json")]
#[case("partial_road.json")]
#[case("one_way_return.json")]
#[case("unreachable_survivor.json")]
#[case("colocated_survivors.json")]
#[case("no_survivors.json")]
fn golden_route_regression(#[case] filename: &str) {
    let golden = load_golden_route(filename);

    let response = GreedyPlanner::new()
        .plan(&golden.request)
        .expect("golden route should plan successfully");
    assert_matches(&golden, &response);

    let per_pair = GreedyPlanner::with_config(GreedyPlannerConfig {
        reuse_search_trees: false,
        ..GreedyPlannerConfig::default()
    })
    .plan(&golden.request)
    .expect("golden route should plan successfully");
    assert_matches(&golden, &per_pair);
}
