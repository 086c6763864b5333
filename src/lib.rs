//! Facade crate for the rescue routing engine.
//!
//! This crate re-exports the core domain types and exposes the greedy planner
//! behind a feature flag.

#![forbid(unsafe_code)]

pub use rescue_core::{
    Diagnostics, Dijkstra, Edge, EdgeRecord, EdgeState, NodeId, PathFinder, PlanError, PlanRequest,
    PlanRequestValidationError, PlanResponse, Planner, RoadGraph, Route, SearchTree,
    ShortestPath, Survivor, SurvivorError, UNREACHABLE_COST, merge_colocated, shortest_path,
};

#[cfg(feature = "solver-greedy")]
pub use rescue_solver_greedy::{GreedyPlanner, GreedyPlannerConfig, plan_routes};
