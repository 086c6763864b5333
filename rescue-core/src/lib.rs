//! Core domain types for the rescue routing engine.
//!
//! The crate holds the road graph store, the shortest-path finder, and the
//! request/response model shared by planners. Planning itself lives behind
//! the [`Planner`] trait so alternative engines can be swapped in.
//!
//! Nothing in this crate performs I/O. Callers build a [`RoadGraph`] (or a
//! [`PlanRequest`] carrying raw edge records) and hand it to a planner.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod graph;
pub mod path;
mod planner;
mod route;
mod survivor;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use graph::{Edge, EdgeRecord, EdgeState, NodeId, RoadGraph};
pub use path::{Dijkstra, PathFinder, SearchTree, ShortestPath, UNREACHABLE_COST, shortest_path};
pub use planner::{
    Diagnostics, PlanError, PlanRequest, PlanRequestValidationError, PlanResponse, Planner,
};
pub use route::Route;
pub use survivor::{Survivor, SurvivorError, merge_colocated};
