//! Greedy multi-vehicle rescue planner.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`Planner`](rescue_core::Planner) trait. Each round it scores every
//! (vehicle, survivor) pairing as
//!
//! ```text
//! score = (distance already driven + leg cost) / (urgency² + count)
//! ```
//!
//! and commits the single lowest-scoring pair across the whole fleet. Once no
//! survivor is left (or none can be reached) every vehicle that moved drives
//! to its nearest pickup node.
//!
//! The heuristic is deterministic: ties go to the first pair in
//! vehicle-then-survivor order. It makes no optimality claim and never
//! revisits an assignment.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod assignment;
mod fleet;
mod legs;
mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use solver::{GreedyPlanner, GreedyPlannerConfig, plan_routes};
