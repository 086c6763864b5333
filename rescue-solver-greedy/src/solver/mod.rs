//! `GreedyPlanner` implementation.

use std::time::Instant;

use rescue_core::{
    Diagnostics, NodeId, PlanError, PlanRequest, PlanResponse, Planner, RoadGraph, Survivor,
    merge_colocated,
};

use crate::assignment::{best_assignment, closing_leg};
use crate::fleet::Fleet;
use crate::legs::LegOracle;

/// Configuration for [`GreedyPlanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyPlannerConfig {
    /// Keep one search tree per vehicle and regrow it only after that
    /// vehicle moves. Routes are identical either way.
    pub reuse_search_trees: bool,
    /// Collapse survivors sharing a node before planning.
    pub merge_colocated_survivors: bool,
}

impl Default for GreedyPlannerConfig {
    fn default() -> Self {
        Self {
            reuse_search_trees: true,
            merge_colocated_survivors: false,
        }
    }
}

/// Greedy urgency-weighted planner.
///
/// # Examples
/// ```
/// use rescue_core::{EdgeRecord, PlanRequest, Planner, Survivor};
/// use rescue_solver_greedy::GreedyPlanner;
///
/// let request = PlanRequest {
///     survivors: vec![Survivor::new(2, 1, 1).expect("valid survivor")],
///     pickups: vec![1],
///     edges: vec![EdgeRecord::new(1, 2, 3.0).two_way()],
/// };
/// let response = GreedyPlanner::new().plan(&request).expect("valid request");
/// assert_eq!(response.paths(), vec![vec![1, 2, 1]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner {
    config: GreedyPlannerConfig,
}

impl GreedyPlanner {
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(config: GreedyPlannerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GreedyPlannerConfig {
        &self.config
    }

    /// Plan routes over an already built graph.
    ///
    /// Nothing is validated here: survivors on unknown nodes are simply never
    /// reached, and negative weights give unspecified routes.
    #[must_use]
    pub fn plan_on_graph(
        &self,
        graph: &RoadGraph,
        survivors: &[Survivor],
        pickups: &[NodeId],
    ) -> PlanResponse {
        let started_at = Instant::now();
        let mut remaining = if self.config.merge_colocated_survivors {
            merge_colocated(survivors)
        } else {
            survivors.to_vec()
        };
        let mut fleet = Fleet::from_pickups(pickups);
        let mut oracle = if self.config.reuse_search_trees {
            LegOracle::cached(graph, fleet.len())
        } else {
            LegOracle::per_pair(graph)
        };

        let mut iterations = 0_usize;
        while !remaining.is_empty() {
            iterations = iterations.saturating_add(1);
            oracle.prepare(fleet.vehicles());
            let Some(chosen) = best_assignment(&fleet, &remaining, &oracle) else {
                break;
            };
            let Some(vehicle) = fleet.get_mut(chosen.vehicle) else {
                break;
            };
            let survivor = remaining.remove(chosen.survivor);
            vehicle.pick_up(&chosen.leg, survivor.id);
            log::debug!(
                "vehicle {} picks up {} at node {} (leg cost {}, score {})",
                chosen.vehicle,
                survivor.count,
                survivor.id,
                chosen.leg.cost,
                chosen.score,
            );
            oracle.invalidate(chosen.vehicle);
        }

        oracle.prepare(fleet.vehicles().iter().filter(|vehicle| vehicle.has_moved()));
        for vehicle in fleet.vehicles_mut().filter(|vehicle| vehicle.has_moved()) {
            match closing_leg(vehicle, pickups, &oracle) {
                Some(leg) => vehicle.return_via(&leg),
                None => log::warn!(
                    "vehicle {} cannot reach any pickup from node {}; route ends there",
                    vehicle.index,
                    vehicle.current,
                ),
            }
        }

        if !remaining.is_empty() {
            log::warn!(
                "{} survivor node(s) unreachable by any vehicle: {:?}",
                remaining.len(),
                remaining.iter().map(|survivor| survivor.id).collect::<Vec<_>>(),
            );
        }

        let routes = fleet.into_routes();
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            iterations,
            searches: oracle.searches(),
        };
        log::info!(
            "planned {} route(s) for {} vehicle(s) in {} iteration(s) using {} search(es)",
            routes.len(),
            pickups.len(),
            diagnostics.iterations,
            diagnostics.searches,
        );

        PlanResponse {
            routes,
            unassigned: remaining,
            diagnostics,
        }
    }
}

impl Planner for GreedyPlanner {
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError> {
        request.validate()?;
        let graph = RoadGraph::from_records(&request.edges);
        Ok(self.plan_on_graph(&graph, &request.survivors, &request.pickups))
    }
}

/// Plan with default configuration over plain `(from, to, weight)` edges.
///
/// Returns one node list per vehicle that moved, in pickup order. Input is
/// not validated.
///
/// # Examples
/// ```
/// use rescue_core::Survivor;
/// use rescue_solver_greedy::plan_routes;
///
/// let survivors = [
///     Survivor { id: 2, urgency: 3, count: 5 },
///     Survivor { id: 3, urgency: 1, count: 1 },
/// ];
/// let edges = [
///     (1, 2, 1.0), (2, 1, 1.0),
///     (2, 3, 1.0), (3, 2, 1.0),
///     (1, 3, 5.0), (3, 1, 5.0),
/// ];
/// assert_eq!(plan_routes(&survivors, &[1], &edges), vec![vec![1, 2, 3, 2, 1]]);
/// ```
#[must_use]
pub fn plan_routes(
    survivors: &[Survivor],
    pickups: &[NodeId],
    edges: &[(NodeId, NodeId, f64)],
) -> Vec<Vec<NodeId>> {
    let graph = RoadGraph::from_edges(edges.iter().copied());
    GreedyPlanner::new()
        .plan_on_graph(&graph, survivors, pickups)
        .into_paths()
}
