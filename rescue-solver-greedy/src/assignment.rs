//! Scoring and selection of (vehicle, survivor) pairings.

use rescue_core::{NodeId, ShortestPath, Survivor};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fleet::{Fleet, Vehicle};
use crate::legs::LegOracle;

/// A candidate pairing and the leg that realises it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Assignment {
    pub(crate) vehicle: usize,
    /// Position in the remaining-survivor list.
    pub(crate) survivor: usize,
    pub(crate) leg: ShortestPath,
    pub(crate) score: f64,
}

/// Arrival distance divided by the survivor's priority weight.
///
/// Lower is better.
#[expect(
    clippy::cast_precision_loss,
    reason = "priority weights far below 2^52 in practice"
)]
#[expect(
    clippy::float_arithmetic,
    reason = "score is a floating-point ratio"
)]
pub(crate) fn score(arrival: f64, survivor: &Survivor) -> f64 {
    arrival / survivor.priority_weight() as f64
}

#[expect(
    clippy::float_arithmetic,
    reason = "arrival adds the leg cost to the odometer"
)]
fn candidate(
    vehicle: &Vehicle,
    index: usize,
    survivor: &Survivor,
    oracle: &LegOracle<'_>,
) -> Option<Assignment> {
    // A vehicle never pairs with a survivor on its own node.
    if vehicle.current == survivor.id {
        return None;
    }
    let leg = oracle.leg(vehicle, survivor.id).into_leg()?;
    let score = score(vehicle.distance() + leg.cost, survivor);
    Some(Assignment {
        vehicle: vehicle.index,
        survivor: index,
        leg,
        score,
    })
}

fn pairs<'a>(
    fleet: &'a Fleet,
    remaining: &'a [Survivor],
) -> Vec<(&'a Vehicle, usize, &'a Survivor)> {
    fleet
        .vehicles()
        .iter()
        .flat_map(|vehicle| {
            remaining
                .iter()
                .enumerate()
                .map(move |(index, survivor)| (vehicle, index, survivor))
        })
        .collect()
}

/// Best pairing across the fleet, or `None` when no survivor is reachable.
///
/// Candidates are produced in vehicle-then-survivor order and only a
/// strictly lower score displaces the current best, so ties keep the
/// earliest pair.
pub(crate) fn best_assignment(
    fleet: &Fleet,
    remaining: &[Survivor],
    oracle: &LegOracle<'_>,
) -> Option<Assignment> {
    let pairs = pairs(fleet, remaining);

    #[cfg(feature = "parallel")]
    let candidates: Vec<Option<Assignment>> = pairs
        .par_iter()
        .map(|&(vehicle, index, survivor)| candidate(vehicle, index, survivor, oracle))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let candidates: Vec<Option<Assignment>> = pairs
        .iter()
        .map(|&(vehicle, index, survivor)| candidate(vehicle, index, survivor, oracle))
        .collect();

    select_best(candidates.into_iter().flatten())
}

fn select_best(candidates: impl Iterator<Item = Assignment>) -> Option<Assignment> {
    let mut best: Option<Assignment> = None;
    let mut best_score = f64::MAX;
    for candidate in candidates {
        if candidate.score < best_score {
            best_score = candidate.score;
            best = Some(candidate);
        }
    }
    best
}

/// Leg from `vehicle` to its nearest reachable pickup node.
///
/// Ties go to the pickup listed first. `None` when no pickup is reachable.
pub(crate) fn closing_leg(
    vehicle: &Vehicle,
    pickups: &[NodeId],
    oracle: &LegOracle<'_>,
) -> Option<ShortestPath> {
    let mut best: Option<ShortestPath> = None;
    let mut best_cost = f64::MAX;
    for &pickup in pickups {
        let Some(leg) = oracle.leg(vehicle, pickup).into_leg() else {
            continue;
        };
        if leg.cost < best_cost {
            best_cost = leg.cost;
            best = Some(leg);
        }
    }
    best
}
