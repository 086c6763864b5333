//! Shortest-path lookups for vehicle legs.
//!
//! In per-pair mode every lookup runs its own [`Dijkstra`] search. In cached
//! mode each vehicle keeps a [`SearchTree`] grown from its current node;
//! only the vehicle that just moved needs a new tree, so a round costs one
//! search instead of one per survivor.

use std::sync::atomic::{AtomicUsize, Ordering};

use rescue_core::{Dijkstra, NodeId, PathFinder, RoadGraph, SearchTree, ShortestPath};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fleet::Vehicle;

pub(crate) struct LegOracle<'g> {
    graph: &'g RoadGraph,
    trees: Option<Vec<Option<SearchTree>>>,
    searches: AtomicUsize,
}

impl<'g> LegOracle<'g> {
    /// Fresh search for every lookup.
    pub(crate) const fn per_pair(graph: &'g RoadGraph) -> Self {
        Self {
            graph,
            trees: None,
            searches: AtomicUsize::new(0),
        }
    }

    /// One cached tree per vehicle.
    pub(crate) fn cached(graph: &'g RoadGraph, vehicles: usize) -> Self {
        Self {
            graph,
            trees: Some(vec![None; vehicles]),
            searches: AtomicUsize::new(0),
        }
    }

    /// Grow trees for the given vehicles where none is cached.
    ///
    /// A no-op in per-pair mode.
    pub(crate) fn prepare<'v, I>(&mut self, vehicles: I)
    where
        I: IntoIterator<Item = &'v Vehicle>,
    {
        let graph = self.graph;
        let Some(trees) = self.trees.as_mut() else {
            return;
        };
        let missing: Vec<(usize, NodeId)> = vehicles
            .into_iter()
            .filter(|vehicle| {
                trees
                    .get(vehicle.index)
                    .is_some_and(|slot| slot.as_ref().is_none_or(|tree| tree.origin() != vehicle.current))
            })
            .map(|vehicle| (vehicle.index, vehicle.current))
            .collect();

        for (index, tree) in grow_all(graph, &missing) {
            if let Some(slot) = trees.get_mut(index) {
                *slot = Some(tree);
            }
        }
        *self.searches.get_mut() += missing.len();
    }

    /// Drop the cached tree of a vehicle that moved.
    pub(crate) fn invalidate(&mut self, vehicle: usize) {
        if let Some(slot) = self.trees.as_mut().and_then(|trees| trees.get_mut(vehicle)) {
            *slot = None;
        }
    }

    /// Cheapest path from `vehicle`'s current node to `target`.
    ///
    /// Falls back to a per-pair search when no valid tree is cached.
    pub(crate) fn leg(&self, vehicle: &Vehicle, target: NodeId) -> ShortestPath {
        if vehicle.current == target {
            return ShortestPath::trivial(target);
        }
        let cached = self
            .trees
            .as_ref()
            .and_then(|trees| trees.get(vehicle.index))
            .and_then(Option::as_ref)
            .filter(|tree| tree.origin() == vehicle.current);
        if let Some(tree) = cached {
            return tree.path_to(target);
        }
        self.searches.fetch_add(1, Ordering::Relaxed);
        Dijkstra::new(self.graph).shortest_path(vehicle.current, target)
    }

    /// Searches run so far, tree growth included.
    pub(crate) fn searches(&self) -> usize {
        self.searches.load(Ordering::Relaxed)
    }
}

#[cfg(not(feature = "parallel"))]
fn grow_all(graph: &RoadGraph, origins: &[(usize, NodeId)]) -> Vec<(usize, SearchTree)> {
    origins
        .iter()
        .map(|&(index, origin)| (index, SearchTree::grow(graph, origin)))
        .collect()
}

#[cfg(feature = "parallel")]
fn grow_all(graph: &RoadGraph, origins: &[(usize, NodeId)]) -> Vec<(usize, SearchTree)> {
    origins
        .par_iter()
        .map(|&(index, origin)| (index, SearchTree::grow(graph, origin)))
        .collect()
}
