//! Planner boundary: request, response, and the [`Planner`] trait.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{EdgeRecord, NodeId};
use crate::{Route, Survivor, SurvivorError};

/// Inputs for one planning call.
///
/// The graph is rebuilt from `edges` on every call; nothing is retained
/// between requests.
///
/// # Examples
/// ```rust
/// use rescue_core::{EdgeRecord, PlanRequest, Survivor};
///
/// let request = PlanRequest {
///     survivors: vec![Survivor { id: 2, urgency: 3, count: 5 }],
///     pickups: vec![1],
///     edges: vec![EdgeRecord::new(1, 2, 1.0).two_way()],
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanRequest {
    /// Survivors awaiting pickup, in priority-neutral input order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub survivors: Vec<Survivor>,
    /// Depot nodes; one vehicle starts at each.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pickups: Vec<NodeId>,
    /// Road segments making up the graph.
    #[cfg_attr(feature = "serde", serde(default))]
    pub edges: Vec<EdgeRecord>,
}

/// Reasons a [`PlanRequest`] is rejected before planning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanRequestValidationError {
    /// An edge length was below zero.
    #[error("edge {from} -> {to} has a negative length")]
    NegativeWeight {
        /// Source node of the offending edge.
        from: NodeId,
        /// Destination node of the offending edge.
        to: NodeId,
    },
    /// An edge length was NaN or infinite.
    #[error("edge {from} -> {to} has a non-finite length")]
    NonFiniteWeight {
        /// Source node of the offending edge.
        from: NodeId,
        /// Destination node of the offending edge.
        to: NodeId,
    },
    /// A survivor record broke its invariants.
    #[error("survivor at node {id} is invalid: {source}")]
    InvalidSurvivor {
        /// Node of the offending survivor.
        id: NodeId,
        /// Underlying survivor error.
        #[source]
        source: SurvivorError,
    },
}

impl PlanRequest {
    /// Check the preconditions the routing core relies on but does not
    /// enforce itself.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, edges before survivors.
    pub fn validate(&self) -> Result<(), PlanRequestValidationError> {
        for edge in &self.edges {
            if !edge.length.is_finite() {
                return Err(PlanRequestValidationError::NonFiniteWeight {
                    from: edge.from,
                    to: edge.to,
                });
            }
            if edge.length < 0.0 {
                return Err(PlanRequestValidationError::NegativeWeight {
                    from: edge.from,
                    to: edge.to,
                });
            }
        }
        for survivor in &self.survivors {
            survivor
                .validate()
                .map_err(|source| PlanRequestValidationError::InvalidSurvivor {
                    id: survivor.id,
                    source,
                })?;
        }
        Ok(())
    }
}

/// Run statistics reported alongside the routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    /// Wall-clock planning time.
    #[cfg_attr(feature = "serde", serde(with = "duration_millis"))]
    pub solve_time: Duration,
    /// Assignment rounds executed, a final fruitless round included.
    pub iterations: usize,
    /// Shortest-path searches run.
    pub searches: usize,
}

/// Result of a successful planning call.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanResponse {
    /// Routes of every vehicle that moved, in pickup order.
    pub routes: Vec<Route>,
    /// Survivors no vehicle could reach.
    pub unassigned: Vec<Survivor>,
    /// Run statistics.
    pub diagnostics: Diagnostics,
}

impl PlanResponse {
    /// Node sequences of all routes, in route order.
    #[must_use]
    pub fn paths(&self) -> Vec<Vec<NodeId>> {
        self.routes.iter().map(|route| route.nodes.clone()).collect()
    }

    /// Consume the response, keeping only the node sequences.
    #[must_use]
    pub fn into_paths(self) -> Vec<Vec<NodeId>> {
        self.routes.into_iter().map(Route::into_nodes).collect()
    }
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The request failed validation.
    #[error("invalid plan request: {0}")]
    InvalidRequest(#[from] PlanRequestValidationError),
}

/// Turn a [`PlanRequest`] into vehicle routes.
///
/// Implementations should reject invalid requests with
/// [`PlanError::InvalidRequest`] rather than panicking. Unreachable survivors
/// are not an error; they are reported in [`PlanResponse::unassigned`].
/// Planners must be `Send + Sync` so hosts can share them across threads.
pub trait Planner: Send + Sync {
    /// Plan routes for `request`.
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError>;
}

#[cfg(feature = "serde")]
mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
