//! Host-facing edge records and road conditions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::NodeId;

/// Reported condition of a road segment.
///
/// Conditions never remove an edge; they scale its travel cost so that
/// damaged roads are only used when nothing better exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EdgeState {
    /// Passable at normal speed.
    #[default]
    Clear,
    /// Passable with difficulty.
    Partial,
    /// Reported impassable; kept as a last resort.
    Blocked,
}

impl EdgeState {
    /// Factor applied to an edge's length to obtain its travel cost.
    ///
    /// # Examples
    /// ```
    /// use rescue_core::EdgeState;
    ///
    /// assert_eq!(EdgeState::Clear.cost_multiplier(), 1.0);
    /// assert_eq!(EdgeState::Partial.cost_multiplier(), 5.0);
    /// assert_eq!(EdgeState::Blocked.cost_multiplier(), 10_000.0);
    /// ```
    #[must_use]
    pub const fn cost_multiplier(self) -> f64 {
        match self {
            Self::Clear => 1.0,
            Self::Partial => 5.0,
            Self::Blocked => 10_000.0,
        }
    }
}

/// A single road segment as supplied by the host application.
///
/// # Examples
/// ```
/// use rescue_core::{EdgeRecord, EdgeState};
///
/// let record = EdgeRecord::new(1, 2, 120.0).with_state(EdgeState::Partial);
/// assert_eq!(record.travel_cost(), 600.0);
/// assert!(!record.two_way);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeRecord {
    /// Source node.
    pub from: NodeId,
    /// Destination node.
    pub to: NodeId,
    /// Base cost of the segment, usually metres or seconds.
    pub length: f64,
    /// Road condition scaling the base cost.
    #[cfg_attr(feature = "serde", serde(default))]
    pub state: EdgeState,
    /// Insert the reverse direction as well.
    #[cfg_attr(feature = "serde", serde(default))]
    pub two_way: bool,
}

impl EdgeRecord {
    /// Construct a one-way record on a clear road.
    #[must_use]
    pub const fn new(from: NodeId, to: NodeId, length: f64) -> Self {
        Self {
            from,
            to,
            length,
            state: EdgeState::Clear,
            two_way: false,
        }
    }

    /// Replace the road condition.
    #[must_use]
    pub const fn with_state(mut self, state: EdgeState) -> Self {
        self.state = state;
        self
    }

    /// Mark the record as traversable in both directions.
    #[must_use]
    pub const fn two_way(mut self) -> Self {
        self.two_way = true;
        self
    }

    /// Cost stored in the graph: `length` scaled by the state multiplier.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "travel cost is a floating-point product of length and multiplier"
    )]
    pub fn travel_cost(&self) -> f64 {
        self.length * self.state.cost_multiplier()
    }
}
