//! Survivor demand points.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::NodeId;

/// People waiting for pickup at a graph node.
///
/// `urgency` is a severity score and `count` a headcount; both must be at
/// least one. Survivors on nodes missing from the graph are allowed and are
/// simply never reached.
///
/// # Examples
/// ```
/// use rescue_core::Survivor;
///
/// # fn main() -> Result<(), rescue_core::SurvivorError> {
/// let survivor = Survivor::new(12, 3, 5)?;
/// assert_eq!(survivor.priority_weight(), 14);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Survivor {
    /// Node where the survivors wait.
    pub id: NodeId,
    /// Severity score; higher is more urgent.
    pub urgency: u32,
    /// Number of people at the node.
    pub count: u32,
}

/// Errors returned by [`Survivor::new`] and [`Survivor::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurvivorError {
    /// Urgency was zero.
    #[error("survivor urgency must be at least 1")]
    ZeroUrgency,
    /// Headcount was zero.
    #[error("survivor count must be at least 1")]
    ZeroCount,
}

impl Survivor {
    /// Validate and construct a [`Survivor`].
    ///
    /// # Errors
    ///
    /// Returns [`SurvivorError::ZeroUrgency`] or [`SurvivorError::ZeroCount`]
    /// when either value is zero.
    pub fn new(id: NodeId, urgency: u32, count: u32) -> Result<Self, SurvivorError> {
        let survivor = Self { id, urgency, count };
        survivor.validate()?;
        Ok(survivor)
    }

    /// Check the positivity invariants of a survivor built field by field.
    ///
    /// # Errors
    ///
    /// Returns the first zero field found, urgency before count.
    pub const fn validate(&self) -> Result<(), SurvivorError> {
        if self.urgency == 0 {
            return Err(SurvivorError::ZeroUrgency);
        }
        if self.count == 0 {
            return Err(SurvivorError::ZeroCount);
        }
        Ok(())
    }

    /// Divisor of the greedy score: `urgency² + count`.
    ///
    /// Squaring urgency lets severity dominate while headcount still breaks
    /// near-ties between equally urgent groups.
    #[must_use]
    pub fn priority_weight(&self) -> u64 {
        let urgency = u64::from(self.urgency);
        urgency
            .saturating_mul(urgency)
            .saturating_add(u64::from(self.count))
    }
}

/// Collapse survivors that share a node.
///
/// The merged entry keeps the highest urgency and the summed headcount, and
/// takes the position of the first survivor seen at that node.
///
/// # Examples
/// ```
/// use rescue_core::{Survivor, merge_colocated};
///
/// let merged = merge_colocated(&[
///     Survivor { id: 4, urgency: 1, count: 2 },
///     Survivor { id: 7, urgency: 2, count: 1 },
///     Survivor { id: 4, urgency: 3, count: 1 },
/// ]);
/// assert_eq!(merged, vec![
///     Survivor { id: 4, urgency: 3, count: 3 },
///     Survivor { id: 7, urgency: 2, count: 1 },
/// ]);
/// ```
#[must_use]
pub fn merge_colocated(survivors: &[Survivor]) -> Vec<Survivor> {
    let mut merged: Vec<Survivor> = Vec::with_capacity(survivors.len());
    let mut slots: HashMap<NodeId, usize> = HashMap::with_capacity(survivors.len());
    for survivor in survivors {
        match slots.get(&survivor.id).and_then(|&slot| merged.get_mut(slot)) {
            Some(existing) => {
                existing.urgency = existing.urgency.max(survivor.urgency);
                existing.count = existing.count.saturating_add(survivor.count);
            }
            None => {
                slots.insert(survivor.id, merged.len());
                merged.push(*survivor);
            }
        }
    }
    merged
}
