//! Reachable-state tree
//!
//! Tree of every (car, floor, time) state a rider can occupy, rooted at the
//! starting car at time 0. Edges are single-step moves: stay in the current
//! car, or transfer onto another car standing at the continuation floor.
//! Built once per query, searched once, then dropped.

mod builder;
mod node;

pub use node::StateNode;

use crate::schedule::{ElevatorId, Schedule};
use crate::PlanError;

/// Fully materialized reachable-state space for one starting car
#[derive(Debug, Clone)]
pub struct StateTree {
    root: StateNode,
}

impl StateTree {
    /// Build the complete tree for `start` over `schedule`
    ///
    /// Eager breadth-first expansion up to the schedule's horizon. Returns
    /// [`PlanError::UnknownCar`] when `start` has no timetable.
    pub fn build(schedule: &Schedule, start: ElevatorId) -> Result<Self, PlanError> {
        builder::build_tree(schedule, start).map(|root| Self { root })
    }

    /// Root state: the starting car at time 0
    pub fn root(&self) -> &StateNode {
        &self.root
    }

    /// Total number of states in the tree
    pub fn len(&self) -> usize {
        fn count(node: &StateNode) -> usize {
            1 + node.children().iter().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// Whether the tree holds only the root
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_counts_every_state() {
        let schedule = Schedule::builder().car('A', vec![2, 3]).build().unwrap();
        let tree = StateTree::build(&schedule, 'A').unwrap();
        // Chain: t=0, t=1, t=2
        assert_eq!(tree.len(), 3);
        assert!(!tree.is_empty());
    }
}
