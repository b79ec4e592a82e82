//! Reachable-state tree node
//!
//! Node = (car, floor, time): the rider sits in `car`, which is at `floor`,
//! at discrete time `time`. Each node exclusively owns its children, so the
//! whole tree is freed when the root goes away.

use std::fmt;

use crate::schedule::{ElevatorId, Floor, TimeStep};

/// A single rider state in the reachable-state tree
///
/// Children are populated exactly once during construction and never
/// altered afterwards. Time strictly increases by one along every edge, so
/// a node's depth always equals its time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateNode {
    car: ElevatorId,
    floor: Floor,
    time: TimeStep,
    children: Vec<StateNode>,
}

impl StateNode {
    pub(crate) fn new(car: ElevatorId, floor: Floor, time: TimeStep) -> Self {
        Self {
            car,
            floor,
            time,
            children: Vec::new(),
        }
    }

    pub(crate) fn push_child(&mut self, child: StateNode) {
        debug_assert_eq!(child.time, self.time + 1, "edges advance time by one");
        self.children.push(child);
    }

    /// Car the rider occupies in this state
    #[inline]
    pub fn car(&self) -> ElevatorId {
        self.car
    }

    /// Floor the car is at
    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Time index of this state
    #[inline]
    pub fn time(&self) -> TimeStep {
        self.time
    }

    /// Successor states, in expansion order (stay first, then transfers)
    pub fn children(&self) -> &[StateNode] {
        &self.children
    }

    /// Whether this branch exhausted the schedule
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for StateNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} t={}", self.car, self.floor, self.time)
    }
}
