//! Level-order construction of the reachable-state tree
//!
//! Expansion rule for a node (car, time):
//! - continuation floor = the floor `car` reaches at the end of step
//!   `time + 1` (schedule entry `time`); if the schedule is exhausted the
//!   node is a leaf
//! - stay child: (car, continuation floor, time + 1)
//! - transfer children: every other car whose entry `time` equals the
//!   continuation floor, i.e. a car that arrives at the very floor the
//!   rider is moving toward, in schedule insertion order
//!
//! Construction is an explicit breadth-first worklist over an index arena;
//! the arena is frozen into the owned [`StateNode`] tree at the end. Time
//! strictly advances along edges, so the expansion is bounded by
//! cars × horizon per level and always terminates.

use std::collections::VecDeque;

use tracing::debug;

use super::node::StateNode;
use crate::schedule::{ElevatorId, Floor, Schedule, TimeStep};
use crate::PlanError;

struct Slot {
    car: ElevatorId,
    floor: Floor,
    time: TimeStep,
    children: Vec<usize>,
}

/// Materialize the full reachable-state tree for `start`
///
/// The root is (start, start's first scheduled floor, time 0). Fails only
/// when `start` is not a car in the schedule.
pub(crate) fn build_tree(schedule: &Schedule, start: ElevatorId) -> Result<StateNode, PlanError> {
    let root_floor = schedule
        .floor_at(start, 0)
        .ok_or(PlanError::UnknownCar(start))?;

    let mut arena = vec![Slot {
        car: start,
        floor: root_floor,
        time: 0,
        children: Vec::new(),
    }];
    let mut worklist = VecDeque::from([0usize]);

    while let Some(index) = worklist.pop_front() {
        let (car, time) = (arena[index].car, arena[index].time);

        // Schedule exhausted: leaf. No continuation floor also means no
        // transfer children, since transfers are keyed off it.
        let Some(continuation) = schedule.floor_at(car, time) else {
            continue;
        };

        let enqueue = |arena: &mut Vec<Slot>, worklist: &mut VecDeque<usize>, next: ElevatorId| {
            let child = arena.len();
            arena.push(Slot {
                car: next,
                floor: continuation,
                time: time + 1,
                children: Vec::new(),
            });
            arena[index].children.push(child);
            worklist.push_back(child);
        };

        enqueue(&mut arena, &mut worklist, car);
        for other in schedule.cars() {
            if other != car && schedule.floor_at(other, time) == Some(continuation) {
                enqueue(&mut arena, &mut worklist, other);
            }
        }
    }

    debug!(
        start = %start,
        nodes = arena.len(),
        horizon = schedule.horizon(),
        "reachable-state tree built"
    );

    Ok(freeze(arena))
}

/// Convert the arena into the parent-owned node tree
///
/// Children are always allocated after their parent, so a single reverse
/// sweep can move every finished subtree into its parent.
fn freeze(arena: Vec<Slot>) -> StateNode {
    let mut built: Vec<Option<StateNode>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (index, slot) in arena.iter().enumerate().rev() {
        let mut node = StateNode::new(slot.car, slot.floor, slot.time);
        for &child in &slot.children {
            let child = built[child].take().unwrap_or_else(|| {
                unreachable!("child slots are frozen before their parents")
            });
            node.push_child(child);
        }
        built[index] = Some(node);
    }

    built[0].take().unwrap_or_else(|| unreachable!("arena is never empty"))
}
