//! Property tests for the tree invariants and the planner contract

use liftpath::{plan, ElevatorId, Floor, Schedule, StateNode, StateTree, TimeStep};
use proptest::prelude::*;

/// Random uniform-horizon schedule: 1..=5 cars labelled from 'A', floors
/// drawn from 1..=9.
fn schedules() -> impl Strategy<Value = Schedule> {
    (1usize..=5, 1usize..=7)
        .prop_flat_map(|(cars, horizon)| {
            proptest::collection::vec(
                proptest::collection::vec(1u32..=9, horizon),
                cars,
            )
        })
        .prop_map(|tables| {
            let mut builder = Schedule::builder();
            for (i, floors) in tables.into_iter().enumerate() {
                builder = builder.car((b'A' + i as u8) as char, floors);
            }
            builder.build().expect("generated schedule is uniform")
        })
}

fn check_depths(node: &StateNode) {
    for child in node.children() {
        assert_eq!(child.time(), node.time() + 1, "edges must advance time by one");
        check_depths(child);
    }
}

fn node_exists(node: &StateNode, floor: Floor, time: TimeStep) -> bool {
    if node.time() == time {
        return node.floor() == floor;
    }
    node.children().iter().any(|c| node_exists(c, floor, time))
}

fn max_depth(node: &StateNode) -> usize {
    node.children()
        .iter()
        .map(max_depth)
        .max()
        .unwrap_or(node.time())
}

/// Replay `route` against the schedule: every hop must be a stay or a
/// co-located transfer, and the rider must end on `floor`.
fn replay(schedule: &Schedule, start: ElevatorId, route: &[ElevatorId], floor: Floor) {
    let mut current = start;
    for (entry, &car) in route.iter().enumerate() {
        if car != current {
            assert_eq!(
                schedule.floor_at(car, entry),
                schedule.floor_at(current, entry),
                "transfer without co-location at step {}",
                entry + 1
            );
        }
        current = car;
    }
    let last = route.len() - 1;
    assert_eq!(schedule.floor_at(current, last), Some(floor));
}

proptest! {
    #[test]
    fn tree_respects_time_and_horizon(schedule in schedules()) {
        let start = schedule.cars().next().unwrap();
        let tree = StateTree::build(&schedule, start).unwrap();

        let root = tree.root();
        prop_assert_eq!(root.time(), 0);
        prop_assert_eq!(root.car(), start);
        prop_assert_eq!(Some(root.floor()), schedule.floor_at(start, 0));

        check_depths(root);
        prop_assert!(max_depth(root) <= schedule.horizon());
    }

    #[test]
    fn routes_replay_and_misses_are_genuine(
        schedule in schedules(),
        floor in 1u32..=9,
        extra in 0usize..=2,
    ) {
        let start = schedule.cars().next().unwrap();
        let time = schedule.horizon().saturating_sub(extra).max(1);
        let tree = StateTree::build(&schedule, start).unwrap();

        match plan(&schedule, start, floor, time).unwrap() {
            Some(route) => {
                prop_assert_eq!(route.len(), time);
                replay(&schedule, start, &route, floor);
            }
            None => {
                // A miss must mean the tree truly has no matching state.
                prop_assert!(!node_exists(tree.root(), floor, time));
            }
        }
    }

    #[test]
    fn planning_is_deterministic(schedule in schedules(), floor in 1u32..=9) {
        let start = schedule.cars().next().unwrap();
        let time = schedule.horizon();
        let first = plan(&schedule, start, floor, time).unwrap();
        let second = plan(&schedule, start, floor, time).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn time_past_horizon_never_yields_a_route(schedule in schedules(), floor in 1u32..=9) {
        let start = schedule.cars().next().unwrap();
        let beyond = schedule.horizon() + 1;
        prop_assert_eq!(plan(&schedule, start, floor, beyond).unwrap(), None);
    }
}
