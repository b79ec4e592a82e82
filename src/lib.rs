//! # liftpath
//!
//! Route planner for riders in buildings where every elevator car follows a
//! fixed, published timetable. Given the timetable, a starting car, and a
//! target (floor, time), the planner answers: which car should the rider be
//! in at every step to stand on that floor at that time?
//!
//! ## Algorithm
//!
//! 1. **State-space build**: breadth-first expansion of every reachable
//!    (car, floor, time) state into a tree rooted at the starting car at
//!    time 0. A rider may stay aboard, or transfer onto another car that
//!    arrives at the same floor the rider is moving toward.
//! 2. **Destination search**: depth-first descent over the finished tree;
//!    the first state matching the target yields the route.
//!
//! Both passes iterate cars in schedule insertion order, so results are
//! deterministic. The route found is valid but not guaranteed minimal in
//! transfer count.
//!
//! ## Usage Example
//!
//! ```
//! use liftpath::{plan, Schedule};
//!
//! let schedule = Schedule::builder()
//!     .car('A', vec![1, 4, 3, 2, 2])
//!     .car('B', vec![3, 3, 3, 4, 2])
//!     .car('C', vec![2, 2, 6, 6, 6])
//!     .car('D', vec![6, 1, 1, 4, 5])
//!     .build()?;
//!
//! let route = plan(&schedule, 'A', 5, 5)?;
//! assert_eq!(route, Some(vec!['A', 'A', 'B', 'D', 'D']));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod schedule; // Timetable data model
pub mod search;   // Destination search over the tree
pub mod tree;     // Reachable-state tree construction

// Re-exports for convenience
pub use schedule::{ElevatorId, Floor, Schedule, ScheduleBuilder, ScheduleError, TimeStep};
pub use search::find_path;
pub use tree::{StateNode, StateTree};

use thiserror::Error;

/// Errors for malformed queries
///
/// A destination that is simply unreachable is *not* an error; it is the
/// `Ok(None)` outcome of [`plan`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// The starting car has no timetable in the schedule
    #[error("car '{0}' is not in the schedule")]
    UnknownCar(ElevatorId),
}

/// Plan a route from `start` to `floor` at `time`
///
/// Builds the reachable-state tree and searches it once. On success the
/// route lists the car occupied at each step `1..=time`. `Ok(None)` means
/// no combination of stays and transfers works, including any `time` past
/// the schedule's horizon.
pub fn plan(
    schedule: &Schedule,
    start: ElevatorId,
    floor: Floor,
    time: TimeStep,
) -> Result<Option<Vec<ElevatorId>>, PlanError> {
    let tree = StateTree::build(schedule, start)?;
    Ok(find_path(&tree, floor, time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_builds_and_searches() {
        let schedule = Schedule::builder()
            .car('A', vec![3, 5])
            .car('B', vec![4, 5])
            .build()
            .unwrap();

        assert_eq!(plan(&schedule, 'A', 5, 2), Ok(Some(vec!['A', 'A'])));
        assert_eq!(plan(&schedule, 'A', 9, 2), Ok(None));
        assert_eq!(plan(&schedule, 'Q', 5, 2), Err(PlanError::UnknownCar('Q')));
    }

    #[test]
    fn plan_is_repeatable() {
        let schedule = Schedule::builder()
            .car('A', vec![1, 4, 3, 2, 2])
            .car('B', vec![3, 3, 3, 4, 2])
            .build()
            .unwrap();

        let first = plan(&schedule, 'A', 2, 5).unwrap();
        let second = plan(&schedule, 'A', 2, 5).unwrap();
        assert_eq!(first, second);
    }
}
