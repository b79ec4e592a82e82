//! Destination search over the reachable-state tree
//!
//! Depth-first descent with an explicit path accumulator. Children are
//! visited in build order (stay first, then transfers in schedule order),
//! and the first state matching the target wins, so identical inputs always
//! yield the identical path. The result is *a* valid route, not necessarily
//! the one with the fewest transfers.

use tracing::trace;

use crate::schedule::{ElevatorId, Floor, TimeStep};
use crate::tree::{StateNode, StateTree};

/// Find a route reaching `floor` exactly at `time`
///
/// On success the returned sequence holds the car the rider occupies at
/// each time step `1..=time`; the root's own entry is excluded since time 0
/// involves no choice. `None` means no combination of stays and transfers
/// reaches the target, which is an ordinary outcome rather than an error; a
/// target time past the tree's depth reports `None` the same way.
pub fn find_path(tree: &StateTree, floor: Floor, time: TimeStep) -> Option<Vec<ElevatorId>> {
    let root = tree.root();
    if root.time() == time {
        // Zero-length query: the rider is already wherever the root is.
        return (root.floor() == floor).then(Vec::new);
    }

    let mut path = Vec::with_capacity(time);
    if descend(root, floor, time, &mut path) {
        trace!(%floor, time, ?path, "destination reached");
        Some(path)
    } else {
        trace!(%floor, time, "destination unreachable");
        None
    }
}

/// Grow `path` toward a state matching the target
///
/// On a hit, `path` holds the cars from time 1 down to the matching state.
/// On a miss, `path` is restored to its length at entry.
fn descend(node: &StateNode, floor: Floor, time: TimeStep, path: &mut Vec<ElevatorId>) -> bool {
    for child in node.children() {
        path.push(child.car());
        let hit = if child.time() == time {
            child.floor() == floor
        } else {
            descend(child, floor, time, path)
        };
        if hit {
            return true;
        }
        path.pop();
    }
    false
}
