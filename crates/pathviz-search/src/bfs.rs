use std::collections::VecDeque;

use pathviz_core::Point;

use crate::Grid;
use crate::node::VisitState;
use crate::reconstruct::{ParentMap, reconstruct};
use crate::result::Path;
use crate::step::{Cancelled, Stepper, checkpoint};

/// Unweighted breadth-first search.
///
/// Nodes are enqueued (and marked `Open`) at most once and marked `Closed`
/// when dequeued. The search stops as soon as End shows up as a neighbour,
/// without dequeuing it, so the first hit is a shortest path in edges.
/// Steps once per dequeued node, after its neighbour scan.
pub(crate) fn search(
    grid: &mut Grid,
    start: Point,
    end: Point,
    stepper: &mut dyn Stepper,
) -> Result<Option<Path>, Cancelled> {
    let mut parents = ParentMap::new();
    let mut queue = VecDeque::from([start]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = queue.pop_front() {
        if cur != start {
            grid.set_state(cur, VisitState::Closed);
        }

        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors(cur));

        for &np in &nbuf {
            if np == end {
                parents.insert(end, cur);
                return reconstruct(grid, &parents, start, end, stepper).map(Some);
            }
            let st = grid.state(np);
            if st != VisitState::Open && st != VisitState::Closed && np != start {
                grid.set_state(np, VisitState::Open);
                parents.insert(np, cur);
                queue.push_back(np);
            }
        }

        checkpoint(stepper, grid)?;
    }

    Ok(None)
}
