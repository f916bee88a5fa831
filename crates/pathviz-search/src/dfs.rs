use pathviz_core::Point;

use crate::Grid;
use crate::node::VisitState;
use crate::result::Path;
use crate::step::{Cancelled, Stepper, checkpoint};

/// Stack-based depth-first search with visible backtracking.
///
/// The stack always holds the current path from Start, so the solution is
/// read off the stack directly and no parent map is built. Each round scans
/// the top node's neighbours, marking unvisited ones `Open`, then either
/// descends into the first `Open` neighbour or, at a dead end, shows the top
/// node as [`VisitState::DeadEnd`], pops it and closes it. Steps once per
/// descend or backtrack. Finds *a* path, not necessarily a shortest one.
pub(crate) fn search(
    grid: &mut Grid,
    start: Point,
    end: Point,
    stepper: &mut dyn Stepper,
) -> Result<Option<Path>, Cancelled> {
    let mut stack = vec![start];
    let mut nbuf = Vec::with_capacity(4);

    while let Some(&cur) = stack.last() {
        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors(cur));

        for &np in &nbuf {
            if np == end {
                return mark_stack(grid, stack, end, stepper).map(Some);
            }
            if grid.state(np) == VisitState::Unvisited && np != start {
                grid.set_state(np, VisitState::Open);
            }
        }

        // Closed before descending, so the child never sees its parent as a
        // candidate.
        if cur != start {
            grid.set_state(cur, VisitState::Closed);
        }

        match nbuf.iter().find(|&&np| grid.state(np) == VisitState::Open) {
            Some(&next) => {
                stack.push(next);
                checkpoint(stepper, grid)?;
            }
            None => {
                if cur != start {
                    grid.set_state(cur, VisitState::DeadEnd);
                }
                stack.pop();
                checkpoint(stepper, grid)?;
                if cur != start {
                    grid.set_state(cur, VisitState::Closed);
                }
            }
        }
    }

    Ok(None)
}

/// Mark every stack node as `Path`, top to bottom, stepping after each.
fn mark_stack(
    grid: &mut Grid,
    mut stack: Vec<Point>,
    end: Point,
    stepper: &mut dyn Stepper,
) -> Result<Path, Cancelled> {
    let mut points = Vec::with_capacity(stack.len() + 1);
    points.push(end);
    while let Some(p) = stack.pop() {
        grid.set_state(p, VisitState::Path);
        points.push(p);
        checkpoint(stepper, grid)?;
    }
    points.reverse();
    Ok(Path::new(points))
}
