use std::collections::{BinaryHeap, HashSet};

use pathviz_core::Point;

use crate::Grid;
use crate::distance::manhattan;
use crate::frontier::{Entry, Scores, Sequence};
use crate::node::VisitState;
use crate::reconstruct::{ParentMap, reconstruct};
use crate::result::Path;
use crate::step::{Cancelled, Stepper, checkpoint};

/// A* with the Manhattan heuristic.
///
/// The queue is ordered by `(f, insertion sequence)` and has no
/// decrease-key: a node whose `g` improves while it is already queued keeps
/// its original entry. `queued` is the membership set for that check.
/// Returns once End is extracted. Steps once per expansion, before the
/// expanded node is closed.
pub(crate) fn search(
    grid: &mut Grid,
    start: Point,
    end: Point,
    stepper: &mut dyn Stepper,
) -> Result<Option<Path>, Cancelled> {
    let rng = grid.range();
    let mut g = Scores::new(rng);
    let mut f = Scores::new(rng);
    let mut parents = ParentMap::new();
    let mut seq = Sequence::default();

    g.set(start, 0);
    f.set(start, manhattan(start, end));

    let mut open: BinaryHeap<Entry> = BinaryHeap::new();
    open.push(Entry {
        key: f.get(start),
        seq: seq.next(),
        pos: start,
    });
    let mut queued: HashSet<Point> = HashSet::from([start]);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let cp = current.pos;
        queued.remove(&cp);

        if cp == end {
            let path = reconstruct(grid, &parents, start, end, stepper)?;
            // End was marked Open when queued; give it back its clean state.
            grid.reset_visit(end);
            return Ok(Some(path));
        }

        let current_g = g.get(cp);
        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors(cp));

        for &np in &nbuf {
            let tentative = current_g + 1;
            if tentative >= g.get(np) {
                continue;
            }
            parents.insert(np, cp);
            g.set(np, tentative);
            f.set(np, tentative + manhattan(np, end));
            if queued.insert(np) {
                open.push(Entry {
                    key: f.get(np),
                    seq: seq.next(),
                    pos: np,
                });
                grid.set_state(np, VisitState::Open);
            }
        }

        // The step still shows the expanded node as it was queued.
        checkpoint(stepper, grid)?;
        if cp != start {
            grid.set_state(cp, VisitState::Closed);
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Control;

    fn run(layout: &str) -> (Grid, Result<Option<Path>, Cancelled>, usize) {
        let mut grid: Grid = layout.parse().unwrap();
        grid.update_neighbors();
        let (s, e) = (grid.start().unwrap(), grid.end().unwrap());
        let mut steps = 0;
        let r = search(&mut grid, s, e, &mut |_: &Grid| {
            steps += 1;
            Control::Continue
        });
        (grid, r, steps)
    }

    #[test]
    fn open_field_path_is_manhattan() {
        let (grid, r, steps) = run("S....\n.....\n.....\n.....\n....E");
        let path = r.unwrap().unwrap();
        assert_eq!(path.len(), 8);
        assert!(path.is_contiguous());
        // Expansions plus one step per reconstruction hop.
        assert!(steps > 8 && steps <= 25 + 8);
        assert_eq!(grid.state(Point::new(4, 4)), VisitState::Unvisited);
        assert_eq!(grid.state(Point::new(0, 0)), VisitState::Unvisited);
        assert_eq!(grid.count_state(VisitState::Path), 7);
    }

    #[test]
    fn detours_through_gap() {
        let layout = "\
            ..S..\n\
            .....\n\
            ###.#\n\
            .....\n\
            ..E..";
        let (_, r, _) = run(layout);
        let path = r.unwrap().unwrap();
        // Forced through the gap at (3, 2): 3 + 3.
        assert_eq!(path.len(), 6);
        assert!(path.points().contains(&Point::new(3, 2)));
    }

    #[test]
    fn exhausts_without_path() {
        let (grid, r, steps) = run("S.#.\n..#.\n###.\n...E");
        assert_eq!(r, Ok(None));
        assert_eq!(steps, 4);
        assert_eq!(grid.count_state(VisitState::Closed), 3);
        assert_eq!(grid.count_state(VisitState::Open), 0);
    }

    #[test]
    fn expanded_node_closes_after_its_step() {
        let mut grid: Grid = "S...\n....\n....\n...E".parse().unwrap();
        grid.update_neighbors();
        let (s, e) = (grid.start().unwrap(), grid.end().unwrap());
        let mut seen = Vec::new();
        let r = search(&mut grid, s, e, &mut |g: &Grid| {
            seen.push(g.count_state(VisitState::Closed));
            Control::Continue
        });
        assert!(r.unwrap().is_some());
        // Start is never closed; the first non-start expansion shows up
        // Closed one step later.
        assert_eq!(seen[0], 0);
        assert_eq!(seen[1], 0);
        assert_eq!(seen[2], 1);
    }

    #[test]
    fn cancel_leaves_grid_untouched_afterwards() {
        let mut grid: Grid = "S...\n....\n....\n...E".parse().unwrap();
        grid.update_neighbors();
        let (s, e) = (grid.start().unwrap(), grid.end().unwrap());
        let mut snapshot = None;
        let r = search(&mut grid, s, e, &mut |g: &Grid| {
            snapshot = Some(g.clone());
            Control::Cancel
        });
        assert_eq!(r, Err(Cancelled));
        assert_eq!(snapshot.as_ref(), Some(&grid));
    }
}
