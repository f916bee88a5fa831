use std::collections::BinaryHeap;

use pathviz_core::Point;

use crate::Grid;
use crate::frontier::{Entry, Scores, Sequence, UNREACHABLE};
use crate::node::VisitState;
use crate::reconstruct::{ParentMap, reconstruct};
use crate::result::Path;
use crate::step::{Cancelled, Stepper, checkpoint};

/// Uniform-cost search over unit edges.
///
/// Every walkable node is seeded into the queue, Start at 0 and the rest at
/// [`UNREACHABLE`]. Decrease-key is done lazily: a relaxed node gets a fresh
/// heap entry and stale entries are skipped on extraction. Extracting an
/// unreachable score ends the search with no path; reaching End as a
/// neighbour ends it with one. Steps once per extraction.
pub(crate) fn search(
    grid: &mut Grid,
    start: Point,
    end: Point,
    stepper: &mut dyn Stepper,
) -> Result<Option<Path>, Cancelled> {
    let rng = grid.range();
    let mut dist = Scores::new(rng);
    let mut extracted = vec![false; rng.len()];
    let mut parents = ParentMap::new();
    let mut seq = Sequence::default();
    let mut open: BinaryHeap<Entry> = BinaryHeap::new();

    // Seed in row-major order.
    for node in grid.nodes().filter(|n| !n.is_barrier()) {
        let p = node.pos();
        let key = if p == start { 0 } else { UNREACHABLE };
        dist.set(p, key);
        open.push(Entry {
            key,
            seq: seq.next(),
            pos: p,
        });
    }

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let cp = current.pos;
        let Some(ci) = rng.index(cp) else {
            continue;
        };
        // Skip stale entries.
        if extracted[ci] || current.key != dist.get(cp) {
            continue;
        }
        extracted[ci] = true;

        let current_d = current.key;
        if current_d == UNREACHABLE {
            return Ok(None);
        }
        if cp != start {
            grid.set_state(cp, VisitState::Closed);
        }

        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors(cp));

        for &np in &nbuf {
            if np == end {
                parents.insert(end, cp);
                return reconstruct(grid, &parents, start, end, stepper).map(Some);
            }
            if grid.state(np) == VisitState::Closed || np == start {
                continue;
            }
            grid.set_state(np, VisitState::Open);

            let tentative = current_d + 1;
            if tentative < dist.get(np) {
                dist.set(np, tentative);
                parents.insert(np, cp);
                open.push(Entry {
                    key: tentative,
                    seq: seq.next(),
                    pos: np,
                });
            }
        }

        checkpoint(stepper, grid)?;
    }

    Ok(None)
}
