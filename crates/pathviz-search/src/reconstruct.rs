//! Parent map and path reconstruction.

use std::collections::HashMap;

use pathviz_core::Point;

use crate::Grid;
use crate::node::VisitState;
use crate::result::Path;
use crate::step::{Cancelled, Stepper, checkpoint};

/// Predecessor of every discovered node on the discovery tree.
///
/// Owned by a single search invocation. Start never gets an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParentMap {
    parents: HashMap<Point, Point>,
}

impl ParentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `parent` as the predecessor of `node`, returning the one it
    /// replaces.
    pub fn insert(&mut self, node: Point, parent: Point) -> Option<Point> {
        self.parents.insert(node, parent)
    }

    #[inline]
    pub fn get(&self, node: Point) -> Option<Point> {
        self.parents.get(&node).copied()
    }

    #[inline]
    pub fn contains(&self, node: Point) -> bool {
        self.parents.contains_key(&node)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Chain of predecessors from `end` back to the first node without an
    /// entry, `end` first.
    ///
    /// The walk is capped at `len() + 1` nodes, so a malformed map cannot
    /// loop forever.
    pub fn chain(&self, end: Point) -> Vec<Point> {
        let mut chain = vec![end];
        let mut cur = end;
        while let Some(prev) = self.get(cur) {
            if chain.len() > self.parents.len() {
                debug_assert!(false, "cycle in parent map at {prev}");
                break;
            }
            chain.push(prev);
            cur = prev;
        }
        chain
    }
}

/// Walk `parents` back from `end`, marking every predecessor except `start`
/// as [`VisitState::Path`] and stepping once per hop.
pub(crate) fn reconstruct<S: Stepper + ?Sized>(
    grid: &mut Grid,
    parents: &ParentMap,
    start: Point,
    end: Point,
    stepper: &mut S,
) -> Result<Path, Cancelled> {
    let mut points = parents.chain(end);
    for &p in &points[1..] {
        if p != start {
            grid.set_state(p, VisitState::Path);
        }
        checkpoint(stepper, grid)?;
    }
    points.reverse();
    Ok(Path::new(points))
}
