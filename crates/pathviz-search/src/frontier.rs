//! Priority-queue plumbing shared by Dijkstra and A*.

use std::cmp::Ordering;

use pathviz_core::{Point, Range};

/// Sentinel score for "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Heap entry ordered by `(key, seq)`, smallest first.
///
/// `seq` is a strictly increasing insertion counter; among equal keys the
/// first-inserted entry wins.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) key: i32,
    pub(crate) seq: u64,
    pub(crate) pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (key, seq) first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Flat per-node score table, `UNREACHABLE` by default.
pub(crate) struct Scores {
    rng: Range,
    values: Vec<i32>,
}

impl Scores {
    pub(crate) fn new(rng: Range) -> Self {
        Self {
            rng,
            values: vec![UNREACHABLE; rng.len()],
        }
    }

    #[inline]
    pub(crate) fn get(&self, p: Point) -> i32 {
        self.rng.index(p).map_or(UNREACHABLE, |i| self.values[i])
    }

    #[inline]
    pub(crate) fn set(&mut self, p: Point, v: i32) {
        if let Some(i) = self.rng.index(p) {
            self.values[i] = v;
        }
    }
}

/// Insertion counter for [`Entry::seq`].
#[derive(Default)]
pub(crate) struct Sequence(u64);

impl Sequence {
    #[inline]
    pub(crate) fn next(&mut self) -> u64 {
        let s = self.0;
        self.0 += 1;
        s
    }
}
