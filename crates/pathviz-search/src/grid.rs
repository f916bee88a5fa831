//! The search [`Grid`]: N×N nodes with cached orthogonal adjacency.

use pathviz_core::{Point, Range};

use crate::node::{Node, Role, VisitState};

/// Neighbour offsets in scan order: row+1, row-1, col+1, col-1.
///
/// Every traversal order in this crate follows this order.
pub const DIRS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// A square grid of [`Node`]s.
///
/// Points outside the grid read as an empty, unvisited node and writes to
/// them are ignored.
///
/// Every visit-state change is appended to a write log, emptied by
/// [`clear_search`](Grid::clear_search), so observers can follow a search
/// without diffing the whole grid. Equality ignores the log.
#[derive(Clone, Debug)]
pub struct Grid {
    rng: Range,
    nodes: Vec<Node>,
    writes: Vec<Point>,
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rng == other.rng && self.nodes == other.nodes
    }
}

impl Eq for Grid {}

impl Grid {
    /// Build a `size`×`size` grid of empty, unvisited nodes.
    ///
    /// Adjacency is empty until [`update_neighbors`](Grid::update_neighbors)
    /// runs.
    pub fn new(size: i32) -> Self {
        let rng = Range::square(size);
        Self {
            rng,
            nodes: rng.iter().map(Node::new).collect(),
            writes: Vec::new(),
        }
    }

    /// Number of rows (equal to the number of columns).
    #[inline]
    pub fn size(&self) -> i32 {
        self.rng.width()
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    #[inline]
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.rng.index(p).map(|i| &self.nodes[i])
    }

    #[inline]
    fn node_mut(&mut self, p: Point) -> Option<&mut Node> {
        self.rng.index(p).map(|i| &mut self.nodes[i])
    }

    /// Row-major iterator over every node.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    #[inline]
    pub fn role(&self, p: Point) -> Role {
        self.node(p).map_or(Role::None, Node::role)
    }

    #[inline]
    pub fn state(&self, p: Point) -> VisitState {
        self.node(p).map_or(VisitState::Unvisited, Node::state)
    }

    /// Cached neighbours of `p` (empty outside the grid).
    #[inline]
    pub fn neighbors(&self, p: Point) -> &[Point] {
        match self.node(p) {
            Some(n) => n.neighbors(),
            None => &[],
        }
    }

    /// Set the role of `p`. The visit state is left untouched.
    ///
    /// The single-Start / single-End rule is the caller's to enforce.
    pub fn set_role(&mut self, p: Point, role: Role) {
        if let Some(n) = self.node_mut(p) {
            n.role = role;
        }
    }

    pub fn set_state(&mut self, p: Point, state: VisitState) {
        let Some(n) = self.node_mut(p) else {
            return;
        };
        if n.state != state {
            n.state = state;
            self.writes.push(p);
        }
    }

    /// Erase `p`: role `None`, state `Unvisited`.
    pub fn reset(&mut self, p: Point) {
        self.set_role(p, Role::None);
        self.set_state(p, VisitState::Unvisited);
    }

    /// Points whose visit state changed since the last
    /// [`clear_search`](Grid::clear_search), in write order. A point shows up
    /// once per change.
    #[inline]
    pub fn writes(&self) -> &[Point] {
        &self.writes
    }

    /// Reset the visit state of `p` only.
    pub fn reset_visit(&mut self, p: Point) {
        self.set_state(p, VisitState::Unvisited);
    }

    /// Drop every search mark, keeping roles, and empty the write log.
    /// Returns how many nodes changed.
    pub fn clear_search(&mut self) -> usize {
        self.writes.clear();
        let mut n = 0;
        for node in self.nodes.iter_mut().filter(|n| n.state.is_marked()) {
            node.state = VisitState::Unvisited;
            n += 1;
        }
        n
    }

    /// Discard all nodes and recreate them empty, keeping the size.
    pub fn rebuild(&mut self) {
        *self = Self::new(self.size());
    }

    /// Recompute every node's walkable neighbours (grid-wide pass).
    ///
    /// Barrier edits made after the last call are invisible to a search
    /// until this runs again.
    pub fn update_neighbors(&mut self) {
        let rng = self.rng;
        for i in 0..self.nodes.len() {
            let p = self.nodes[i].pos();
            let mut nbs = std::mem::take(&mut self.nodes[i].neighbors);
            nbs.clear();
            for d in DIRS {
                let q = p + d;
                if let Some(qi) = rng.index(q) {
                    if !self.nodes[qi].is_barrier() {
                        nbs.push(q);
                    }
                }
            }
            self.nodes[i].neighbors = nbs;
        }
    }

    /// The node with role `Start`, if any (first in row-major order).
    pub fn start(&self) -> Option<Point> {
        self.find_role(Role::Start)
    }

    /// The node with role `End`, if any (first in row-major order).
    pub fn end(&self) -> Option<Point> {
        self.find_role(Role::End)
    }

    fn find_role(&self, role: Role) -> Option<Point> {
        self.nodes.iter().find(|n| n.role == role).map(Node::pos)
    }

    /// Snapshot of every visit state in row-major order.
    pub fn states(&self) -> Vec<VisitState> {
        self.nodes.iter().map(Node::state).collect()
    }

    pub fn count_state(&self, state: VisitState) -> usize {
        self.nodes.iter().filter(|n| n.state == state).count()
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.nodes.iter().filter(|n| n.role == role).count()
    }
}
