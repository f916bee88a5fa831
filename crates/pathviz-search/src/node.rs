use pathviz_core::Point;

/// The durable identity of a node, set by the editing layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    None,
    Start,
    End,
    Barrier,
}

/// Transient search annotation, written only by the search engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitState {
    #[default]
    Unvisited,
    /// Discovered, on the frontier.
    Open,
    /// Expanded: all neighbours scanned.
    Closed,
    /// DFS backtrack marker; replaced by `Closed` before the next step.
    DeadEnd,
    /// On the reported solution.
    Path,
}

impl VisitState {
    /// Whether a search has left this mark (anything but `Unvisited`).
    #[inline]
    pub fn is_marked(self) -> bool {
        self != Self::Unvisited
    }
}

/// A single grid cell.
///
/// `pos.y` is the row and `pos.x` the column. The neighbour list is a cache
/// filled by [`Grid::update_neighbors`](crate::Grid::update_neighbors).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pos: Point,
    pub(crate) role: Role,
    pub(crate) state: VisitState,
    pub(crate) neighbors: Vec<Point>,
}

impl Node {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            role: Role::None,
            state: VisitState::Unvisited,
            neighbors: Vec::new(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn state(&self) -> VisitState {
        self.state
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.role == Role::Barrier
    }

    /// Walkable orthogonal neighbours as of the last recompute.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }
}
