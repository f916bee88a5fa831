use std::fmt;
use std::str::FromStr;

use pathviz_core::Point;

use crate::result::{Path, SearchResult};
use crate::step::{Cancelled, Counted, Stepper};
use crate::Grid;

type SearchFn = fn(&mut Grid, Point, Point, &mut dyn Stepper) -> Result<Option<Path>, Cancelled>;

/// The four search variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }

    /// Whether the first path found is guaranteed shortest.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    fn search_fn(self) -> SearchFn {
        match self {
            Self::Bfs => crate::bfs::search,
            Self::Dfs => crate::dfs::search,
            Self::Dijkstra => crate::dijkstra::search,
            Self::AStar => crate::astar::search,
        }
    }

    /// Run this search from `start` to `end`, calling `stepper` after every
    /// step.
    ///
    /// Preconditions (not checked): `start` and `end` are distinct points of
    /// `grid`, [`Grid::update_neighbors`] ran after the last barrier edit,
    /// and no search marks are left over from a previous run. On return the
    /// grid keeps its Open/Closed trace and, on success, the Path marks.
    pub fn run<S: Stepper + ?Sized>(
        self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        stepper: &mut S,
    ) -> SearchResult {
        log::debug!(
            "{}: searching {start} -> {end} on a {n}x{n} grid",
            self.name(),
            n = grid.size()
        );
        let mut counted = Counted::new(stepper);
        let result = SearchResult::from((self.search_fn())(grid, start, end, &mut counted));
        match &result {
            SearchResult::Found(path) => log::debug!(
                "{}: path of length {} after {} steps",
                self.name(),
                path.len(),
                counted.steps
            ),
            other => log::debug!("{}: {} after {} steps", self.name(), other.label(), counted.steps),
        }
        result
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected bfs, dfs, dijkstra or astar)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// [`Algorithm::Bfs`] as a free function.
pub fn bfs<S: Stepper + ?Sized>(grid: &mut Grid, start: Point, end: Point, stepper: &mut S) -> SearchResult {
    Algorithm::Bfs.run(grid, start, end, stepper)
}

/// [`Algorithm::Dfs`] as a free function.
pub fn dfs<S: Stepper + ?Sized>(grid: &mut Grid, start: Point, end: Point, stepper: &mut S) -> SearchResult {
    Algorithm::Dfs.run(grid, start, end, stepper)
}

/// [`Algorithm::Dijkstra`] as a free function.
pub fn dijkstra<S: Stepper + ?Sized>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    stepper: &mut S,
) -> SearchResult {
    Algorithm::Dijkstra.run(grid, start, end, stepper)
}

/// [`Algorithm::AStar`] as a free function.
pub fn astar<S: Stepper + ?Sized>(grid: &mut Grid, start: Point, end: Point, stepper: &mut S) -> SearchResult {
    Algorithm::AStar.run(grid, start, end, stepper)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        let json = serde_json::to_string(&Algorithm::AStar).unwrap();
        assert_eq!(json, "\"astar\"");
        let back: Algorithm = serde_json::from_str("\"dijkstra\"").unwrap();
        assert_eq!(back, Algorithm::Dijkstra);
    }
}
