//! Observable search over 4-connected square grids.
//!
//! Four algorithms share one [`Grid`] and one driving contract:
//!
//! - **BFS** shortest path by layers ([`bfs`])
//! - **DFS** stack search with visible backtracking ([`dfs`])
//! - **Dijkstra** uniform-cost search ([`dijkstra`])
//! - **A\*** with the Manhattan heuristic ([`astar`])
//!
//! A search writes [`VisitState`] marks onto the grid as it goes and calls a
//! [`Stepper`] after every state-changing step. The stepper sees the grid
//! read-only and answers [`Control::Continue`] or [`Control::Cancel`]; that
//! answer is the only way to stop a running search.
//!
//! ```
//! use pathviz_core::Point;
//! use pathviz_search::{Algorithm, Control, Grid};
//!
//! let mut grid: Grid = "S..\n.#.\n..E".parse().unwrap();
//! grid.update_neighbors();
//! let result = Algorithm::Bfs.run(&mut grid, Point::new(0, 0), Point::new(2, 2), &mut |_: &Grid| {
//!     Control::Continue
//! });
//! assert_eq!(result.path().map(|p| p.len()), Some(4));
//! ```

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;
mod grid;
mod layout;
mod node;
mod reconstruct;
mod result;
mod step;

pub use algorithm::{Algorithm, UnknownAlgorithm, astar, bfs, dfs, dijkstra};
pub use distance::manhattan;
pub use frontier::UNREACHABLE;
pub use grid::{DIRS, Grid};
pub use layout::LayoutError;
pub use node::{Node, Role, VisitState};
pub use reconstruct::ParentMap;
pub use result::{Path, SearchResult};
pub use step::{Control, Stepper};
