//! pathviz: watch BFS, DFS, Dijkstra and A* explore a grid you draw.

pub mod config;
pub mod logging;
pub mod maze;
pub mod model;
pub mod render;
pub mod trace;

pub use config::{Cli, Config, ConfigError};
pub use model::{RunSummary, Visualizer};
