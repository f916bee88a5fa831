//! Runtime configuration: an optional TOML file overridden by command-line
//! flags.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use pathviz_search::Algorithm;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_SIZE: i32 = 2;
pub const MAX_SIZE: i32 = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("size {0} is outside {min}..={max}", min = MIN_SIZE, max = MAX_SIZE)]
    Size(i32),
    #[error("barrier density {0} is outside 0.0..=1.0")]
    Density(f64),
    #[error("tick_ms must be positive")]
    Tick,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// A flexi_logger spec such as `info` or `pathviz_search=debug`.
    pub level: String,
    pub file: String,
    pub dir: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "pathviz".to_string(),
            dir: "logs".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Rows (and columns) of the board.
    pub size: i32,
    /// Playback interval between recorded steps.
    pub tick_ms: u64,
    /// Floor of the per-run step budget; see [`Config::step_budget`].
    pub max_steps: usize,
    pub barrier_density: f64,
    /// Seed for random barriers. Unset means a fresh seed per start.
    pub seed: Option<u64>,
    /// Run by `Enter`.
    pub algorithm: Algorithm,
    /// Layout file loaded at start.
    pub layout: Option<PathBuf>,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 50,
            tick_ms: 16,
            max_steps: 20_000,
            barrier_density: 0.3,
            seed: None,
            algorithm: Algorithm::AStar,
            layout: None,
            log: LogConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the effective configuration: defaults, then the `--config`
    /// file, then flags.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        cli.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Steps a run may record before the recorder cancels it: `max_steps`,
    /// raised to `3 * size²` so that no search on the board is cut short.
    pub fn step_budget(&self) -> usize {
        let n = self.size.max(0) as usize;
        self.max_steps.max(3 * n * n)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::Size(self.size));
        }
        if !(0.0..=1.0).contains(&self.barrier_density) {
            return Err(ConfigError::Density(self.barrier_density));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Tick);
        }
        Ok(())
    }
}

/// Interactive BFS / DFS / Dijkstra / A* visualizer.
///
/// Left click places Start, then End, then barriers; right click erases.
/// Keys: a A*, d DFS, b BFS, k Dijkstra, Enter default algorithm, c clear,
/// r reset, m random barriers, space skip playback, q quit.
#[derive(Debug, Default, Parser)]
#[command(version, about)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Board size (rows = columns).
    #[arg(short, long)]
    pub size: Option<i32>,
    /// Milliseconds per playback step.
    #[arg(long)]
    pub tick_ms: Option<u64>,
    /// Step budget per search.
    #[arg(long)]
    pub max_steps: Option<usize>,
    /// Fraction of cells turned into barriers by `m`.
    #[arg(long)]
    pub density: Option<f64>,
    /// Seed for random barriers.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Algorithm run by Enter: bfs, dfs, dijkstra or astar.
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,
    /// Layout file to start from.
    #[arg(short, long)]
    pub layout: Option<PathBuf>,
    /// Log spec, e.g. `debug` or `pathviz_search=debug`.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        if let Some(density) = self.density {
            config.barrier_density = density;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if self.layout.is_some() {
            config.layout.clone_from(&self.layout);
        }
        if let Some(level) = &self.log_level {
            config.log.level.clone_from(level);
        }
    }
}
