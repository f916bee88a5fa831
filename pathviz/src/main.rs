use std::fs;
use std::time::Duration;

use clap::Parser;
use pathviz::config::{MAX_SIZE, MIN_SIZE};
use pathviz::{Cli, Config, ConfigError, Visualizer, logging, render};
use pathviz_core::{App, AppConfig};
use pathviz_crossterm::CrosstermDriver;
use pathviz_search::Grid;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;
    let _logger = logging::init(&config.log)?;
    let tick = Duration::from_millis(config.tick_ms);

    let model = match config.layout.clone() {
        Some(path) => {
            let grid: Grid = fs::read_to_string(&path)?.parse()?;
            if !(MIN_SIZE..=MAX_SIZE).contains(&grid.size()) {
                return Err(ConfigError::Size(grid.size()).into());
            }
            log::info!("loaded layout {}", path.display());
            Visualizer::with_grid(grid, config)
        }
        None => Visualizer::new(config),
    };
    let (width, height) = render::screen_size(model.grid().size());
    let driver = CrosstermDriver::new().with_tick(tick);

    let mut app = App::new(AppConfig {
        model,
        driver,
        width,
        height,
    });
    let result = app.run();
    if let Err(e) = &result {
        log::error!("terminated: {e}");
    }
    result
}
