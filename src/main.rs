mod config;
mod food;
mod game;
mod grid;
mod input;
mod logger;
mod session;
mod snake;
mod term;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use config::GameConfig;
use game::GameLoop;
use term::TermFrontend;

#[derive(Parser)]
#[command(name = "gridsnake", version, about = "Classic snake for the terminal")]
struct Cli {
    /// Board side length in cells
    #[arg(long)]
    grid_size: Option<i32>,

    /// Starting tick interval in milliseconds
    #[arg(long)]
    delay: Option<u64>,

    /// YAML file with the full game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logger::init_file_logger(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_yaml_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(delay) = cli.delay {
        config.initial_delay_ms = delay;
    }
    config.validate()?;

    let mut frontend = TermFrontend::new()?;

    // Shrink the board if the terminal cannot fit the configured one.
    let fitted = frontend.fitted_grid_size();
    if fitted > 0 && fitted < config.grid_size {
        config.grid_size = fitted;
    }

    log!("starting: grid {0}x{0}, initial delay {1}ms", config.grid_size, config.initial_delay_ms);

    frontend.setup()?;
    let mut game = GameLoop::new(config, frontend);
    let result = game.run();

    // Put the terminal back even when the loop errored out.
    game.frontend_mut().restore()?;
    result
}
