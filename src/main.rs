use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use snake_tui::game::{GameConfig, GameEngine, RandomCells};
use snake_tui::logging;
use snake_tui::modes::HumanMode;
use snake_tui::storage::JsonFileStore;

#[derive(Parser)]
#[command(name = "snake_tui")]
#[command(version, about = "The classic Snake game in your terminal")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the square board
    #[arg(long)]
    grid: Option<u32>,

    /// Starting speed (slider value) in ticks per second
    #[arg(long)]
    speed: Option<f64>,

    /// Absolute speed cap in ticks per second
    #[arg(long)]
    max_speed: Option<f64>,

    /// Where the high score is stored
    #[arg(long, default_value = "snake_high_score.json")]
    high_score_file: PathBuf,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Log file (the terminal is used by the game itself)
    #[arg(long, default_value = "snake_tui.log")]
    log_file: PathBuf,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard and mouse controls
    Human,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(grid) = self.grid {
            config.canvas_size = grid
                .checked_mul(config.cell_size)
                .with_context(|| format!("Grid of {grid} cells per side is too large"))?;
        }
        if let Some(max_speed) = self.max_speed {
            config.max_speed = max_speed;
        }
        if let Some(speed) = self.speed {
            config.initial_speed = speed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_file)?;

    let config = cli.game_config()?;
    log::info!("Starting with {:?}", config);

    let cells = match cli.seed {
        Some(seed) => RandomCells::seeded(seed),
        None => RandomCells::new(),
    };
    let store = JsonFileStore::new(&cli.high_score_file);
    log::info!("High score file: {:?}", store.path());
    let engine = GameEngine::with_parts(config, cells, store);

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(engine);
            human_mode.run().await?;
        }
    }

    Ok(())
}
