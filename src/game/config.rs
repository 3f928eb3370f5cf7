use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest board the game accepts, in cells per side
pub const MAX_GRID_COUNT: u32 = 200;

/// Configuration for the game
///
/// Sizes are expressed in "pixels" so the board keeps the proportions of the
/// classic canvas version: the grid has `canvas_size / cell_size` cells per
/// side, and swipe distances are measured in the same units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board in pixels
    pub canvas_size: u32,
    /// Side length of a single cell in pixels
    pub cell_size: u32,

    /// Speed the slider starts at, in ticks per second
    pub initial_speed: f64,
    /// Lowest speed the slider accepts
    pub min_speed: f64,
    /// Absolute speed cap
    pub max_speed: f64,
    /// Speed added by each automatic speed-up
    pub speed_increment: f64,
    /// Automatic speed-up happens every time the score hits a multiple of this
    pub speedup_every: u32,
    /// How far automatic speed-ups may exceed the slider value
    pub speed_headroom: f64,

    /// Minimum drag distance (pixels) before a swipe counts
    pub min_swipe_distance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400,
            cell_size: 20,
            initial_speed: 5.0,
            min_speed: 1.0,
            max_speed: 10.0,
            speed_increment: 0.5,
            speedup_every: 5,
            speed_headroom: 2.0,
            min_swipe_distance: 30.0,
        }
    }
}

impl GameConfig {
    /// Create a configuration with `grid_count` cells per side at the default cell size
    pub fn with_grid(grid_count: u32) -> Self {
        let defaults = Self::default();
        Self {
            canvas_size: grid_count.saturating_mul(defaults.cell_size),
            ..defaults
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::with_grid(10)
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Number of cells along each side of the board
    pub fn grid_count(&self) -> u32 {
        self.canvas_size / self.cell_size.max(1)
    }

    /// Cell the snake starts on after every restart
    pub fn start_cell(&self) -> (i32, i32) {
        let center = (self.grid_count() / 2) as i32;
        (center, center)
    }

    /// Minimum swipe distance converted to board cells
    pub fn min_swipe_cells(&self) -> f64 {
        self.min_swipe_distance / f64::from(self.cell_size.max(1))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be positive");
        ensure!(
            self.cell_size <= self.canvas_size,
            "cell_size ({}) is larger than canvas_size ({})",
            self.cell_size,
            self.canvas_size
        );
        ensure!(
            self.grid_count() <= MAX_GRID_COUNT,
            "grid of {} cells per side exceeds the maximum of {MAX_GRID_COUNT}",
            self.grid_count()
        );
        ensure!(self.min_speed > 0.0, "min_speed must be positive");
        ensure!(
            self.min_speed <= self.max_speed,
            "min_speed ({}) exceeds max_speed ({})",
            self.min_speed,
            self.max_speed
        );
        ensure!(
            (self.min_speed..=self.max_speed).contains(&self.initial_speed),
            "initial_speed ({}) is outside [{}, {}]",
            self.initial_speed,
            self.min_speed,
            self.max_speed
        );
        ensure!(self.speed_increment >= 0.0, "speed_increment must not be negative");
        ensure!(self.speed_headroom >= 0.0, "speed_headroom must not be negative");
        ensure!(self.speedup_every > 0, "speedup_every must be positive");
        ensure!(
            self.min_swipe_distance >= 0.0,
            "min_swipe_distance must not be negative"
        );
        Ok(())
    }
}
