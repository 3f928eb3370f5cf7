//! Key-value persistence for the single high score.
//!
//! The score lives under the `snakeHighScore` key of a small JSON object file.
//! A missing file means no high score yet.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

/// Where the high score is kept between sessions
pub trait HighScoreStore {
    /// Read the stored score, 0 when nothing has been stored yet
    fn load(&self) -> Result<u32>;

    fn save(&mut self, score: u32) -> Result<()>;
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read high score from {:?}", self.path))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse high score file {:?}", self.path))
    }
}

fn score_in(map: &Map<String, Value>) -> Result<u32> {
    let Some(value) = map.get(HIGH_SCORE_KEY) else {
        return Ok(0);
    };
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .with_context(|| format!("{HIGH_SCORE_KEY} is not a non-negative integer: {value}"))
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32> {
        score_in(&self.read_map()?)
    }

    /// Fails without touching the file when its current contents are unreadable
    fn save(&mut self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let mut map = self.read_map()?;
        score_in(&map)?;
        map.insert(HIGH_SCORE_KEY.to_string(), Value::from(score));

        let json = serde_json::to_string_pretty(&map).context("Failed to serialize high score")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write high score to {:?}", self.path))?;
        Ok(())
    }
}

/// In-memory store. Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    score: Arc<AtomicU32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self {
            score: Arc::new(AtomicU32::new(score)),
        }
    }

    pub fn get(&self) -> u32 {
        self.score.load(Ordering::Relaxed)
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        Ok(self.get())
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.score.store(score, Ordering::Relaxed);
        Ok(())
    }
}
