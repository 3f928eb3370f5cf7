//! Logger setup. The terminal belongs to the TUI, so log records go to a file.

use anyhow::{Context, Result};
use env_logger::{Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Route `log` output to `path` (appending). The filter comes from `RUST_LOG`
/// and defaults to `info`.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to install logger")?;

    log::info!("Logging to {:?}", path);
    Ok(())
}
