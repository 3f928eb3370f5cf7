//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O, timer or rendering
//! dependencies. A driver feeds it commands and ticks at the rate it reports.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod speed;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use food::{CellSource, RandomCells, ScriptedCells};
pub use speed::tick_period;
pub use state::{EndReason, GamePhase, GameState, Position, Snake};
