//! Snake TUI - the classic Snake game in the terminal
//!
//! This library provides:
//! - Core game logic with no I/O or timers (game module)
//! - High score persistence (storage module)
//! - Keyboard and pointer input mapping (input module)
//! - TUI rendering (render module)
//! - The single game timer (timing module)
//! - The interactive play mode (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod storage;
pub mod timing;
