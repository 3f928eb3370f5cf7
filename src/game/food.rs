//! Food placement and the randomness it draws on.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::state::{Position, Snake};

/// Source of uniform picks. Injected into the engine so tests can script it.
pub trait CellSource {
    /// Uniform pick in `0..upper`; `upper` is always at least 1
    fn pick(&mut self, upper: usize) -> usize;
}

/// Production source backed by a seedable RNG
pub struct RandomCells {
    rng: StdRng,
}

impl RandomCells {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomCells {
    fn default() -> Self {
        Self::new()
    }
}

impl CellSource for RandomCells {
    fn pick(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed sequence of picks, cycling when exhausted.
/// Values are reduced modulo `upper`.
#[derive(Debug, Clone)]
pub struct ScriptedCells {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedCells {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Script that yields the given cells in order, as (x, y) pick pairs
    pub fn cells(cells: &[(usize, usize)]) -> Self {
        Self::new(cells.iter().flat_map(|&(x, y)| [x, y]))
    }
}

impl CellSource for ScriptedCells {
    fn pick(&mut self, upper: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        value % upper
    }
}

/// Choose a food cell not covered by the snake.
///
/// Rejection-samples uniform cells for a bounded number of attempts, then
/// falls back to a uniform pick among the enumerated free cells. Returns
/// `None` only when the snake covers the whole grid.
pub fn place_food(source: &mut dyn CellSource, snake: &Snake, grid_count: u32) -> Option<Position> {
    let side = grid_count as usize;
    let total = side * side;
    if total == 0 || snake.len() >= total {
        return None;
    }

    for _ in 0..total * 4 {
        let pos = Position::new(source.pick(side) as i32, source.pick(side) as i32);
        if !snake.contains(pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = (0..side as i32)
        .flat_map(|y| (0..side as i32).map(move |x| Position::new(x, y)))
        .filter(|pos| !snake.contains(*pos))
        .collect();

    if free.is_empty() {
        return None;
    }
    Some(free[source.pick(free.len())])
}
