use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// A fresh one-cell snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit cells, head first. Returns `None` for an empty list.
    pub fn from_cells(cells: impl IntoIterator<Item = Position>) -> Option<Self> {
        let body: Vec<Position> = cells.into_iter().collect();
        if body.is_empty() { None } else { Some(Self { body }) }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend a new head, keeping the tail if the snake grows
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// A snake always has a head; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// High-level mode of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for a start or a first direction
    Idle,
    Running,
    Paused,
    /// Terminal snapshot; only start/restart are accepted
    Over,
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// The snake covers every cell, there is nowhere left for food
    BoardFull,
}

/// Complete, observable game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only once the board is full
    pub food: Option<Position>,
    pub grid_count: u32,
    pub direction: Option<Direction>,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
    pub score: u32,
    pub high_score: u32,
    /// Current speed in ticks per second
    pub speed: f64,
    /// User-selected base speed
    pub slider: f64,
    pub steps: u32,
}

impl GameState {
    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let limit = self.grid_count as i32;
        (0..limit).contains(&pos.x) && (0..limit).contains(&pos.y)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.contains(pos)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}
