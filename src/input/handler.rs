use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::gesture::{Gesture, GestureTracker};
use crate::game::{Command, Direction, GameConfig, GamePhase};

/// Terminal columns used to draw one board cell
pub const CELL_COLUMNS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Command(Command),
    /// Space/Enter: start when stopped, toggle pause when playing
    StartOrPause,
    /// Pointer click: steer when playing, start otherwise
    Click(Option<Direction>),
    Quit,
    Ignored,
}

impl InputAction {
    /// The engine command this action stands for in the given phase
    pub fn command_for(self, phase: GamePhase) -> Option<Command> {
        let playing = matches!(phase, GamePhase::Running | GamePhase::Paused);

        match self {
            InputAction::Command(command) => Some(command),
            InputAction::StartOrPause if playing => Some(Command::TogglePause),
            InputAction::StartOrPause => Some(Command::Start),
            InputAction::Click(direction) if playing => direction.map(Command::Turn),
            InputAction::Click(_) => Some(Command::Start),
            InputAction::Quit | InputAction::Ignored => None,
        }
    }
}

pub struct InputHandler {
    cell_size: f64,
    board_side: f64,
    gestures: GestureTracker,
}

impl InputHandler {
    pub fn new(config: &GameConfig) -> Self {
        let cell_size = f64::from(config.cell_size);
        Self {
            cell_size,
            board_side: f64::from(config.grid_count()) * cell_size,
            gestures: GestureTracker::new(config.min_swipe_distance),
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> InputAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => InputAction::Command(Command::Turn(Direction::Up)),
            KeyCode::Down => InputAction::Command(Command::Turn(Direction::Down)),
            KeyCode::Left => InputAction::Command(Command::Turn(Direction::Left)),
            KeyCode::Right => InputAction::Command(Command::Turn(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                InputAction::Command(Command::Turn(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                InputAction::Command(Command::Turn(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                InputAction::Command(Command::Turn(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                InputAction::Command(Command::Turn(Direction::Right))
            }

            // Controls
            KeyCode::Char(' ') | KeyCode::Enter => InputAction::StartOrPause,
            KeyCode::Char('p') | KeyCode::Char('P') => InputAction::Command(Command::TogglePause),
            KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Command(Command::Restart),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                InputAction::Command(Command::AdjustSlider(1.0))
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                InputAction::Command(Command::AdjustSlider(-1.0))
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,

            _ => InputAction::Ignored,
        }
    }

    /// Mouse input relative to `board`, the inner screen area of the grid.
    /// Presses outside the board are ignored.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, board: Rect) -> InputAction {
        let (x, y) = self.to_board_pixels(mouse.column, mouse.row, board);

        let gesture = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if Self::inside(mouse.column, mouse.row, board) {
                    self.gestures.press(x, y);
                } else {
                    self.gestures.cancel();
                }
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => self.gestures.drag(x, y),
            MouseEventKind::Up(MouseButton::Left) => {
                let center = self.board_side / 2.0;
                self.gestures.release(x, y, (center, center))
            }
            _ => None,
        };

        match gesture {
            Some(Gesture::Swipe(direction)) => InputAction::Command(Command::Turn(direction)),
            Some(Gesture::Click(direction)) => InputAction::Click(direction),
            None => InputAction::Ignored,
        }
    }

    /// Centre of the terminal cell, in board pixels
    fn to_board_pixels(&self, column: u16, row: u16, board: Rect) -> (f64, f64) {
        let col = f64::from(column) - f64::from(board.x) + 0.5;
        let row = f64::from(row) - f64::from(board.y) + 0.5;
        (
            col / f64::from(CELL_COLUMNS) * self.cell_size,
            row * self.cell_size,
        )
    }

    fn inside(column: u16, row: u16, board: Rect) -> bool {
        column >= board.x && column < board.right() && row >= board.y && row < board.bottom()
    }
}
