use log::{debug, info, warn};
use std::time::Duration;

use super::{
    action::{Command, Direction},
    config::GameConfig,
    food::{CellSource, RandomCells, place_food},
    speed::SpeedControl,
    state::{EndReason, GamePhase, GameState, Position, Snake},
};
use crate::storage::{HighScoreStore, MemoryStore};

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Set when this tick ended the game
    pub end_reason: Option<EndReason>,
    /// The tick period changed and the timer must be rescheduled
    pub speed_changed: bool,
    /// The score just beat the previous high score
    pub new_high_score: bool,
}

/// The game engine: owns the state and every rule that mutates it.
///
/// The engine knows nothing about timers or terminals. A driver calls
/// [`GameEngine::tick`] once per [`GameEngine::tick_period`] while the game is
/// running and forwards user intents through the control methods.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    next_direction: Option<Direction>,
    speed: SpeedControl,
    cells: Box<dyn CellSource + Send>,
    store: Box<dyn HighScoreStore + Send>,
    persisting: bool,
}

impl GameEngine {
    /// Engine with a random food source and an in-memory high score
    pub fn new(config: GameConfig) -> Self {
        Self::with_parts(config, RandomCells::new(), MemoryStore::new())
    }

    /// Engine with explicit food source and high score store.
    ///
    /// `config` is expected to have passed [`GameConfig::validate`]; speed
    /// bounds that do not are coerced rather than rejected. A store that
    /// cannot be read leaves the engine memory-only for the session so the
    /// stored score is never overwritten.
    pub fn with_parts(
        config: GameConfig,
        cells: impl CellSource + Send + 'static,
        store: impl HighScoreStore + Send + 'static,
    ) -> Self {
        let (high_score, persisting) = match store.load() {
            Ok(score) => (score, true),
            Err(e) => {
                warn!("Could not load high score, keeping it in memory only: {e:#}");
                (0, false)
            }
        };

        let speed = SpeedControl::new(&config);
        let (x, y) = config.start_cell();
        let state = GameState {
            snake: Snake::new(Position::new(x, y)),
            food: None,
            grid_count: config.grid_count(),
            direction: None,
            phase: GamePhase::Idle,
            end_reason: None,
            score: 0,
            high_score,
            speed: speed.current(),
            slider: speed.slider(),
            steps: 0,
        };

        let mut engine = Self {
            config,
            state,
            next_direction: None,
            speed,
            cells: Box::new(cells),
            store: Box::new(store),
            persisting,
        };
        engine.state.food = engine.spawn_food();
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Borrow the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Direction that the next tick will commit
    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    pub fn tick_period(&self) -> Duration {
        self.speed.period()
    }

    /// Period the driver should be ticking at, `None` when no timer should run
    pub fn scheduled_period(&self) -> Option<Duration> {
        (self.state.phase == GamePhase::Running).then(|| self.tick_period())
    }

    /// False once the store failed to load or save; the score is then kept in memory only
    pub fn is_persisting(&self) -> bool {
        self.persisting
    }

    /// Dispatch a control-surface command. Returns whether anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Turn(direction) => self.set_direction(direction),
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => {
                self.restart();
                true
            }
            Command::AdjustSlider(delta) => self.set_slider_speed(self.speed.slider() + delta),
        }
    }

    pub fn start(&mut self) -> bool {
        match self.state.phase {
            GamePhase::Idle => {
                if self.state.direction.is_none() {
                    let direction = self.next_direction.unwrap_or(Direction::Right);
                    self.state.direction = Some(direction);
                    self.next_direction = Some(direction);
                }
                self.state.phase = GamePhase::Running;
                info!("Game started at {} ticks/s", self.speed.current());
                true
            }
            GamePhase::Over => {
                self.restart();
                true
            }
            GamePhase::Running | GamePhase::Paused => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state.phase != GamePhase::Running {
            return false;
        }
        self.state.phase = GamePhase::Paused;
        debug!("Paused at step {}", self.state.steps);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state.phase != GamePhase::Paused {
            return false;
        }
        self.state.phase = GamePhase::Running;
        debug!("Resumed at step {}", self.state.steps);
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.state.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::Idle | GamePhase::Over => false,
        }
    }

    /// Full reset back to Idle. The high score and slider survive.
    pub fn restart(&mut self) {
        let (x, y) = self.config.start_cell();
        self.speed.reset();

        self.state.snake = Snake::new(Position::new(x, y));
        self.state.direction = None;
        self.state.phase = GamePhase::Idle;
        self.state.end_reason = None;
        self.state.score = 0;
        self.state.steps = 0;
        self.next_direction = None;
        self.sync_speed();
        self.state.food = self.spawn_food();

        info!("Game restarted");
    }

    /// Buffer a direction for the next tick.
    ///
    /// Reversing the current direction is ignored. In Idle an accepted
    /// direction also starts the game.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.state.phase == GamePhase::Over {
            return false;
        }
        if self
            .state
            .direction
            .is_some_and(|current| current.is_opposite(direction))
        {
            return false;
        }

        self.next_direction = Some(direction);
        if self.state.phase == GamePhase::Idle {
            self.start();
        }
        true
    }

    /// Move the speed slider. Returns true when the tick period changed.
    pub fn set_slider_speed(&mut self, value: f64) -> bool {
        let changed = self.speed.set_slider(value);
        self.sync_speed();
        debug!("Slider set to {}", self.speed.slider());
        changed
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.phase != GamePhase::Running {
            return TickOutcome::default();
        }

        if let Some(next) = self.next_direction {
            self.state.direction = Some(next);
        }
        let direction = self.state.direction.unwrap_or(Direction::Right);

        let new_head = self.state.snake.head().moved_in_direction(direction);
        let ate_food = self.state.food == Some(new_head);
        self.state.snake.advance(new_head, ate_food);
        self.state.steps += 1;

        // The offending move stays visible as the final snapshot
        if let Some(reason) = self.check_collision() {
            self.end_game(reason);
            return TickOutcome {
                end_reason: Some(reason),
                ..Default::default()
            };
        }

        if !ate_food {
            return TickOutcome::default();
        }

        self.state.score += 1;
        let new_high_score = self.record_high_score();

        self.state.food = self.spawn_food();
        if self.state.food.is_none() {
            self.end_game(EndReason::BoardFull);
            return TickOutcome {
                ate_food,
                end_reason: Some(EndReason::BoardFull),
                new_high_score,
                ..Default::default()
            };
        }

        let speed_changed = self.speed.on_score(self.state.score);
        if speed_changed {
            self.sync_speed();
            info!("Speed up to {} ticks/s", self.speed.current());
        }

        TickOutcome {
            ate_food,
            end_reason: None,
            speed_changed,
            new_high_score,
        }
    }

    /// Wall or body hit by the (already moved) head
    fn check_collision(&self) -> Option<EndReason> {
        let head = self.state.snake.head();

        if !self.state.is_in_bounds(head) {
            return Some(EndReason::Wall);
        }

        if self.state.snake.collides_with_body(head) {
            return Some(EndReason::SelfCollision);
        }

        None
    }

    fn end_game(&mut self, reason: EndReason) {
        self.state.phase = GamePhase::Over;
        self.state.end_reason = Some(reason);
        info!(
            "Game over ({reason:?}) with score {} after {} steps",
            self.state.score, self.state.steps
        );
    }

    fn record_high_score(&mut self) -> bool {
        if self.state.score <= self.state.high_score {
            return false;
        }
        self.state.high_score = self.state.score;
        if !self.persisting {
            return true;
        }

        if let Err(e) = self.store.save(self.state.score) {
            warn!("Could not save high score, keeping it in memory: {e:#}");
            self.persisting = false;
        }
        true
    }

    fn spawn_food(&mut self) -> Option<Position> {
        place_food(self.cells.as_mut(), &self.state.snake, self.state.grid_count)
    }

    fn sync_speed(&mut self) {
        self.state.speed = self.speed.current();
        self.state.slider = self.speed.slider();
    }
}
