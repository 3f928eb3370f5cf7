use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Command, GameEngine, GamePhase};
use crate::input::{InputAction, InputHandler};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::timing::Ticker;

/// Interactive play in the terminal
pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        let input_handler = InputHandler::new(engine.config());

        Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "Session ended after {} games, best score {}",
            self.metrics.games_played, self.metrics.best_score
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Only runs while the game does; the period follows the engine's speed
        let mut ticker = Ticker::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = ticker.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update(self.engine.phase() == GamePhase::Running);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            if ticker.sync(self.engine.scheduled_period()) {
                debug!("Tick period now {:?}", ticker.period());
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let action = match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key_event(key)
            }
            Event::Mouse(mouse) => self
                .input_handler
                .handle_mouse_event(mouse, self.renderer.board_area()),
            _ => InputAction::Ignored,
        };

        if action == InputAction::Quit {
            self.should_quit = true;
            return;
        }

        if let Some(command) = action.command_for(self.engine.phase()) {
            self.apply_command(command);
        }
    }

    fn apply_command(&mut self, command: Command) {
        let before = self.engine.phase();
        self.engine.apply(command);

        let started = matches!(before, GamePhase::Idle | GamePhase::Over)
            && self.engine.phase() == GamePhase::Running;
        if started {
            self.metrics.on_game_start();
        }
    }

    fn update_game(&mut self) {
        let outcome = self.engine.tick();

        // Track game over
        if outcome.end_reason.is_some() {
            self.metrics.on_game_over(self.engine.state().score);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
