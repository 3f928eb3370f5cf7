use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Direction, EndReason, GamePhase, GameState, Position};
use crate::input::CELL_COLUMNS;
use crate::metrics::GameMetrics;

pub struct Renderer {
    /// Inner screen area of the grid from the last frame, used to map pointer input
    board: Rect,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            board: Rect::default(),
        }
    }

    pub fn board_area(&self) -> Rect {
        self.board
    }

    pub fn render(&mut self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        let (width, height) = board_size(state.grid_count);
        let outer = centered(chunks[1], width, height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        self.board = block.inner(outer);

        let grid = self.render_grid(state, self.board);
        frame.render_widget(grid.block(block), outer);

        if let Some(overlay) = self.render_overlay(state) {
            let popup = centered(outer, 46, 7);
            frame.render_widget(Clear, popup);
            frame.render_widget(overlay, popup);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Only the cells that fit in `visible` are drawn
    fn render_grid(&self, state: &GameState, visible: Rect) -> Paragraph<'_> {
        let rows = state.grid_count.min(u32::from(visible.height));
        let columns = state
            .grid_count
            .min(u32::from(visible.width / CELL_COLUMNS));
        let head_style = if state.is_over() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };

        let mut lines = Vec::with_capacity(rows as usize);

        for y in 0..rows {
            let mut spans = Vec::with_capacity(columns as usize);

            for x in 0..columns {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == state.snake.head() {
                    Span::styled(head_glyph(state.direction), head_style)
                } else if state.is_occupied_by_snake(pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if state.food == Some(pos) {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(state.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(format!("{:.1}", state.speed), value),
            Span::styled(format!(" (slider {:.0})", state.slider), Style::default().fg(Color::Gray)),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_overlay(&self, state: &GameState) -> Option<Paragraph<'_>> {
        let hint = Style::default().fg(Color::Gray);
        let key = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);

        let (title, color, lines) = match state.phase {
            GamePhase::Running => return None,
            GamePhase::Idle => (
                " Ready ",
                Color::Cyan,
                vec![
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Press an arrow key, ", hint),
                        Span::styled("Space", key),
                        Span::styled(" or click to start", hint),
                    ]),
                ],
            ),
            GamePhase::Paused => (
                " Paused ",
                Color::Yellow,
                vec![
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Press ", hint),
                        Span::styled("Space", key),
                        Span::styled(" or ", hint),
                        Span::styled("P", key),
                        Span::styled(" to resume", hint),
                    ]),
                ],
            ),
            GamePhase::Over => {
                let heading = match state.end_reason {
                    Some(EndReason::BoardFull) => "BOARD FULL - YOU WIN",
                    _ => "GAME OVER",
                };
                (
                    " Game over ",
                    Color::Red,
                    vec![
                        Line::from(Span::styled(
                            heading,
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )),
                        Line::from(vec![
                            Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                            Span::styled(
                                state.score.to_string(),
                                Style::default()
                                    .fg(Color::White)
                                    .add_modifier(Modifier::BOLD),
                            ),
                        ]),
                        Line::from(""),
                        Line::from(vec![
                            Span::styled("Press ", hint),
                            Span::styled("Space", key),
                            Span::styled(" to play again or ", hint),
                            Span::styled(
                                "Q",
                                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(" to quit", hint),
                        ]),
                    ],
                )
            }
        };

        Some(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title),
            ),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" start/pause | "),
            Span::styled("R", Style::default().fg(Color::Cyan)),
            Span::raw(" restart | "),
            Span::styled("+/-", Style::default().fg(Color::Cyan)),
            Span::raw(" speed | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn head_glyph(direction: Option<Direction>) -> &'static str {
    match direction {
        Some(Direction::Up) => "▲ ",
        Some(Direction::Down) => "▼ ",
        Some(Direction::Left) => "◀ ",
        Some(Direction::Right) => "▶ ",
        None => "■ ",
    }
}

/// Outer width and height of the bordered board, saturating on huge grids
fn board_size(grid_count: u32) -> (u16, u16) {
    let side = u16::try_from(grid_count).unwrap_or(u16::MAX);
    (
        side.saturating_mul(CELL_COLUMNS).saturating_add(2),
        side.saturating_add(2),
    )
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
