//! Application state and input handling.

use super::input::{digit_position, move_cursor};
use crate::animation_config::AnimationConfig;
use crate::games::tictactoe::{Game, GameEvent, GameView, Position};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Main application state.
pub struct App {
    game: Game,
    events: Receiver<GameEvent>,
    animation: AnimationConfig,
    cursor: Position,
    started: Instant,
    last_move: Option<(Position, Instant)>,
    cell_areas: [Rect; 9],
    play_again_area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(animation: AnimationConfig) -> Self {
        let mut game = Game::new();
        let events = game.subscribe();
        Self {
            game,
            events,
            animation,
            cursor: Position::Center,
            started: Instant::now(),
            last_move: None,
            cell_areas: [Rect::default(); 9],
            play_again_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Derived game state for rendering.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Animation settings.
    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Time since the entrance animation started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Whether `pos` holds the most recent mark and is still highlighted.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.last_move
            .is_some_and(|(last, at)| last == pos && self.animation.is_highlighted(at.elapsed()))
    }

    /// True while something on screen is still moving.
    pub fn is_animating(&self) -> bool {
        self.elapsed() < self.animation.total_duration()
            || self.last_move.is_some_and(|(_, at)| self.animation.is_highlighted(at.elapsed()))
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where a cell was drawn, for mouse hit testing.
    pub fn set_cell_area(&mut self, pos: Position, area: Rect) {
        self.cell_areas[pos.to_index()] = area;
    }

    /// Where the cell at `pos` was last drawn; empty while hidden.
    pub fn cell_area(&self, pos: Position) -> Rect {
        self.cell_areas[pos.to_index()]
    }

    /// Where the play-again button was last drawn; empty while hidden.
    pub fn play_again_area(&self) -> Rect {
        self.play_again_area
    }

    /// Records where the play-again button was drawn.
    pub fn set_play_again_area(&mut self, area: Rect) {
        self.play_again_area = area;
    }

    /// Applies pending game events to presentation state.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "Handling game event");
            match event {
                GameEvent::MovePlayed { position, .. } => {
                    self.last_move = Some((position, Instant::now()));
                }
                GameEvent::GameOver { winner } => {
                    info!(?winner, "Game over");
                }
                GameEvent::Reset => {
                    self.last_move = None;
                    self.cursor = Position::Center;
                }
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.play_again(),
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.click(pos);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    /// Handles a mouse event; only left-button presses matter.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let point = ratatui::layout::Position::new(mouse.column, mouse.row);
        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| self.cell_areas[pos.to_index()].contains(point))
        {
            self.cursor = pos;
            self.click(pos);
        } else if self.play_again_area.contains(point) {
            self.play_again();
        }
    }

    fn click(&mut self, pos: Position) {
        if let Err(e) = self.game.click(pos) {
            debug!(error = %e, "Click ignored");
        }
        self.drain_events();
    }

    fn play_again(&mut self) {
        if let Err(e) = self.game.play_again() {
            debug!(error = %e, "Play again ignored");
        }
        self.drain_events();
    }
}
