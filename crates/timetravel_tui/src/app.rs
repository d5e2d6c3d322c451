//! Application state and key handling.

use crate::input::{digit_cell, move_cursor, next_open_cell};
use crossterm::event::KeyCode;
use timetravel_tictactoe::{GameHistory, Position};
use tracing::{debug, instrument};

/// Main application state.
///
/// Owns the game exclusively; every key press is translated into at most
/// one call on [`GameHistory`].
#[derive(Debug, Clone)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(reversed: bool) -> Self {
        let mut game = GameHistory::new();
        if reversed {
            game.toggle_display_order();
        }
        Self {
            game,
            cursor: Position::Center,
            selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Board cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Row of the move list under the selection, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Transient message from the last rejected action.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// History step of the selected move-list row.
    pub fn selected_step(&self) -> Option<usize> {
        self.game
            .visible_moves()
            .nth(self.selected)
            .map(|(step, _)| step)
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.message = None;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Tab => {
                if let Some(pos) = next_open_cell(self.game.current().board(), self.cursor) {
                    self.cursor = pos;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) if digit_cell(c).is_some() => {
                if let Some(cell) = digit_cell(c) {
                    self.play(cell);
                }
            }
            KeyCode::Char('j') => {
                let last = self.game.history().len() - 1;
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('g') => self.jump_to_selected(),
            KeyCode::Char('s') => {
                self.game.toggle_display_order();
                self.select_current();
            }
            KeyCode::Char('r') => {
                debug!("Restarting game");
                *self = Self::new(self.game.display_reversed());
            }
            _ => {}
        }
    }

    fn play(&mut self, cell: usize) {
        match self.game.apply_move(cell) {
            Ok(()) => self.select_current(),
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(step) = self.selected_step() else {
            return;
        };
        if let Err(e) = self.game.jump_to(step) {
            self.message = Some(e.to_string());
        }
    }

    /// Moves the selection onto the viewed step.
    fn select_current(&mut self) {
        let current = self.game.current_step();
        if let Some(row) = self
            .game
            .visible_moves()
            .position(|(step, _)| step == current)
        {
            self.selected = row;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Enter);
        assert!(!app.game().current().board().is_empty(Position::Center));
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_rejected_move_sets_message() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.message(), Some("Square Center is already occupied"));
        assert_eq!(app.game().history().len(), 2);

        app.handle_key(KeyCode::Left);
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_tab_moves_cursor_to_open_cell() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('6'));
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.cursor(), Position::BottomLeft);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.cursor(), Position::BottomCenter);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
