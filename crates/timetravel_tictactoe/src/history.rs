//! Move history with time travel.
//!
//! [`GameHistory`] owns every board snapshot reached so far, the step being
//! viewed, whose turn it is, and the order the move list is displayed in.
//! Jumping to an earlier step keeps the later snapshots around until a new
//! move is made from the earlier position, at which point they are dropped.

use super::error::{HistoryError, MoveError};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{self, WinResult};
use super::{Board, GameStatus, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One recorded snapshot in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Cell filled to reach this board; `None` for the starting board.
    last_move: Option<Position>,
}

impl HistoryEntry {
    /// The starting entry: empty board, no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    pub(crate) fn new(board: Board, last_move: Position) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// Row of the last move, `None` for the starting entry.
    pub fn row(&self) -> Option<usize> {
        self.last_move.map(Position::row)
    }

    /// Column of the last move, `None` for the starting entry.
    pub fn column(&self) -> Option<usize> {
        self.last_move.map(Position::column)
    }
}

/// Tic-tac-toe game state with navigable history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
    pub(crate) next_mark: Player,
    pub(crate) display_reversed: bool,
}

impl GameHistory {
    /// Creates a new game: one empty snapshot, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
            next_mark: Player::X,
            display_reversed: false,
        }
    }

    /// Plays each cell in order, stopping at the first rejected move.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &cell in cells {
            game.apply_move(cell)?;
        }
        Ok(game)
    }

    /// Places the next mark at `cell` (0-8) on the viewed board.
    ///
    /// Any snapshots after the viewed step are discarded before the new one
    /// is appended.
    ///
    /// # Errors
    ///
    /// Rejected moves leave the game untouched:
    /// - [`MoveError::OutOfBounds`] if `cell` is not 0-8
    /// - [`MoveError::GameOver`] if the viewed board already has a winner
    /// - [`MoveError::SquareOccupied`] if the cell is taken
    #[instrument(skip(self), fields(step = self.current_step, mark = %self.next_mark))]
    pub fn apply_move(&mut self, cell: usize) -> Result<(), MoveError> {
        let Some(pos) = Position::from_index(cell) else {
            debug!("Rejected move: out of bounds");
            return Err(MoveError::OutOfBounds(cell));
        };

        let current = *self.current();
        if rules::evaluate(current.board()).is_some() {
            debug!("Rejected move: game already decided");
            return Err(MoveError::GameOver);
        }
        if !current.board().is_empty(pos) {
            debug!(position = %pos, "Rejected move: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history
            .push(HistoryEntry::new(current.board().with_mark(pos, self.next_mark), pos));
        self.current_step = self.history.len() - 1;
        self.next_mark = self.next_mark.opponent();

        info!(
            position = %pos,
            new_step = self.current_step,
            discarded,
            "Move applied"
        );
        self.debug_check_invariants();
        Ok(())
    }

    /// Views the snapshot at `step` without altering history.
    ///
    /// The player to move is derived from the step's parity.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `step` is not a recorded step.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.history.len() {
            debug!("Rejected jump: step out of range");
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.current_step = step;
        self.next_mark = Player::for_step(step);
        info!(next_mark = %self.next_mark, "Jumped to step");
        self.debug_check_invariants();
        Ok(())
    }

    /// Flips the order in which [`visible_moves`](Self::visible_moves) lists entries.
    #[instrument(skip(self))]
    pub fn toggle_display_order(&mut self) {
        self.display_reversed = !self.display_reversed;
        debug!(reversed = self.display_reversed, "Display order toggled");
    }

    /// Lists `(step, entry)` pairs in display order.
    ///
    /// The step label is always the entry's index in history, also when
    /// the listing is reversed.
    pub fn visible_moves(&self) -> VisibleMoves<'_> {
        VisibleMoves {
            inner: self.history.iter().enumerate(),
            reversed: self.display_reversed,
        }
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The viewed snapshot.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// Index of the viewed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Player to move from the viewed snapshot.
    pub fn next_mark(&self) -> Player {
        self.next_mark
    }

    /// Whether the move list is shown newest first.
    pub fn display_reversed(&self) -> bool {
        self.display_reversed
    }

    /// Winner of the viewed board.
    pub fn winner(&self) -> Option<WinResult> {
        rules::evaluate(self.current().board())
    }

    /// Status of the viewed board.
    pub fn status(&self) -> GameStatus {
        let board = self.current().board();
        match rules::evaluate(board) {
            Some(result) => GameStatus::Won(result),
            None if rules::is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress {
                next: self.next_mark,
            },
        }
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated: {:?}",
            HistoryInvariants::check_all(self)
        );
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over history entries in display order.
///
/// Created by [`GameHistory::visible_moves`].
#[derive(Debug, Clone)]
pub struct VisibleMoves<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, HistoryEntry>>,
    reversed: bool,
}

impl<'a> Iterator for VisibleMoves<'a> {
    type Item = (usize, &'a HistoryEntry);

    fn next(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next_back()
        } else {
            self.inner.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for VisibleMoves<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next()
        } else {
            self.inner.next_back()
        }
    }
}

impl ExactSizeIterator for VisibleMoves<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(game: &GameHistory) -> Vec<usize> {
        game.visible_moves().map(|(step, _)| step).collect()
    }

    #[test]
    fn test_new_game() {
        let game = GameHistory::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.next_mark(), Player::X);
        assert_eq!(game.current().row(), None);
        assert_eq!(game.current().column(), None);
        assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_apply_move_records_row_and_column() {
        let mut game = GameHistory::new();
        game.apply_move(5).expect("legal move");
        let entry = game.current();
        assert_eq!(entry.last_move(), &Some(Position::MiddleRight));
        assert_eq!((entry.row(), entry.column()), (Some(1), Some(2)));
        assert_eq!(game.next_mark(), Player::O);
        assert_eq!(game.current_step(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = GameHistory::new();
        let before = game.clone();
        assert_eq!(game.apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_occupied_rejected_without_state_change() {
        let mut game = GameHistory::replay(&[4]).expect("legal moves");
        let before = game.clone();
        assert_eq!(
            game.apply_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_truncation_on_branch() {
        let mut game = GameHistory::replay(&[0, 4, 1, 5]).expect("legal moves");
        assert_eq!(game.history().len(), 5);
        game.jump_to(2).expect("valid step");
        game.apply_move(8).expect("legal move");
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_step(), 3);
        assert_eq!(game.current().last_move(), &Some(Position::BottomRight));
        assert_eq!(game.next_mark(), Player::O);
    }

    #[test]
    fn test_rejected_branch_keeps_future() {
        let mut game = GameHistory::replay(&[0, 4, 1, 5]).expect("legal moves");
        game.jump_to(2).expect("valid step");
        assert!(game.apply_move(0).is_err());
        assert_eq!(game.history().len(), 5);
        assert_eq!(game.current_step(), 2);
    }

    #[test]
    fn test_jump_preserves_history() {
        let mut game = GameHistory::replay(&[0, 4, 1]).expect("legal moves");
        game.jump_to(1).expect("valid step");
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_step(), 1);
        assert_eq!(game.next_mark(), Player::O);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = GameHistory::replay(&[0]).expect("legal moves");
        let before = game.clone();
        assert_eq!(
            game.jump_to(2),
            Err(HistoryError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_visible_moves_reversed_keeps_true_steps() {
        let mut game = GameHistory::replay(&[0, 4, 1]).expect("legal moves");
        assert_eq!(steps(&game), vec![0, 1, 2, 3]);
        game.toggle_display_order();
        assert_eq!(steps(&game), vec![3, 2, 1, 0]);
        assert_eq!(game.visible_moves().len(), 4);
        let (first_step, first_entry) = game.visible_moves().next().expect("non-empty");
        assert_eq!(first_step, 3);
        assert_eq!(first_entry, game.current());
    }

    #[test]
    fn test_toggle_twice_restores_order() {
        let mut game = GameHistory::replay(&[2, 6]).expect("legal moves");
        let original: Vec<_> = game.visible_moves().map(|(s, e)| (s, *e)).collect();
        game.toggle_display_order();
        game.toggle_display_order();
        let again: Vec<_> = game.visible_moves().map(|(s, e)| (s, *e)).collect();
        assert_eq!(original, again);
        assert!(!game.display_reversed());
    }

    #[test]
    fn test_visible_moves_double_ended() {
        let mut game = GameHistory::replay(&[0, 1]).expect("legal moves");
        game.toggle_display_order();
        let back: Vec<_> = game.visible_moves().rev().map(|(s, _)| s).collect();
        assert_eq!(back, vec![0, 1, 2]);
    }

    #[test]
    fn test_status_draw() {
        // X O X / X O O / O X X
        let game = GameHistory::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("legal moves");
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.status().is_over());
    }
}
