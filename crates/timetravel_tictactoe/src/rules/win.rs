//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
///
/// Rows top-to-bottom, columns left-to-right, then the main and anti
/// diagonals. Cells within a line are in ascending board order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line of three matching marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// The winning mark.
    pub mark: Player,
    /// The three cells of the line, in ascending board order.
    pub line: [Position; 3],
}

impl WinResult {
    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }

    /// The winning line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Evaluates a board for a winner.
///
/// Returns the first complete line in [`LINES`] order, or `None` when no
/// line is complete. `None` covers both an ongoing game and a draw; use
/// [`is_full`](super::is_full) to tell them apart.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(WinResult { mark, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(index, player) in cells {
            let pos = Position::from_index(index).expect("test index in range");
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        let result = evaluate(&board).expect("top row wins");
        assert_eq!(result.mark, Player::X);
        assert_eq!(result.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_column() {
        let board = board_from(&[(1, Player::O), (4, Player::O), (7, Player::O)]);
        let result = evaluate(&board).expect("middle column wins");
        assert_eq!(result.mark, Player::O);
        assert_eq!(result.indices(), [1, 4, 7]);
    }

    #[test]
    fn test_winner_anti_diagonal_reported_in_table_order() {
        let board = board_from(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        let result = evaluate(&board).expect("anti diagonal wins");
        assert_eq!(result.line, [Position::TopRight, Position::Center, Position::BottomLeft]);
        assert!(result.contains(Position::Center));
        assert!(!result.contains(Position::TopLeft));
    }

    #[test]
    fn test_first_line_wins_on_malformed_board() {
        // Row 0 and column 0 both complete: rows are checked first.
        let board = board_from(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(evaluate(&board).map(|r| r.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = board_from(&[(0, Player::O), (4, Player::O), (8, Player::O)]);
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
