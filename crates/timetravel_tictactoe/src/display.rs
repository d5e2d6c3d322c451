//! Text shown by front-ends: status line and move-list labels.

use super::{GameStatus, HistoryEntry};

/// Status line for the viewed board.
///
/// `"Next player: X"`, `"Winner: O"`, or `"Draw"`.
pub fn status_line(status: &GameStatus) -> String {
    match status {
        GameStatus::InProgress { next } => format!("Next player: {}", next),
        GameStatus::Won(result) => format!("Winner: {}", result.mark),
        GameStatus::Draw => "Draw".to_string(),
    }
}

/// Label for a move-list entry.
///
/// Step 0 is the game start; later steps show the zero-based row and
/// column of the cell played.
pub fn move_description(step: usize, entry: &HistoryEntry) -> String {
    match (step, entry.row(), entry.column()) {
        (0, _, _) | (_, None, _) | (_, _, None) => "Go to game start".to_string(),
        (step, Some(row), Some(column)) => format!("Go to move #{} ({},{})", step, row, column),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameHistory, Player};

    #[test]
    fn test_status_lines() {
        let game = GameHistory::new();
        assert_eq!(status_line(&game.status()), "Next player: X");

        let game = GameHistory::replay(&[0, 4, 1, 5, 2]).expect("legal moves");
        assert_eq!(status_line(&game.status()), "Winner: X");

        let game = GameHistory::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("legal moves");
        assert_eq!(status_line(&game.status()), "Draw");

        let status = GameStatus::InProgress { next: Player::O };
        assert_eq!(status_line(&status), "Next player: O");
    }

    #[test]
    fn test_move_descriptions() {
        let game = GameHistory::replay(&[0, 7]).expect("legal moves");
        let labels: Vec<_> = game
            .visible_moves()
            .map(|(step, entry)| move_description(step, entry))
            .collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1 (0,0)", "Go to move #2 (2,1)"]
        );
    }
}
