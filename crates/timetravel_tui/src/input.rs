//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use timetravel_tictactoe::{Board, Position};

/// Moves the board cursor one cell in the arrow's direction.
///
/// The cursor stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match key {
        KeyCode::Up => (row.saturating_sub(1), column),
        KeyCode::Down => ((row + 1).min(2), column),
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Right => (row, (column + 1).min(2)),
        _ => (row, column),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}

/// Next empty cell after `cursor` in board order, wrapping around.
///
/// Returns `None` when the board is full.
pub fn next_open_cell(board: &Board, cursor: Position) -> Option<Position> {
    let open = Position::valid_moves(board);
    open.iter()
        .copied()
        .find(|pos| pos.to_index() > cursor.to_index())
        .or_else(|| open.first().copied())
}

/// Maps a digit key `1`-`9` to a board cell index.
pub fn digit_cell(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Some(digit as usize - 1),
        _ => None,
    }
}
