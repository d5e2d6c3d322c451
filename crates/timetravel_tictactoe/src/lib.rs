//! Time-travel tic-tac-toe.
//!
//! The game-state core of a tic-tac-toe board with a navigable move
//! history: every move appends a board snapshot, any earlier snapshot can be
//! revisited, and a move made from an earlier snapshot discards the
//! snapshots that followed it.
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameHistory, Player, Position};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.apply_move(cell)?;
//! }
//! let win = game.winner().expect("top row complete");
//! assert_eq!(win.mark, Player::X);
//! assert_eq!(win.line, [Position::TopLeft, Position::TopCenter, Position::TopRight]);
//!
//! game.jump_to(2)?;
//! assert_eq!(game.next_mark(), Player::X);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod display;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use display::{move_description, status_line};
pub use error::{HistoryError, MoveError};
pub use history::{GameHistory, HistoryEntry, VisibleMoves};
pub use position::Position;
pub use rules::{WinResult, evaluate, is_draw, is_full};
pub use types::{Board, GameStatus, Player, Square};
