//! Terminal front-end for time-travel tic-tac-toe.
//!
//! Renders the board, status line, and move list of a
//! [`GameHistory`](timetravel_tictactoe::GameHistory) and maps key presses
//! onto its operations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{digit_cell, move_cursor, next_open_cell};
pub use terminal::{TerminalGuard, enter_terminal};
pub use ui::draw;
