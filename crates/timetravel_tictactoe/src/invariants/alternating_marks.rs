//! Move-sequence invariants: marks alternate and play stops at a win.

use super::super::rules::evaluate;
use super::super::{GameHistory, Player};
use super::Invariant;

/// Invariant: each entry adds exactly one mark, alternating X, O, X, ...
///
/// Entry `k` equals entry `k - 1` with its `last_move` cell, previously
/// empty, filled by X for odd `k` and O for even `k`.
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.history
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| {
                let [prev, next] = pair else {
                    return false;
                };
                match next.last_move() {
                    Some(pos) => {
                        prev.board().is_empty(*pos)
                            && *next.board()
                                == prev.board().with_mark(*pos, Player::for_step(prev_step))
                    }
                    None => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each move fills one empty cell, X and O alternating"
    }
}

/// Invariant: nothing is recorded after a board with a winner.
pub struct NoMovesAfterWinInvariant;

impl Invariant<GameHistory> for NoMovesAfterWinInvariant {
    fn holds(game: &GameHistory) -> bool {
        let last = game.history.len().saturating_sub(1);
        game.history[..last]
            .iter()
            .all(|entry| evaluate(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No moves follow a won board"
    }
}
