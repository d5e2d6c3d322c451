//! Structural invariants: root entry, step bounds, turn parity.

use super::super::{GameHistory, HistoryEntry, Player};
use super::Invariant;

/// Invariant: history starts with the empty board and no move.
pub struct RootIsEmptyInvariant;

impl Invariant<GameHistory> for RootIsEmptyInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.history.first() == Some(&HistoryEntry::start())
    }

    fn description() -> &'static str {
        "History begins with the empty board"
    }
}

/// Invariant: the viewed step is a recorded step.
pub struct StepInBoundsInvariant;

impl Invariant<GameHistory> for StepInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.current_step < game.history.len()
    }

    fn description() -> &'static str {
        "Current step indexes into history"
    }
}

/// Invariant: X moves on even steps, O on odd steps.
pub struct TurnMatchesStepInvariant;

impl Invariant<GameHistory> for TurnMatchesStepInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.next_mark == Player::for_step(game.current_step)
    }

    fn description() -> &'static str {
        "Next mark follows current step parity"
    }
}
