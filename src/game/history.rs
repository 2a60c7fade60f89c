//! Move history and command outcomes.

use serde::{Deserialize, Serialize};

use crate::board::Capture;
use crate::core::{Color, PlayerId};
use crate::rules::TurnState;

/// One accepted command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based position in the game's move sequence.
    pub number: usize,
    /// The player who moved.
    pub player: PlayerId,
    /// The color they chose.
    pub color: Color,
    /// Cells absorbed by the move (zero for a pure repaint).
    pub gained: usize,
}

/// What an accepted command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The capture that was applied.
    pub capture: Capture,
    /// Turn state after the move.
    pub turn: TurnState,
}

impl MoveOutcome {
    /// Cells absorbed by the move.
    #[must_use]
    pub fn gained(&self) -> usize {
        self.capture.gained()
    }

    /// The move ended the game.
    #[must_use]
    pub fn ended(&self) -> bool {
        self.turn.is_over()
    }
}
