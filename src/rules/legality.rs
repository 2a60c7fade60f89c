//! Move legality and the terminal condition.
//!
//! A color is legal when it is in the palette and neither territory
//! currently wears it. Under `ZeroGainPolicy::Reject` it must also capture
//! at least one cell. These checks never depend on whose turn it is; the
//! turn order is checked separately by `check_move`.

use crate::board::{capture, Grid, TerritoryTracker};
use crate::core::{Color, MoveError, Palette, PlayerId, ZeroGainPolicy};

use super::turn::TurnState;

/// Read-only view of everything legality depends on.
#[derive(Clone, Copy, Debug)]
pub struct Position<'a> {
    /// Colors a move may name.
    pub palette: &'a Palette,
    /// Current cell colors.
    pub grid: &'a Grid,
    /// Both territories.
    pub territories: &'a TerritoryTracker,
    /// Whether a repaint without growth counts as a move.
    pub zero_gain: ZeroGainPolicy,
}

impl Position<'_> {
    /// Colors `player` could pick if it were their turn.
    #[must_use]
    pub fn legal_colors(&self, player: PlayerId) -> Vec<Color> {
        self.palette
            .colors()
            .filter(|&color| self.check_color(player, color).is_ok())
            .collect()
    }

    /// Check a color for `player`, ignoring turn order.
    pub fn check_color(&self, player: PlayerId, color: Color) -> Result<(), MoveError> {
        if !self.palette.contains(color) {
            return Err(MoveError::ColorOutOfRange {
                color,
                palette_len: self.palette.len(),
            });
        }
        if let Some(holder) = self.territories.holder(color) {
            return Err(MoveError::ColorHeld { color, holder });
        }
        if self.zero_gain == ZeroGainPolicy::Reject
            && capture::gain(self.grid, self.territories, player, color) == 0
        {
            return Err(MoveError::NoGain { color });
        }
        Ok(())
    }

    /// Full command validation: game state, turn order, then color.
    pub fn check_move(&self, turn: TurnState, player: PlayerId, color: Color) -> Result<(), MoveError> {
        let expected = turn.mover().ok_or(MoveError::GameOver)?;
        if player != expected {
            return Err(MoveError::NotYourTurn { player, expected });
        }
        self.check_color(player, color)
    }

    /// The board is fully partitioned, or no color is legal for anyone.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.territories.is_partitioned()
            || PlayerId::both().all(|player| self.legal_colors(player).is_empty())
    }
}
