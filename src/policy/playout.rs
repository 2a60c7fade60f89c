//! Running a game between two policies.

use crate::core::PlayerId;
use crate::game::AreaGame;
use crate::rules::GameResult;

use super::MovePolicy;

/// Summary of a playout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playout {
    /// Moves made during this playout.
    pub moves: usize,
    /// Final result, or `None` if `max_moves` ran out first.
    pub result: Option<GameResult>,
}

/// Alternate `p0` and `p1` on `game` until it ends or `max_moves` moves
/// have been made.
///
/// A policy that picks an illegal color, or none at all, ends the playout
/// early with the game still running.
pub fn play_out(
    game: &mut AreaGame,
    p0: &mut dyn MovePolicy,
    p1: &mut dyn MovePolicy,
    max_moves: usize,
) -> Playout {
    let mut moves = 0;

    while moves < max_moves {
        let Some(player) = game.current_player() else {
            break;
        };

        let choice = if player == PlayerId::P0 {
            p0.choose(game, player)
        } else {
            p1.choose(game, player)
        };
        let Some(color) = choice else {
            break;
        };

        if let Err(err) = game.command(player, color) {
            tracing::warn!(%player, %color, %err, "policy chose an illegal move");
            break;
        }
        moves += 1;
    }

    Playout {
        moves,
        result: game.winner(),
    }
}
