//! Turn state and game results.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Whose move it is, or that nobody can move any more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Player 0 moves next. Every game starts here unless it is over at
    /// once, or player 0 has no gaining color under `ZeroGainPolicy::Reject`.
    AwaitingPlayer0,
    /// Player 1 moves next.
    AwaitingPlayer1,
    /// No further moves are accepted.
    GameOver,
}

impl TurnState {
    /// The state in which `player` is expected to move.
    #[must_use]
    pub const fn awaiting(player: PlayerId) -> Self {
        match player.index() {
            0 => TurnState::AwaitingPlayer0,
            _ => TurnState::AwaitingPlayer1,
        }
    }

    /// The player expected to move, or `None` once the game is over.
    #[must_use]
    pub const fn mover(self) -> Option<PlayerId> {
        match self {
            TurnState::AwaitingPlayer0 => Some(PlayerId::P0),
            TurnState::AwaitingPlayer1 => Some(PlayerId::P1),
            TurnState::GameOver => None,
        }
    }

    /// The state after `self`'s mover has played and the game goes on.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            TurnState::AwaitingPlayer0 => TurnState::AwaitingPlayer1,
            TurnState::AwaitingPlayer1 => TurnState::AwaitingPlayer0,
            TurnState::GameOver => TurnState::GameOver,
        }
    }

    /// Check whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, TurnState::GameOver)
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player finished with strictly more cells.
    Winner(PlayerId),
    /// Both territories are the same size.
    Draw,
}

impl GameResult {
    /// Decide the result from final territory sizes.
    #[must_use]
    pub fn from_sizes(p0: usize, p1: usize) -> Self {
        match p0.cmp(&p1) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::P0),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::P1),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}
