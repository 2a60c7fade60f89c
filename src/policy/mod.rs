//! Automated players.
//!
//! Policies are trait-based so any chooser can sit in either seat:
//! - `RandomPolicy`: uniform over the legal colors
//! - `GreedyPolicy`: the color that captures the most cells right now
//!
//! `play_out` alternates two policies until the game ends.

mod playout;

pub use playout::{play_out, Playout};

use crate::core::{Color, GameRng, PlayerId};
use crate::game::AreaGame;

/// Picks a color for `player` on their turn.
pub trait MovePolicy {
    /// Choose a legal color, or `None` if there is nothing to choose.
    fn choose(&mut self, game: &AreaGame, player: PlayerId) -> Option<Color>;
}

/// Uniformly random legal color.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// A random policy seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// A random policy drawing from `rng`.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, game: &AreaGame, player: PlayerId) -> Option<Color> {
        let legal = game.legal_colors(player);
        self.rng.choose(&legal).copied()
    }
}

/// Legal color with the largest immediate capture, lowest index on ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl MovePolicy for GreedyPolicy {
    fn choose(&mut self, game: &AreaGame, player: PlayerId) -> Option<Color> {
        game.legal_colors(player)
            .into_iter()
            .map(|color| (color, game.capture_gain(player, color)))
            .max_by(|(ca, ga), (cb, gb)| ga.cmp(gb).then(cb.cmp(ca)))
            .map(|(color, _)| color)
    }
}
