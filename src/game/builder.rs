//! Fluent construction of a game.

use crate::core::{AreaConfig, Color, ConfigError, GameRng, Palette, ZeroGainPolicy};

use super::session::AreaGame;

/// Builder for creating an `AreaGame`.
///
/// ```
/// use area::game::AreaGameBuilder;
/// use area::core::PlayerId;
///
/// let game = AreaGameBuilder::new().size(10, 12).seed(7).build().unwrap();
/// assert_eq!(game.current_player(), Some(PlayerId::P0));
/// assert_eq!(game.width(), 12);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AreaGameBuilder {
    config: AreaConfig,
}

impl AreaGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: AreaConfig) -> Self {
        Self { config }
    }

    pub fn size(mut self, height: usize, width: usize) -> Self {
        self.config.height = height;
        self.config.width = width;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn zero_gain(mut self, policy: ZeroGainPolicy) -> Self {
        self.config.zero_gain = policy;
        self
    }

    /// The configuration built so far.
    pub fn config(&self) -> &AreaConfig {
        &self.config
    }

    /// Build a random board from the configured seed.
    pub fn build(self) -> Result<AreaGame, ConfigError> {
        AreaGame::new(self.config)
    }

    /// Build a random board from an injected generator.
    pub fn build_with_rng(self, rng: &mut GameRng) -> Result<AreaGame, ConfigError> {
        AreaGame::with_rng(self.config, rng)
    }

    /// Build on an explicit board; its dimensions override `size`.
    pub fn build_from_rows(self, rows: &[Vec<Color>]) -> Result<AreaGame, ConfigError> {
        AreaGame::from_rows(self.config, rows)
    }
}
