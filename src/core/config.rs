//! Game configuration.
//!
//! `AreaConfig` fixes everything about a session before the first move:
//! board size, palette, RNG seed and how zero-gain moves are treated.
//! Validation happens once, at construction.

use serde::{Deserialize, Serialize};

use super::color::Palette;
use super::error::ConfigError;

/// How a move that captures no new cell is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZeroGainPolicy {
    /// Any color not held by either territory is legal, growth or not.
    /// The player repaints and the turn passes.
    #[default]
    Allow,
    /// A color is only legal if it captures at least one cell.
    Reject,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaConfig {
    /// Number of rows.
    pub height: usize,

    /// Number of columns.
    pub width: usize,

    /// Colors a cell may take.
    pub palette: Palette,

    /// Seed for the random initial fill.
    /// Same seed and size produce the same board.
    pub seed: u64,

    /// Whether moves that capture nothing are accepted.
    pub zero_gain: ZeroGainPolicy,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            height: 30,
            width: 42,
            palette: Palette::default(),
            seed: 42,
            zero_gain: ZeroGainPolicy::Allow,
        }
    }
}

impl AreaConfig {
    /// Set the board dimensions.
    #[must_use]
    pub fn with_size(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    /// Set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the zero-gain policy.
    #[must_use]
    pub fn with_zero_gain(mut self, policy: ZeroGainPolicy) -> Self {
        self.zero_gain = policy;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn area(&self) -> usize {
        self.height * self.width
    }

    /// Check that a board can be built from this configuration.
    ///
    /// The palette validates itself when it is constructed, so only the
    /// dimensions are checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::ZeroDimension {
                height: self.height,
                width: self.width,
            });
        }
        if self.area() < 2 {
            return Err(ConfigError::BoardTooSmall {
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AreaConfig::default();
        assert_eq!(config.height, 30);
        assert_eq!(config.width, 42);
        assert_eq!(config.palette.len(), 5);
        assert_eq!(config.zero_gain, ZeroGainPolicy::Allow);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = AreaConfig::default()
            .with_size(4, 6)
            .with_seed(7)
            .with_zero_gain(ZeroGainPolicy::Reject);
        assert_eq!(config.area(), 24);
        assert_eq!(config.seed, 7);
        assert_eq!(config.zero_gain, ZeroGainPolicy::Reject);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = AreaConfig::default().with_size(0, 5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDimension { height: 0, width: 5 })
        );
    }

    #[test]
    fn test_single_cell_rejected() {
        let config = AreaConfig::default().with_size(1, 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardTooSmall { height: 1, width: 1 })
        );
    }

    #[test]
    fn test_two_cells_accepted() {
        assert!(AreaConfig::default().with_size(1, 2).validate().is_ok());
        assert!(AreaConfig::default().with_size(2, 1).validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = AreaConfig::default().with_size(8, 8).with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let back: AreaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
