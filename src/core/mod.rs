//! Core types: players, colors, coordinates, RNG, configuration, errors.
//!
//! Everything here is plain data. Board logic lives in `board`, turn rules
//! in `rules`, and the session that ties them together in `game`.

pub mod player;
pub mod color;
pub mod coord;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use color::{Color, Palette, MAX_PALETTE};
pub use coord::Coord;
pub use rng::{GameRng, GameRngState};
pub use config::{AreaConfig, ZeroGainPolicy};
pub use error::{ConfigError, MoveError};
