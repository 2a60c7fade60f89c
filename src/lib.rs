//! # area
//!
//! Engine for Area, a two-player territory-capture game on a grid of
//! colored cells.
//!
//! Each player starts on one corner cell. On a turn the mover names a
//! palette color; their territory takes that color and absorbs every cell
//! of it that can be reached through orthogonally connected cells. When
//! the board is fully split between the two players (or no color is left
//! to pick) the larger territory wins.
//!
//! ## Design Principles
//!
//! 1. **One command**: presentation layers read the session through
//!    queries and change it only with `AreaGame::command`, which either
//!    applies completely or is rejected with a `MoveError`.
//!
//! 2. **No hidden state**: every session owns its grid, territories and
//!    seeded `GameRng`. Any number of games can run side by side.
//!
//! 3. **Cheap clones**: grid, territories and history use `im` persistent
//!    collections, so search code can branch a session in O(1).
//!
//! ## Modules
//!
//! - `core`: players, colors, coordinates, RNG, configuration, errors
//! - `board`: grid, territory tracking and the flood-fill capture
//! - `rules`: turn state, move legality, results
//! - `game`: the session and its builder
//! - `policy`: automated players and playouts
//!
//! ## Example
//!
//! ```
//! use area::{AreaGameBuilder, PlayerId};
//!
//! let mut game = AreaGameBuilder::new().size(12, 16).seed(3).build().unwrap();
//!
//! let color = game.legal_colors(PlayerId::P0)[0];
//! let outcome = game.command(PlayerId::P0, color).unwrap();
//!
//! assert_eq!(game.color(PlayerId::P0), color);
//! assert_eq!(game.territory_len(PlayerId::P0), 1 + outcome.gained());
//! assert!(game.command(PlayerId::P0, color).is_err());
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    AreaConfig, Color, ConfigError, Coord, GameRng, GameRngState, MoveError, Palette, PlayerId, PlayerMap,
    ZeroGainPolicy,
};

pub use crate::board::{Capture, Grid, Territory, TerritoryTracker};

pub use crate::rules::{GameResult, Position, TurnState};

pub use crate::game::{AreaGame, AreaGameBuilder, MoveOutcome, MoveRecord};

pub use crate::policy::{play_out, GreedyPolicy, MovePolicy, Playout, RandomPolicy};
