//! Error types for construction and commands.
//!
//! `ConfigError` means no session was built. `MoveError` is the recoverable
//! rejection of a single command; the session is left untouched.

use thiserror::Error;

use super::color::Color;
use super::player::PlayerId;

/// Reasons a game cannot be constructed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {height}x{width}")]
    ZeroDimension { height: usize, width: usize },

    #[error("a {height}x{width} board cannot hold two separate starting cells")]
    BoardTooSmall { height: usize, width: usize },

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("palette lists color {0:?} more than once")]
    DuplicateColor(String),

    #[error("palette has {0} colors, more than a color index can address")]
    PaletteTooLarge(usize),

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },

    #[error("cell ({row}, {col}) holds {color}, outside a palette of {palette_len}")]
    CellColorOutOfRange {
        row: usize,
        col: usize,
        color: Color,
        palette_len: usize,
    },

    #[error("both players would start on {color}")]
    SameStartColor { color: Color },
}

/// Reasons a command is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("{player} cannot move, it is {expected}'s turn")]
    NotYourTurn { player: PlayerId, expected: PlayerId },

    #[error("{color} is outside a palette of {palette_len}")]
    ColorOutOfRange { color: Color, palette_len: usize },

    #[error("{color} is currently held by {holder}")]
    ColorHeld { color: Color, holder: PlayerId },

    #[error("{color} would not capture any cell")]
    NoGain { color: Color },
}
