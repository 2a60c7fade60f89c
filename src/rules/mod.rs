//! Turn order, move legality and game results.
//!
//! `rules` reads the board but never changes it. The session in `game`
//! asks `Position::check_move` before every capture and
//! `Position::is_terminal` after it.

pub mod turn;
pub mod legality;

pub use turn::{GameResult, TurnState};
pub use legality::Position;
