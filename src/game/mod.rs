//! The game session: construction, the move command and every query a
//! presentation layer needs.
//!
//! Independent sessions share nothing; reset a game by building a new one.

mod builder;
mod history;
mod session;

pub use builder::AreaGameBuilder;
pub use history::{MoveOutcome, MoveRecord};
pub use session::{start_cell, start_color, AreaGame};
