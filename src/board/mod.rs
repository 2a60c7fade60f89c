//! Board state: the color grid, both territories and the capture algorithm.
//!
//! Nothing here knows about turns. `board` answers "what is where" and
//! "what would this capture absorb"; `rules` decides whether a move is
//! allowed.

pub mod grid;
pub mod territory;
pub mod capture;

pub use grid::{Grid, Neighbors};
pub use territory::{Territory, TerritoryTracker};
pub use capture::Capture;
