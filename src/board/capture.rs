//! Flood-fill capture.
//!
//! A capture for `(player, color)` absorbs every unowned cell of `color`
//! that can be reached from the player's territory by stepping
//! orthogonally through owned cells or cells of `color`. The search is a
//! plain breadth-first expansion seeded with the whole territory, redone
//! from scratch on every move.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::territory::TerritoryTracker;
use crate::core::{Color, Coord, PlayerId};

/// Result of one applied capture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The capturing player.
    pub player: PlayerId,
    /// The chosen color, now the player's territory color.
    pub color: Color,
    /// Newly absorbed cells in discovery order. Empty for a pure repaint.
    pub absorbed: Vec<Coord>,
}

impl Capture {
    /// Number of cells gained.
    #[must_use]
    pub fn gained(&self) -> usize {
        self.absorbed.len()
    }
}

/// Cells `player` would absorb by choosing `color`, without mutating anything.
///
/// Cells owned by either player are never returned.
#[must_use]
pub fn reachable(grid: &Grid, territories: &TerritoryTracker, player: PlayerId, color: Color) -> Vec<Coord> {
    let territory = territories.territory(player);
    let mut visited: FxHashSet<Coord> = territory.cells().collect();
    let mut frontier: VecDeque<Coord> = territory.cells().collect();
    let mut absorbed = Vec::new();

    while let Some(cell) = frontier.pop_front() {
        for next in grid.neighbors(cell) {
            if visited.contains(&next) || grid.get(next) != color || territories.owner(next).is_some() {
                continue;
            }
            visited.insert(next);
            absorbed.push(next);
            frontier.push_back(next);
        }
    }

    absorbed
}

/// Number of cells a capture would gain.
#[must_use]
pub fn gain(grid: &Grid, territories: &TerritoryTracker, player: PlayerId, color: Color) -> usize {
    reachable(grid, territories, player, color).len()
}

/// Run a capture: grow the territory and repaint every owned cell.
///
/// Legality is the caller's concern; `color` must differ from both
/// territory colors.
pub fn apply(grid: &mut Grid, territories: &mut TerritoryTracker, player: PlayerId, color: Color) -> Capture {
    debug_assert!(
        territories.holder(color).is_none(),
        "{color} is held by a territory"
    );

    let absorbed = reachable(grid, territories, player, color);
    territories.absorb(player, &absorbed, color);
    for cell in territories.territory(player).cells() {
        grid.set(cell, color);
    }

    tracing::trace!(%player, %color, gained = absorbed.len(), "flood fill");

    Capture {
        player,
        color,
        absorbed,
    }
}
