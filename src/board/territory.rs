//! Per-player territory tracking.
//!
//! Each player owns a set of coordinates, all painted the player's current
//! color. Territories never overlap and only ever grow. Scores are derived
//! from the set sizes on demand and never stored.

use im::HashSet as ImHashSet;

use crate::core::{Color, Coord, PlayerId, PlayerMap};

/// Cells owned by one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Territory {
    cells: ImHashSet<Coord>,
    color: Color,
}

impl Territory {
    /// A one-cell territory.
    #[must_use]
    pub fn seed(coord: Coord, color: Color) -> Self {
        Self {
            cells: ImHashSet::unit(coord),
            color,
        }
    }

    /// The color covering every owned cell.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of owned cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Territories start with one cell and never shrink.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether a cell is owned.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Owned cells, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}

/// Both players' territories over a board of fixed area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerritoryTracker {
    territories: PlayerMap<Territory>,
    area: usize,
}

impl TerritoryTracker {
    /// Track two seed territories on a board of `area` cells.
    ///
    /// # Panics
    /// If the seeds overlap.
    #[must_use]
    pub fn new(area: usize, seeds: PlayerMap<Territory>) -> Self {
        let overlap = seeds[PlayerId::P0]
            .cells()
            .any(|c| seeds[PlayerId::P1].contains(c));
        assert!(!overlap, "starting territories must be disjoint");

        Self {
            territories: seeds,
            area,
        }
    }

    /// A player's territory.
    #[must_use]
    pub fn territory(&self, player: PlayerId) -> &Territory {
        &self.territories[player]
    }

    /// A player's current color.
    #[must_use]
    pub fn color(&self, player: PlayerId) -> Color {
        self.territories[player].color
    }

    /// Number of cells a player owns.
    #[must_use]
    pub fn len(&self, player: PlayerId) -> usize {
        self.territories[player].len()
    }

    /// Fraction of the board a player owns, in `[0, 1]`.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> f64 {
        self.len(player) as f64 / self.area as f64
    }

    /// Which player owns a cell, if any.
    #[must_use]
    pub fn owner(&self, coord: Coord) -> Option<PlayerId> {
        PlayerId::both().find(|&p| self.territories[p].contains(coord))
    }

    /// Player holding `color` as their territory color, if any.
    /// Player 0 is reported first when both share it.
    #[must_use]
    pub fn holder(&self, color: Color) -> Option<PlayerId> {
        PlayerId::both().find(|&p| self.territories[p].color == color)
    }

    /// Cells owned by either player.
    #[must_use]
    pub fn claimed(&self) -> usize {
        self.len(PlayerId::P0) + self.len(PlayerId::P1)
    }

    /// Every cell belongs to one of the two players.
    #[must_use]
    pub fn is_partitioned(&self) -> bool {
        self.claimed() == self.area
    }

    /// Add freshly captured cells to `player` and switch their color.
    ///
    /// The caller guarantees `cells` are currently unowned.
    pub(crate) fn absorb(&mut self, player: PlayerId, cells: &[Coord], color: Color) {
        debug_assert!(
            cells.iter().all(|&c| self.owner(c).is_none()),
            "absorbed cells must be unowned"
        );

        let territory = &mut self.territories[player];
        territory.cells.extend(cells.iter().copied());
        territory.color = color;
    }
}
