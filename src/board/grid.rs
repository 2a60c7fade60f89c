//! The colored cell grid.
//!
//! Cells are stored row-major in a persistent `im::Vector`, so cloning a
//! grid (and therefore a whole session) is O(1).
//!
//! Coordinates are only ever built by the engine itself, so an
//! out-of-range coordinate is a bug and panics rather than returning an
//! error.

use im::Vector;
use smallvec::SmallVec;

use crate::core::{Color, ConfigError, Coord, GameRng, Palette};

/// Orthogonal neighbors of a cell. Never more than four.
pub type Neighbors = SmallVec<[Coord; 4]>;

/// Fixed-size 2D array of palette colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vector<Color>,
}

impl Grid {
    /// Fill a `height × width` grid with colors drawn uniformly from the
    /// palette, then paint each `(coord, color)` seed over the result.
    ///
    /// Dimensions must already be validated (non-zero).
    pub fn random(
        height: usize,
        width: usize,
        palette: &Palette,
        rng: &mut GameRng,
        seeds: &[(Coord, Color)],
    ) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be positive");

        // Palette length is bounded by MAX_PALETTE, so the index fits a u8
        let cells = (0..height * width)
            .map(|_| Color(rng.gen_range_usize(0..palette.len()) as u8))
            .collect();

        let mut grid = Self { height, width, cells };
        for &(coord, color) in seeds {
            grid.set(coord, color);
        }
        grid
    }

    /// Build a grid from explicit rows.
    ///
    /// Every row must have the same length and every color must be in the
    /// palette.
    pub fn from_rows(rows: &[Vec<Color>], palette: &Palette) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(ConfigError::ZeroDimension { height, width });
        }

        let mut cells = Vector::new();
        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != width {
                return Err(ConfigError::RaggedRows {
                    row,
                    len: cols.len(),
                    expected: width,
                });
            }
            for (col, &color) in cols.iter().enumerate() {
                if !palette.contains(color) {
                    return Err(ConfigError::CellColorOutOfRange {
                        row,
                        col,
                        color,
                        palette_len: palette.len(),
                    });
                }
                cells.push_back(color);
            }
        }

        Ok(Self { height, width, cells })
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[must_use]
    pub fn area(&self) -> usize {
        self.height * self.width
    }

    /// Check whether a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Color at `coord`.
    ///
    /// # Panics
    /// If `coord` is off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Color {
        self.cells[self.offset(coord)]
    }

    /// Repaint the cell at `coord`.
    ///
    /// # Panics
    /// If `coord` is off the board.
    pub fn set(&mut self, coord: Coord, color: Color) {
        let offset = self.offset(coord);
        self.cells[offset] = color;
    }

    /// In-bounds orthogonal neighbors in up, down, left, right order.
    ///
    /// # Panics
    /// If `coord` is off the board.
    #[must_use]
    pub fn neighbors(&self, coord: Coord) -> Neighbors {
        assert!(self.contains(coord), "{coord} is outside a {}x{} grid", self.height, self.width);

        let Coord { row, col } = coord;
        let mut out = Neighbors::new();
        if row > 0 {
            out.push(Coord::new(row - 1, col));
        }
        if row + 1 < self.height {
            out.push(Coord::new(row + 1, col));
        }
        if col > 0 {
            out.push(Coord::new(row, col - 1));
        }
        if col + 1 < self.width {
            out.push(Coord::new(row, col + 1));
        }
        out
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coord::new(row, col)))
    }

    /// Rows of colors, top to bottom.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Color>> {
        (0..self.height)
            .map(|row| (0..self.width).map(|col| self.get(Coord::new(row, col))).collect())
            .collect()
    }

    fn offset(&self, coord: Coord) -> usize {
        assert!(self.contains(coord), "{coord} is outside a {}x{} grid", self.height, self.width);
        coord.row * self.width + coord.col
    }
}
