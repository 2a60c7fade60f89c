//! A single game of Area.
//!
//! `AreaGame` owns the grid and both territories. Presentation layers read
//! it through the query methods and change it only through
//! [`AreaGame::command`]. A rejected command leaves every field as it was.

use im::Vector;

use crate::board::{capture, Grid, Territory, TerritoryTracker};
use crate::core::{AreaConfig, Color, ConfigError, Coord, GameRng, MoveError, Palette, PlayerId, PlayerMap};
use crate::rules::{GameResult, Position, TurnState};

use super::history::{MoveOutcome, MoveRecord};

/// Starting cell of each player: opposite corners.
#[must_use]
pub fn start_cell(player: PlayerId, height: usize, width: usize) -> Coord {
    match player {
        PlayerId::P0 => Coord::new(0, 0),
        _ => Coord::new(height - 1, width - 1),
    }
}

/// Starting color of each player: the first two palette entries, or the
/// only entry of a single-color palette.
#[must_use]
pub fn start_color(player: PlayerId, palette: &Palette) -> Color {
    // palette.len() <= MAX_PALETTE, so the index fits a u8
    Color((player.index() % palette.len()) as u8)
}

/// One in-memory game session.
///
/// Cloning is cheap: the grid, territories and history are persistent
/// collections that share structure with the original.
#[derive(Clone, Debug)]
pub struct AreaGame {
    config: AreaConfig,
    grid: Grid,
    territories: TerritoryTracker,
    turn: TurnState,
    result: Option<GameResult>,
    history: Vector<MoveRecord>,
}

impl AreaGame {
    /// Start a game with a random board drawn from `config.seed`.
    pub fn new(config: AreaConfig) -> Result<Self, ConfigError> {
        let mut rng = GameRng::new(config.seed);
        Self::with_rng(config, &mut rng)
    }

    /// Start a game with a random board drawn from an injected generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: AreaConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let (height, width) = (config.height, config.width);
        let seeds: Vec<(Coord, Color)> = PlayerId::both()
            .map(|p| (start_cell(p, height, width), start_color(p, &config.palette)))
            .collect();
        let grid = Grid::random(height, width, &config.palette, rng, &seeds);

        let territories = TerritoryTracker::new(
            grid.area(),
            PlayerMap::new(|p| Territory::seed(start_cell(p, height, width), start_color(p, &config.palette))),
        );

        Ok(Self::assemble(config, grid, territories))
    }

    /// Start a game on an explicit board.
    ///
    /// The board's dimensions replace `config.height` and `config.width`.
    /// Each player starts on their corner cell with whatever color it holds.
    /// The two corners must differ unless the palette has a single color.
    pub fn from_rows(config: AreaConfig, rows: &[Vec<Color>]) -> Result<Self, ConfigError> {
        let grid = Grid::from_rows(rows, &config.palette)?;
        let config = config.with_size(grid.height(), grid.width());
        config.validate()?;

        let corner = |p: PlayerId| grid.get(start_cell(p, grid.height(), grid.width()));
        let color = corner(PlayerId::P0);
        if color == corner(PlayerId::P1) && config.palette.len() > 1 {
            return Err(ConfigError::SameStartColor { color });
        }

        let territories = TerritoryTracker::new(
            grid.area(),
            PlayerMap::new(|p| {
                let cell = start_cell(p, grid.height(), grid.width());
                Territory::seed(cell, grid.get(cell))
            }),
        );

        Ok(Self::assemble(config, grid, territories))
    }

    fn assemble(config: AreaConfig, grid: Grid, territories: TerritoryTracker) -> Self {
        let mut game = Self {
            config,
            grid,
            territories,
            turn: TurnState::AwaitingPlayer0,
            result: None,
            history: Vector::new(),
        };

        if game.position().is_terminal() {
            game.finish();
        } else {
            game.turn = game.next_turn(TurnState::AwaitingPlayer0);
        }

        tracing::debug!(
            height = game.grid.height(),
            width = game.grid.width(),
            colors = game.config.palette.len(),
            over = game.turn.is_over(),
            "new game"
        );
        game
    }

    fn position(&self) -> Position<'_> {
        Position {
            palette: &self.config.palette,
            grid: &self.grid,
            territories: &self.territories,
            zero_gain: self.config.zero_gain,
        }
    }

    /// `candidate`, unless its mover has no legal color, in which case the
    /// turn is skipped. Only reachable under `ZeroGainPolicy::Reject`; the
    /// game is not terminal, so the other player can still move.
    fn next_turn(&self, candidate: TurnState) -> TurnState {
        match candidate.mover() {
            Some(player) if self.position().legal_colors(player).is_empty() => {
                tracing::debug!(%player, "no gaining color, turn skipped");
                candidate.advance()
            }
            _ => candidate,
        }
    }

    fn finish(&mut self) {
        let result = GameResult::from_sizes(
            self.territories.len(PlayerId::P0),
            self.territories.len(PlayerId::P1),
        );
        self.turn = TurnState::GameOver;
        self.result = Some(result);
        tracing::debug!(%result, moves = self.history.len(), "game over");
    }

    // === Command ===

    /// Attempt a move for `player` with `color`.
    ///
    /// On success the capture has been applied and the turn has passed to
    /// the other player or the game has ended. On failure nothing changed.
    pub fn command(&mut self, player: PlayerId, color: Color) -> Result<MoveOutcome, MoveError> {
        if let Err(err) = self.position().check_move(self.turn, player, color) {
            tracing::debug!(%player, %color, %err, "move rejected");
            return Err(err);
        }

        let capture = capture::apply(&mut self.grid, &mut self.territories, player, color);
        let number = self.history.len() + 1;
        self.history.push_back(MoveRecord {
            number,
            player,
            color,
            gained: capture.gained(),
        });

        if self.position().is_terminal() {
            self.finish();
        } else {
            self.turn = self.next_turn(self.turn.advance());
        }

        tracing::debug!(
            %player,
            %color,
            gained = capture.gained(),
            owned = self.territories.len(player),
            "move applied"
        );

        Ok(MoveOutcome {
            capture,
            turn: self.turn,
        })
    }

    // === Queries ===

    /// The configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &AreaConfig {
        &self.config
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Colors a cell may hold.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.config.palette
    }

    /// The current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Color at a cell.
    ///
    /// # Panics
    /// If `coord` is off the board.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Color {
        self.grid.get(coord)
    }

    /// Both territories.
    #[must_use]
    pub fn territories(&self) -> &TerritoryTracker {
        &self.territories
    }

    /// Fraction of the board `player` owns, in `[0, 1]`.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> f64 {
        self.territories.score(player)
    }

    /// Number of cells `player` owns.
    #[must_use]
    pub fn territory_len(&self, player: PlayerId) -> usize {
        self.territories.len(player)
    }

    /// The color currently covering `player`'s territory.
    #[must_use]
    pub fn color(&self, player: PlayerId) -> Color {
        self.territories.color(player)
    }

    /// Which player owns a cell, if any.
    #[must_use]
    pub fn owner(&self, coord: Coord) -> Option<PlayerId> {
        self.territories.owner(coord)
    }

    /// Current turn state.
    ///
    /// Under `ZeroGainPolicy::Reject` a player with no gaining color is
    /// skipped, so even a fresh game may start in `AwaitingPlayer1`.
    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// The player expected to move, or `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.turn.mover()
    }

    /// The game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn.is_over()
    }

    /// Final result, or `None` while the game is still running.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        self.result
    }

    /// Colors `player` may choose. Empty once the game is over.
    ///
    /// Turn order is not considered: the set is what `player` could play
    /// if it were their move.
    #[must_use]
    pub fn legal_colors(&self, player: PlayerId) -> Vec<Color> {
        if self.is_over() {
            return Vec::new();
        }
        self.position().legal_colors(player)
    }

    /// Cells `player` would absorb by choosing `color`. Nothing is mutated.
    ///
    /// Returns 0 for colors outside the palette.
    #[must_use]
    pub fn capture_gain(&self, player: PlayerId, color: Color) -> usize {
        if !self.config.palette.contains(color) {
            return 0;
        }
        capture::gain(&self.grid, &self.territories, player, color)
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> {
        self.history.iter()
    }

    /// Number of accepted moves so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ZeroGainPolicy;

    fn rows(layout: &[&[u8]]) -> Vec<Vec<Color>> {
        layout.iter().map(|r| r.iter().map(|&c| Color(c)).collect()).collect()
    }

    fn small(palette_len: usize, layout: &[&[u8]]) -> AreaGame {
        let config = AreaConfig::default().with_palette(Palette::with_size(palette_len).unwrap());
        AreaGame::from_rows(config, &rows(layout)).unwrap()
    }

    #[test]
    fn test_new_game_defaults() {
        let game = AreaGame::new(AreaConfig::default()).unwrap();

        assert_eq!(game.height(), 30);
        assert_eq!(game.width(), 42);
        assert_eq!(game.turn(), TurnState::AwaitingPlayer0);
        assert_eq!(game.current_player(), Some(PlayerId::P0));
        assert_eq!(game.winner(), None);
        assert_eq!(game.cell(Coord::new(0, 0)), Color(0));
        assert_eq!(game.cell(Coord::new(29, 41)), Color(1));
        assert_eq!(game.color(PlayerId::P0), Color(0));
        assert_eq!(game.color(PlayerId::P1), Color(1));
        assert_eq!(game.territory_len(PlayerId::P0), 1);
        assert_eq!(game.owner(Coord::new(29, 41)), Some(PlayerId::P1));
        assert_eq!(game.legal_colors(PlayerId::P0), vec![Color(2), Color(3), Color(4)]);
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = AreaGame::new(AreaConfig::default().with_seed(5)).unwrap();
        let b = AreaGame::new(AreaConfig::default().with_seed(5)).unwrap();
        let c = AreaGame::new(AreaConfig::default().with_seed(6)).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_ne!(a.grid(), c.grid());
    }

    #[test]
    fn test_injected_rng_matches_seed() {
        let config = AreaConfig::default().with_size(8, 8).with_seed(11);
        let seeded = AreaGame::new(config.clone()).unwrap();
        let injected = AreaGame::with_rng(config, &mut GameRng::new(11)).unwrap();
        assert_eq!(seeded.grid(), injected.grid());
    }

    #[test]
    fn test_command_advances_turn() {
        let mut game = small(4, &[&[0, 2, 3], &[3, 2, 1]]);

        let outcome = game.command(PlayerId::P0, Color(2)).unwrap();
        assert_eq!(outcome.turn, TurnState::AwaitingPlayer1);
        assert!(!outcome.ended());
        assert_eq!(game.current_player(), Some(PlayerId::P1));
        assert_eq!(game.color(PlayerId::P0), Color(2));
    }

    #[test]
    fn test_command_can_end_game() {
        let mut game = small(3, &[&[0, 2], &[2, 1]]);

        let outcome = game.command(PlayerId::P0, Color(2)).unwrap();
        assert_eq!(outcome.gained(), 2);
        assert!(outcome.ended());
        assert_eq!(game.winner(), Some(GameResult::Winner(PlayerId::P0)));
    }

    #[test]
    fn test_rejected_command_changes_nothing() {
        let mut game = small(4, &[&[0, 2, 3], &[3, 2, 1]]);
        let grid = game.grid().clone();

        assert_eq!(
            game.command(PlayerId::P1, Color(2)),
            Err(MoveError::NotYourTurn { player: PlayerId::P1, expected: PlayerId::P0 })
        );
        assert_eq!(
            game.command(PlayerId::P0, Color(1)),
            Err(MoveError::ColorHeld { color: Color(1), holder: PlayerId::P1 })
        );
        assert_eq!(
            game.command(PlayerId::P0, Color(9)),
            Err(MoveError::ColorOutOfRange { color: Color(9), palette_len: 4 })
        );

        assert_eq!(game.grid(), &grid);
        assert_eq!(game.turn(), TurnState::AwaitingPlayer0);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_history_records_moves() {
        let mut game = small(4, &[&[0, 2, 3], &[3, 2, 1]]);

        game.command(PlayerId::P0, Color(2)).unwrap();
        game.command(PlayerId::P1, Color(3)).unwrap();

        let history: Vec<_> = game.history().copied().collect();
        assert_eq!(
            history,
            vec![
                MoveRecord { number: 1, player: PlayerId::P0, color: Color(2), gained: 2 },
                MoveRecord { number: 2, player: PlayerId::P1, color: Color(3), gained: 1 },
            ]
        );
        assert_eq!(history.last().map(|m| m.number), Some(game.move_count()));
    }

    #[test]
    fn test_from_rows_overrides_size() {
        let config = AreaConfig::default().with_size(99, 99);
        let game = AreaGame::from_rows(config, &rows(&[&[0, 2, 3], &[3, 2, 1]])).unwrap();
        assert_eq!((game.height(), game.width()), (2, 3));
        assert_eq!(game.config().area(), 6);
    }

    #[test]
    fn test_single_color_palette_starts_over() {
        let config = AreaConfig::default()
            .with_size(3, 3)
            .with_palette(Palette::with_size(1).unwrap());
        let game = AreaGame::new(config).unwrap();

        assert!(game.is_over());
        assert_eq!(game.color(PlayerId::P0), game.color(PlayerId::P1));
        assert_eq!(game.winner(), Some(GameResult::Draw));
        assert!(game.legal_colors(PlayerId::P0).is_empty());
    }

    #[test]
    fn test_capture_gain_previews() {
        let game = small(4, &[&[0, 2, 3], &[3, 2, 1]]);
        assert_eq!(game.capture_gain(PlayerId::P0, Color(2)), 2);
        assert_eq!(game.capture_gain(PlayerId::P0, Color(3)), 1);
        assert_eq!(game.capture_gain(PlayerId::P0, Color(200)), 0);
        assert_eq!(game.territory_len(PlayerId::P0), 1);
    }

    #[test]
    fn test_reject_policy_session() {
        let config = AreaConfig::default()
            .with_palette(Palette::with_size(5).unwrap())
            .with_zero_gain(ZeroGainPolicy::Reject);
        let mut game = AreaGame::from_rows(config, &rows(&[&[0, 2, 3], &[3, 2, 1]])).unwrap();

        assert_eq!(game.legal_colors(PlayerId::P0), vec![Color(2), Color(3)]);
        assert_eq!(
            game.command(PlayerId::P0, Color(4)),
            Err(MoveError::NoGain { color: Color(4) })
        );
    }

    #[test]
    fn test_reject_policy_skips_stuck_player() {
        let config = AreaConfig::default()
            .with_palette(Palette::with_size(4).unwrap())
            .with_zero_gain(ZeroGainPolicy::Reject);
        // P0 is walled in by P1's color; only P1 can grow
        let mut game = AreaGame::from_rows(config, &rows(&[&[0, 1, 2], &[1, 2, 1]])).unwrap();

        assert!(game.legal_colors(PlayerId::P0).is_empty());
        assert_eq!(game.turn(), TurnState::AwaitingPlayer1);

        let outcome = game.command(PlayerId::P1, Color(2)).unwrap();
        assert_eq!(outcome.gained(), 2);
    }

    #[test]
    fn test_reject_policy_skips_stuck_player_mid_game() {
        let config = AreaConfig::default()
            .with_palette(Palette::with_size(4).unwrap())
            .with_zero_gain(ZeroGainPolicy::Reject);
        let mut game = AreaGame::from_rows(config, &rows(&[&[0, 2, 3], &[3, 3, 2], &[3, 2, 1]])).unwrap();
        assert_eq!(game.turn(), TurnState::AwaitingPlayer0);

        // P1's only neighbors now wear P0's color
        let outcome = game.command(PlayerId::P0, Color(2)).unwrap();
        assert_eq!(outcome.gained(), 1);
        assert!(game.legal_colors(PlayerId::P1).is_empty());
        assert_eq!(outcome.turn, TurnState::AwaitingPlayer0);
        assert_eq!(
            game.command(PlayerId::P1, Color(3)),
            Err(MoveError::NotYourTurn { player: PlayerId::P1, expected: PlayerId::P0 })
        );

        // leaving color 2 frees P1 again
        let outcome = game.command(PlayerId::P0, Color(3)).unwrap();
        assert_eq!(outcome.gained(), 4);
        assert_eq!(game.turn(), TurnState::AwaitingPlayer1);
        assert_eq!(game.legal_colors(PlayerId::P1), vec![Color(2)]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut game = small(4, &[&[0, 2, 3], &[3, 2, 1]]);
        let snapshot = game.clone();

        game.command(PlayerId::P0, Color(2)).unwrap();

        assert_eq!(snapshot.territory_len(PlayerId::P0), 1);
        assert_eq!(snapshot.move_count(), 0);
        assert_eq!(game.territory_len(PlayerId::P0), 3);
    }
}
