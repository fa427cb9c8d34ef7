use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use core::iter;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Valid transitions:
/// - NotStarted -> Playing (new game)
/// - Playing -> Won
/// - Playing -> Lost
/// - Won | Lost -> Playing (new game)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Cells held down by an in-progress chord gesture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChordGesture {
    center: Coord2,
    cells: SmallVec<[Coord2; 9]>,
}

impl ChordGesture {
    pub fn center(&self) -> Coord2 {
        self.center
    }
}

/// Drives one game at a time over an exclusively owned [`Grid`].
///
/// Actions that do not apply right now (off-grid coordinates, finished game, revealed targets) are no-ops reported
/// through `NoChange` outcomes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameController {
    grid: Option<Grid>,
    state: GameState,
    seed: u64,
    gesture: Option<ChordGesture>,
    exploded_at: Option<Coord2>,
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(config: GameConfig, seed: u64) -> Result<Self> {
        let mut controller = Self::new();
        controller.new_game(config, seed)?;
        Ok(controller)
    }

    /// Starts on a board whose mines are already known.
    pub fn with_layout(layout: MineLayout) -> Result<Self> {
        let grid = Grid::from_layout(layout)?;
        Ok(Self {
            grid: Some(grid),
            state: GameState::Playing,
            ..Self::default()
        })
    }

    /// Replaces the current game with a fresh, ungenerated grid.
    ///
    /// On an invalid configuration the current game is kept.
    pub fn new_game(&mut self, config: GameConfig, seed: u64) -> Result<&Grid> {
        let grid = Grid::new(config)?;
        log::debug!(
            "New {}x{} game with {} mines, seed {}",
            config.width,
            config.height,
            config.mines,
            seed
        );

        self.state = GameState::Playing;
        self.seed = seed;
        self.gesture = None;
        self.exploded_at = None;
        Ok(self.grid.insert(grid))
    }

    /// New game with the same configuration and the next seed.
    pub fn restart(&mut self) -> Result<&Grid> {
        let config = self.config().unwrap_or_default();
        self.new_game(config, self.seed.wrapping_add(1))
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn config(&self) -> Option<GameConfig> {
        self.grid.as_ref().map(Grid::config)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.grid.as_ref()?.get(coords)
    }

    pub fn exploded_at(&self) -> Option<Coord2> {
        self.exploded_at
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        self.grid.as_ref().map_or(0, |grid| {
            (grid.mine_count() as isize) - (grid.flag_count() as isize)
        })
    }

    pub fn gesture(&self) -> Option<&ChordGesture> {
        self.gesture.as_ref()
    }

    /// Whether `coords` is part of the pending chord and still hidden and unflagged.
    pub fn is_chorded(&self, coords: Coord2) -> bool {
        self.gesture
            .as_ref()
            .is_some_and(|gesture| gesture.cells.contains(&coords))
            && self
                .cell_at(coords)
                .is_some_and(|cell| !cell.is_revealed() && !cell.is_flagged())
    }

    pub fn chorded_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.gesture
            .iter()
            .flat_map(|gesture| gesture.cells.iter().copied())
            .filter(|&coords| self.is_chorded(coords))
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        Snapshot::from_controller(self)
    }

    /// Opens a cell, generating the mines first when this is the first reveal of the game.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.state.is_playing() {
            return RevealOutcome::NoChange;
        }
        let Some(grid) = self.grid.as_mut() else {
            return RevealOutcome::NoChange;
        };
        let Some(&cell) = grid.get(coords) else {
            return RevealOutcome::NoChange;
        };
        if cell.is_revealed() || cell.is_flagged() {
            return RevealOutcome::NoChange;
        }

        if !grid.is_generated() {
            grid.generate(coords, RandomPlacement::new(self.seed));
        }

        self.reveal_cell(coords)
    }

    pub fn flag(&mut self, coords: Coord2) -> MarkOutcome {
        if !self.state.is_playing() {
            return MarkOutcome::NoChange;
        }
        let Some(grid) = self.grid.as_mut() else {
            return MarkOutcome::NoChange;
        };

        match grid.get(coords).map(Cell::is_revealed) {
            Some(false) => {
                grid.mutate(coords, |cell| cell.flagged = !cell.flagged);
                log::trace!("Toggled flag at {:?}", coords);
                MarkOutcome::Changed
            }
            _ => MarkOutcome::NoChange,
        }
    }

    /// Presses `coords` and its neighbors, replacing any previous gesture.
    ///
    /// Only hidden unflagged cells join the gesture. Off-grid coordinates just release the previous gesture.
    pub fn chord(&mut self, coords: Coord2) -> MarkOutcome {
        if !self.state.is_playing() {
            return MarkOutcome::NoChange;
        }
        let Some(grid) = self.grid.as_ref() else {
            return MarkOutcome::NoChange;
        };

        let gesture = grid.contains(coords).then(|| ChordGesture {
            center: coords,
            cells: iter::once(coords)
                .chain(grid.neighbor_positions(coords))
                .filter(|&pos| {
                    grid.get(pos)
                        .is_some_and(|cell| !cell.is_revealed() && !cell.is_flagged())
                })
                .collect(),
        });
        log::trace!("Chord gesture at {:?}: {:?}", coords, gesture);

        let previous = core::mem::replace(&mut self.gesture, gesture);
        if previous == self.gesture {
            MarkOutcome::NoChange
        } else {
            MarkOutcome::Changed
        }
    }

    /// Releases the chord gesture.
    ///
    /// Every pressed cell is revealed when any of its neighbors is a revealed number with at least as many adjacent
    /// flags as its count. Pressed cells are released column by column (ordered by `x`, then `y`), each one checked
    /// against the board left by the previous reveals. The gesture remembers what was pressed, `coords` is where the
    /// release happened.
    pub fn unchord(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(mut gesture) = self.gesture.take() else {
            return RevealOutcome::NoChange;
        };
        if !self.state.is_playing() {
            return RevealOutcome::NoChange;
        }
        log::trace!(
            "Chord released at {:?}, pressed at {:?}",
            coords,
            gesture.center
        );

        gesture.cells.sort_unstable();
        gesture
            .cells
            .iter()
            .map(|&pos| self.release_chorded(pos))
            .fold(RevealOutcome::NoChange, core::ops::BitOr::bitor)
    }

    fn release_chorded(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(grid) = self.grid.as_ref() else {
            return RevealOutcome::NoChange;
        };

        let satisfied = grid
            .neighbors(coords)
            .find(|neighbor| {
                neighbor
                    .revealed_number()
                    .is_some_and(|number| grid.count_adjacent_flags(neighbor.position()) >= number)
            })
            .map(Cell::position);

        match satisfied {
            Some(number_at) => {
                log::trace!("Chord at {:?} satisfied by {:?}", coords, number_at);
                self.reveal_cell(coords)
            }
            None => RevealOutcome::NoChange,
        }
    }

    fn reveal_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.state.is_playing() {
            return RevealOutcome::NoChange;
        }
        let Some(grid) = self.grid.as_mut() else {
            return RevealOutcome::NoChange;
        };
        let Some(&cell) = grid.get(coords) else {
            return RevealOutcome::NoChange;
        };
        if cell.is_revealed() || cell.is_flagged() {
            return RevealOutcome::NoChange;
        }

        match cell.kind() {
            CellKind::Mine => {
                self.explode(coords);
                RevealOutcome::HitMine
            }
            CellKind::Empty => {
                let opened = flood_fill(grid, coords);
                log::debug!("Flood from {:?} opened {} cells", coords, opened);
                self.check_win()
            }
            CellKind::Number(count) => {
                grid.mutate(coords, |cell| cell.revealed = true);
                log::trace!("Opened {:?}, mine count: {}", coords, count);
                self.check_win()
            }
        }
    }

    fn explode(&mut self, coords: Coord2) {
        let Some(grid) = self.grid.as_mut() else {
            return;
        };

        grid.mutate(coords, |cell| {
            cell.revealed = true;
            cell.exploded = true;
        });

        let mines: Vec<Coord2> = grid.mine_positions().collect();
        for &pos in &mines {
            grid.mutate(pos, |cell| {
                cell.flagged = false;
                cell.revealed = true;
            });
        }

        self.state = GameState::Lost;
        self.exploded_at = Some(coords);
        self.gesture = None;
        log::debug!("Exploded at {:?}, revealed {} mines", coords, mines.len());
    }

    /// Ends the game when every safe cell is open, flagging all mines.
    fn check_win(&mut self) -> RevealOutcome {
        let Some(grid) = self.grid.as_mut() else {
            return RevealOutcome::NoChange;
        };
        if grid.safe_cells_remaining() > 0 {
            return RevealOutcome::Revealed;
        }
        debug_assert!(grid.cells().all(|cell| cell.is_mine() || cell.is_revealed()));

        let mines: Vec<Coord2> = grid.mine_positions().collect();
        for pos in mines {
            grid.mutate(pos, |cell| cell.flagged = true);
        }

        self.state = GameState::Won;
        self.gesture = None;
        log::debug!("Won with {} mines flagged", grid.mine_count());
        RevealOutcome::Won
    }
}

/// Opens the connected region around an empty cell through its four edge neighbors.
///
/// Numbers are opened but stop the spread, as do mines and already open cells. Flags on safe cells are cleared and
/// the flood carries on through them. Returns how many cells were opened.
fn flood_fill(grid: &mut Grid, start: Coord2) -> usize {
    let mut visited = BTreeSet::from([start]);
    let mut to_visit = VecDeque::from([start]);
    let mut opened = 0;

    while let Some(coords) = to_visit.pop_front() {
        let Some(&cell) = grid.get(coords) else {
            continue;
        };

        // skip mined or already opened cells
        if cell.is_revealed() || cell.is_mine() {
            log::trace!("Flood skipping {:?}", coords);
            continue;
        }

        grid.mutate(coords, |cell| {
            cell.flagged = false;
            cell.revealed = true;
        });
        opened += 1;
        log::trace!("Flood opened {:?}, kind: {:?}", coords, cell.kind());

        if cell.kind() == CellKind::Empty {
            to_visit.extend(
                grid.orthogonal_positions(coords)
                    .filter(|&pos| visited.insert(pos)),
            );
        }
    }

    opened
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(size: Coord2, mines: &[Coord2]) -> GameController {
        GameController::with_layout(MineLayout::from_mine_coords(size, mines).unwrap()).unwrap()
    }

    fn cell(controller: &GameController, coords: Coord2) -> Cell {
        *controller.cell_at(coords).unwrap()
    }

    #[test]
    fn fresh_controller_ignores_actions() {
        let mut controller = GameController::new();

        assert_eq!(controller.game_state(), GameState::NotStarted);
        assert_eq!(controller.reveal((0, 0)), RevealOutcome::NoChange);
        assert_eq!(controller.flag((0, 0)), MarkOutcome::NoChange);
        assert_eq!(controller.chord((0, 0)), MarkOutcome::NoChange);
        assert_eq!(controller.unchord((0, 0)), RevealOutcome::NoChange);
        assert!(controller.snapshot().is_none());
    }

    #[test]
    fn new_game_starts_playing_ungenerated() {
        let mut controller = GameController::new();
        let grid = controller.new_game(GameConfig::beginner(), 3).unwrap();

        assert!(!grid.is_generated());
        assert_eq!(controller.game_state(), GameState::Playing);
        assert_eq!(controller.mines_left(), 10);
    }

    #[test]
    fn invalid_new_game_keeps_current_game() {
        let mut controller = GameController::start(GameConfig::beginner(), 3).unwrap();
        controller.flag((1, 1));

        let config = GameConfig::new_unchecked(2, 2, 9);
        assert!(matches!(
            controller.new_game(config, 4),
            Err(GameError::InvalidConfig(_))
        ));
        assert_eq!(controller.seed(), 3);
        assert!(cell(&controller, (1, 1)).is_flagged());
    }

    #[test]
    fn first_reveal_generates_and_is_safe() {
        for seed in 0..32 {
            let mut controller = GameController::start(GameConfig::new(9, 9, 70).unwrap(), seed).unwrap();

            let outcome = controller.reveal((4, 4));

            let grid = controller.grid().unwrap();
            assert!(grid.is_generated());
            assert_eq!(grid.mine_positions().count(), 70);
            assert!(!cell(&controller, (4, 4)).is_mine());
            assert!(cell(&controller, (4, 4)).is_revealed());
            assert_ne!(outcome, RevealOutcome::HitMine);
        }
    }

    #[test]
    fn single_cell_without_mines_wins_immediately() {
        let mut controller = GameController::start(GameConfig::new(1, 1, 0).unwrap(), 0).unwrap();

        assert_eq!(controller.reveal((0, 0)), RevealOutcome::Won);
        assert_eq!(controller.game_state(), GameState::Won);
    }

    #[test]
    fn flood_fill_opens_whole_board_around_corner_mine() {
        let mut controller = controller((3, 3), &[(2, 2)]);

        assert_eq!(controller.reveal((0, 0)), RevealOutcome::Won);
        assert_eq!(controller.game_state(), GameState::Won);
        for y in 0..3 {
            for x in 0..3 {
                let cell = cell(&controller, (x, y));
                assert_eq!(cell.is_revealed(), (x, y) != (2, 2));
            }
        }
        assert!(cell(&controller, (2, 2)).is_flagged());
        assert_eq!(controller.mines_left(), 0);
    }

    #[test]
    fn flood_fill_stops_at_numbers() {
        // . . 1 # #
        // . . 1 * #
        // . . 1 # #
        let mut controller = controller((5, 3), &[(3, 1)]);

        assert_eq!(controller.reveal((0, 0)), RevealOutcome::Revealed);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(cell(&controller, (x, y)).is_revealed(), x <= 2, "{:?}", (x, y));
            }
        }
        assert_eq!(controller.grid().unwrap().revealed_safe_count(), 9);
    }

    #[test]
    fn flood_fill_spreads_only_through_edges() {
        // . 1 *
        // 1 2 #
        // * # #
        let mut controller = controller((3, 3), &[(2, 0), (0, 2)]);

        assert_eq!(controller.reveal((0, 0)), RevealOutcome::Revealed);
        assert!(cell(&controller, (1, 0)).is_revealed());
        assert!(cell(&controller, (0, 1)).is_revealed());
        assert!(!cell(&controller, (1, 1)).is_revealed());
    }

    #[test]
    fn flood_fill_clears_flags_and_keeps_going() {
        let mut controller = controller((5, 1), &[(4, 0)]);
        controller.flag((1, 0));

        assert_eq!(controller.reveal((0, 0)), RevealOutcome::Won);
        for x in 0..4 {
            assert!(cell(&controller, (x, 0)).is_revealed(), "{x}");
        }
        assert!(!cell(&controller, (1, 0)).is_flagged());
        assert!(cell(&controller, (4, 0)).is_flagged());
        assert_eq!(controller.grid().unwrap().flag_count(), 1);
    }

    #[test]
    fn flood_fill_leaves_flagged_mines_alone() {
        let mut controller = controller((5, 3), &[(3, 1)]);
        controller.flag((3, 1));

        assert_eq!(controller.reveal((0, 0)), RevealOutcome::Revealed);
        assert!(cell(&controller, (3, 1)).is_flagged());
        assert!(!cell(&controller, (3, 1)).is_revealed());
    }

    #[test]
    fn revealing_twice_is_a_no_op() {
        let mut controller = controller((4, 4), &[(3, 3)]);

        assert_eq!(controller.reveal((3, 2)), RevealOutcome::Revealed);
        let before = controller.clone();
        assert_eq!(controller.reveal((3, 2)), RevealOutcome::NoChange);
        assert_eq!(controller, before);
    }

    #[test]
    fn flooding_twice_is_a_no_op() {
        let mut controller = controller((5, 3), &[(3, 1)]);

        assert_eq!(controller.reveal((0, 0)), RevealOutcome::Revealed);
        let before = controller.clone();
        assert_eq!(controller.reveal((0, 0)), RevealOutcome::NoChange);
        assert_eq!(controller.reveal((1, 1)), RevealOutcome::NoChange);
        assert_eq!(controller, before);
    }

    #[test]
    fn flagged_cell_cannot_be_revealed() {
        let mut controller = controller((2, 2), &[(0, 0)]);

        assert_eq!(controller.flag((1, 1)), MarkOutcome::Changed);
        assert_eq!(controller.reveal((1, 1)), RevealOutcome::NoChange);

        let cell = cell(&controller, (1, 1));
        assert!(cell.is_flagged());
        assert!(!cell.is_revealed());
    }

    #[test]
    fn flagged_first_click_does_not_generate() {
        let mut controller = GameController::start(GameConfig::beginner(), 9).unwrap();
        controller.flag((0, 0));

        assert_eq!(controller.reveal((0, 0)), RevealOutcome::NoChange);
        assert!(!controller.grid().unwrap().is_generated());
    }

    #[test]
    fn flag_toggles_and_ignores_revealed_cells() {
        let mut controller = controller((3, 1), &[(0, 0)]);

        assert_eq!(controller.flag((0, 0)), MarkOutcome::Changed);
        assert_eq!(controller.mines_left(), 0);
        assert_eq!(controller.flag((0, 0)), MarkOutcome::Changed);
        assert!(!cell(&controller, (0, 0)).is_flagged());

        controller.reveal((1, 0));
        assert_eq!(controller.flag((1, 0)), MarkOutcome::NoChange);
        assert_eq!(controller.flag((7, 0)), MarkOutcome::NoChange);
    }

    #[test]
    fn hitting_mine_reveals_every_mine() {
        let mut controller = controller((3, 3), &[(0, 0), (2, 2), (2, 0)]);
        controller.flag((2, 2));

        assert_eq!(controller.reveal((0, 0)), RevealOutcome::HitMine);
        assert_eq!(controller.game_state(), GameState::Lost);
        assert_eq!(controller.exploded_at(), Some((0, 0)));

        let grid = controller.grid().unwrap();
        assert_eq!(grid.cells().filter(|cell| cell.is_exploded()).count(), 1);
        for cell in grid.cells().filter(|cell| cell.is_mine()) {
            assert!(cell.is_revealed());
            assert!(!cell.is_flagged());
        }
        assert!(!cell(&controller, (1, 1)).is_revealed());
    }

    #[test]
    fn finished_game_rejects_actions() {
        let mut controller = controller((2, 1), &[(0, 0)]);
        controller.reveal((0, 0));
        let lost = controller.clone();

        assert_eq!(controller.reveal((1, 0)), RevealOutcome::NoChange);
        assert_eq!(controller.flag((1, 0)), MarkOutcome::NoChange);
        assert_eq!(controller.chord((1, 0)), MarkOutcome::NoChange);
        assert_eq!(controller.unchord((1, 0)), RevealOutcome::NoChange);
        assert_eq!(controller, lost);

        controller.restart().unwrap();
        assert_eq!(controller.game_state(), GameState::Playing);
        assert_eq!(controller.exploded_at(), None);
        assert_eq!(controller.config(), Some(GameConfig::new_unchecked(2, 1, 1)));
    }

    #[test]
    fn win_needs_every_safe_cell_not_flags() {
        let mut controller = controller((3, 1), &[(0, 0)]);
        controller.flag((0, 0));

        assert_eq!(controller.reveal((2, 0)), RevealOutcome::Won);
        assert_eq!(controller.game_state(), GameState::Won);

        let mut controller = self::controller((3, 1), &[(0, 0)]);
        controller.flag((0, 0));
        controller.flag((1, 0));
        assert_eq!(controller.game_state(), GameState::Playing);
    }

    #[test]
    fn chord_presses_hidden_unflagged_neighbors() {
        let mut controller = controller((3, 3), &[(0, 0), (2, 0)]);
        controller.reveal((1, 1));
        controller.flag((0, 0));

        assert_eq!(controller.chord((1, 1)), MarkOutcome::Changed);
        assert!(!controller.is_chorded((1, 1)));
        assert!(!controller.is_chorded((0, 0)));
        assert!(controller.is_chorded((2, 0)));
        assert!(controller.is_chorded((1, 0)));
        assert_eq!(controller.chorded_cells().count(), 7);
    }

    #[test]
    fn chord_replaces_previous_gesture() {
        let mut controller = controller((5, 5), &[(4, 4)]);

        controller.chord((0, 0));
        assert!(controller.is_chorded((1, 1)));

        assert_eq!(controller.chord((3, 3)), MarkOutcome::Changed);
        assert!(!controller.is_chorded((1, 1)));
        assert!(controller.is_chorded((4, 4)));
        assert_eq!(controller.chord((3, 3)), MarkOutcome::NoChange);

        assert_eq!(controller.chord((9, 9)), MarkOutcome::Changed);
        assert!(controller.gesture().is_none());
    }

    #[test]
    fn unchord_reveals_cells_next_to_satisfied_number() {
        // * 1 .
        // 1 1 .
        // . . .
        // . . .
        let mines = &[(0, 0)];
        let mut controller = controller((3, 4), mines);
        controller.reveal((1, 1));
        controller.flag((0, 0));

        controller.chord((1, 1));
        let outcome = controller.unchord((1, 1));

        assert_eq!(outcome, RevealOutcome::Won);
        assert!(cell(&controller, (2, 2)).is_revealed());
        assert!(controller.gesture().is_none());
    }

    #[test]
    fn unchord_without_enough_flags_does_nothing() {
        let mut controller = controller((3, 3), &[(0, 0), (2, 0)]);
        controller.reveal((1, 1));
        controller.flag((0, 0));

        controller.chord((1, 1));
        assert_eq!(controller.unchord((1, 1)), RevealOutcome::NoChange);
        assert!(!cell(&controller, (1, 2)).is_revealed());
        assert!(controller.gesture().is_none());
    }

    #[test]
    fn unchord_on_wrong_flag_explodes() {
        let mut controller = controller((3, 3), &[(0, 0)]);
        controller.reveal((1, 1));
        controller.flag((2, 2));

        controller.chord((1, 1));
        assert_eq!(controller.unchord((1, 1)), RevealOutcome::HitMine);
        assert_eq!(controller.game_state(), GameState::Lost);
        assert_eq!(controller.exploded_at(), Some((0, 0)));
    }

    #[test]
    fn unchord_releases_cells_column_by_column() {
        // 1 F #
        // # * #
        // # # #
        let mut controller = controller((3, 3), &[(1, 1)]);
        controller.reveal((0, 0));
        controller.flag((1, 0));

        controller.chord((1, 1));
        assert_eq!(controller.unchord((1, 1)), RevealOutcome::HitMine);

        assert!(cell(&controller, (0, 1)).is_revealed());
        assert!(cell(&controller, (0, 2)).is_revealed());
        assert!(cell(&controller, (1, 1)).is_exploded());
        assert!(!cell(&controller, (1, 2)).is_revealed());
        assert!(!cell(&controller, (2, 0)).is_revealed());
    }

    #[test]
    fn unchord_without_gesture_is_a_no_op() {
        let mut controller = controller((3, 3), &[(0, 0)]);

        assert_eq!(controller.unchord((1, 1)), RevealOutcome::NoChange);
    }
}
