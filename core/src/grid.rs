use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of cells stored row-major in one buffer.
///
/// Mines and numbers are only computed by [`Grid::generate`], which runs once per grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    config: GameConfig,
    cells: Array2<Cell>,
    generated: bool,
    mine_count: CellCount,
    revealed_safe_count: CellCount,
    flag_count: CellCount,
}

impl Grid {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let shape = (usize::from(config.height), usize::from(config.width));
        let cells = Array2::from_shape_fn(shape, |(y, x)| Cell::new((x as Coord, y as Coord)));

        Ok(Self {
            config,
            cells,
            generated: false,
            mine_count: config.mines,
            revealed_safe_count: 0,
            flag_count: 0,
        })
    }

    pub fn create(width: Coord, height: Coord, mine_count: CellCount) -> Result<Self> {
        Self::new(GameConfig::new(width, height, mine_count)?)
    }

    /// Grid already generated from a fixed layout.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        let mut grid = Self::new(layout.game_config())?;
        grid.apply_layout(&layout);
        Ok(grid)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn width(&self) -> Coord {
        self.config.width
    }

    pub fn height(&self) -> Coord {
        self.config.height
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Mines on the board, once generated this is the number actually placed.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn safe_cells_remaining(&self) -> CellCount {
        self.config
            .total_cells()
            .saturating_sub(self.mine_count)
            .saturating_sub(self.revealed_safe_count)
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        x < self.config.width && y < self.config.height
    }

    /// Converts signed coordinates, as a shell may report them, into a position on this grid.
    pub fn locate(&self, x: i64, y: i64) -> Option<Coord2> {
        let coords = (Coord::try_from(x).ok()?, Coord::try_from(y).ok()?);
        self.contains(coords).then_some(coords)
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cell_array(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine())
            .map(Cell::position)
    }

    /// Positions of the Moore neighborhood, empty when `coords` is off the grid.
    pub fn neighbor_positions(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::moore(coords, self.bounds_for(coords))
    }

    /// Positions sharing an edge with `coords`, empty when `coords` is off the grid.
    pub fn orthogonal_positions(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::orthogonal(coords, self.bounds_for(coords))
    }

    fn bounds_for(&self, coords: Coord2) -> Coord2 {
        if self.contains(coords) {
            self.size()
        } else {
            (0, 0)
        }
    }

    pub fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = &Cell> + '_ {
        self.neighbor_positions(coords)
            .map(|pos| &self.cells[pos.to_nd_index()])
    }

    pub fn count_adjacent_flags(&self, coords: Coord2) -> u8 {
        self.neighbors(coords).filter(|cell| cell.is_flagged()).count() as u8
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        self.neighbors(coords).filter(|cell| cell.is_mine()).count() as u8
    }

    /// Places the mines and computes every number, never putting a mine under `exclude`.
    ///
    /// Returns `false` without touching the grid when it was already generated.
    pub fn generate(&mut self, exclude: Coord2, placement: impl MinePlacement) -> bool {
        if self.generated {
            return false;
        }

        let layout = placement.place(self.config, exclude);
        if layout.size() != self.size() {
            log::warn!(
                "Ignoring {:?} layout for {:?} grid",
                layout.size(),
                self.size()
            );
            return false;
        }

        self.apply_layout(&layout);
        true
    }

    fn apply_layout(&mut self, layout: &MineLayout) {
        for cell in self.cells.iter_mut() {
            let coords = cell.position();
            cell.kind = if layout[coords] {
                CellKind::Mine
            } else {
                CellKind::from_adjacent_mines(layout.adjacent_mine_count(coords))
            };
        }

        if layout.mine_count() != self.config.mines {
            log::warn!(
                "Grid configured for {} mines holds {}",
                self.config.mines,
                layout.mine_count()
            );
        }
        self.mine_count = layout.mine_count();
        self.generated = true;
        log::debug!(
            "Generated {}x{} grid with {} mines",
            self.config.width,
            self.config.height,
            self.mine_count
        );
    }

    /// Applies `transition` to the cell at `coords`, the only write path for player-visible state.
    ///
    /// Returns `false` for coordinates off the grid.
    pub(crate) fn mutate(&mut self, coords: Coord2, transition: impl FnOnce(&mut Cell)) -> bool {
        let Some(cell) = self.cells.get_mut(coords.to_nd_index()) else {
            return false;
        };

        let before = *cell;
        transition(cell);
        let after = *cell;

        debug_assert_eq!(before.position(), after.position());
        debug_assert_eq!(before.kind(), after.kind(), "cell kind is frozen");
        debug_assert!(
            !before.is_revealed() || after.is_revealed(),
            "revealed cells stay revealed"
        );
        debug_assert!(after.holds_invariants(), "broken cell invariants: {after:?}");

        if !after.is_mine() {
            match (before.is_revealed(), after.is_revealed()) {
                (false, true) => self.revealed_safe_count += 1,
                (true, false) => self.revealed_safe_count -= 1,
                _ => {}
            }
        }
        match (before.is_flagged(), after.is_flagged()) {
            (false, true) => self.flag_count += 1,
            (true, false) => self.flag_count -= 1,
            _ => {}
        }

        true
    }
}
