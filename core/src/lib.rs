#![no_std]

extern crate alloc;

use core::ops::{BitOr, Index};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use controller::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod controller;
mod error;
mod generator;
mod grid;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    /// Clamps every field into range instead of rejecting it.
    pub fn clamped(width: Coord, height: Coord, mines: CellCount) -> Self {
        let width = width.clamp(1, Coord::MAX);
        let height = height.clamp(1, Coord::MAX);
        let mines = mines.clamp(0, mult(width, height));
        Self::new_unchecked(width, height, mines)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(30, 16, 99)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            }
            .into());
        }

        let capacity = self.total_cells();
        if self.mines > capacity {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                capacity,
            }
            .into());
        }

        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(16, 16, 32)
    }
}

/// Where the mines are, independent of any player-visible state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    size: Coord2,
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn empty(size: Coord2) -> Self {
        Self {
            size,
            mine_mask: Array2::default((usize::from(size.1), usize::from(size.0))),
            mine_count: 0,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(ConfigError::EmptyBoard {
                width: size.0,
                height: size.1,
            }
            .into());
        }

        let mut layout = Self::empty(size);
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            layout.place_mine(coords);
        }

        Ok(layout)
    }

    /// Marks `coords` as a mine, returns `false` when it already was one.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        match self.mine_mask.get_mut(coords.to_nd_index()) {
            Some(slot) if !*slot => {
                *slot = true;
                self.mine_count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size.0, self.size.1, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Out of bounds coordinates never hold a mine.
    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        NeighborIter::moore(coords, self.size)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Merges outcomes of a multi-cell reveal, the most decisive one wins.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
