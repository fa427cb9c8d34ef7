use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer should draw for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    /// Hidden cell held down by a chord gesture.
    Pressed,
    Flagged,
    /// Flag left on a safe cell after losing.
    WrongFlag,
    Revealed(u8),
    Mine,
    Exploded,
}

impl CellView {
    pub fn of(cell: &Cell, chorded: bool, state: GameState) -> Self {
        if cell.is_exploded() {
            Self::Exploded
        } else if cell.is_revealed() {
            cell.kind().number().map_or(Self::Mine, Self::Revealed)
        } else if cell.is_flagged() {
            if state == GameState::Lost && !cell.is_mine() {
                Self::WrongFlag
            } else {
                Self::Flagged
            }
        } else if chorded {
            Self::Pressed
        } else {
            Self::Hidden
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Hidden => '#',
            Self::Pressed => 'o',
            Self::Flagged => 'F',
            Self::WrongFlag => 'X',
            Self::Revealed(0) => '.',
            Self::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
            Self::Mine => '*',
            Self::Exploded => '@',
        }
    }
}

/// Full board state for a redraw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub state: GameState,
    pub mines_left: isize,
    /// Indexed `[y, x]`.
    pub cells: Array2<CellView>,
}

impl Snapshot {
    /// `None` until a game has been started.
    pub fn from_controller(controller: &GameController) -> Option<Self> {
        let grid = controller.grid()?;
        let state = controller.game_state();
        let cells = grid
            .cell_array()
            .map(|cell| CellView::of(cell, controller.is_chorded(cell.position()), state));

        Some(Self {
            size: grid.size(),
            state,
            mines_left: controller.mines_left(),
            cells,
        })
    }

    pub fn view_at(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}

/// One line per row, top row first.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.rows().into_iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for view in row {
                write!(f, "{}", view.glyph())?;
            }
        }
        Ok(())
    }
}
