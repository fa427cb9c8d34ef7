use serde::{Deserialize, Serialize};

use crate::Coord2;

/// What lies under a cell. Frozen once the grid has been generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Mine,
    /// Count of adjacent mines, always in `1..=8`.
    Number(u8),
}

impl CellKind {
    /// Kind of a safe cell with `adjacent_mines` mines around it.
    pub const fn from_adjacent_mines(adjacent_mines: u8) -> Self {
        if adjacent_mines == 0 {
            Self::Empty
        } else {
            Self::Number(adjacent_mines)
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacent mine count shown when the cell is open, `None` for mines.
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::Number(count) => Some(count),
            Self::Mine => None,
        }
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Empty
    }
}

/// One grid position.
///
/// Invariants held by every write path: `exploded` implies a revealed mine,
/// `flagged` implies not `revealed`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Coord2,
    pub(crate) kind: CellKind,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) exploded: bool,
}

impl Cell {
    pub(crate) const fn new(position: Coord2) -> Self {
        Self {
            position,
            kind: CellKind::Empty,
            revealed: false,
            flagged: false,
            exploded: false,
        }
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn is_mine(&self) -> bool {
        self.kind.is_mine()
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_exploded(&self) -> bool {
        self.exploded
    }

    /// A revealed number cell, with its count.
    pub const fn revealed_number(&self) -> Option<u8> {
        match (self.revealed, self.kind) {
            (true, CellKind::Number(count)) => Some(count),
            _ => None,
        }
    }

    pub(crate) const fn holds_invariants(&self) -> bool {
        (!self.exploded || (self.revealed && self.kind.is_mine()))
            && !(self.flagged && self.revealed)
    }
}
