use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: Coord, height: Coord },
    #[error("Too many mines, requested {mines} but the board only has {capacity} cells")]
    TooManyMines { mines: CellCount, capacity: CellCount },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
