use thiserror::Error;

use crate::Coord2;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board shape does not hold a whole number of pairs")]
    InvalidBoardShape,
    #[error("Board needs {requested} pairs but only {available} symbols exist")]
    TooManyPairs { requested: usize, available: usize },
    #[error("Deck does not contain every symbol exactly twice")]
    InvalidDeck,
    #[error("Maze layout is empty")]
    EmptyMaze,
    #[error("Maze row {row} has {found} columns, expected {expected}")]
    RaggedMaze { row: usize, found: usize, expected: usize },
    #[error("Unknown maze glyph {glyph:?} at {at:?}")]
    UnknownMazeGlyph { glyph: char, at: Coord2 },
    #[error("Maze layout has no player spawn")]
    MissingPlayerSpawn,
    #[error("Board size {0:?} must hold between 2 and 65535 cells")]
    InvalidBoardSize(Coord2),
    #[error("Maze row {row} is open at one edge but walled at the other")]
    UnpairedTunnel { row: usize },
    #[error("Spawn cell {0:?} is outside the grid")]
    InvalidSpawn(Coord2),
    #[error("Probability must be within 0 and 1")]
    InvalidChance,
    #[error("Win percentage must be within 1 and 100")]
    InvalidWinPercent,
    #[error("Tick interval must be positive")]
    ZeroTickInterval,
}

pub type Result<T> = core::result::Result<T, GameError>;
