//! Common types: guess outcomes and the error taxonomy.

use alloc::string::String;

use crate::ship::ShipCategory;

/// Result of resolving a guess against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "outcome", content = "category", rename_all = "snake_case"))]
pub enum GuessOutcome {
    /// Cell was guessed before; nothing changed.
    AlreadyGuessed,
    /// Guess hit open water.
    Miss,
    /// Guess hit a ship segment.
    Hit(ShipCategory),
    /// Guess hit the last remaining ship segment.
    HitAndAllSunk(ShipCategory),
}

impl GuessOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, GuessOutcome::Hit(_) | GuessOutcome::HitAndAllSunk(_))
    }
}

/// Fleet or board configuration that can never produce a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported board size {0}, expected 4, 5 or 6")]
    UnsupportedBoardSize(usize),
    #[error("fleet needs {cells} cells but the grid only has {capacity}")]
    FleetTooLarge { cells: usize, capacity: usize },
    #[error("a {category} ship of size {size} does not fit on a {side}x{side} grid")]
    ShipTooLong {
        category: ShipCategory,
        size: usize,
        side: usize,
    },
    #[error("ships must cover at least one cell")]
    EmptyShip,
    #[error("a {category} ship at ({row}, {col}) is off the grid or overlaps another ship")]
    InvalidPlacement {
        category: ShipCategory,
        row: usize,
        col: usize,
    },
    #[error("gave up placing a {category} ship after {attempts} attempts")]
    PlacementExhausted {
        category: ShipCategory,
        attempts: usize,
    },
}

/// Reasons a guess string cannot be turned into a grid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("empty guess")]
    Empty,
    #[error("row '{0}' is not a letter")]
    InvalidRow(char),
    #[error("column '{0}' is not a number")]
    InvalidColumn(String),
    #[error("{row}{col} is off the {size}x{size} board")]
    OutOfBounds { row: char, col: usize, size: usize },
}

/// Umbrella error for library callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordError),
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
}
