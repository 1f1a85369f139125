use alloc::vec::Vec;
use core::fmt;

use crate::common::ConfigError;
use crate::ship::ShipSpec;

/// Board sizes offered by the menu, in menu order.
pub const BOARD_SIZES: [BoardSize; 3] = [BoardSize::Four, BoardSize::Five, BoardSize::Six];

pub const GUESS_PROMPT: &str = "Enter a guess (e.g., A1, B2): ";
pub const SIZE_PROMPT: &str = "Which board size? [1, 2, 3]: ";

/// Row labels, one per possible grid row.
pub const ROW_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Square board side length. Only 4, 5 and 6 are playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(into = "usize", try_from = "usize"))]
pub enum BoardSize {
    Four,
    Five,
    Six,
}

impl BoardSize {
    pub fn side(self) -> usize {
        match self {
            BoardSize::Four => 4,
            BoardSize::Five => 5,
            BoardSize::Six => 6,
        }
    }

    /// Fixed fleet for this board size, large ships first.
    pub fn fleet(self) -> Vec<ShipSpec> {
        let (large, small) = match self {
            BoardSize::Four => (1, 1),
            BoardSize::Five => (1, 2),
            BoardSize::Six => (2, 2),
        };
        let mut specs = Vec::with_capacity(large + small);
        specs.extend(core::iter::repeat(ShipSpec::LARGE).take(large));
        specs.extend(core::iter::repeat(ShipSpec::SMALL).take(small));
        specs
    }

    /// Map a zero-based menu index to a board size.
    pub fn from_menu_index(index: usize) -> Option<Self> {
        BOARD_SIZES.get(index).copied()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            4 => Ok(BoardSize::Four),
            5 => Ok(BoardSize::Five),
            6 => Ok(BoardSize::Six),
            other => Err(ConfigError::UnsupportedBoardSize(other)),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> usize {
        size.side()
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

/// Total number of ship cells in a fleet.
pub fn total_ship_cells(specs: &[ShipSpec]) -> usize {
    specs.iter().map(ShipSpec::size).sum()
}
