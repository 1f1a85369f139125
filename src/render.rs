//! Text rendering of the grid.

use core::fmt;

use crate::board::{Cell, Grid, Occupant};
use crate::config::ROW_LABELS;
use crate::ship::ShipCategory;

pub const UNKNOWN_MARKER: &str = "-";
/// Guessed empty cell. Misses get their own marker instead of the generic
/// category marker so they stay distinguishable from ship hits.
pub const MISS_MARKER: &str = "o";

pub const VICTORY_BANNER: &str = r"
========
__   _______ _   _   _    _ _____ _   _
\ \ / /  _  | | | | | |  | |_   _| \ | |
 \ V /| | | | | | | | |  | | | | |  \| |
  \ / | | | | | | | | |/\| | | | | . ` |
  | | \ \_/ / |_| | \  /\  /_| |_| |\  |
  \_/  \___/ \___/   \/  \/ \___/\_| \_/
========";

pub fn category_marker(category: ShipCategory) -> &'static str {
    match category {
        ShipCategory::Large => "🔵",
        ShipCategory::Small => "🟠",
    }
}

/// Marker for one cell. `debug` reveals ships that have not been hit.
pub fn cell_marker(cell: &Cell, debug: bool) -> &'static str {
    match (cell.occupant, cell.hit) {
        (Occupant::Ship(category), true) => category_marker(category),
        (Occupant::Ship(category), false) if debug => category_marker(category),
        (Occupant::Empty, true) => MISS_MARKER,
        _ => UNKNOWN_MARKER,
    }
}

/// Tabular view of a grid: a column header, then one labelled line per row.
pub struct BoardView<'a> {
    grid: &'a Grid,
    debug: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid, debug: false }
    }

    /// View that shows every ship regardless of hit state.
    pub fn debug(grid: &'a Grid) -> Self {
        Self { grid, debug: true }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.grid.side() {
            write!(f, " {:>2}", c + 1)?;
        }
        writeln!(f)?;
        for (r, row) in self.grid.rows().enumerate() {
            let label = ROW_LABELS.get(r).copied().unwrap_or('?');
            write!(f, " {} ", label)?;
            for cell in row {
                write!(f, " {:>2}", cell_marker(cell, self.debug))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
