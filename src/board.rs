//! Grid state and random ship placement.

use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

use crate::common::ConfigError;
use crate::config::{total_ship_cells, BoardSize};
use crate::ship::{Orientation, Placement, ShipCategory, ShipSpec};

/// What sits in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Ship(ShipCategory),
}

/// One grid position: occupant plus whether it has been guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub occupant: Occupant,
    pub hit: bool,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.occupant == Occupant::Empty
    }
}

/// Square grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell is empty and unguessed.
    pub fn new(size: BoardSize) -> Self {
        Self::with_side(size.side())
    }

    /// Create a grid with an arbitrary side length.
    pub(crate) fn with_side(side: usize) -> Self {
        Grid {
            side,
            cells: vec![Cell::default(); side * side],
        }
    }

    /// Number of rows (and columns).
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.side && col < self.side
    }

    /// Cell at (`row`, `col`), or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.in_bounds(row, col) {
            self.cells.get(row * self.side + col)
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if self.in_bounds(row, col) {
            self.cells.get_mut(row * self.side + col)
        } else {
            None
        }
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side.max(1))
    }

    /// Number of cells holding a ship.
    pub fn ship_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty() && !c.hit).count()
    }

    /// Returns `true` iff all `size` cells from (`row`, `col`) along
    /// `orientation` are on the grid and empty.
    pub fn can_place(&self, row: usize, col: usize, size: usize, orientation: Orientation) -> bool {
        (0..size).all(|i| {
            let (dr, dc) = orientation.step(i);
            self.cell(row + dr, col + dc)
                .is_some_and(|cell| cell.is_empty())
        })
    }

    /// Write `category` into the `size` target cells.
    ///
    /// The caller must have checked the placement with [`Grid::can_place`];
    /// cells falling off the grid are skipped rather than re-validated.
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        size: usize,
        orientation: Orientation,
        category: ShipCategory,
    ) {
        for i in 0..size {
            let (dr, dc) = orientation.step(i);
            if let Some(cell) = self.cell_mut(row + dr, col + dc) {
                *cell = Cell {
                    occupant: Occupant::Ship(category),
                    hit: false,
                };
            }
        }
    }

    /// Reject fleets that could never be placed on this grid.
    pub fn check_fleet(&self, specs: &[ShipSpec]) -> Result<(), ConfigError> {
        for spec in specs {
            if spec.size() == 0 {
                return Err(ConfigError::EmptyShip);
            }
            if spec.size() > self.side {
                return Err(ConfigError::ShipTooLong {
                    category: spec.category(),
                    size: spec.size(),
                    side: self.side,
                });
            }
        }
        let cells = total_ship_cells(specs);
        let capacity = self.side * self.side;
        if cells > capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }

    /// Randomly place every ship in `specs`, in order, without overlap.
    ///
    /// Each ship samples a fair-coin orientation and a uniform origin until
    /// [`Grid::can_place`] accepts it. With `max_attempts` set, a ship that
    /// still has no spot after that many samples fails the whole placement.
    pub fn place_all<R: Rng + ?Sized>(
        &mut self,
        specs: &[ShipSpec],
        rng: &mut R,
        max_attempts: Option<usize>,
    ) -> Result<Vec<Placement>, ConfigError> {
        if let Err(e) = self.check_fleet(specs) {
            log::error!("refusing to place fleet: {}", e);
            return Err(e);
        }
        let mut placements = Vec::with_capacity(specs.len());
        for spec in specs {
            let placement = self.random_placement(spec, rng, max_attempts)?;
            self.place(
                placement.row,
                placement.col,
                spec.size(),
                placement.orientation,
                spec.category(),
            );
            placements.push(placement);
        }
        Ok(placements)
    }

    /// Sample a valid, non-overlapping placement for one ship.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        spec: &ShipSpec,
        rng: &mut R,
        max_attempts: Option<usize>,
    ) -> Result<Placement, ConfigError> {
        let mut attempts = 0;
        loop {
            if max_attempts.is_some_and(|cap| attempts >= cap) {
                return Err(ConfigError::PlacementExhausted {
                    category: spec.category(),
                    attempts,
                });
            }
            attempts += 1;
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..self.side);
            let col = rng.random_range(0..self.side);
            if self.can_place(row, col, spec.size(), orientation) {
                log::trace!(
                    "placed {} ship at ({}, {}) {:?} after {} attempts",
                    spec.category(),
                    row,
                    col,
                    orientation,
                    attempts
                );
                return Ok(Placement {
                    row,
                    col,
                    orientation,
                    spec: *spec,
                });
            }
        }
    }
}
