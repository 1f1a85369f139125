use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::{Grid, Occupant},
    common::{ConfigError, CoordError, GuessOutcome},
    config::{total_ship_cells, BoardSize, ROW_LABELS},
    ship::{Placement, ShipSpec},
};

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
}

/// One game from board setup until every ship cell has been hit.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    specs: Vec<ShipSpec>,
    placements: Vec<Placement>,
    remaining: usize,
    guesses: usize,
    announced: bool,
}

impl GameSession {
    /// Set up a session on a fresh grid with the fixed fleet for `size`.
    pub fn new<R: Rng + ?Sized>(
        size: BoardSize,
        rng: &mut R,
        max_attempts: Option<usize>,
    ) -> Result<Self, ConfigError> {
        Self::with_fleet(Grid::new(size), size.fleet(), rng, max_attempts)
    }

    /// Set up a session placing `specs` randomly on `grid`.
    pub fn with_fleet<R: Rng + ?Sized>(
        mut grid: Grid,
        specs: Vec<ShipSpec>,
        rng: &mut R,
        max_attempts: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let placements = grid.place_all(&specs, rng, max_attempts)?;
        log::debug!(
            "new {0}x{0} session with {1} ships",
            grid.side(),
            specs.len()
        );
        Ok(Self::from_parts(grid, specs, placements))
    }

    /// Build a session from ships placed by hand, in order.
    ///
    /// Fails if a ship is empty, runs off the grid or overlaps an earlier one.
    pub fn from_placements(
        size: BoardSize,
        placements: Vec<Placement>,
    ) -> Result<Self, ConfigError> {
        let mut grid = Grid::new(size);
        for p in &placements {
            let fits = p.spec.size() > 0
                && grid.can_place(p.row, p.col, p.spec.size(), p.orientation);
            if !fits {
                return Err(ConfigError::InvalidPlacement {
                    category: p.spec.category(),
                    row: p.row,
                    col: p.col,
                });
            }
            grid.place(p.row, p.col, p.spec.size(), p.orientation, p.spec.category());
        }
        let specs = placements.iter().map(|p| p.spec).collect();
        Ok(Self::from_parts(grid, specs, placements))
    }

    fn from_parts(grid: Grid, specs: Vec<ShipSpec>, placements: Vec<Placement>) -> Self {
        let remaining = total_ship_cells(&specs);
        Self {
            grid,
            specs,
            placements,
            remaining,
            guesses: 0,
            announced: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Fleet this session was populated with.
    pub fn specs(&self) -> &[ShipSpec] {
        &self.specs
    }

    /// Where each ship of the fleet was placed, in fleet order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Ship cells not yet hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of guesses that changed the grid.
    pub fn guesses(&self) -> usize {
        self.guesses
    }

    pub fn status(&self) -> GameStatus {
        if self.remaining == 0 {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Resolve a guess at (`row`, `col`).
    ///
    /// Out-of-bounds coordinates are rejected without touching the grid.
    pub fn resolve_guess(&mut self, row: usize, col: usize) -> Result<GuessOutcome, CoordError> {
        let side = self.grid.side();
        let cell = match self.grid.cell_mut(row, col) {
            Some(cell) => cell,
            None => {
                return Err(CoordError::OutOfBounds {
                    row: ROW_LABELS.get(row).copied().unwrap_or('?'),
                    col: col + 1,
                    size: side,
                })
            }
        };
        if cell.hit {
            return Ok(GuessOutcome::AlreadyGuessed);
        }
        cell.hit = true;
        self.guesses += 1;
        let category = match cell.occupant {
            Occupant::Empty => return Ok(GuessOutcome::Miss),
            Occupant::Ship(category) => category,
        };
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 && !self.announced {
            self.announced = true;
            log::info!("all ships sunk after {} guesses", self.guesses);
            Ok(GuessOutcome::HitAndAllSunk(category))
        } else {
            Ok(GuessOutcome::Hit(category))
        }
    }
}
