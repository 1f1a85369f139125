//! Ship categories, templates and orientation.

use core::fmt;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along columns.
    Horizontal,
    /// Extends along rows.
    Vertical,
}

impl Orientation {
    /// Cell offset of segment `i` relative to the ship's origin.
    pub fn step(self, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, i),
            Orientation::Vertical => (i, 0),
        }
    }
}

/// Kind of ship occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShipCategory {
    Large,
    Small,
}

impl ShipCategory {
    pub fn name(self) -> &'static str {
        match self {
            ShipCategory::Large => "large",
            ShipCategory::Small => "small",
        }
    }
}

impl fmt::Display for ShipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Template for a ship waiting to be placed: size and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    size: usize,
    category: ShipCategory,
}

impl ShipSpec {
    pub const LARGE: ShipSpec = ShipSpec::new(3, ShipCategory::Large);
    pub const SMALL: ShipSpec = ShipSpec::new(2, ShipCategory::Small);

    /// Create a new ship template.
    pub const fn new(size: usize, category: ShipCategory) -> Self {
        Self { size, category }
    }

    /// Number of cells the ship covers.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn category(&self) -> ShipCategory {
        self.category
    }
}

/// Where a ship ended up after placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub spec: ShipSpec,
}

impl Placement {
    /// Coordinates covered by the ship, origin first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.spec.size()).map(move |i| {
            let (dr, dc) = self.orientation.step(i);
            (self.row + dr, self.col + dc)
        })
    }
}
