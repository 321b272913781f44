//! Shared-vertex grid coordinates for the hex board.
//!
//! Tiles do not store their corners as local geometry; every corner lives on
//! a single bounded integer grid so that adjacent tiles resolve their shared
//! corners to the same coordinate. A tile is addressed by its *head*, the
//! top-left reference coordinate, and its six corners are fixed offsets from
//! the head.

use serde::{Deserialize, Serialize};

/// Number of rows in the intersection grid.
pub const GRID_HEIGHT: i32 = 12;
/// Number of columns in the intersection grid.
pub const GRID_WIDTH: i32 = 11;

/// Corner offsets from a tile's head coordinate, clockwise from the head.
///
/// Tiles in the same row share a vertical edge and tiles in adjacent rows
/// interleave, which is why the pattern dips one column left and right while
/// descending three rows.
pub const CORNER_OFFSETS: [(i32, i32); 6] =
    [(0, 0), (1, 1), (1, 2), (0, 3), (-1, 2), (-1, 1)];

/// A coordinate on the shared intersection grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct GridCoord {
    /// Column (0-based, increases going east)
    pub x: i32,
    /// Row (0-based, increases going south)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies inside the fixed grid bounds
    pub const fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < GRID_WIDTH && self.y >= 0 && self.y < GRID_HEIGHT
    }

    /// This coordinate translated by (dx, dy)
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The six corner coordinates of the tile with the given head.
///
/// Pure function of the head; bounds are checked when the corners are
/// registered, not here.
pub fn tile_corners(head: GridCoord) -> [GridCoord; 6] {
    CORNER_OFFSETS.map(|(dx, dy)| head.offset(dx, dy))
}
