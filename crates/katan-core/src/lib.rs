//! Katan - a hex board engine for a settlement-building game
//!
//! This crate models the static board topology and resource-distribution
//! logic: the tile/intersection adjacency graph built from fixed layout
//! coordinates, randomized terrain and roll-number assignment, per-
//! intersection resource yield, and settlement/path placement with
//! at-most-one-owner semantics.
//!
//! # Architecture
//!
//! The board is an explicit session value with owning stores for
//! intersections and paths, addressed by stable handles. Everything is
//! single-threaded and synchronous; a host driving several games gives each
//! one its own `Board`.
//!
//! # Modules
//!
//! - [`grid`]: Shared-vertex grid coordinates and the tile corner resolver
//! - [`board`]: Tiles, registries, generation, queries, and placement
//! - [`civ`]: Civilizations and resource tallies
//! - [`render`]: Diagnostic text dump of the board

pub mod board;
pub mod civ;
pub mod grid;
pub mod render;

// Re-export commonly used types
pub use board::{
    Board, BoardError, BoardLayout, BoardSnapshot, Intersection, IntersectionId, Path, PathId,
    ResourceType, TerrainType, Tile, ROLL_SEQUENCE, TILE_COUNT, TILE_HEAD_LOCATIONS,
};
pub use civ::{CivColor, CivId, Civilization, ResourceCounts};
pub use grid::{tile_corners, GridCoord, CORNER_OFFSETS, GRID_HEIGHT, GRID_WIDTH};
pub use render::render_board;
