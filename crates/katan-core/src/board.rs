//! Game board representation: tiles, shared intersections, and paths.
//!
//! This module contains:
//! - Terrain and resource types and the mapping between them
//! - The intersection and path stores with stable handles
//! - Board layout configuration and randomized generation
//! - Resource aggregation and ownership placement
//!
//! The board is a plain value. A game session owns its own `Board`; there is
//! no process-global state, so independent sessions never share storage.

use crate::civ::{CivId, ResourceCounts};
use crate::grid::{tile_corners, GridCoord};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Number of tiles on the board
pub const TILE_COUNT: usize = 19;

/// Head locations of the 19 tiles, in generation order
pub const TILE_HEAD_LOCATIONS: [GridCoord; TILE_COUNT] = [
    GridCoord::new(3, 0),
    GridCoord::new(7, 0),
    GridCoord::new(5, 0),
    GridCoord::new(2, 2),
    GridCoord::new(4, 2),
    GridCoord::new(6, 2),
    GridCoord::new(8, 2),
    GridCoord::new(1, 4),
    GridCoord::new(3, 4),
    GridCoord::new(5, 4),
    GridCoord::new(7, 4),
    GridCoord::new(9, 4),
    GridCoord::new(2, 6),
    GridCoord::new(4, 6),
    GridCoord::new(6, 6),
    GridCoord::new(8, 6),
    GridCoord::new(3, 8),
    GridCoord::new(5, 8),
    GridCoord::new(7, 8),
];

/// Roll numbers for the 18 non-desert tiles, in tile-generation order.
/// See Illustration Q in the Catan almanac.
pub const ROLL_SEQUENCE: [u8; 18] = [5, 2, 6, 3, 8, 10, 9, 12, 11, 4, 8, 10, 9, 4, 5, 6, 3, 11];

/// Terrain type of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    Hills,
    Forest,
    Mountains,
    Fields,
    Pasture,
    Desert,
}

impl TerrainType {
    /// All terrain types
    pub const ALL: [TerrainType; 6] = [
        TerrainType::Hills,
        TerrainType::Forest,
        TerrainType::Mountains,
        TerrainType::Fields,
        TerrainType::Pasture,
        TerrainType::Desert,
    ];

    /// The resource this terrain yields.
    ///
    /// An explicit total mapping; terrain and resource variants are
    /// independent enumerations and must never be related by discriminant.
    pub fn resource(self) -> ResourceType {
        match self {
            TerrainType::Hills => ResourceType::Brick,
            TerrainType::Forest => ResourceType::Lumber,
            TerrainType::Mountains => ResourceType::Ore,
            TerrainType::Fields => ResourceType::Grain,
            TerrainType::Pasture => ResourceType::Wool,
            TerrainType::Desert => ResourceType::Trash,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            TerrainType::Hills => "Hills",
            TerrainType::Forest => "Forest",
            TerrainType::Mountains => "Mountains",
            TerrainType::Fields => "Fields",
            TerrainType::Pasture => "Pasture",
            TerrainType::Desert => "Desert",
        }
    }
}

/// Resource types yielded by tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Brick,
    Lumber,
    Ore,
    Grain,
    Wool,
    /// Desert yield; counted but worthless
    Trash,
}

/// Stable handle to an intersection in the board's store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntersectionId(usize);

impl IntersectionId {
    /// Index into the intersection store
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Stable handle to a path in the board's store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathId(usize);

impl PathId {
    /// Index into the path store
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A corner shared by up to 3 tiles; the placement site for a settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intersection {
    /// Position on the shared grid
    pub coord: GridCoord,
    /// Owning civilization, if settled
    pub owner: Option<CivId>,
}

/// An edge between two intersections; the placement site for a road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub a: IntersectionId,
    pub b: IntersectionId,
    /// Owning civilization, if claimed
    pub owner: Option<CivId>,
}

/// A single hex tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Head (top-left reference) coordinate
    pub head: GridCoord,
    /// Terrain type
    pub terrain: TerrainType,
    /// Dice number that triggers production (2-12, 0 for desert)
    pub roll_number: u8,
    /// The six corner intersections, clockwise from the head
    pub corners: [IntersectionId; 6],
}

/// Errors from board construction and placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("coordinate ({x}, {y}) is outside the intersection grid")]
    InvalidCoordinate { x: i32, y: i32 },

    #[error("already owned by another civilization")]
    AlreadyOwned,

    #[error("terrain pool exhausted before all tiles were assigned")]
    EmptyTerrainPool,

    #[error("roll sequence exhausted before all non-desert tiles were assigned")]
    RollSequenceExhausted,

    #[error("layout has {terrain} terrain entries for {tiles} tiles")]
    LayoutMismatch { tiles: usize, terrain: usize },

    #[error("no such intersection")]
    UnknownIntersection,

    #[error("no such path")]
    UnknownPath,
}

/// Board generation input: head locations, terrain multiset, roll sequence.
///
/// `Default` is the reference layout. The terrain pool must have one entry
/// per head and the roll sequence one entry per non-desert pool entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardLayout {
    pub heads: Vec<GridCoord>,
    pub terrain_pool: Vec<TerrainType>,
    pub roll_sequence: Vec<u8>,
}

impl BoardLayout {
    /// The fixed reference layout: 19 tiles, the standard terrain multiset
    /// (4 Forest, 4 Pasture, 4 Fields, 3 Hills, 3 Mountains, 1 Desert), and
    /// the fixed 18-entry roll sequence.
    pub fn standard() -> Self {
        use TerrainType::*;
        Self {
            heads: TILE_HEAD_LOCATIONS.to_vec(),
            terrain_pool: vec![
                Forest, Forest, Forest, Forest, Pasture, Pasture, Pasture, Pasture, Fields,
                Fields, Fields, Fields, Hills, Hills, Hills, Mountains, Mountains, Mountains,
                Desert,
            ],
            roll_sequence: ROLL_SEQUENCE.to_vec(),
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Draw a uniformly random element from the pool, without replacement.
///
/// Removal is swap-based (`swap_remove`): O(1) but order-destroying. The
/// removal policy is part of the contract; under a seeded RNG the draw
/// sequence depends on it.
fn draw_terrain<R: Rng>(
    pool: &mut Vec<TerrainType>,
    rng: &mut R,
) -> Result<TerrainType, BoardError> {
    if pool.is_empty() {
        return Err(BoardError::EmptyTerrainPool);
    }
    let index = rng.gen_range(0..pool.len());
    Ok(pool.swap_remove(index))
}

/// The complete game board
#[derive(Debug, Clone)]
pub struct Board {
    /// The fixed set of tiles
    tiles: Vec<Tile>,
    /// All intersections, owned here; everything else holds handles
    intersections: Vec<Intersection>,
    /// All paths
    paths: Vec<Path>,
    /// Coordinate index into the intersection store
    by_coord: HashMap<GridCoord, IntersectionId>,
}

impl Board {
    /// Create an empty board with no tiles
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            intersections: Vec::new(),
            paths: Vec::new(),
            by_coord: HashMap::new(),
        }
    }

    /// Generate the standard board with randomized terrain
    pub fn standard() -> Result<Self, BoardError> {
        let mut rng = rand::thread_rng();
        Self::standard_with_rng(&mut rng)
    }

    /// Generate the standard board with a provided RNG.
    /// This allows deterministic board generation when needed.
    pub fn standard_with_rng<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        Self::generate(&BoardLayout::standard(), rng)
    }

    /// Generate a board from a layout: for each head in order, resolve the
    /// six corner coordinates, register the shared intersections (unowned),
    /// and assign a terrain drawn without replacement from the pool plus the
    /// next roll number. The desert takes roll number 0 and does not consume
    /// a roll-sequence entry.
    pub fn generate<R: Rng>(layout: &BoardLayout, rng: &mut R) -> Result<Self, BoardError> {
        if layout.terrain_pool.len() != layout.heads.len() {
            return Err(BoardError::LayoutMismatch {
                tiles: layout.heads.len(),
                terrain: layout.terrain_pool.len(),
            });
        }

        let mut board = Self::new();
        let mut pool = layout.terrain_pool.clone();
        let mut rolls = layout.roll_sequence.iter().copied();

        for &head in &layout.heads {
            let mut corners = [IntersectionId(0); 6];
            for (slot, coord) in tile_corners(head).into_iter().enumerate() {
                corners[slot] = board.get_or_create_intersection(coord)?;
            }

            let terrain = draw_terrain(&mut pool, rng)?;
            let roll_number = if terrain == TerrainType::Desert {
                0
            } else {
                rolls.next().ok_or(BoardError::RollSequenceExhausted)?
            };

            board.tiles.push(Tile {
                head,
                terrain,
                roll_number,
                corners,
            });
        }

        Ok(board)
    }

    // ==================== Intersection Registry ====================

    /// Return the canonical intersection at `coord`, creating it (unowned)
    /// on first reference. Two tiles referencing the same coordinate resolve
    /// to the same handle.
    pub fn get_or_create_intersection(
        &mut self,
        coord: GridCoord,
    ) -> Result<IntersectionId, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::InvalidCoordinate {
                x: coord.x,
                y: coord.y,
            });
        }

        if let Some(&id) = self.by_coord.get(&coord) {
            return Ok(id);
        }

        let id = IntersectionId(self.intersections.len());
        self.intersections.push(Intersection { coord, owner: None });
        self.by_coord.insert(coord, id);
        Ok(id)
    }

    /// Non-creating lookup by coordinate
    pub fn intersection_at(&self, coord: GridCoord) -> Option<IntersectionId> {
        self.by_coord.get(&coord).copied()
    }

    /// Get an intersection by handle
    pub fn intersection(&self, id: IntersectionId) -> Option<&Intersection> {
        self.intersections.get(id.0)
    }

    /// Iterate all intersections with their handles
    pub fn intersections(&self) -> impl Iterator<Item = (IntersectionId, &Intersection)> {
        self.intersections
            .iter()
            .enumerate()
            .map(|(i, inter)| (IntersectionId(i), inter))
    }

    // ==================== Path Registry ====================

    /// Allocate a new path between two intersections.
    ///
    /// Paths are not deduplicated by endpoint pair; every call allocates a
    /// fresh entry. Callers must not create the same (a, b) path twice unless
    /// duplicate paths are intended.
    pub fn create_path(
        &mut self,
        a: IntersectionId,
        b: IntersectionId,
        owner: Option<CivId>,
    ) -> Result<PathId, BoardError> {
        if a.0 >= self.intersections.len() || b.0 >= self.intersections.len() {
            return Err(BoardError::UnknownIntersection);
        }

        let id = PathId(self.paths.len());
        self.paths.push(Path { a, b, owner });
        Ok(id)
    }

    /// Get a path by handle
    pub fn path(&self, id: PathId) -> Option<&Path> {
        self.paths.get(id.0)
    }

    /// Iterate all paths with their handles
    pub fn paths(&self) -> impl Iterator<Item = (PathId, &Path)> {
        self.paths.iter().enumerate().map(|(i, p)| (PathId(i), p))
    }

    // ==================== Query Methods ====================

    /// All tiles, in generation order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Get the tile with the given head coordinate
    pub fn tile_at_head(&self, head: GridCoord) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.head == head)
    }

    /// The resource yield at an intersection: every tile whose corner set
    /// contains it contributes 1 of its terrain's resource. An intersection
    /// touches up to 3 tiles, so distinct adjacent terrains all show up in
    /// the returned counts. Recomputed on every call, never cached.
    pub fn resources_at(&self, id: IntersectionId) -> ResourceCounts {
        let mut counts = ResourceCounts::new();
        for tile in &self.tiles {
            if tile.corners.contains(&id) {
                counts.add(tile.terrain.resource(), 1);
            }
        }
        counts
    }

    /// Total resource yield over every intersection owned by a civilization
    pub fn yield_for(&self, civ: CivId) -> ResourceCounts {
        let mut total = ResourceCounts::new();
        for (id, inter) in self.intersections() {
            if inter.owner == Some(civ) {
                total.add_counts(&self.resources_at(id));
            }
        }
        total
    }

    // ==================== Ownership Operations ====================

    /// Claim an intersection for a civilization. Fails with `AlreadyOwned`
    /// (leaving state unchanged) if any civilization already owns it.
    pub fn place_settlement(&mut self, id: IntersectionId, civ: CivId) -> Result<(), BoardError> {
        let inter = self
            .intersections
            .get_mut(id.0)
            .ok_or(BoardError::UnknownIntersection)?;
        if inter.owner.is_some() {
            return Err(BoardError::AlreadyOwned);
        }
        inter.owner = Some(civ);
        Ok(())
    }

    /// Claim a path for a civilization; same contract as settlements.
    pub fn place_path(&mut self, id: PathId, civ: CivId) -> Result<(), BoardError> {
        let path = self.paths.get_mut(id.0).ok_or(BoardError::UnknownPath)?;
        if path.owner.is_some() {
            return Err(BoardError::AlreadyOwned);
        }
        path.owner = Some(civ);
        Ok(())
    }

    // ==================== Snapshot ====================

    /// A JSON-friendly copy of the board state. The coordinate index is
    /// derived data and is rebuilt on restore.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            tiles: self.tiles.clone(),
            intersections: self.intersections.clone(),
            paths: self.paths.clone(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable board state with plain vectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub tiles: Vec<Tile>,
    pub intersections: Vec<Intersection>,
    pub paths: Vec<Path>,
}

impl BoardSnapshot {
    /// Rebuild a board from this snapshot, reconstructing the coordinate
    /// index from empty state and validating every handle.
    pub fn restore(&self) -> Result<Board, BoardError> {
        let mut by_coord = HashMap::new();
        for (i, inter) in self.intersections.iter().enumerate() {
            if !inter.coord.in_bounds() {
                return Err(BoardError::InvalidCoordinate {
                    x: inter.coord.x,
                    y: inter.coord.y,
                });
            }
            by_coord.insert(inter.coord, IntersectionId(i));
        }

        let valid = |id: IntersectionId| id.0 < self.intersections.len();
        for tile in &self.tiles {
            if !tile.corners.iter().all(|&c| valid(c)) {
                return Err(BoardError::UnknownIntersection);
            }
        }
        for path in &self.paths {
            if !valid(path.a) || !valid(path.b) {
                return Err(BoardError::UnknownIntersection);
            }
        }

        Ok(Board {
            tiles: self.tiles.clone(),
            intersections: self.intersections.clone(),
            paths: self.paths.clone(),
            by_coord,
        })
    }
}
