//! Civilizations and their resource stockpiles.
//!
//! This module contains:
//! - Civilization identity and colors
//! - ResourceCounts, the per-resource tally used both for a civilization's
//!   stockpile and for query-time yields from the board

use crate::board::ResourceType;
use serde::{Deserialize, Serialize};

/// Civilization identifier (0-3 for a 4-player game)
pub type CivId = u8;

/// Civilization color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CivColor {
    Red,
    Orange,
    White,
    Blue,
}

impl CivColor {
    /// Get the color for a civilization index
    pub fn for_civ(id: CivId) -> Self {
        match id % 4 {
            0 => CivColor::Red,
            1 => CivColor::Orange,
            2 => CivColor::White,
            _ => CivColor::Blue,
        }
    }
}

/// A tally with one non-negative count per resource type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCounts {
    pub brick: u32,
    pub lumber: u32,
    pub ore: u32,
    pub grain: u32,
    pub wool: u32,
    pub trash: u32,
}

impl ResourceCounts {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tally with specific amounts
    pub fn with_amounts(
        brick: u32,
        lumber: u32,
        ore: u32,
        grain: u32,
        wool: u32,
        trash: u32,
    ) -> Self {
        Self {
            brick,
            lumber,
            ore,
            grain,
            wool,
            trash,
        }
    }

    /// Get the count of a specific resource
    pub fn get(&self, resource: ResourceType) -> u32 {
        match resource {
            ResourceType::Brick => self.brick,
            ResourceType::Lumber => self.lumber,
            ResourceType::Ore => self.ore,
            ResourceType::Grain => self.grain,
            ResourceType::Wool => self.wool,
            ResourceType::Trash => self.trash,
        }
    }

    /// Add to the count of a specific resource
    pub fn add(&mut self, resource: ResourceType, amount: u32) {
        match resource {
            ResourceType::Brick => self.brick += amount,
            ResourceType::Lumber => self.lumber += amount,
            ResourceType::Ore => self.ore += amount,
            ResourceType::Grain => self.grain += amount,
            ResourceType::Wool => self.wool += amount,
            ResourceType::Trash => self.trash += amount,
        }
    }

    /// Add another tally to this one
    pub fn add_counts(&mut self, other: &ResourceCounts) {
        self.brick += other.brick;
        self.lumber += other.lumber;
        self.ore += other.ore;
        self.grain += other.grain;
        self.wool += other.wool;
        self.trash += other.trash;
    }

    /// Total number of resources counted
    pub fn total(&self) -> u32 {
        self.brick + self.lumber + self.ore + self.grain + self.wool + self.trash
    }

    /// Check if every count is zero
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// A single player civilization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Civilization {
    /// Civilization ID (0-3)
    pub id: CivId,
    /// Color tag for presentation
    pub color: CivColor,
    /// Accumulated resources
    pub resources: ResourceCounts,
}

impl Civilization {
    /// Create a new civilization with an empty stockpile
    pub fn new(id: CivId) -> Self {
        Self {
            id,
            color: CivColor::for_civ(id),
            resources: ResourceCounts::new(),
        }
    }

    /// Add a yield into the stockpile
    pub fn collect(&mut self, counts: &ResourceCounts) {
        self.resources.add_counts(counts);
    }
}
