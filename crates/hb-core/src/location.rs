//! Location definitions, directions, and vendors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::{ItemId, LocationId, MonsterId, QuestId};
use crate::inventory::Inventory;

/// A compass direction the player can travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Direction {
    /// All four directions, in display order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Parse a direction name or single-letter abbreviation.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "east" | "e" => Some(Direction::East),
            "south" | "s" => Some(Direction::South),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    /// The lowercase direction name.
    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One entry in a location's weighted monster-encounter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSpawn {
    /// The monster template that can appear here.
    pub monster: MonsterId,
    /// Relative spawn weight (> 0; weights need not total 100).
    pub weight: u32,
}

/// A trader working at a location.
///
/// The vendor's stock is the one piece of catalog state mutated after world
/// construction — trade moves items between it and the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Display name.
    pub name: String,
    /// Items for sale.
    pub inventory: Inventory,
}

impl Vendor {
    /// Create a vendor with empty stock.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: Inventory::new(),
        }
    }

    /// Stock the vendor with units of an item.
    pub fn with_stock(mut self, item: ItemId, quantity: u32) -> Self {
        self.inventory.add(item, quantity);
        self
    }
}

/// A place on the world map.
///
/// Neighbor links form a directed graph; a link back is not required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Catalog identifier.
    pub id: LocationId,
    /// Display name.
    pub name: String,
    /// Narrated when the location is described.
    pub description: String,
    /// Item the player must hold to enter, if any.
    pub required_item: Option<ItemId>,
    /// Quest offered here, if any.
    pub quest: Option<QuestId>,
    /// Weighted monster-encounter table (empty when nothing spawns here).
    pub monsters: Vec<MonsterSpawn>,
    /// Trader working here, if any.
    pub vendor: Option<Vendor>,
    /// Neighbor to the north.
    pub north: Option<LocationId>,
    /// Neighbor to the east.
    pub east: Option<LocationId>,
    /// Neighbor to the south.
    pub south: Option<LocationId>,
    /// Neighbor to the west.
    pub west: Option<LocationId>,
}

impl Location {
    /// Create a location with no requirements, quest, monsters, vendor,
    /// or neighbors.
    pub fn new(id: LocationId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            required_item: None,
            quest: None,
            monsters: Vec::new(),
            vendor: None,
            north: None,
            east: None,
            south: None,
            west: None,
        }
    }

    /// Require an item to enter.
    pub fn with_required_item(mut self, item: ItemId) -> Self {
        self.required_item = Some(item);
        self
    }

    /// Offer a quest here.
    pub fn with_quest(mut self, quest: QuestId) -> Self {
        self.quest = Some(quest);
        self
    }

    /// Append a weighted monster spawn.
    pub fn with_monster(mut self, monster: MonsterId, weight: u32) -> Self {
        self.monsters.push(MonsterSpawn { monster, weight });
        self
    }

    /// Place a vendor here.
    pub fn with_vendor(mut self, vendor: Vendor) -> Self {
        self.vendor = Some(vendor);
        self
    }

    /// The neighbor in the given direction, if any.
    pub fn neighbor(&self, direction: Direction) -> Option<LocationId> {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Directions with a neighbor, in display order.
    pub fn exits(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.neighbor(*d).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parse_accepts_abbreviations() {
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("N"), Some(Direction::North));
        assert_eq!(Direction::parse("w"), Some(Direction::West));
        assert_eq!(Direction::parse("up"), None);
    }

    #[test]
    fn neighbor_lookup_by_direction() {
        let mut square = Location::new(LocationId(2), "Town square", "You see a fountain.");
        square.north = Some(LocationId(4));
        square.south = Some(LocationId(1));

        assert_eq!(square.neighbor(Direction::North), Some(LocationId(4)));
        assert_eq!(square.neighbor(Direction::East), None);
        assert_eq!(square.exits(), vec![Direction::North, Direction::South]);
    }

    #[test]
    fn vendor_stock_merges() {
        let vendor = Vendor::new("Bob the Rat-Catcher")
            .with_stock(ItemId(3), 5)
            .with_stock(ItemId(3), 2);
        assert_eq!(vendor.inventory.quantity_of(ItemId(3)), 7);
    }
}
