//! Error types used throughout the crate.

use crate::id::{ItemId, LocationId, MonsterId, QuestId};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building a world catalog.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An item with the same ID was already added.
    #[error("duplicate item id: {0}")]
    DuplicateItem(ItemId),

    /// A monster with the same ID was already added.
    #[error("duplicate monster id: {0}")]
    DuplicateMonster(MonsterId),

    /// A quest with the same ID was already added.
    #[error("duplicate quest id: {0}")]
    DuplicateQuest(QuestId),

    /// A location with the same ID was already added.
    #[error("duplicate location id: {0}")]
    DuplicateLocation(LocationId),

    /// A cross-reference names an item that does not exist.
    #[error("{context} references unknown item {item}")]
    UnknownItem {
        /// Where the dangling reference was found.
        context: String,
        /// The unresolved item ID.
        item: ItemId,
    },

    /// A cross-reference names a monster that does not exist.
    #[error("{context} references unknown monster {monster}")]
    UnknownMonster {
        /// Where the dangling reference was found.
        context: String,
        /// The unresolved monster ID.
        monster: MonsterId,
    },

    /// A cross-reference names a quest that does not exist.
    #[error("{context} references unknown quest {quest}")]
    UnknownQuest {
        /// Where the dangling reference was found.
        context: String,
        /// The unresolved quest ID.
        quest: QuestId,
    },

    /// A cross-reference names a location that does not exist.
    #[error("{context} references unknown location {location}")]
    UnknownLocation {
        /// Where the dangling reference was found.
        context: String,
        /// The unresolved location ID.
        location: LocationId,
    },

    /// A monster spawn entry has a zero weight.
    #[error("location {location} has a zero spawn weight for monster {monster}")]
    ZeroSpawnWeight {
        /// The location holding the bad entry.
        location: LocationId,
        /// The monster with the zero weight.
        monster: MonsterId,
    },

    /// A weapon's damage range is inverted or starts below zero.
    #[error("item {item} has invalid damage range [{min_damage}, {max_damage}]")]
    InvalidDamageRange {
        /// The weapon with the bad range.
        item: ItemId,
        /// The range's lower bound.
        min_damage: i32,
        /// The range's upper bound.
        max_damage: i32,
    },

    /// A monster's maximum damage is negative.
    #[error("monster {monster} has negative max damage {max_damage}")]
    NegativeMonsterDamage {
        /// The monster with the bad value.
        monster: MonsterId,
        /// The negative maximum damage.
        max_damage: i32,
    },

    /// A vendor's stock contains an item priced with the unsellable sentinel.
    #[error("stock of vendor \"{vendor}\" contains unsellable item {item}")]
    UnsellableVendorStock {
        /// The vendor holding the bad stock.
        vendor: String,
        /// The unsellable item.
        item: ItemId,
    },

    /// A loot entry's drop percentage exceeds 100.
    #[error("monster {monster} has drop percentage {percentage} for item {item} (max 100)")]
    InvalidDropPercentage {
        /// The monster holding the bad entry.
        monster: MonsterId,
        /// The item with the bad percentage.
        item: ItemId,
        /// The out-of-range percentage.
        percentage: u32,
    },

    /// The designated home location was never set or does not exist.
    #[error("world has no valid home location")]
    MissingHome,
}
