//! Core types for Hollowbrook: items, monsters, quests, locations, and the
//! world catalog.
//!
//! This crate defines the immutable game-content data model. It is independent
//! of the rules engine — you can construct a [`World`] programmatically
//! through [`WorldBuilder`], or use the built-in content from [`content`].

/// The built-in Hollowbrook world content.
pub mod content;
/// Error types used throughout the crate.
pub mod error;
/// Typed identifiers for catalog entries.
pub mod id;
/// Item stacks shared by the player and vendors.
pub mod inventory;
/// Item definitions and the tagged item-kind union.
pub mod item;
/// Location definitions, directions, and vendors.
pub mod location;
/// Monster templates and loot tables.
pub mod monster;
/// Quest definitions and completion requirements.
pub mod quest;
/// The immutable world catalog and its validating builder.
pub mod world;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export identifier types.
pub use id::{ItemId, LocationId, MonsterId, QuestId};
/// Re-export inventory types.
pub use inventory::{Inventory, InventoryLine};
/// Re-export item types.
pub use item::{Item, ItemKind, UNSELLABLE_PRICE};
/// Re-export location types.
pub use location::{Direction, Location, MonsterSpawn, Vendor};
/// Re-export monster types.
pub use monster::{LootEntry, MonsterTemplate};
/// Re-export quest types.
pub use quest::{Quest, QuestRequirement};
/// Re-export world types.
pub use world::{World, WorldBuilder};
