//! Monster templates and loot tables.

use serde::{Deserialize, Serialize};

use crate::id::{ItemId, MonsterId};

/// One possible drop in a monster's loot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootEntry {
    /// The item that may drop.
    pub item: ItemId,
    /// Chance of dropping, in percent (0–100).
    pub drop_percentage: u32,
    /// Granted when no entry in the table dropped at all.
    pub is_default: bool,
}

/// An immutable monster definition in the catalog.
///
/// Live opponents are stamped out of a template per encounter; the template
/// itself never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    /// Catalog identifier.
    pub id: MonsterId,
    /// Display name.
    pub name: String,
    /// Maximum damage dealt per retaliation (rolls are uniform in [0, max]).
    pub max_damage: i32,
    /// Experience points awarded on defeat.
    pub reward_experience: i32,
    /// Gold awarded on defeat.
    pub reward_gold: i32,
    /// Hit points a fresh instance starts with.
    pub hit_points: i32,
    /// Maximum hit points of an instance.
    pub maximum_hit_points: i32,
    /// Possible drops, in table order.
    pub loot_table: Vec<LootEntry>,
}

impl MonsterTemplate {
    /// Create a template with an empty loot table.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: MonsterId,
        name: impl Into<String>,
        max_damage: i32,
        reward_experience: i32,
        reward_gold: i32,
        hit_points: i32,
        maximum_hit_points: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            max_damage,
            reward_experience,
            reward_gold,
            hit_points,
            maximum_hit_points,
            loot_table: Vec::new(),
        }
    }

    /// Append a loot table entry.
    pub fn with_loot(mut self, item: ItemId, drop_percentage: u32, is_default: bool) -> Self {
        self.loot_table.push(LootEntry {
            item,
            drop_percentage,
            is_default,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_appends_loot_in_order() {
        let rat = MonsterTemplate::new(MonsterId(1), "Rat", 5, 3, 10, 3, 3)
            .with_loot(ItemId(2), 75, false)
            .with_loot(ItemId(3), 75, true);

        assert_eq!(rat.loot_table.len(), 2);
        assert_eq!(rat.loot_table[0].item, ItemId(2));
        assert!(rat.loot_table[1].is_default);
    }
}
