//! The serializable player snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hb_core::{ItemId, LocationId, QuestId, World};
use hb_engine::Player;

/// One inventory stack in a snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// The stacked item.
    pub item: ItemId,
    /// Units held.
    pub quantity: u32,
}

/// One quest-log line in a snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuestEntry {
    /// The quest.
    pub quest: QuestId,
    /// Whether it was completed.
    pub completed: bool,
}

/// A durable representation of the player's state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Current hit points.
    pub current_hit_points: i32,
    /// Maximum hit points.
    pub maximum_hit_points: i32,
    /// Gold on hand.
    pub gold: i32,
    /// Total experience points.
    pub experience_points: i32,
    /// Current location.
    pub location: LocationId,
    /// Equipped weapon, if any.
    pub current_weapon: Option<ItemId>,
    /// Inventory stacks.
    pub inventory: Vec<InventoryEntry>,
    /// Quest log, in grant order.
    pub quests: Vec<QuestEntry>,
    /// Every location ever visited.
    pub visited: Vec<LocationId>,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
}

impl PlayerSnapshot {
    /// Capture the player's current state.
    pub fn capture(player: &Player) -> Self {
        Self {
            current_hit_points: player.current_hit_points,
            maximum_hit_points: player.maximum_hit_points,
            gold: player.gold,
            experience_points: player.experience_points,
            location: player.location,
            current_weapon: player.current_weapon,
            inventory: player
                .inventory
                .lines()
                .iter()
                .map(|line| InventoryEntry {
                    item: line.item,
                    quantity: line.quantity,
                })
                .collect(),
            quests: player
                .quests
                .iter()
                .map(|entry| QuestEntry {
                    quest: entry.quest,
                    completed: entry.completed,
                })
                .collect(),
            visited: player.visited.iter().copied().collect(),
            saved_at: Utc::now(),
        }
    }

    /// Rebuild a [`Player`] against a world.
    ///
    /// Returns `None` when any stored ID does not resolve in the given
    /// world — the caller should substitute a fresh player.
    pub fn restore(&self, world: &World) -> Option<Player> {
        world.location(self.location)?;
        if let Some(weapon) = self.current_weapon {
            if !world.item(weapon)?.is_weapon() {
                return None;
            }
        }

        let mut player = Player::new(self.location);
        player.current_hit_points = self.current_hit_points;
        player.maximum_hit_points = self.maximum_hit_points;
        player.gold = self.gold;
        player.experience_points = self.experience_points;
        player.current_weapon = self.current_weapon;

        for entry in &self.inventory {
            world.item(entry.item)?;
            player.inventory.add(entry.item, entry.quantity);
        }
        for entry in &self.quests {
            world.quest(entry.quest)?;
            player.grant_quest(entry.quest);
            if entry.completed {
                player.complete_quest(entry.quest);
            }
        }
        for location in &self.visited {
            world.location(*location)?;
            player.visited.insert(*location);
        }

        Some(player)
    }
}
