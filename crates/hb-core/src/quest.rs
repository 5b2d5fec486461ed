//! Quest definitions and completion requirements.

use serde::{Deserialize, Serialize};

use crate::id::{ItemId, QuestId};

/// One item the player must hand over to complete a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRequirement {
    /// The required item.
    pub item: ItemId,
    /// How many units are required.
    pub quantity: u32,
}

/// An immutable quest definition in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Catalog identifier.
    pub id: QuestId,
    /// Display name.
    pub name: String,
    /// Narrated when the quest is granted.
    pub description: String,
    /// Experience points awarded on completion.
    pub reward_experience: i32,
    /// Gold awarded on completion.
    pub reward_gold: i32,
    /// Item awarded on completion.
    pub reward_item: ItemId,
    /// Items consumed on completion, in order.
    pub requirements: Vec<QuestRequirement>,
}

impl Quest {
    /// Create a quest with no requirements.
    pub fn new(
        id: QuestId,
        name: impl Into<String>,
        description: impl Into<String>,
        reward_experience: i32,
        reward_gold: i32,
        reward_item: ItemId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            reward_experience,
            reward_gold,
            reward_item,
            requirements: Vec::new(),
        }
    }

    /// Append a completion requirement.
    pub fn with_requirement(mut self, item: ItemId, quantity: u32) -> Self {
        self.requirements.push(QuestRequirement { item, quantity });
        self
    }
}
