//! Item definitions and the tagged item-kind union.

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// Reserved price meaning "this item cannot be sold to a vendor".
pub const UNSELLABLE_PRICE: i32 = -1;

/// What an item can do, beyond being carried and traded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// An ordinary item with no special use.
    Plain,
    /// A weapon dealing a uniformly random amount of damage per swing.
    Weapon {
        /// Minimum damage per hit (0 means the swing can miss).
        min_damage: i32,
        /// Maximum damage per hit.
        max_damage: i32,
    },
    /// A potion restoring a fixed number of hit points when drunk.
    Potion {
        /// Hit points restored, clamped to the drinker's maximum.
        heal_amount: i32,
    },
}

/// A catalog item definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Catalog identifier.
    pub id: ItemId,
    /// Display name for a single unit.
    pub name: String,
    /// Display name for more than one unit.
    pub name_plural: String,
    /// Trade price in gold, or [`UNSELLABLE_PRICE`].
    pub price: i32,
    /// The item's capability variant.
    pub kind: ItemKind,
}

impl Item {
    /// Create a plain item.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        name_plural: impl Into<String>,
        price: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            name_plural: name_plural.into(),
            price,
            kind: ItemKind::Plain,
        }
    }

    /// Create a weapon.
    pub fn weapon(
        id: ItemId,
        name: impl Into<String>,
        name_plural: impl Into<String>,
        min_damage: i32,
        max_damage: i32,
        price: i32,
    ) -> Self {
        Self {
            kind: ItemKind::Weapon {
                min_damage,
                max_damage,
            },
            ..Self::new(id, name, name_plural, price)
        }
    }

    /// Create a healing potion.
    pub fn potion(
        id: ItemId,
        name: impl Into<String>,
        name_plural: impl Into<String>,
        heal_amount: i32,
        price: i32,
    ) -> Self {
        Self {
            kind: ItemKind::Potion { heal_amount },
            ..Self::new(id, name, name_plural, price)
        }
    }

    /// Whether this item is a weapon.
    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon { .. })
    }

    /// Whether this item is a healing potion.
    pub fn is_potion(&self) -> bool {
        matches!(self.kind, ItemKind::Potion { .. })
    }

    /// Whether this item may be sold to a vendor.
    pub fn is_sellable(&self) -> bool {
        self.price != UNSELLABLE_PRICE
    }

    /// The display name appropriate for the given quantity.
    pub fn display_name(&self, quantity: u32) -> &str {
        if quantity == 1 {
            &self.name
        } else {
            &self.name_plural
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_item_has_no_capabilities() {
        let fur = Item::new(ItemId(3), "Piece of fur", "Pieces of fur", 1);
        assert!(!fur.is_weapon());
        assert!(!fur.is_potion());
        assert!(fur.is_sellable());
    }

    #[test]
    fn weapon_carries_damage_range() {
        let sword = Item::weapon(ItemId(1), "Rusty sword", "Rusty swords", 0, 5, 5);
        assert!(sword.is_weapon());
        assert_eq!(
            sword.kind,
            ItemKind::Weapon {
                min_damage: 0,
                max_damage: 5
            }
        );
    }

    #[test]
    fn unsellable_sentinel() {
        let pass = Item::new(ItemId(10), "Adventurer pass", "Adventurer passes", UNSELLABLE_PRICE);
        assert!(!pass.is_sellable());
    }

    #[test]
    fn display_name_pluralizes() {
        let tail = Item::new(ItemId(2), "Rat tail", "Rat tails", 1);
        assert_eq!(tail.display_name(1), "Rat tail");
        assert_eq!(tail.display_name(3), "Rat tails");
    }
}
