//! Item stacks shared by the player and vendors.

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// A stack of one item kind.
///
/// A line never holds a zero quantity; the owning [`Inventory`] drops it
/// the instant its count reaches 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    /// The stacked item.
    pub item: ItemId,
    /// How many units are held (always ≥ 1).
    pub quantity: u32,
}

/// An ordered list of item stacks, one line per item kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    lines: Vec<InventoryLine>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add units of an item, merging into an existing stack if present.
    pub fn add(&mut self, item: ItemId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item == item) {
            line.quantity += quantity;
        } else {
            self.lines.push(InventoryLine { item, quantity });
        }
    }

    /// Remove units of an item.
    ///
    /// A no-op returning `false` when fewer than `quantity` units are held —
    /// the stack is never partially drained. The line is dropped when its
    /// count reaches 0.
    pub fn remove(&mut self, item: ItemId, quantity: u32) -> bool {
        let Some(index) = self
            .lines
            .iter()
            .position(|l| l.item == item && l.quantity >= quantity)
        else {
            return false;
        };
        self.lines[index].quantity -= quantity;
        if self.lines[index].quantity == 0 {
            self.lines.remove(index);
        }
        true
    }

    /// How many units of an item are held.
    pub fn quantity_of(&self, item: ItemId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.item == item)
            .map_or(0, |l| l.quantity)
    }

    /// Whether at least one unit of an item is held.
    pub fn has(&self, item: ItemId) -> bool {
        self.quantity_of(item) > 0
    }

    /// All stacks, in insertion order.
    pub fn lines(&self) -> &[InventoryLine] {
        &self.lines
    }

    /// Whether no items are held.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_merges_stacks() {
        let mut inv = Inventory::new();
        inv.add(ItemId(2), 1);
        inv.add(ItemId(2), 2);
        assert_eq!(inv.lines().len(), 1);
        assert_eq!(inv.quantity_of(ItemId(2)), 3);
    }

    #[test]
    fn add_zero_is_a_no_op() {
        let mut inv = Inventory::new();
        inv.add(ItemId(2), 0);
        assert!(inv.is_empty());
    }

    #[test]
    fn remove_drops_emptied_line() {
        let mut inv = Inventory::new();
        inv.add(ItemId(2), 2);
        assert!(inv.remove(ItemId(2), 2));
        assert!(inv.is_empty());
        assert!(!inv.has(ItemId(2)));
    }

    #[test]
    fn remove_never_partially_drains() {
        let mut inv = Inventory::new();
        inv.add(ItemId(2), 2);
        assert!(!inv.remove(ItemId(2), 3));
        assert_eq!(inv.quantity_of(ItemId(2)), 2);
    }

    #[test]
    fn add_then_remove_round_trips() {
        let mut inv = Inventory::new();
        inv.add(ItemId(1), 1);
        let before = inv.clone();
        inv.add(ItemId(2), 4);
        inv.remove(ItemId(2), 4);
        assert_eq!(inv, before);
    }

    proptest::proptest! {
        #[test]
        fn no_line_ever_holds_zero(ops in proptest::collection::vec((0u32..4, 0u32..5), 0..40)) {
            let mut inv = Inventory::new();
            for (id, qty) in ops {
                if qty % 2 == 0 {
                    inv.add(ItemId(id), qty);
                } else {
                    inv.remove(ItemId(id), qty);
                }
                proptest::prop_assert!(inv.lines().iter().all(|l| l.quantity > 0));
            }
        }

        #[test]
        fn add_remove_same_quantity_round_trips(id in 0u32..8, qty in 1u32..100) {
            let mut inv = Inventory::new();
            inv.add(ItemId(99), 1);
            let before = inv.clone();
            inv.add(ItemId(id), qty);
            inv.remove(ItemId(id), qty);
            proptest::prop_assert_eq!(inv, before);
        }
    }
}
