//! The player's mutable state.

use std::collections::BTreeSet;

use hb_core::{Inventory, Item, ItemId, LocationId, Quest, QuestId, World};

/// The player's record of progress on one quest.
///
/// One entry exists per quest ever granted; entries are never removed, and
/// a completed entry is never reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestLogEntry {
    /// The quest this entry tracks.
    pub quest: QuestId,
    /// Whether the quest has been completed.
    pub completed: bool,
}

/// The player character.
///
/// Mutated exclusively through [`Game`](crate::Game) actions while a session
/// is running.
#[derive(Debug, Clone)]
pub struct Player {
    /// Current hit points. May drop to 0 or below, which means death.
    pub current_hit_points: i32,
    /// Maximum hit points, derived from the level on every XP change.
    pub maximum_hit_points: i32,
    /// Gold on hand.
    pub gold: i32,
    /// Total experience points. Never decreases.
    pub experience_points: i32,
    /// Where the player currently stands.
    pub location: LocationId,
    /// The equipped weapon, if any.
    pub current_weapon: Option<ItemId>,
    /// Carried items.
    pub inventory: Inventory,
    /// Quest progress, in the order quests were granted.
    pub quests: Vec<QuestLogEntry>,
    /// Every location the player has ever entered.
    pub visited: BTreeSet<LocationId>,
}

impl Player {
    /// Create a fresh level-1 player at the given location, with nothing in
    /// hand: 10/10 hit points, no gold, no experience.
    pub fn new(location: LocationId) -> Self {
        let mut visited = BTreeSet::new();
        visited.insert(location);
        Self {
            current_hit_points: 10,
            maximum_hit_points: 10,
            gold: 0,
            experience_points: 0,
            location,
            current_weapon: None,
            inventory: Inventory::new(),
            quests: Vec::new(),
            visited,
        }
    }

    /// The player's level: one step per 100 experience points.
    pub fn level(&self) -> i32 {
        self.experience_points / 100 + 1
    }

    /// Whether the player is dead (hit points at or below zero).
    pub fn is_dead(&self) -> bool {
        self.current_hit_points <= 0
    }

    /// Grant experience and recompute the maximum hit points from the
    /// (possibly new) level.
    pub fn add_experience(&mut self, amount: i32) {
        self.experience_points += amount;
        self.maximum_hit_points = self.level() * 10;
    }

    /// Restore hit points, clamped to the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.current_hit_points = (self.current_hit_points + amount).min(self.maximum_hit_points);
    }

    /// Restore hit points to the maximum.
    pub fn heal_fully(&mut self) {
        self.current_hit_points = self.maximum_hit_points;
    }

    /// Whether the player has ever been granted the quest.
    pub fn has_quest(&self, quest: QuestId) -> bool {
        self.quests.iter().any(|entry| entry.quest == quest)
    }

    /// Whether the player has completed the quest.
    pub fn has_completed_quest(&self, quest: QuestId) -> bool {
        self.quests
            .iter()
            .any(|entry| entry.quest == quest && entry.completed)
    }

    /// Record a newly granted, incomplete quest.
    pub fn grant_quest(&mut self, quest: QuestId) {
        self.quests.push(QuestLogEntry {
            quest,
            completed: false,
        });
    }

    /// Flag a granted quest as completed. Completion is one-way.
    pub fn complete_quest(&mut self, quest: QuestId) {
        if let Some(entry) = self.quests.iter_mut().find(|entry| entry.quest == quest) {
            entry.completed = true;
        }
    }

    /// Whether the inventory satisfies every completion requirement.
    pub fn has_all_requirements(&self, quest: &Quest) -> bool {
        quest
            .requirements
            .iter()
            .all(|req| self.inventory.quantity_of(req.item) >= req.quantity)
    }

    /// The weapons currently carried.
    pub fn weapons<'w>(&self, world: &'w World) -> Vec<&'w Item> {
        self.carried_matching(world, Item::is_weapon)
    }

    /// The healing potions currently carried.
    pub fn potions<'w>(&self, world: &'w World) -> Vec<&'w Item> {
        self.carried_matching(world, Item::is_potion)
    }

    fn carried_matching<'w>(&self, world: &'w World, pred: fn(&Item) -> bool) -> Vec<&'w Item> {
        self.inventory
            .lines()
            .iter()
            .filter_map(|line| world.item(line.item))
            .filter(|item| pred(item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_core::content;

    #[test]
    fn fresh_player_starts_at_level_one() {
        let player = Player::new(LocationId(1));
        assert_eq!(player.level(), 1);
        assert_eq!(player.maximum_hit_points, 10);
        assert_eq!(player.gold, 0);
        assert!(player.visited.contains(&LocationId(1)));
    }

    #[test]
    fn experience_raises_level_and_max_hit_points() {
        let mut player = Player::new(LocationId(1));
        player.add_experience(99);
        assert_eq!(player.level(), 1);
        assert_eq!(player.maximum_hit_points, 10);

        player.add_experience(1);
        assert_eq!(player.level(), 2);
        assert_eq!(player.maximum_hit_points, 20);
    }

    #[test]
    fn heal_clamps_to_maximum() {
        let mut player = Player::new(LocationId(1));
        player.current_hit_points = 4;
        player.heal(100);
        assert_eq!(player.current_hit_points, 10);
    }

    #[test]
    fn damage_below_zero_means_dead() {
        let mut player = Player::new(LocationId(1));
        player.current_hit_points -= 12;
        assert!(player.is_dead());
        assert_eq!(player.current_hit_points, -2);
    }

    #[test]
    fn quest_completion_is_one_way() {
        let mut player = Player::new(LocationId(1));
        assert!(!player.has_quest(QuestId(1)));

        player.grant_quest(QuestId(1));
        assert!(player.has_quest(QuestId(1)));
        assert!(!player.has_completed_quest(QuestId(1)));

        player.complete_quest(QuestId(1));
        assert!(player.has_completed_quest(QuestId(1)));
        assert_eq!(player.quests.len(), 1);
    }

    #[test]
    fn weapons_and_potions_filter_the_inventory() {
        let world = content::hollowbrook().unwrap();
        let mut player = Player::new(world.home());
        player.inventory.add(content::ITEM_RUSTY_SWORD, 1);
        player.inventory.add(content::ITEM_HEALING_POTION, 2);
        player.inventory.add(content::ITEM_RAT_TAIL, 3);

        let weapons = player.weapons(&world);
        assert_eq!(weapons.len(), 1);
        assert_eq!(weapons[0].id, content::ITEM_RUSTY_SWORD);

        let potions = player.potions(&world);
        assert_eq!(potions.len(), 1);
        assert_eq!(potions[0].id, content::ITEM_HEALING_POTION);
    }

    proptest::proptest! {
        #[test]
        fn level_formula_holds_for_any_experience(xp in 0i32..1_000_000) {
            let mut player = Player::new(LocationId(1));
            player.add_experience(xp);
            proptest::prop_assert_eq!(player.level(), xp / 100 + 1);
            proptest::prop_assert_eq!(player.maximum_hit_points, player.level() * 10);
        }

        #[test]
        fn heal_never_exceeds_maximum(start in -50i32..=10, amount in 0i32..1000) {
            let mut player = Player::new(LocationId(1));
            player.current_hit_points = start;
            player.heal(amount);
            proptest::prop_assert!(player.current_hit_points <= player.maximum_hit_points);
        }
    }
}
