//! The game session and all player actions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hb_core::{Direction, ItemId, ItemKind, Location, LocationId, QuestId, World};

use crate::config::GameConfig;
use crate::encounter::{self, MonsterInstance};
use crate::error::{EngineError, EngineResult};
use crate::log::{Change, Changes, GameLog, Narration};
use crate::player::Player;

/// A running game session.
///
/// Owns the world catalog, the player, the current encounter (if any), the
/// RNG, and the narration log. All player actions go through here; expected
/// rule violations narrate a message and leave state unchanged rather than
/// returning errors.
#[derive(Debug)]
pub struct Game {
    world: World,
    player: Player,
    current_monster: Option<MonsterInstance>,
    rng: StdRng,
    log: GameLog,
}

impl Game {
    /// Start a session with a fresh default player: at home, fully healed,
    /// carrying the world's starter weapon (its lowest-ID weapon, if any).
    pub fn new(world: World, config: GameConfig) -> Self {
        let mut player = Player::new(world.home());
        if let Some(starter) = world
            .items()
            .filter(|item| item.is_weapon())
            .map(|item| item.id)
            .min()
        {
            player.inventory.add(starter, 1);
        }

        Self {
            world,
            player,
            current_monster: None,
            rng: StdRng::seed_from_u64(config.seed),
            log: GameLog::new(),
        }
    }

    /// Resume a session with a restored player.
    ///
    /// Fails when the player's location or equipped weapon does not resolve
    /// against this world — the caller should fall back to a fresh player.
    pub fn with_player(world: World, player: Player, config: GameConfig) -> EngineResult<Self> {
        if world.location(player.location).is_none() {
            return Err(EngineError::UnknownPlayerLocation(player.location));
        }
        if let Some(weapon) = player.current_weapon {
            if !world.item(weapon).is_some_and(|item| item.is_weapon()) {
                return Err(EngineError::InvalidEquippedWeapon(weapon));
            }
        }

        Ok(Self {
            world,
            player,
            current_monster: None,
            rng: StdRng::seed_from_u64(config.seed),
            log: GameLog::new(),
        })
    }

    /// The world catalog.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player, for persistence and tests.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The monster currently opposing the player, if any.
    pub fn current_monster(&self) -> Option<&MonsterInstance> {
        self.current_monster.as_ref()
    }

    /// The location the player is standing at.
    pub fn current_location(&self) -> &Location {
        self.world
            .location(self.player.location)
            .expect("player location is validated at construction and on every move")
    }

    /// The neighbor in the given direction from the current location.
    pub fn exit(&self, direction: Direction) -> Option<LocationId> {
        self.current_location().neighbor(direction)
    }

    /// Take all pending narration, in emission order.
    pub fn drain_messages(&mut self) -> Vec<Narration> {
        self.log.drain_messages()
    }

    /// Take the change kinds accumulated since the last call.
    pub fn take_changes(&mut self) -> Changes {
        self.log.take_changes()
    }

    /// Move one step in a direction. A no-op when no path leads that way.
    pub fn move_in(&mut self, direction: Direction) {
        if let Some(destination) = self.exit(direction) {
            self.enter(destination);
        }
    }

    /// Enter a location.
    ///
    /// Blocked (narrated, no state change) when the location requires an
    /// item the player lacks. Otherwise the player moves, is fully healed
    /// (re-entering heals too), quest progress is checked, and a fresh
    /// encounter is rolled.
    pub fn enter(&mut self, destination: LocationId) {
        let Some(location) = self.world.location(destination) else {
            tracing::warn!(%destination, "enter: location not in catalog");
            return;
        };
        let quest_here = location.quest;

        if let Some(required) = location.required_item {
            if !self.player.inventory.has(required) {
                let name = self.item_name(required);
                self.log
                    .say(format!("You must have a {name} to enter this location."));
                return;
            }
        }

        self.player.location = destination;
        self.player.visited.insert(destination);
        self.player.heal_fully();
        self.log.mark(Change::Location);
        self.log.mark(Change::Stats);

        if let Some(quest) = quest_here {
            self.advance_quest(quest);
        }

        self.current_monster = {
            let location = self
                .world
                .location(destination)
                .expect("destination was just looked up");
            encounter::spawn(&self.world, location, &mut self.rng)
        };
        if let Some(monster) = &self.current_monster {
            self.log.say(format!("You see a {}", monster.name));
        }
    }

    /// Attack the current monster with a weapon.
    pub fn attack(&mut self, weapon: ItemId) {
        if self.current_monster.is_none() {
            self.log.say("There is nothing here to attack");
            return;
        }
        let Some(ItemKind::Weapon {
            min_damage,
            max_damage,
        }) = self.world.item(weapon).map(|item| item.kind)
        else {
            let name = self.item_name(weapon);
            self.log.say(format!("You cannot attack with the {name}"));
            return;
        };

        let damage = self.rng.random_range(min_damage..=max_damage);
        let monster = self
            .current_monster
            .as_mut()
            .expect("checked at the top of attack");
        if damage == 0 {
            self.log.say(format!("You missed the {}", monster.name));
        } else {
            monster.hit_points -= damage;
            self.log
                .say(format!("You hit the {} for {damage} points.", monster.name));
        }

        if monster.is_dead() {
            self.finish_combat();
        } else {
            self.monster_retaliates();
        }
    }

    /// Drink a healing potion from the inventory.
    ///
    /// Drinking uses the player's turn, so the current monster (if any)
    /// gets a free retaliation.
    pub fn drink_potion(&mut self, potion: ItemId) {
        let Some(item) = self.world.item(potion) else {
            tracing::warn!(%potion, "drink_potion: item not in catalog");
            return;
        };
        let ItemKind::Potion { heal_amount } = item.kind else {
            self.log.say(format!("You cannot drink the {}", item.name));
            return;
        };
        let name = item.name.clone();
        if !self.player.inventory.has(potion) {
            self.log.say(format!("You do not have the potion: {name}"));
            return;
        }

        self.log.say(format!("You drink a {name}"));
        self.player.heal(heal_amount);
        self.player.inventory.remove(potion, 1);
        self.log.mark(Change::Stats);
        self.log.mark(Change::Inventory);

        self.monster_retaliates();
    }

    /// Equip a weapon held in the inventory.
    pub fn equip(&mut self, weapon: ItemId) {
        let Some(item) = self.world.item(weapon) else {
            tracing::warn!(%weapon, "equip: item not in catalog");
            return;
        };
        if !item.is_weapon() || !self.player.inventory.has(weapon) {
            self.log
                .say(format!("You do not have the weapon: {}", item.name));
            return;
        }
        let name = item.name.clone();
        self.player.current_weapon = Some(weapon);
        self.log.say(format!("You equip your {name}"));
        self.log.mark(Change::Stats);
    }

    /// Equip a weapon without narrating.
    ///
    /// Backs a front-end's silent auto-select when the player attacks with
    /// nothing equipped; the stat change is still recorded.
    pub fn equip_quietly(&mut self, weapon: ItemId) {
        if self.player.current_weapon == Some(weapon) {
            return;
        }
        if !self.world.item(weapon).is_some_and(|item| item.is_weapon()) {
            tracing::warn!(%weapon, "equip_quietly: not a weapon");
            return;
        }
        self.player.current_weapon = Some(weapon);
        self.log.mark(Change::Stats);
    }

    /// Add units of an item to the player's inventory.
    pub fn add_item(&mut self, item: ItemId, quantity: u32) {
        self.player.inventory.add(item, quantity);
        self.log.mark(Change::Inventory);
    }

    /// Remove units of an item from the player's inventory.
    ///
    /// A total no-op when fewer units are held than requested.
    pub fn remove_item(&mut self, item: ItemId, quantity: u32) -> bool {
        let removed = self.player.inventory.remove(item, quantity);
        if removed {
            self.log.mark(Change::Inventory);
        }
        removed
    }

    /// Buy one unit of an item from the vendor at the current location.
    pub fn buy(&mut self, item_id: ItemId) {
        let location = self.player.location;
        let Some(vendor) = self
            .world
            .location(location)
            .and_then(|l| l.vendor.as_ref())
        else {
            self.log.say("There is no vendor at this location");
            return;
        };
        let in_stock = vendor.inventory.has(item_id);
        let Some(item) = self.world.item(item_id).cloned() else {
            tracing::warn!(%item_id, "buy: item not in catalog");
            return;
        };
        if !in_stock {
            self.log
                .say(format!("The vendor does not have any {}", item.name_plural));
            return;
        }
        if self.player.gold < item.price {
            self.log
                .say(format!("You do not have enough gold to buy a {}", item.name));
            return;
        }

        if let Some(vendor) = self.world.vendor_mut(location) {
            vendor.inventory.remove(item_id, 1);
        }
        self.player.inventory.add(item_id, 1);
        self.player.gold -= item.price;
        self.log
            .say(format!("You bought one {} for {} gold", item.name, item.price));
        self.log.mark(Change::Inventory);
        self.log.mark(Change::Stats);
    }

    /// Sell one unit of an item to the vendor at the current location.
    ///
    /// Items priced with the unsellable sentinel are always rejected.
    pub fn sell(&mut self, item_id: ItemId) {
        let location = self.player.location;
        if self
            .world
            .location(location)
            .and_then(|l| l.vendor.as_ref())
            .is_none()
        {
            self.log.say("There is no vendor at this location");
            return;
        }
        let Some(item) = self.world.item(item_id).cloned() else {
            tracing::warn!(%item_id, "sell: item not in catalog");
            return;
        };
        if !item.is_sellable() {
            self.log.say(format!("You cannot sell the {}", item.name));
            return;
        }
        if !self.player.inventory.remove(item_id, 1) {
            self.log
                .say(format!("You do not have any {}", item.name_plural));
            return;
        }

        self.player.gold += item.price;
        if let Some(vendor) = self.world.vendor_mut(location) {
            vendor.inventory.add(item_id, 1);
        }
        self.log
            .say(format!("You receive {} gold for your {}", item.price, item.name));
        self.log.mark(Change::Inventory);
        self.log.mark(Change::Stats);
    }

    /// Grant or complete the quest offered at the entered location.
    fn advance_quest(&mut self, quest_id: QuestId) {
        let Some(quest) = self.world.quest(quest_id).cloned() else {
            tracing::warn!(%quest_id, "quest not in catalog");
            return;
        };

        if !self.player.has_quest(quest_id) {
            self.log.say(format!("You receive the {} quest.", quest.name));
            self.log.say(quest.description.clone());
            self.log.say("To complete it, return with:");
            for requirement in &quest.requirements {
                let name = self.item_display_name(requirement.item, requirement.quantity);
                self.log.say(format!("{} {name}", requirement.quantity));
            }
            self.log.say("");
            self.player.grant_quest(quest_id);
            self.log.mark(Change::Quests);
        } else if !self.player.has_completed_quest(quest_id)
            && self.player.has_all_requirements(&quest)
        {
            self.log.say("");
            self.log.say(format!("You complete the '{}' quest.", quest.name));
            self.log.say("You receive: ");
            self.log
                .say(format!("{} experience points", quest.reward_experience));
            self.log.say(format!("{} gold", quest.reward_gold));
            let reward_name = self.item_name(quest.reward_item);
            self.log.say_with_break(reward_name);

            self.player.add_experience(quest.reward_experience);
            self.player.gold += quest.reward_gold;
            for requirement in &quest.requirements {
                self.player
                    .inventory
                    .remove(requirement.item, requirement.quantity);
            }
            self.player.inventory.add(quest.reward_item, 1);
            self.player.complete_quest(quest_id);
            self.log.mark(Change::Quests);
            self.log.mark(Change::Inventory);
            self.log.mark(Change::Stats);
        }
    }

    /// Award the defeated monster's rewards and loot, then re-enter the
    /// current location to refresh quest checks and roll the next encounter.
    fn finish_combat(&mut self) {
        let Some(monster) = self.current_monster.take() else {
            return;
        };

        self.log.say("");
        self.log.say(format!("You defeated the {}", monster.name));
        self.log
            .say(format!("You receive {} experience points", monster.reward_experience));
        self.log.say(format!("You receive {} gold", monster.reward_gold));

        self.player.add_experience(monster.reward_experience);
        self.player.gold += monster.reward_gold;

        for line in monster.loot.lines() {
            self.player.inventory.add(line.item, line.quantity);
            let name = self.item_display_name(line.item, line.quantity);
            self.log.say(format!("You loot {} {name}", line.quantity));
        }
        self.log.say("");
        self.log.mark(Change::Stats);
        self.log.mark(Change::Inventory);

        // Deliberately re-entrant: entering again can complete a quest with
        // the fresh loot and immediately spawn the next opponent.
        self.enter(self.player.location);
    }

    /// The monster takes its turn. On a lethal hit the player wakes up at
    /// home, fully healed.
    fn monster_retaliates(&mut self) {
        let Some(monster) = self.current_monster.as_ref() else {
            return;
        };
        let name = monster.name.clone();
        let max_damage = monster.max_damage;

        let damage = self.rng.random_range(0..=max_damage);
        self.log.say(format!("The {name} did {damage} points of damage."));
        self.player.current_hit_points -= damage;
        self.log.mark(Change::Stats);

        if self.player.is_dead() {
            self.log.say(format!("The {name} killed you."));
            self.enter(self.world.home());
        }
    }

    fn item_name(&self, id: ItemId) -> String {
        self.world
            .item(id)
            .map_or_else(|| format!("item #{id}"), |item| item.name.clone())
    }

    fn item_display_name(&self, id: ItemId, quantity: u32) -> String {
        self.world.item(id).map_or_else(
            || format!("item #{id}"),
            |item| item.display_name(quantity).to_string(),
        )
    }
}
