//! The built-in Hollowbrook world content.
//!
//! A small village map: home and the town square in the middle, a guard post
//! gating the bridge to the spider forest in the east, the alchemist's hut
//! and garden to the north, and the farm to the west. The ID constants are
//! exported so the front-end and tests can reference well-known content.

use crate::error::CoreResult;
use crate::id::{ItemId, LocationId, MonsterId, QuestId};
use crate::item::{Item, UNSELLABLE_PRICE};
use crate::location::{Location, Vendor};
use crate::monster::MonsterTemplate;
use crate::quest::Quest;
use crate::world::{World, WorldBuilder};

/// The starter weapon every new player carries.
pub const ITEM_RUSTY_SWORD: ItemId = ItemId(1);
/// A rat's tail, dropped by rats.
pub const ITEM_RAT_TAIL: ItemId = ItemId(2);
/// A piece of fur, dropped by rats.
pub const ITEM_PIECE_OF_FUR: ItemId = ItemId(3);
/// A snake's fang, dropped by snakes.
pub const ITEM_SNAKE_FANG: ItemId = ItemId(4);
/// A snakeskin, dropped by snakes.
pub const ITEM_SNAKESKIN: ItemId = ItemId(5);
/// A club, the better weapon.
pub const ITEM_CLUB: ItemId = ItemId(6);
/// A healing potion.
pub const ITEM_HEALING_POTION: ItemId = ItemId(7);
/// A spider's fang, dropped by giant spiders.
pub const ITEM_SPIDER_FANG: ItemId = ItemId(8);
/// Spider silk, dropped by giant spiders.
pub const ITEM_SPIDER_SILK: ItemId = ItemId(9);
/// The pass that lets the player through the guard post. Cannot be sold.
pub const ITEM_ADVENTURER_PASS: ItemId = ItemId(10);

/// The rat, found in the alchemist's garden.
pub const MONSTER_RAT: MonsterId = MonsterId(1);
/// The snake, found in the farmer's field.
pub const MONSTER_SNAKE: MonsterId = MonsterId(2);
/// The giant spider, the boss of the forest.
pub const MONSTER_GIANT_SPIDER: MonsterId = MonsterId(3);

/// Quest offered at the alchemist's hut.
pub const QUEST_CLEAR_ALCHEMIST_GARDEN: QuestId = QuestId(1);
/// Quest offered at the farmhouse.
pub const QUEST_CLEAR_FARMERS_FIELD: QuestId = QuestId(2);

/// The player's house, the home location.
pub const LOCATION_HOME: LocationId = LocationId(1);
/// The town square, where the vendor works.
pub const LOCATION_TOWN_SQUARE: LocationId = LocationId(2);
/// The guard post, requiring an adventurer pass to enter.
pub const LOCATION_GUARD_POST: LocationId = LocationId(3);
/// The alchemist's hut.
pub const LOCATION_ALCHEMIST_HUT: LocationId = LocationId(4);
/// The alchemist's garden, where rats spawn.
pub const LOCATION_ALCHEMISTS_GARDEN: LocationId = LocationId(5);
/// The farmhouse.
pub const LOCATION_FARMHOUSE: LocationId = LocationId(6);
/// The farmer's field, where snakes spawn.
pub const LOCATION_FARMERS_FIELD: LocationId = LocationId(7);
/// The bridge across the river.
pub const LOCATION_BRIDGE: LocationId = LocationId(8);
/// The spider forest, where giant spiders spawn.
pub const LOCATION_SPIDER_FOREST: LocationId = LocationId(9);

/// Build the standard Hollowbrook world.
pub fn hollowbrook() -> CoreResult<World> {
    let mut builder = WorldBuilder::new();

    builder.add_item(Item::weapon(
        ITEM_RUSTY_SWORD,
        "Rusty sword",
        "Rusty swords",
        0,
        5,
        5,
    ))?;
    builder.add_item(Item::new(ITEM_RAT_TAIL, "Rat tail", "Rat tails", 1))?;
    builder.add_item(Item::new(
        ITEM_PIECE_OF_FUR,
        "Piece of fur",
        "Pieces of fur",
        1,
    ))?;
    builder.add_item(Item::new(ITEM_SNAKE_FANG, "Snake fang", "Snake fangs", 1))?;
    builder.add_item(Item::new(ITEM_SNAKESKIN, "Snakeskin", "Snakeskins", 2))?;
    builder.add_item(Item::weapon(ITEM_CLUB, "Club", "Clubs", 3, 10, 8))?;
    builder.add_item(Item::potion(
        ITEM_HEALING_POTION,
        "Healing potion",
        "Healing potions",
        5,
        3,
    ))?;
    builder.add_item(Item::new(
        ITEM_SPIDER_FANG,
        "Spider fang",
        "Spider fangs",
        1,
    ))?;
    builder.add_item(Item::new(
        ITEM_SPIDER_SILK,
        "Spider silk",
        "Spider silks",
        1,
    ))?;
    builder.add_item(Item::new(
        ITEM_ADVENTURER_PASS,
        "Adventurer pass",
        "Adventurer passes",
        UNSELLABLE_PRICE,
    ))?;

    builder.add_monster(
        MonsterTemplate::new(MONSTER_RAT, "Rat", 5, 3, 10, 3, 3)
            .with_loot(ITEM_RAT_TAIL, 75, false)
            .with_loot(ITEM_PIECE_OF_FUR, 75, true),
    )?;
    builder.add_monster(
        MonsterTemplate::new(MONSTER_SNAKE, "Snake", 5, 3, 10, 3, 3)
            .with_loot(ITEM_SNAKE_FANG, 75, false)
            .with_loot(ITEM_SNAKESKIN, 75, true),
    )?;
    builder.add_monster(
        MonsterTemplate::new(MONSTER_GIANT_SPIDER, "Giant spider", 20, 5, 40, 10, 10)
            .with_loot(ITEM_SPIDER_FANG, 75, true)
            .with_loot(ITEM_SPIDER_SILK, 25, false),
    )?;

    builder.add_quest(
        Quest::new(
            QUEST_CLEAR_ALCHEMIST_GARDEN,
            "Clear the alchemist's garden",
            "Kill rats in the alchemist's garden and bring back 3 rat tails. \
             You will receive a healing potion and 10 gold pieces.",
            20,
            10,
            ITEM_HEALING_POTION,
        )
        .with_requirement(ITEM_RAT_TAIL, 3),
    )?;
    builder.add_quest(
        Quest::new(
            QUEST_CLEAR_FARMERS_FIELD,
            "Clear the farmer's field",
            "Kill snakes in the farmer's field and bring back 3 snake fangs. \
             You will receive an adventurer's pass and 20 gold pieces.",
            20,
            20,
            ITEM_ADVENTURER_PASS,
        )
        .with_requirement(ITEM_SNAKE_FANG, 3),
    )?;

    let mut home = Location::new(
        LOCATION_HOME,
        "Home",
        "Your house. You really need to clean up the place.",
    );
    home.north = Some(LOCATION_TOWN_SQUARE);
    builder.add_location(home)?;

    let mut town_square = Location::new(LOCATION_TOWN_SQUARE, "Town square", "You see a fountain.")
        .with_vendor(
            Vendor::new("Bob the Rat-Catcher")
                .with_stock(ITEM_PIECE_OF_FUR, 5)
                .with_stock(ITEM_RAT_TAIL, 3),
        );
    town_square.north = Some(LOCATION_ALCHEMIST_HUT);
    town_square.south = Some(LOCATION_HOME);
    town_square.east = Some(LOCATION_GUARD_POST);
    town_square.west = Some(LOCATION_FARMHOUSE);
    builder.add_location(town_square)?;

    let mut guard_post = Location::new(
        LOCATION_GUARD_POST,
        "Guard post",
        "There is a large, tough-looking guard here.",
    )
    .with_required_item(ITEM_ADVENTURER_PASS);
    guard_post.east = Some(LOCATION_BRIDGE);
    guard_post.west = Some(LOCATION_TOWN_SQUARE);
    builder.add_location(guard_post)?;

    let mut alchemist_hut = Location::new(
        LOCATION_ALCHEMIST_HUT,
        "Alchemist's hut",
        "There are many strange plants on the shelves.",
    )
    .with_quest(QUEST_CLEAR_ALCHEMIST_GARDEN);
    alchemist_hut.north = Some(LOCATION_ALCHEMISTS_GARDEN);
    alchemist_hut.south = Some(LOCATION_TOWN_SQUARE);
    builder.add_location(alchemist_hut)?;

    let mut alchemists_garden = Location::new(
        LOCATION_ALCHEMISTS_GARDEN,
        "Alchemist's garden",
        "Many plants are growing here.",
    )
    .with_monster(MONSTER_RAT, 100);
    alchemists_garden.south = Some(LOCATION_ALCHEMIST_HUT);
    builder.add_location(alchemists_garden)?;

    let mut farmhouse = Location::new(
        LOCATION_FARMHOUSE,
        "Farmhouse",
        "There is a small farmhouse, with a farmer in front.",
    )
    .with_quest(QUEST_CLEAR_FARMERS_FIELD);
    farmhouse.east = Some(LOCATION_TOWN_SQUARE);
    farmhouse.west = Some(LOCATION_FARMERS_FIELD);
    builder.add_location(farmhouse)?;

    let mut farmers_field = Location::new(
        LOCATION_FARMERS_FIELD,
        "Farmer's field",
        "You see rows of vegetables growing here.",
    )
    .with_monster(MONSTER_SNAKE, 100);
    farmers_field.east = Some(LOCATION_FARMHOUSE);
    builder.add_location(farmers_field)?;

    let mut bridge = Location::new(
        LOCATION_BRIDGE,
        "Bridge",
        "A stone bridge crosses a wide river.",
    );
    bridge.east = Some(LOCATION_SPIDER_FOREST);
    bridge.west = Some(LOCATION_GUARD_POST);
    builder.add_location(bridge)?;

    let mut spider_forest = Location::new(
        LOCATION_SPIDER_FOREST,
        "Forest",
        "You see spider webs covering the trees in this forest.",
    )
    .with_monster(MONSTER_GIANT_SPIDER, 100);
    spider_forest.west = Some(LOCATION_BRIDGE);
    builder.add_location(spider_forest)?;

    builder.home(LOCATION_HOME);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    #[test]
    fn hollowbrook_builds() {
        let world = hollowbrook().unwrap();
        assert_eq!(world.home(), LOCATION_HOME);
        assert_eq!(world.items().count(), 10);
        assert_eq!(world.locations().count(), 9);
    }

    #[test]
    fn starter_weapon_is_a_weapon() {
        let world = hollowbrook().unwrap();
        let sword = world.item(ITEM_RUSTY_SWORD).unwrap();
        assert!(matches!(sword.kind, ItemKind::Weapon { min_damage: 0, .. }));
    }

    #[test]
    fn guard_post_requires_the_pass() {
        let world = hollowbrook().unwrap();
        let guard_post = world.location(LOCATION_GUARD_POST).unwrap();
        assert_eq!(guard_post.required_item, Some(ITEM_ADVENTURER_PASS));
    }

    #[test]
    fn map_links_match_the_village_layout() {
        let world = hollowbrook().unwrap();
        let square = world.location(LOCATION_TOWN_SQUARE).unwrap();
        assert_eq!(square.south, Some(LOCATION_HOME));
        assert_eq!(square.east, Some(LOCATION_GUARD_POST));

        // The forest only links back west; there is no way around the bridge.
        let forest = world.location(LOCATION_SPIDER_FOREST).unwrap();
        assert_eq!(forest.west, Some(LOCATION_BRIDGE));
        assert_eq!(forest.east, None);
    }

    #[test]
    fn quests_reward_the_unlock_chain() {
        let world = hollowbrook().unwrap();
        let field_quest = world.quest(QUEST_CLEAR_FARMERS_FIELD).unwrap();
        assert_eq!(field_quest.reward_item, ITEM_ADVENTURER_PASS);
        assert_eq!(field_quest.requirements[0].item, ITEM_SNAKE_FANG);
    }
}
