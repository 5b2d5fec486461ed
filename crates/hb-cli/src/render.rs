//! Rendering helpers: location descriptions, stats, tables, the world map.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use hb_core::{Item, LocationId, content};
use hb_engine::Game;

/// Print the command list.
pub fn help() {
    println!("Available commands");
    println!("====================================");
    println!("Help (?) - Show this list");
    println!("Stats - Display player information");
    println!("Look - Get the description of your location");
    println!("Inventory (i) - Display your inventory");
    println!("Quests - Display your quests");
    println!("Attack - Fight the monster");
    println!("Equip <weapon name> - Set your current weapon");
    println!("Drink <potion name> - Drink a potion");
    println!("Trade - Display your inventory and the vendor's");
    println!("Buy <item name> - Buy an item from a vendor");
    println!("Sell <item name> - Sell an item to a vendor");
    println!("Map - Show the places you have been");
    println!("North / East / South / West (n/e/s/w) - Move");
    println!("Exit - Save the game and exit");
}

/// Print the current location and any vendor working there.
pub fn location(game: &Game) {
    let here = game.current_location();
    println!("You are at: {}", here.name.bold());
    if !here.description.is_empty() {
        println!("{}", here.description);
    }
    if let Some(vendor) = &here.vendor {
        println!("You see a vendor here: {}", vendor.name);
    }
}

/// Print player statistics.
pub fn stats(game: &Game) {
    let player = game.player();
    println!("Current hit points: {}", player.current_hit_points);
    println!("Maximum hit points: {}", player.maximum_hit_points);
    println!("Experience points: {}", player.experience_points);
    println!("Level: {}", player.level());
    println!("Gold: {}", player.gold);
}

/// Print the player's inventory, one line per stack.
pub fn inventory(game: &Game) {
    let player = game.player();
    if player.inventory.is_empty() {
        println!("You are carrying nothing");
        return;
    }
    for line in player.inventory.lines() {
        let name = game
            .world()
            .item(line.item)
            .map_or("?", |item| item.display_name(line.quantity));
        println!("{name}: {}", line.quantity);
    }
}

/// Print the quest log.
pub fn quests(game: &Game) {
    let player = game.player();
    if player.quests.is_empty() {
        println!("You do not have any quests");
        return;
    }
    for entry in &player.quests {
        let name = game
            .world()
            .quest(entry.quest)
            .map_or("?", |quest| quest.name.as_str());
        let status = if entry.completed {
            "Completed".green()
        } else {
            "Incomplete".yellow()
        };
        println!("{name}: {status}");
    }
}

/// Print the player's sellable items and the vendor's stock side by side.
pub fn trade(game: &Game) {
    let Some(vendor) = &game.current_location().vendor else {
        println!("There is no vendor at this location");
        return;
    };
    let world = game.world();

    println!("PLAYER INVENTORY");
    let sellable: Vec<(&Item, u32)> = game
        .player()
        .inventory
        .lines()
        .iter()
        .filter_map(|line| world.item(line.item).map(|item| (item, line.quantity)))
        .filter(|(item, _)| item.is_sellable())
        .collect();
    if sellable.is_empty() {
        println!("You have nothing to sell");
    } else {
        println!("{}", stock_table(&sellable));
    }

    println!();
    println!("VENDOR INVENTORY");
    let stock: Vec<(&Item, u32)> = vendor
        .inventory
        .lines()
        .iter()
        .filter_map(|line| world.item(line.item).map(|item| (item, line.quantity)))
        .collect();
    if stock.is_empty() {
        println!("The vendor does not have any inventory");
    } else {
        println!("{}", stock_table(&stock));
    }
}

fn stock_table(rows: &[(&Item, u32)]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Qty", "Item", "Price"]);
    for (item, quantity) in rows {
        table.add_row(vec![
            quantity.to_string(),
            item.display_name(*quantity).to_string(),
            item.price.to_string(),
        ]);
    }
    table
}

/// The fixed village layout, rows top to bottom. `None` cells are empty map.
const MAP_GRID: [[Option<LocationId>; 6]; 4] = [
    [None, None, Some(content::LOCATION_ALCHEMISTS_GARDEN), None, None, None],
    [None, None, Some(content::LOCATION_ALCHEMIST_HUT), None, None, None],
    [
        Some(content::LOCATION_FARMERS_FIELD),
        Some(content::LOCATION_FARMHOUSE),
        Some(content::LOCATION_TOWN_SQUARE),
        Some(content::LOCATION_GUARD_POST),
        Some(content::LOCATION_BRIDGE),
        Some(content::LOCATION_SPIDER_FOREST),
    ],
    [None, None, Some(content::LOCATION_HOME), None, None, None],
];

/// Print the world map. Unvisited locations show as `?` (fog of war), and
/// the player's position is marked.
pub fn map(game: &Game) {
    let player = game.player();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    for row in MAP_GRID {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(id) if player.visited.contains(id) => {
                    let name = game.world().location(*id).map_or("?", |l| l.name.as_str());
                    if *id == player.location {
                        format!("{name} (you)")
                    } else {
                        name.to_string()
                    }
                }
                Some(_) => "?".to_string(),
                None => String::new(),
            })
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
}
