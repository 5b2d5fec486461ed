//! The read-eval-print loop driving a game session.

use std::io::{self, BufRead, Write};
use std::path::Path;

use rand::Rng;

use hb_core::{Item, ItemId, content};
use hb_engine::{Change, Game, GameConfig};
use hb_save::{PlayerSnapshot, SaveFile};

/// Run the game against stdin/stdout until the player exits.
pub fn run(save_path: &Path, seed: Option<u64>) -> Result<(), String> {
    let world = content::hollowbrook().map_err(|e| e.to_string())?;
    let store = SaveFile::new(save_path);
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let config = GameConfig::default().with_seed(seed);

    let mut game = match load_player(&store) {
        Some(snapshot) => match snapshot.restore(&world) {
            Some(player) => {
                Game::with_player(world, player, config).map_err(|e| e.to_string())?
            }
            None => {
                tracing::warn!("save file references unknown catalog ids, starting over");
                Game::new(world, config)
            }
        },
        None => Game::new(world, config),
    };

    println!("Type 'help' to see a list of commands");
    println!();
    crate::render::location(&game);
    println!();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        let read = stdin.lock().read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match crate::verb::Verb::parse(input) {
            crate::verb::Verb::Exit => {
                save_player(&store, &game);
                break;
            }
            verb => dispatch(&mut game, verb),
        }
    }

    Ok(())
}

fn load_player(store: &SaveFile) -> Option<PlayerSnapshot> {
    match store.load() {
        Ok(snapshot) => snapshot,
        Err(error) => {
            tracing::warn!(%error, path = %store.path().display(), "could not load save file");
            None
        }
    }
}

fn save_player(store: &SaveFile, game: &Game) {
    let snapshot = PlayerSnapshot::capture(game.player());
    match store.save(&snapshot) {
        Ok(()) => println!("Your game has been saved"),
        Err(error) => {
            tracing::warn!(%error, path = %store.path().display(), "could not save the game");
        }
    }
}

fn dispatch(game: &mut Game, verb: crate::verb::Verb) {
    use crate::render;
    use crate::verb::Verb;

    match verb {
        Verb::Help => render::help(),
        Verb::Look => {
            render::location(game);
            println!();
        }
        Verb::Stats => render::stats(game),
        Verb::Inventory => render::inventory(game),
        Verb::Quests => render::quests(game),
        Verb::Map => render::map(game),
        Verb::Trade => render::trade(game),
        Verb::Attack => {
            attack(game);
            flush(game);
        }
        Verb::Equip(name) => {
            equip(game, &name);
            flush(game);
        }
        Verb::Drink(name) => {
            drink(game, &name);
            flush(game);
        }
        Verb::Buy(name) => {
            buy(game, &name);
            flush(game);
        }
        Verb::Sell(name) => {
            sell(game, &name);
            flush(game);
        }
        Verb::Move(direction) => {
            if game.exit(direction).is_none() {
                println!("You cannot move {}", capitalize(direction.name()));
                println!();
            } else {
                game.move_in(direction);
                flush(game);
            }
        }
        Verb::Exit => unreachable!("handled by the loop"),
        Verb::Unknown(input) => {
            println!("I do not understand '{input}'");
            println!("Type 'help' to see a list of available commands");
            println!();
        }
    }
}

/// Print everything the last action produced: a fresh location description
/// when the player moved, then the narration lines.
fn flush(game: &mut Game) {
    let changes = game.take_changes();
    let messages = game.drain_messages();

    if changes.contains(Change::Location) {
        crate::render::location(game);
    }
    for narration in &messages {
        println!("{}", narration.message);
        if narration.extra_blank_line {
            println!();
        }
    }
    println!();
}

fn attack(game: &mut Game) {
    let weapon = game
        .player()
        .current_weapon
        .or_else(|| game.player().weapons(game.world()).first().map(|w| w.id));
    let Some(weapon) = weapon else {
        println!("You do not have any weapons");
        return;
    };
    game.equip_quietly(weapon);
    game.attack(weapon);
}

fn equip(game: &mut Game, name: &str) {
    if name.is_empty() {
        println!("You must enter the name of the weapon to equip");
        return;
    }
    let Some(weapon) = resolve(game.player().weapons(game.world()), name) else {
        println!("You do not have the weapon: {name}");
        return;
    };
    game.equip(weapon);
}

fn drink(game: &mut Game, name: &str) {
    if name.is_empty() {
        println!("You must enter the name of the potion to drink");
        return;
    }
    let Some(potion) = resolve(game.player().potions(game.world()), name) else {
        println!("You do not have the potion: {name}");
        return;
    };
    game.drink_potion(potion);
}

fn buy(game: &mut Game, name: &str) {
    if name.is_empty() {
        println!("You must enter the name of the item to buy");
        return;
    }
    let Some(vendor) = &game.current_location().vendor else {
        println!("There is no vendor at this location");
        return;
    };
    let stock: Vec<&Item> = vendor
        .inventory
        .lines()
        .iter()
        .filter_map(|line| game.world().item(line.item))
        .collect();
    let Some(item) = resolve(stock, name) else {
        println!("The vendor does not have any {name}");
        return;
    };
    game.buy(item);
}

fn sell(game: &mut Game, name: &str) {
    if name.is_empty() {
        println!("You must enter the name of the item to sell");
        return;
    }
    if game.current_location().vendor.is_none() {
        println!("There is no vendor at this location");
        return;
    }
    let carried: Vec<&Item> = game
        .player()
        .inventory
        .lines()
        .iter()
        .filter_map(|line| game.world().item(line.item))
        .collect();
    let Some(item) = resolve(carried, name) else {
        println!("You do not have any {name}");
        return;
    };
    game.sell(item);
}

/// Match a lowercased player-typed name against item names, singular or
/// plural.
fn resolve(items: Vec<&Item>, name: &str) -> Option<ItemId> {
    items
        .iter()
        .find(|item| {
            item.name.to_lowercase() == name || item.name_plural.to_lowercase() == name
        })
        .map(|item| item.id)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_matches_singular_and_plural() {
        let tail = Item::new(hb_core::ItemId(2), "Rat tail", "Rat tails", 1);
        let fur = Item::new(hb_core::ItemId(3), "Piece of fur", "Pieces of fur", 1);
        let items = vec![&tail, &fur];

        assert_eq!(resolve(items.clone(), "rat tail"), Some(hb_core::ItemId(2)));
        assert_eq!(resolve(items.clone(), "rat tails"), Some(hb_core::ItemId(2)));
        assert_eq!(resolve(items, "club"), None);
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("north"), "North");
        assert_eq!(capitalize(""), "");
    }
}
