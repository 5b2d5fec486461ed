//! Parsing typed commands into verbs.

use hb_core::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// Show the command list.
    Help,
    /// Describe the current location.
    Look,
    /// Show player statistics.
    Stats,
    /// List carried items.
    Inventory,
    /// List quests and their status.
    Quests,
    /// Attack the current monster.
    Attack,
    /// Equip a weapon by name.
    Equip(String),
    /// Drink a potion by name.
    Drink(String),
    /// Show the trade inventories.
    Trade,
    /// Buy an item by name.
    Buy(String),
    /// Sell an item by name.
    Sell(String),
    /// Move in a direction.
    Move(Direction),
    /// Show the world map.
    Map,
    /// Save and quit.
    Exit,
    /// Anything unrecognized.
    Unknown(String),
}

impl Verb {
    /// Parse one line of input. Case-insensitive; `<name>` arguments keep
    /// their (lowercased) remainder.
    pub fn parse(input: &str) -> Self {
        let cleaned = input.trim().to_lowercase();
        if let Some(direction) = Direction::parse(&cleaned) {
            return Verb::Move(direction);
        }

        let (head, rest) = cleaned
            .split_once(' ')
            .map_or((cleaned.as_str(), ""), |(h, r)| (h, r.trim()));

        match head {
            "help" | "?" => Verb::Help,
            "look" => Verb::Look,
            "stats" => Verb::Stats,
            "inventory" | "i" => Verb::Inventory,
            "quests" => Verb::Quests,
            "attack" => Verb::Attack,
            "equip" => Verb::Equip(rest.to_string()),
            "drink" => Verb::Drink(rest.to_string()),
            "trade" => Verb::Trade,
            "buy" => Verb::Buy(rest.to_string()),
            "sell" => Verb::Sell(rest.to_string()),
            "map" => Verb::Map,
            "exit" | "quit" => Verb::Exit,
            _ => Verb::Unknown(cleaned.clone()),
        }
    }
}
