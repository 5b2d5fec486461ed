//! The immutable world catalog and its validating builder.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::id::{ItemId, LocationId, MonsterId, QuestId};
use crate::item::{Item, ItemKind};
use crate::location::{Location, Vendor};
use crate::monster::MonsterTemplate;
use crate::quest::Quest;

/// The catalog of all game content.
///
/// Built once at startup through [`WorldBuilder`] and immutable afterwards,
/// with one exception: vendor stock, which trade actions move items in and
/// out of. Lookups return `None` for unknown IDs; callers whose IDs come from
/// the catalog itself may treat that as a fatal configuration error.
#[derive(Debug, Clone)]
pub struct World {
    items: HashMap<ItemId, Item>,
    monsters: HashMap<MonsterId, MonsterTemplate>,
    quests: HashMap<QuestId, Quest>,
    locations: HashMap<LocationId, Location>,
    home: LocationId,
}

impl World {
    /// Look up an item definition.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Look up a monster template.
    pub fn monster(&self, id: MonsterId) -> Option<&MonsterTemplate> {
        self.monsters.get(&id)
    }

    /// Look up a quest definition.
    pub fn quest(&self, id: QuestId) -> Option<&Quest> {
        self.quests.get(&id)
    }

    /// Look up a location.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// The designated home location, where defeated players wake up.
    pub fn home(&self) -> LocationId {
        self.home
    }

    /// Iterate over all item definitions (unordered).
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Iterate over all locations (unordered).
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Mutable access to the vendor at a location, if one works there.
    ///
    /// This is the only mutation the catalog supports after construction.
    pub fn vendor_mut(&mut self, location: LocationId) -> Option<&mut Vendor> {
        self.locations.get_mut(&location)?.vendor.as_mut()
    }
}

/// Builds a [`World`], rejecting duplicate IDs as entries are added and
/// validating every cross-reference at [`build`](WorldBuilder::build).
#[derive(Debug, Default)]
pub struct WorldBuilder {
    items: HashMap<ItemId, Item>,
    monsters: HashMap<MonsterId, MonsterTemplate>,
    quests: HashMap<QuestId, Quest>,
    locations: HashMap<LocationId, Location>,
    home: Option<LocationId>,
}

impl WorldBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item definition.
    pub fn add_item(&mut self, item: Item) -> CoreResult<()> {
        if self.items.contains_key(&item.id) {
            return Err(CoreError::DuplicateItem(item.id));
        }
        self.items.insert(item.id, item);
        Ok(())
    }

    /// Add a monster template.
    pub fn add_monster(&mut self, monster: MonsterTemplate) -> CoreResult<()> {
        if self.monsters.contains_key(&monster.id) {
            return Err(CoreError::DuplicateMonster(monster.id));
        }
        self.monsters.insert(monster.id, monster);
        Ok(())
    }

    /// Add a quest definition.
    pub fn add_quest(&mut self, quest: Quest) -> CoreResult<()> {
        if self.quests.contains_key(&quest.id) {
            return Err(CoreError::DuplicateQuest(quest.id));
        }
        self.quests.insert(quest.id, quest);
        Ok(())
    }

    /// Add a location.
    pub fn add_location(&mut self, location: Location) -> CoreResult<()> {
        if self.locations.contains_key(&location.id) {
            return Err(CoreError::DuplicateLocation(location.id));
        }
        self.locations.insert(location.id, location);
        Ok(())
    }

    /// Designate the home location.
    pub fn home(&mut self, location: LocationId) {
        self.home = Some(location);
    }

    /// Validate all cross-references and produce the finished [`World`].
    pub fn build(self) -> CoreResult<World> {
        let home = self
            .home
            .filter(|h| self.locations.contains_key(h))
            .ok_or(CoreError::MissingHome)?;

        for item in self.items.values() {
            if let ItemKind::Weapon {
                min_damage,
                max_damage,
            } = item.kind
            {
                if min_damage < 0 || min_damage > max_damage {
                    return Err(CoreError::InvalidDamageRange {
                        item: item.id,
                        min_damage,
                        max_damage,
                    });
                }
            }
        }

        for monster in self.monsters.values() {
            if monster.max_damage < 0 {
                return Err(CoreError::NegativeMonsterDamage {
                    monster: monster.id,
                    max_damage: monster.max_damage,
                });
            }
            for entry in &monster.loot_table {
                self.check_item(entry.item, format!("loot table of monster {}", monster.id))?;
                if entry.drop_percentage > 100 {
                    return Err(CoreError::InvalidDropPercentage {
                        monster: monster.id,
                        item: entry.item,
                        percentage: entry.drop_percentage,
                    });
                }
            }
        }

        for quest in self.quests.values() {
            self.check_item(quest.reward_item, format!("reward of quest {}", quest.id))?;
            for requirement in &quest.requirements {
                self.check_item(
                    requirement.item,
                    format!("requirements of quest {}", quest.id),
                )?;
            }
        }

        for location in self.locations.values() {
            let context = format!("location {}", location.id);
            if let Some(item) = location.required_item {
                self.check_item(item, context.clone())?;
            }
            if let Some(quest) = location.quest {
                if !self.quests.contains_key(&quest) {
                    return Err(CoreError::UnknownQuest { context, quest });
                }
            }
            for spawn in &location.monsters {
                if !self.monsters.contains_key(&spawn.monster) {
                    return Err(CoreError::UnknownMonster {
                        context,
                        monster: spawn.monster,
                    });
                }
                if spawn.weight == 0 {
                    return Err(CoreError::ZeroSpawnWeight {
                        location: location.id,
                        monster: spawn.monster,
                    });
                }
            }
            if let Some(vendor) = &location.vendor {
                for line in vendor.inventory.lines() {
                    self.check_item(line.item, format!("stock of vendor \"{}\"", vendor.name))?;
                    // Stocked items must carry a real price.
                    if self.items.get(&line.item).is_some_and(|i| !i.is_sellable()) {
                        return Err(CoreError::UnsellableVendorStock {
                            vendor: vendor.name.clone(),
                            item: line.item,
                        });
                    }
                }
            }
            for exit in [location.north, location.east, location.south, location.west]
                .into_iter()
                .flatten()
            {
                if !self.locations.contains_key(&exit) {
                    return Err(CoreError::UnknownLocation {
                        context,
                        location: exit,
                    });
                }
            }
        }

        Ok(World {
            items: self.items,
            monsters: self.monsters,
            quests: self.quests,
            locations: self.locations,
            home,
        })
    }

    fn check_item(&self, item: ItemId, context: String) -> CoreResult<()> {
        if self.items.contains_key(&item) {
            Ok(())
        } else {
            Err(CoreError::UnknownItem { context, item })
        }
    }
}
