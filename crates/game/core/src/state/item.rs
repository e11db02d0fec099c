//! Carried items: consumables and spare equipment.

use super::{Armor, Weapon};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Single-use restoration, clamped to the target's maxima.
    Consumable {
        #[cfg_attr(feature = "serde", serde(default))]
        heal_hp: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        heal_mp: u32,
    },
    Weapon(Weapon),
    Armor(Armor),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn consumable(
        id: impl Into<String>,
        name: impl Into<String>,
        heal_hp: u32,
        heal_mp: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind: ItemKind::Consumable { heal_hp, heal_mp },
        }
    }

    /// Wraps a weapon so it can be carried; the item is named after it.
    pub fn weapon(weapon: Weapon) -> Self {
        Self {
            id: weapon.name.to_lowercase().replace(' ', "_"),
            name: weapon.name.clone(),
            description: String::new(),
            kind: ItemKind::Weapon(weapon),
        }
    }

    /// Wraps armor so it can be carried; the item is named after it.
    pub fn armor(armor: Armor) -> Self {
        Self {
            id: armor.name.to_lowercase().replace(' ', "_"),
            name: armor.name.clone(),
            description: String::new(),
            kind: ItemKind::Armor(armor),
        }
    }
}

/// Ordered item list. Slots are positional and shift down on removal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn get(&self, slot: usize) -> Option<&Item> {
        self.items.get(slot)
    }

    /// Removes and returns the item in `slot`; out of range is a no-op.
    pub fn remove(&mut self, slot: usize) -> Option<Item> {
        (slot < self.items.len()).then(|| self.items.remove(slot))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
