/// Equipment slot an item occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemSlot {
    /// Exactly one per loadout.
    Weapon,
    /// Optional, at most one.
    Armor,
    /// Optional, one per hand.
    Ring,
}

/// A shop item.
///
/// Items are identified by name; the shop stocks one of each.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub name: String,
    pub slot: ItemSlot,
    pub cost: u32,
    pub damage: u32,
    pub armor: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, slot: ItemSlot, cost: u32, damage: u32, armor: u32) -> Self {
        Self {
            name: name.into(),
            slot,
            cost,
            damage,
            armor,
        }
    }

    pub fn weapon(name: impl Into<String>, cost: u32, damage: u32) -> Self {
        Self::new(name, ItemSlot::Weapon, cost, damage, 0)
    }

    pub fn armor(name: impl Into<String>, cost: u32, armor: u32) -> Self {
        Self::new(name, ItemSlot::Armor, cost, 0, armor)
    }

    pub fn ring(name: impl Into<String>, cost: u32, damage: u32, armor: u32) -> Self {
        Self::new(name, ItemSlot::Ring, cost, damage, armor)
    }
}
