//! Shop inventory.

use std::collections::HashSet;

use super::item::{Item, ItemSlot};
use super::loadout::{Loadout, loadouts};
use crate::config::GameConfig;

/// Weapons:    Cost  Damage
const WEAPONS: [(&str, u32, u32); 5] = [
    ("Dagger", 8, 4),
    ("Shortsword", 10, 5),
    ("Warhammer", 25, 6),
    ("Longsword", 40, 7),
    ("Greataxe", 74, 8),
];

/// Armor:      Cost  Armor
const ARMORS: [(&str, u32, u32); 5] = [
    ("Leather", 13, 1),
    ("Chainmail", 31, 2),
    ("Splintmail", 53, 3),
    ("Bandedmail", 75, 4),
    ("Platemail", 102, 5),
];

/// Rings:      Cost  Damage  Armor
const RINGS: [(&str, u32, u32, u32); 6] = [
    ("Damage +1", 25, 1, 0),
    ("Damage +2", 50, 2, 0),
    ("Damage +3", 100, 3, 0),
    ("Defense +1", 20, 0, 1),
    ("Defense +2", 40, 0, 2),
    ("Defense +3", 80, 0, 3),
];

/// Validated shop inventory, grouped by slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    weapons: Vec<Item>,
    armors: Vec<Item>,
    rings: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, checking that every item sits in its own slot list,
    /// that names are unique, that at least one weapon is for sale and that
    /// no loadout's totals overflow.
    pub fn new(
        weapons: Vec<Item>,
        armors: Vec<Item>,
        rings: Vec<Item>,
    ) -> Result<Self, CatalogError> {
        if weapons.is_empty() {
            return Err(CatalogError::NoWeapons);
        }

        let mut names = HashSet::new();
        for (expected, items) in [
            (ItemSlot::Weapon, &weapons),
            (ItemSlot::Armor, &armors),
            (ItemSlot::Ring, &rings),
        ] {
            for item in items {
                if item.slot != expected {
                    return Err(CatalogError::WrongSlot {
                        name: item.name.clone(),
                        expected,
                        actual: item.slot,
                    });
                }
                if !names.insert(item.name.as_str()) {
                    return Err(CatalogError::DuplicateItem(item.name.clone()));
                }
            }
        }

        let stats: [(&'static str, fn(&Item) -> u32); 3] = [
            ("cost", |item: &Item| item.cost),
            ("damage", |item: &Item| item.damage),
            ("armor", |item: &Item| item.armor),
        ];
        for (stat, value) in stats {
            if heaviest_loadout(&weapons, &armors, &rings, value).is_none() {
                return Err(CatalogError::TotalOverflow { stat });
            }
        }

        Ok(Self {
            weapons,
            armors,
            rings,
        })
    }

    /// The fixed shop: five weapons, five armors, six rings.
    pub fn standard() -> Self {
        Self {
            weapons: WEAPONS
                .iter()
                .map(|&(name, cost, damage)| Item::weapon(name, cost, damage))
                .collect(),
            armors: ARMORS
                .iter()
                .map(|&(name, cost, armor)| Item::armor(name, cost, armor))
                .collect(),
            rings: RINGS
                .iter()
                .map(|&(name, cost, damage, armor)| Item::ring(name, cost, damage, armor))
                .collect(),
        }
    }

    pub fn weapons(&self) -> &[Item] {
        &self.weapons
    }

    pub fn armors(&self) -> &[Item] {
        &self.armors
    }

    pub fn rings(&self) -> &[Item] {
        &self.rings
    }

    /// Every legal loadout this catalog allows.
    pub fn loadouts(&self) -> impl Iterator<Item = Loadout<'_>> {
        loadouts(self)
    }

    /// Number of loadouts [`Catalog::loadouts`] yields.
    pub fn loadout_count(&self) -> usize {
        let rings = self.rings.len();
        let ring_sets = 1 + rings + rings * rings.saturating_sub(1) / 2;
        self.weapons.len() * (self.armors.len() + 1) * ring_sets
    }
}

/// Largest `stat` total any loadout can reach, or `None` on overflow.
fn heaviest_loadout(
    weapons: &[Item],
    armors: &[Item],
    rings: &[Item],
    stat: fn(&Item) -> u32,
) -> Option<u32> {
    let weapon = weapons.iter().map(stat).max().unwrap_or(0);
    let armor = armors.iter().map(stat).max().unwrap_or(0);

    let mut ring_values: Vec<u32> = rings.iter().map(stat).collect();
    ring_values.sort_unstable_by(|a, b| b.cmp(a));

    ring_values
        .into_iter()
        .take(GameConfig::MAX_RINGS)
        .try_fold(weapon.checked_add(armor)?, u32::checked_add)
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Errors raised when building a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no weapons; every loadout needs exactly one")]
    NoWeapons,

    #[error("item `{name}` is listed as {expected} but is a {actual}")]
    WrongSlot {
        name: String,
        expected: ItemSlot,
        actual: ItemSlot,
    },

    #[error("item `{0}` appears more than once")]
    DuplicateItem(String),

    #[error("loadout {stat} total does not fit in a u32")]
    TotalOverflow { stat: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_passes_validation() {
        let standard = Catalog::standard();
        let rebuilt = Catalog::new(
            standard.weapons().to_vec(),
            standard.armors().to_vec(),
            standard.rings().to_vec(),
        );

        assert_eq!(rebuilt, Ok(standard));
    }

    #[test]
    fn rejects_empty_weapon_rack() {
        let result = Catalog::new(vec![], vec![Item::armor("Leather", 13, 1)], vec![]);
        assert_eq!(result, Err(CatalogError::NoWeapons));
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = Catalog::new(
            vec![Item::weapon("Dagger", 8, 4)],
            vec![],
            vec![
                Item::ring("Damage +1", 25, 1, 0),
                Item::ring("Damage +1", 25, 1, 0),
            ],
        );
        assert_eq!(
            result,
            Err(CatalogError::DuplicateItem("Damage +1".to_string()))
        );
    }

    #[test]
    fn rejects_item_in_wrong_list() {
        let result = Catalog::new(
            vec![Item::weapon("Dagger", 8, 4)],
            vec![Item::ring("Defense +1", 20, 0, 1)],
            vec![],
        );
        assert!(matches!(
            result,
            Err(CatalogError::WrongSlot {
                expected: ItemSlot::Armor,
                actual: ItemSlot::Ring,
                ..
            })
        ));
    }

    #[test]
    fn rejects_overflowing_totals() {
        let result = Catalog::new(
            vec![Item::weapon("Gilded Dagger", u32::MAX, 1)],
            vec![Item::armor("Leather", 1, 1)],
            vec![],
        );
        assert_eq!(result, Err(CatalogError::TotalOverflow { stat: "cost" }));

        let result = Catalog::new(
            vec![Item::weapon("Dagger", 8, 4)],
            vec![],
            vec![
                Item::ring("Defense +1", 20, 0, u32::MAX / 2 + 1),
                Item::ring("Defense +2", 40, 0, u32::MAX / 2 + 1),
            ],
        );
        assert_eq!(result, Err(CatalogError::TotalOverflow { stat: "armor" }));
    }

    #[test]
    fn accepts_totals_at_the_limit() {
        let catalog = Catalog::new(
            vec![Item::weapon("Gilded Dagger", u32::MAX - 1, 1)],
            vec![Item::armor("Leather", 1, 1)],
            vec![],
        )
        .unwrap();

        let report = crate::shop::optimize(&catalog, &crate::ShopScenario::default());
        assert_eq!(report.evaluated, 2);
    }

    #[test]
    fn standard_loadout_count() {
        // 5 weapons × (1 + 5 armors) × (1 + 6 + 15 ring sets)
        assert_eq!(Catalog::standard().loadout_count(), 660);
    }
}
