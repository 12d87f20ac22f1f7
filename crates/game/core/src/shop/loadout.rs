//! Loadouts and their enumeration.

use std::iter;

use arrayvec::ArrayVec;

use super::catalog::Catalog;
use super::item::Item;
use crate::combat::Combatant;
use crate::config::GameConfig;

/// Zero, one or two distinct rings.
pub type RingSet<'a> = ArrayVec<&'a Item, { GameConfig::MAX_RINGS }>;

/// One weapon, an optional armor piece and up to two rings.
///
/// Totals are summed once at construction; a loadout never changes after
/// that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loadout<'a> {
    weapon: &'a Item,
    armor: Option<&'a Item>,
    rings: RingSet<'a>,
    cost: u32,
    damage: u32,
    armor_score: u32,
}

impl<'a> Loadout<'a> {
    pub(crate) fn new(weapon: &'a Item, armor: Option<&'a Item>, rings: RingSet<'a>) -> Self {
        let worn = || iter::once(weapon).chain(armor).chain(rings.iter().copied());
        let cost = worn().map(|item| item.cost).sum();
        let damage = worn().map(|item| item.damage).sum();
        let armor_score = worn().map(|item| item.armor).sum();

        Self {
            weapon,
            armor,
            rings,
            cost,
            damage,
            armor_score,
        }
    }

    pub fn weapon(&self) -> &'a Item {
        self.weapon
    }

    pub fn armor_piece(&self) -> Option<&'a Item> {
        self.armor
    }

    pub fn rings(&self) -> &[&'a Item] {
        &self.rings
    }

    /// Every item worn, weapon first.
    pub fn items(&self) -> impl Iterator<Item = &'a Item> + '_ {
        iter::once(self.weapon)
            .chain(self.armor)
            .chain(self.rings.iter().copied())
    }

    /// Gold spent on the whole loadout.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn armor(&self) -> u32 {
        self.armor_score
    }

    /// The player wearing this loadout.
    pub fn equip(&self, hit_points: i32) -> Combatant {
        Combatant::new(hit_points, self.damage, self.armor_score)
    }
}

/// Enumerate every legal loadout of `catalog`:
/// each weapon × {no armor, each armor} × {no ring, each ring, each
/// unordered pair of distinct rings}.
pub fn loadouts(catalog: &Catalog) -> impl Iterator<Item = Loadout<'_>> {
    catalog.weapons().iter().flat_map(move |weapon| {
        armor_choices(catalog.armors()).flat_map(move |armor| {
            ring_choices(catalog.rings()).map(move |rings| Loadout::new(weapon, armor, rings))
        })
    })
}

fn armor_choices(armors: &[Item]) -> impl Iterator<Item = Option<&Item>> {
    iter::once(None).chain(armors.iter().map(Some))
}

fn ring_choices(rings: &[Item]) -> impl Iterator<Item = RingSet<'_>> {
    let bare = iter::once(RingSet::new());
    let single = rings
        .iter()
        .map(|ring| iter::once(ring).collect::<RingSet<'_>>());
    let pairs = rings.iter().enumerate().flat_map(move |(index, left)| {
        rings[index + 1..]
            .iter()
            .map(move |right| RingSet::from([left, right]))
    });

    bare.chain(single).chain(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_every_combination_once() {
        let catalog = Catalog::standard();
        let all: Vec<_> = catalog.loadouts().collect();

        assert_eq!(all.len(), catalog.loadout_count());
        for (index, loadout) in all.iter().enumerate() {
            assert!(
                !all[index + 1..].contains(loadout),
                "duplicate loadout {:?}",
                loadout
            );
        }
    }

    #[test]
    fn rings_are_never_doubled() {
        let catalog = Catalog::standard();

        for loadout in catalog.loadouts() {
            if let [left, right] = loadout.rings() {
                assert_ne!(left.name, right.name);
            }
        }
    }

    #[test]
    fn totals_sum_over_items() {
        let catalog = Catalog::standard();
        let weapon = &catalog.weapons()[1]; // Shortsword 10g, 5 dmg
        let armor = &catalog.armors()[0]; // Leather 13g, 1 armor
        let rings = RingSet::from([&catalog.rings()[0], &catalog.rings()[4]]);

        let loadout = Loadout::new(weapon, Some(armor), rings);

        assert_eq!(loadout.cost(), 10 + 13 + 25 + 40);
        assert_eq!(loadout.damage(), 5 + 1);
        assert_eq!(loadout.armor(), 1 + 2);
        assert_eq!(loadout.items().count(), 4);
        assert_eq!(loadout.equip(100), Combatant::new(100, 6, 3));
    }

    #[test]
    fn cheapest_loadout_is_bare_dagger() {
        let catalog = Catalog::standard();
        let cheapest = catalog.loadouts().min_by_key(Loadout::cost).unwrap();

        assert_eq!(cheapest.weapon().name, "Dagger");
        assert!(cheapest.armor_piece().is_none());
        assert!(cheapest.rings().is_empty());
        assert_eq!(cheapest.cost(), 8);
    }
}
