use super::damage::{apply_damage, resolve_damage};

/// Hit points, damage and armor of one side of a fight.
///
/// Hit points only ever go down during a fight and may end below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub hit_points: i32,
    pub damage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor: u32,
}

impl Combatant {
    pub const fn new(hit_points: i32, damage: u32, armor: u32) -> Self {
        Self {
            hit_points,
            damage,
            armor,
        }
    }

    /// True once hit points are at or below zero.
    pub const fn is_defeated(&self) -> bool {
        self.hit_points <= 0
    }

    /// Take one attack from `attacker` and return the damage dealt.
    pub fn take_hit(&mut self, attacker: &Combatant) -> u32 {
        let damage = resolve_damage(attacker.damage, self.armor);
        self.hit_points = apply_damage(self.hit_points, damage);
        damage
    }
}
