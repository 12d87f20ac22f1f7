//! The spellbook.

use super::battle::{Battle, Wizard};
use super::effects::EffectKind;
use crate::combat::apply_damage;

/// The five spells, in spellbook order.
///
/// Instant spells resolve immediately; effect spells start a timed
/// [`EffectKind`] and cannot be recast while that effect is still running.
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
pub enum Spell {
    /// 53 mana. Instantly deals 4 damage.
    MagicMissile,
    /// 73 mana. Instantly deals 2 damage and heals 2 hit points.
    Drain,
    /// 113 mana. Shield effect for 6 ticks.
    Shield,
    /// 173 mana. Poison effect for 6 ticks.
    Poison,
    /// 229 mana. Recharge effect for 6 ticks.
    Recharge,
}

impl Spell {
    /// Spellbook order; search branches are generated in this order.
    pub const ALL: [Self; 5] = [
        Self::MagicMissile,
        Self::Drain,
        Self::Shield,
        Self::Poison,
        Self::Recharge,
    ];

    pub const fn cost(self) -> u32 {
        match self {
            Self::MagicMissile => 53,
            Self::Drain => 73,
            Self::Shield => 113,
            Self::Poison => 173,
            Self::Recharge => 229,
        }
    }

    /// Timed effect started by this spell and its duration in ticks.
    pub const fn effect(self) -> Option<(EffectKind, u32)> {
        match self {
            Self::MagicMissile | Self::Drain => None,
            Self::Shield => Some((EffectKind::Shield, 6)),
            Self::Poison => Some((EffectKind::Poison, 6)),
            Self::Recharge => Some((EffectKind::Recharge, 6)),
        }
    }

    /// The wizard must hold strictly more mana than the cost, and an effect
    /// spell's effect must have run out.
    pub fn can_cast(self, wizard: &Wizard) -> bool {
        if self.cost() >= wizard.mana {
            return false;
        }
        match self.effect() {
            Some((kind, _)) => !wizard.effects.is_active(kind),
            None => true,
        }
    }

    /// Pay for the spell and apply it. Castability is the caller's concern.
    pub fn cast(self, mut battle: Battle) -> Battle {
        let wizard = &mut battle.wizard;
        wizard.mana -= self.cost();
        wizard.mana_spent = wizard.mana_spent.saturating_add(self.cost());

        match self {
            Self::MagicMissile => {
                battle.boss.hit_points = apply_damage(battle.boss.hit_points, 4);
            }
            Self::Drain => {
                battle.boss.hit_points = apply_damage(battle.boss.hit_points, 2);
                battle.wizard.hit_points = battle.wizard.hit_points.saturating_add(2);
            }
            Self::Shield | Self::Poison | Self::Recharge => {
                if let Some((kind, duration)) = self.effect() {
                    battle.wizard.effects.start(kind, duration);
                }
            }
        }

        battle
    }
}
