//! Timed spell effects.
//!
//! Each effect stores the number of ticks it has left. Effects tick at the
//! start of both the player's and the boss's turn, and a counter at zero
//! means the effect is inactive.

use crate::config::GameConfig;

/// Kinds of timed effects.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectKind {
    /// Wizard armor +7 while active.
    Shield,
    /// Boss loses 3 hit points per tick.
    Poison,
    /// Wizard gains 101 mana per tick.
    Recharge,
}

/// Remaining ticks per effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Effects {
    shield: u32,
    poison: u32,
    recharge: u32,
}

/// What one tick of the active effects produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectPayout {
    pub boss_damage: u32,
    pub mana: u32,
}

impl Effects {
    /// No effect active.
    pub const IDLE: Self = Self {
        shield: 0,
        poison: 0,
        recharge: 0,
    };

    pub const fn remaining(&self, kind: EffectKind) -> u32 {
        match kind {
            EffectKind::Shield => self.shield,
            EffectKind::Poison => self.poison,
            EffectKind::Recharge => self.recharge,
        }
    }

    pub const fn is_active(&self, kind: EffectKind) -> bool {
        self.remaining(kind) > 0
    }

    /// Start (or restart) an effect for `duration` ticks.
    pub fn start(&mut self, kind: EffectKind, duration: u32) {
        let timer = match kind {
            EffectKind::Shield => &mut self.shield,
            EffectKind::Poison => &mut self.poison,
            EffectKind::Recharge => &mut self.recharge,
        };
        *timer = duration;
    }

    /// Armor granted by an active shield.
    pub const fn armor(&self) -> u32 {
        if self.shield > 0 {
            GameConfig::SHIELD_ARMOR
        } else {
            0
        }
    }

    /// Count every active effect down by one and collect its payout.
    pub fn tick(&mut self) -> EffectPayout {
        let mut payout = EffectPayout::default();

        if self.poison > 0 {
            self.poison -= 1;
            payout.boss_damage += GameConfig::POISON_DAMAGE;
        }
        if self.shield > 0 {
            self.shield -= 1;
        }
        if self.recharge > 0 {
            self.recharge -= 1;
            payout.mana += GameConfig::RECHARGE_MANA;
        }

        payout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_effects_pay_nothing() {
        let mut effects = Effects::default();

        assert_eq!(effects.tick(), EffectPayout::default());
        assert_eq!(effects, Effects::default());
    }

    #[test]
    fn active_effects_count_down_and_pay() {
        let mut effects = Effects::default();
        effects.start(EffectKind::Poison, 2);
        effects.start(EffectKind::Recharge, 1);
        effects.start(EffectKind::Shield, 1);
        assert_eq!(effects.armor(), GameConfig::SHIELD_ARMOR);

        let payout = effects.tick();
        assert_eq!(payout.boss_damage, 3);
        assert_eq!(payout.mana, 101);
        assert_eq!(effects.remaining(EffectKind::Poison), 1);
        assert!(!effects.is_active(EffectKind::Recharge));
        assert_eq!(effects.armor(), 0);
    }

    #[test]
    fn durations_stop_at_zero() {
        let mut effects = Effects::default();
        effects.start(EffectKind::Shield, 1);

        for _ in 0..5 {
            effects.tick();
        }

        assert_eq!(effects.remaining(EffectKind::Shield), 0);
    }
}
