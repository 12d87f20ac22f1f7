//! Spell game state.

use super::effects::Effects;
use crate::combat::{Combatant, Outcome, apply_damage, resolve_damage};

/// The spell-casting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Wizard {
    pub hit_points: i32,
    pub mana: u32,
    /// Total mana paid for spells so far. Never decreases.
    pub mana_spent: u32,
    pub effects: Effects,
}

impl Wizard {
    pub const fn new(hit_points: i32, mana: u32) -> Self {
        Self {
            hit_points,
            mana,
            mana_spent: 0,
            effects: Effects::IDLE,
        }
    }

    /// Current armor, all of it from an active shield.
    pub const fn armor(&self) -> u32 {
        self.effects.armor()
    }
}

/// A snapshot of the spell game.
///
/// `Battle` is `Copy`: every turn function takes a state and returns the
/// next one, so search branches never share anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Battle {
    pub wizard: Wizard,
    pub boss: Combatant,
}

impl Battle {
    pub const fn new(wizard: Wizard, boss: Combatant) -> Self {
        Self { wizard, boss }
    }

    /// Player loss is checked before boss loss.
    pub const fn outcome(&self) -> Outcome {
        if self.wizard.hit_points <= 0 {
            Outcome::Lose
        } else if self.boss.hit_points <= 0 {
            Outcome::Win
        } else {
            Outcome::Continue
        }
    }

    /// Tick every active effect and apply its payout.
    pub fn tick_effects(&mut self) {
        let payout = self.wizard.effects.tick();
        self.boss.hit_points = apply_damage(self.boss.hit_points, payout.boss_damage);
        self.wizard.mana = self.wizard.mana.saturating_add(payout.mana);
    }

    /// The boss's melee attack against the wizard's current armor. Always
    /// lands for at least one point, even from a zero-damage boss.
    pub fn boss_attack(&mut self) -> u32 {
        let damage = resolve_damage(self.boss.damage, self.wizard.armor());
        self.wizard.hit_points = apply_damage(self.wizard.hit_points, damage);
        damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::EffectKind;

    fn battle(hit_points: i32, boss_hit_points: i32) -> Battle {
        Battle::new(Wizard::new(hit_points, 250), Combatant::new(boss_hit_points, 8, 0))
    }

    #[test]
    fn outcome_checks_wizard_first() {
        assert_eq!(battle(10, 13).outcome(), Outcome::Continue);
        assert_eq!(battle(10, 0).outcome(), Outcome::Win);
        assert_eq!(battle(0, 13).outcome(), Outcome::Lose);
        assert_eq!(battle(-1, -1).outcome(), Outcome::Lose);
    }

    #[test]
    fn shield_softens_boss_attack() {
        let mut state = battle(10, 13);
        assert_eq!(state.boss_attack(), 8);
        assert_eq!(state.wizard.hit_points, 2);

        let mut shielded = battle(10, 13);
        shielded.wizard.effects.start(EffectKind::Shield, 6);
        assert_eq!(shielded.boss_attack(), 1);
        assert_eq!(shielded.wizard.hit_points, 9);
    }

    #[test]
    fn effects_pay_out_on_tick() {
        let mut state = battle(10, 13);
        state.wizard.effects.start(EffectKind::Poison, 6);
        state.wizard.effects.start(EffectKind::Recharge, 5);

        state.tick_effects();

        assert_eq!(state.boss.hit_points, 10);
        assert_eq!(state.wizard.mana, 351);
    }

    #[test]
    fn zero_damage_boss_still_lands_one_point() {
        let mut state = Battle::new(Wizard::new(10, 250), Combatant::new(13, 0, 0));
        assert_eq!(state.boss_attack(), 1);
        assert_eq!(state.wizard.hit_points, 9);
    }

    #[test]
    fn recharge_saturates_mana() {
        let mut state = Battle::new(Wizard::new(10, u32::MAX - 50), Combatant::new(13, 8, 0));
        state.wizard.effects.start(EffectKind::Recharge, 6);

        state.tick_effects();

        assert_eq!(state.wizard.mana, u32::MAX);
    }
}
