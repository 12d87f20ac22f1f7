//! Pure turn transitions.

use super::battle::Battle;
use super::spell::Spell;
use crate::combat::{Outcome, apply_damage};
use crate::config::Difficulty;

/// Result of a checked transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Ongoing(Battle),
    Won(Battle),
    Lost(Battle),
}

impl Resolution {
    fn check(battle: Battle) -> Self {
        match battle.outcome() {
            Outcome::Continue => Self::Ongoing(battle),
            Outcome::Win => Self::Won(battle),
            Outcome::Lose => Self::Lost(battle),
        }
    }

    pub const fn battle(&self) -> &Battle {
        match self {
            Self::Ongoing(battle) | Self::Won(battle) | Self::Lost(battle) => battle,
        }
    }

    pub const fn outcome(&self) -> Outcome {
        match self {
            Self::Ongoing(_) => Outcome::Continue,
            Self::Won(_) => Outcome::Win,
            Self::Lost(_) => Outcome::Lose,
        }
    }
}

/// Open the player's turn: difficulty drain, lose check, effect tick,
/// win check.
pub fn begin_player_turn(mut battle: Battle, difficulty: Difficulty) -> Resolution {
    battle.wizard.hit_points = apply_damage(battle.wizard.hit_points, difficulty.turn_drain());
    if battle.outcome() == Outcome::Lose {
        return Resolution::Lost(battle);
    }

    battle.tick_effects();
    Resolution::check(battle)
}

/// Spells the wizard may cast right now, in spellbook order.
pub fn castable(battle: &Battle) -> impl Iterator<Item = Spell> + '_ {
    Spell::ALL
        .into_iter()
        .filter(move |spell| spell.can_cast(&battle.wizard))
}

/// Cast `spell`, tick effects for the boss's turn, then let the boss attack
/// if it is still standing.
pub fn resolve_round(battle: Battle, spell: Spell) -> Resolution {
    let mut battle = spell.cast(battle);

    battle.tick_effects();
    if battle.outcome() == Outcome::Win {
        return Resolution::Won(battle);
    }

    battle.boss_attack();
    Resolution::check(battle)
}
