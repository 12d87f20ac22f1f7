//! Equipment duel simulation.

use crate::combat::{Combatant, Side};

/// Result of a duel between the equipped player and the boss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuelReport {
    pub winner: Side,
    /// Attacks landed by both sides together.
    pub attacks: u32,
    /// Final state of both combatants.
    pub player: Combatant,
    pub boss: Combatant,
}

impl DuelReport {
    pub fn player_won(&self) -> bool {
        self.winner == Side::Player
    }
}

/// Fight until one side is down. The player attacks first and each attack
/// is checked before the other side may answer.
///
/// A combatant that starts at or below zero hit points has already lost;
/// if both do, the boss wins.
pub fn duel(mut player: Combatant, mut boss: Combatant) -> DuelReport {
    let finish = |winner, attacks, player, boss| DuelReport {
        winner,
        attacks,
        player,
        boss,
    };

    if player.is_defeated() {
        return finish(Side::Boss, 0, player, boss);
    }
    if boss.is_defeated() {
        return finish(Side::Player, 0, player, boss);
    }

    let mut attacker = Side::Player;
    let mut attacks = 0;
    loop {
        attacks += 1;
        let defender = match attacker {
            Side::Player => {
                boss.take_hit(&player);
                &boss
            }
            Side::Boss => {
                player.take_hit(&boss);
                &player
            }
        };

        if defender.is_defeated() {
            return finish(attacker, attacks, player, boss);
        }
        attacker = attacker.opponent();
    }
}
