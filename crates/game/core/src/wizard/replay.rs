//! Re-run a fixed spell sequence through the turn functions.

use super::battle::Battle;
use super::spell::Spell;
use super::turn::{begin_player_turn, resolve_round};
use crate::combat::Outcome;
use crate::config::Difficulty;

/// Trace of a replayed fight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayReport {
    pub battle: Battle,
    pub outcome: Outcome,
    /// Wizard hit points at the end of every round played.
    pub hit_points: Vec<i32>,
}

impl ReplayReport {
    /// The wizard stayed above zero after every round.
    pub fn wizard_stood_throughout(&self) -> bool {
        self.hit_points.iter().all(|&hit_points| hit_points > 0)
    }
}

/// Errors raised when a spell sequence does not match the fight it is
/// replayed against.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("round {round}: {spell} cannot be cast")]
    NotCastable { round: usize, spell: Spell },

    #[error("spells ran out after {rounds} rounds with the fight still running")]
    Exhausted { rounds: usize },

    #[error("fight ended in round {round} with {remaining} spells left")]
    FightOver { round: usize, remaining: usize },
}

/// Replay `spells` from `start`, one spell per round.
///
/// The whole sequence must be used: a fight that ends early, a spell that
/// cannot be cast, or a sequence that runs out mid-fight is an error.
pub fn replay(
    start: Battle,
    difficulty: Difficulty,
    spells: &[Spell],
) -> Result<ReplayReport, ReplayError> {
    let mut report = ReplayReport {
        battle: start,
        outcome: Outcome::Continue,
        hit_points: Vec::with_capacity(spells.len()),
    };

    for round in 0..=spells.len() {
        let opening = begin_player_turn(report.battle, difficulty);
        report.battle = *opening.battle();
        if opening.outcome().is_terminal() {
            return finish(report, opening.outcome(), round, spells.len());
        }

        let Some(&spell) = spells.get(round) else {
            return Err(ReplayError::Exhausted { rounds: round });
        };
        if !spell.can_cast(&report.battle.wizard) {
            return Err(ReplayError::NotCastable { round, spell });
        }

        let resolution = resolve_round(report.battle, spell);
        report.battle = *resolution.battle();
        report.hit_points.push(report.battle.wizard.hit_points);
        if resolution.outcome().is_terminal() {
            return finish(report, resolution.outcome(), round + 1, spells.len());
        }
    }

    Err(ReplayError::Exhausted {
        rounds: spells.len(),
    })
}

fn finish(
    mut report: ReplayReport,
    outcome: Outcome,
    used: usize,
    total: usize,
) -> Result<ReplayReport, ReplayError> {
    if used < total {
        return Err(ReplayError::FightOver {
            round: used,
            remaining: total - used,
        });
    }
    report.outcome = outcome;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Combatant;
    use crate::wizard::Wizard;

    fn start(boss_hit_points: i32) -> Battle {
        Battle::new(Wizard::new(10, 250), Combatant::new(boss_hit_points, 8, 0))
    }

    #[test]
    fn replays_worked_example() {
        let report = replay(
            start(13),
            Difficulty::Normal,
            &[Spell::Poison, Spell::MagicMissile],
        )
        .unwrap();

        assert_eq!(report.outcome, Outcome::Win);
        assert_eq!(report.hit_points, vec![2, 2]);
        assert_eq!(report.battle.boss.hit_points, 0);
        assert_eq!(report.battle.wizard.mana, 24);
        assert!(report.wizard_stood_throughout());
    }

    #[test]
    fn rejects_recast_of_active_effect() {
        let result = replay(
            start(40),
            Difficulty::Normal,
            &[Spell::Shield, Spell::Shield],
        );

        assert_eq!(
            result,
            Err(ReplayError::NotCastable {
                round: 1,
                spell: Spell::Shield
            })
        );
    }

    #[test]
    fn rejects_leftover_spells() {
        let result = replay(
            start(13),
            Difficulty::Normal,
            &[Spell::Poison, Spell::MagicMissile, Spell::Drain],
        );

        assert_eq!(
            result,
            Err(ReplayError::FightOver {
                round: 2,
                remaining: 1
            })
        );
    }

    #[test]
    fn rejects_short_sequence() {
        let result = replay(start(13), Difficulty::Normal, &[Spell::Shield]);
        assert_eq!(result, Err(ReplayError::Exhausted { rounds: 1 }));
    }

    #[test]
    fn a_lost_fight_replays_as_loss() {
        let report = replay(
            start(50),
            Difficulty::Normal,
            &[Spell::MagicMissile, Spell::MagicMissile],
        )
        .unwrap();

        assert_eq!(report.outcome, Outcome::Lose);
        assert_eq!(report.hit_points, vec![2, -6]);
        assert!(!report.wizard_stood_throughout());
    }
}
