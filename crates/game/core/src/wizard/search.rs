//! Branch-and-bound search for the cheapest winning spell sequence.
//!
//! The frontier is a LIFO stack: the last child pushed is expanded first,
//! and children are pushed in spellbook order. A popped state that already
//! spent more mana than the cheapest known win is discarded. Pruning only
//! ever drops states that cannot beat that win, so it changes how much work
//! the search does but never the minimum it reports.

use tracing::{debug, trace};

use super::battle::Battle;
use super::spell::Spell;
use super::turn::{Resolution, begin_player_turn, castable, resolve_round};
use crate::config::GameConfig;

/// A winning path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Victory {
    /// Final state, boss at or below zero hit points.
    pub battle: Battle,
    /// Spells cast, one per round.
    pub spells: Vec<Spell>,
}

impl Victory {
    pub fn mana_spent(&self) -> u32 {
        self.battle.wizard.mana_spent
    }
}

/// Everything the search learned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Terminal states where the boss fell.
    pub won: usize,
    /// Terminal states where the wizard fell or ran out of castable spells.
    pub lost: usize,
    /// Frontier states discarded by branch-and-bound.
    pub pruned: usize,
    /// Frontier states whose player turn was played.
    pub expanded: usize,
    /// Frontier states left when the search stopped. Zero unless an
    /// expansion budget cut it short.
    pub pending: usize,
    /// The cheapest win, first found on ties.
    pub cheapest: Option<Victory>,
}

impl SearchReport {
    pub fn cheapest_mana(&self) -> Option<u32> {
        self.cheapest.as_ref().map(Victory::mana_spent)
    }

    fn record_win(&mut self, battle: Battle, spells: Vec<Spell>) {
        self.won += 1;
        let mana_spent = battle.wizard.mana_spent;
        if self
            .cheapest_mana()
            .is_none_or(|cheapest| mana_spent < cheapest)
        {
            trace!(mana_spent, rounds = spells.len(), "new cheapest win");
            self.cheapest = Some(Victory { battle, spells });
        }
    }

    fn can_beat_cheapest(&self, battle: &Battle) -> bool {
        self.cheapest_mana()
            .is_none_or(|cheapest| battle.wizard.mana_spent <= cheapest)
    }
}

struct Node {
    battle: Battle,
    spells: Vec<Spell>,
}

/// Explore every reachable state from `start` and report the cheapest win.
pub fn search(start: Battle, config: &GameConfig) -> SearchReport {
    debug!(
        difficulty = %config.difficulty,
        prune = config.prune,
        max_expansions = ?config.max_expansions,
        "starting spell search"
    );

    let mut report = SearchReport::default();
    let mut frontier = vec![Node {
        battle: start,
        spells: Vec::new(),
    }];

    while let Some(node) = frontier.pop() {
        if config.prune && !report.can_beat_cheapest(&node.battle) {
            report.pruned += 1;
            continue;
        }
        if config
            .max_expansions
            .is_some_and(|limit| report.expanded >= limit)
        {
            frontier.push(node);
            break;
        }
        report.expanded += 1;

        let battle = match begin_player_turn(node.battle, config.difficulty) {
            Resolution::Ongoing(battle) => battle,
            Resolution::Won(battle) => {
                report.record_win(battle, node.spells);
                continue;
            }
            Resolution::Lost(_) => {
                report.lost += 1;
                continue;
            }
        };

        let mut spells = castable(&battle).peekable();
        if spells.peek().is_none() {
            report.lost += 1;
            continue;
        }

        for spell in spells {
            let mut path = node.spells.clone();
            path.push(spell);

            match resolve_round(battle, spell) {
                Resolution::Ongoing(next) => frontier.push(Node {
                    battle: next,
                    spells: path,
                }),
                Resolution::Won(end) => report.record_win(end, path),
                Resolution::Lost(_) => report.lost += 1,
            }
        }
    }

    report.pending = frontier.len();
    debug!(
        won = report.won,
        lost = report.lost,
        pruned = report.pruned,
        expanded = report.expanded,
        pending = report.pending,
        cheapest = ?report.cheapest_mana(),
        "spell search finished"
    );

    report
}
