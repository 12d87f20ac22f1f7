//! Loadout cost optimization.

use tracing::debug;

use super::catalog::Catalog;
use super::duel::duel;
use super::loadout::Loadout;
use crate::scenario::ShopScenario;

/// Outcome of fighting the boss once with every loadout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShopReport<'a> {
    /// Loadouts simulated.
    pub evaluated: usize,
    /// Loadouts that beat the boss.
    pub wins: usize,
    /// Least gold that still wins. First found on ties.
    pub cheapest_win: Option<Loadout<'a>>,
    /// Most gold that still loses. First found on ties.
    pub priciest_loss: Option<Loadout<'a>>,
}

impl ShopReport<'_> {
    pub fn losses(&self) -> usize {
        self.evaluated - self.wins
    }

    pub fn cheapest_win_cost(&self) -> Option<u32> {
        self.cheapest_win.as_ref().map(Loadout::cost)
    }

    pub fn priciest_loss_cost(&self) -> Option<u32> {
        self.priciest_loss.as_ref().map(Loadout::cost)
    }
}

/// Simulate a duel for every loadout in `catalog`.
pub fn optimize<'a>(catalog: &'a Catalog, scenario: &ShopScenario) -> ShopReport<'a> {
    let mut report = ShopReport::default();

    for loadout in catalog.loadouts() {
        report.evaluated += 1;
        let fight = duel(loadout.equip(scenario.player_hit_points), scenario.boss);

        if fight.player_won() {
            report.wins += 1;
            if report
                .cheapest_win
                .as_ref()
                .is_none_or(|best| loadout.cost() < best.cost())
            {
                report.cheapest_win = Some(loadout);
            }
        } else if report
            .priciest_loss
            .as_ref()
            .is_none_or(|worst| loadout.cost() > worst.cost())
        {
            report.priciest_loss = Some(loadout);
        }
    }

    debug!(
        evaluated = report.evaluated,
        wins = report.wins,
        cheapest_win = ?report.cheapest_win_cost(),
        priciest_loss = ?report.priciest_loss_cost(),
        "shop optimization finished"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Combatant;
    use crate::shop::Item;

    #[test]
    fn standard_shop_against_standard_boss() {
        let catalog = Catalog::standard();
        let report = optimize(&catalog, &ShopScenario::default());

        assert_eq!(report.evaluated, 660);
        assert_eq!(report.wins, 448);
        assert_eq!(report.losses(), 212);
        assert_eq!(report.cheapest_win_cost(), Some(111));
        assert_eq!(report.priciest_loss_cost(), Some(188));
    }

    #[test]
    fn report_is_deterministic() {
        let catalog = Catalog::standard();
        let scenario = ShopScenario::default();

        assert_eq!(optimize(&catalog, &scenario), optimize(&catalog, &scenario));
    }

    #[test]
    fn unbeatable_boss_has_no_winning_loadout() {
        let catalog = Catalog::standard();
        let scenario = ShopScenario {
            player_hit_points: 1,
            boss: Combatant::new(10_000, 1_000, 0),
        };

        let report = optimize(&catalog, &scenario);

        assert_eq!(report.wins, 0);
        assert!(report.cheapest_win.is_none());
        assert!(report.priciest_loss.is_some());
    }

    #[test]
    fn harmless_boss_has_no_losing_loadout() {
        let catalog = Catalog::new(
            vec![Item::weapon("Stick", 1, 1)],
            vec![],
            vec![Item::ring("Damage +1", 5, 1, 0)],
        )
        .unwrap();
        let scenario = ShopScenario {
            player_hit_points: 100,
            boss: Combatant::new(3, 1, 0),
        };

        let report = optimize(&catalog, &scenario);

        assert_eq!(report.evaluated, 2);
        assert_eq!(report.wins, 2);
        assert_eq!(report.cheapest_win_cost(), Some(1));
        assert!(report.priciest_loss.is_none());
    }
}
