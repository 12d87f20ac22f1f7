//! Plain-text answer formatting.
//!
//! One answer per line, in the order the solvers produce them. An absent
//! answer (no winning loadout, no winning spell path) prints as `none`.

use game_core::{SearchReport, ShopReport};

pub const ABSENT: &str = "none";

fn or_absent(value: Option<u32>) -> String {
    value.map_or_else(|| ABSENT.to_string(), |value| value.to_string())
}

/// Winning loadout count, cheapest winning cost, priciest losing cost.
pub fn shop_lines(report: &ShopReport<'_>) -> Vec<String> {
    vec![
        report.wins.to_string(),
        or_absent(report.cheapest_win_cost()),
        or_absent(report.priciest_loss_cost()),
    ]
}

/// `pending won lost`, then the cheapest winning mana, then optionally the
/// winning spells.
pub fn wizard_lines(report: &SearchReport, show_path: bool) -> Vec<String> {
    let mut lines = vec![
        format!("{} {} {}", report.pending, report.won, report.lost),
        or_absent(report.cheapest_mana()),
    ];

    if show_path {
        if let Some(victory) = &report.cheapest {
            let spells: Vec<&str> = victory.spells.iter().map(|spell| spell.as_ref()).collect();
            lines.push(spells.join(" "));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Battle, Combatant, Spell, Victory, Wizard};

    #[test]
    fn empty_shop_report_prints_none() {
        let report = ShopReport::default();
        assert_eq!(shop_lines(&report), vec!["0", "none", "none"]);
    }

    #[test]
    fn wizard_lines_with_path() {
        let mut battle = Battle::new(Wizard::new(10, 250), Combatant::new(0, 8, 0));
        battle.wizard.mana_spent = 226;
        let report = SearchReport {
            won: 3,
            lost: 29,
            cheapest: Some(Victory {
                battle,
                spells: vec![Spell::Poison, Spell::MagicMissile],
            }),
            ..SearchReport::default()
        };

        assert_eq!(wizard_lines(&report, false), vec!["0 3 29", "226"]);
        assert_eq!(
            wizard_lines(&report, true),
            vec!["0 3 29", "226", "poison magic_missile"]
        );
    }

    #[test]
    fn wizard_without_victory_prints_none() {
        let report = SearchReport {
            lost: 4,
            ..SearchReport::default()
        };
        assert_eq!(wizard_lines(&report, true), vec!["0 0 4", "none"]);
    }
}
