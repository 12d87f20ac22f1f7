//! Starting stats for both solvers.
//!
//! The defaults are the fixed puzzle inputs; loaders in `game-content` can
//! replace them with values read from a TOML file.

use crate::combat::{Combatant, Side};
use crate::wizard::{Battle, Wizard};

/// Both solver setups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Scenario {
    pub shop: ShopScenario,
    pub wizard: WizardScenario,
}

impl Scenario {
    /// Reject setups where a fight would be over before it starts.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        self.shop.validate()?;
        self.wizard.validate()
    }
}

/// Equipment duel setup: the player's base hit points and the boss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopScenario {
    pub player_hit_points: i32,
    pub boss: Combatant,
}

impl ShopScenario {
    pub const PLAYER_HIT_POINTS: i32 = 100;
    pub const BOSS: Combatant = Combatant::new(109, 8, 2);

    pub fn validate(&self) -> Result<(), ScenarioError> {
        check_hit_points(Side::Player, self.player_hit_points)?;
        check_hit_points(Side::Boss, self.boss.hit_points)
    }
}

impl Default for ShopScenario {
    fn default() -> Self {
        Self {
            player_hit_points: Self::PLAYER_HIT_POINTS,
            boss: Self::BOSS,
        }
    }
}

/// Spell game setup.
///
/// The boss's armor is ignored: spells bypass it and the wizard never
/// attacks physically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WizardScenario {
    pub player_hit_points: i32,
    pub player_mana: u32,
    pub boss: Combatant,
}

impl WizardScenario {
    pub const PLAYER_HIT_POINTS: i32 = 50;
    pub const PLAYER_MANA: u32 = 500;
    pub const BOSS: Combatant = Combatant::new(51, 9, 0);

    pub fn validate(&self) -> Result<(), ScenarioError> {
        check_hit_points(Side::Player, self.player_hit_points)?;
        check_hit_points(Side::Boss, self.boss.hit_points)
    }

    /// The opening state of the spell game.
    pub fn battle(&self) -> Battle {
        Battle::new(
            Wizard::new(self.player_hit_points, self.player_mana),
            self.boss,
        )
    }
}

impl Default for WizardScenario {
    fn default() -> Self {
        Self {
            player_hit_points: Self::PLAYER_HIT_POINTS,
            player_mana: Self::PLAYER_MANA,
            boss: Self::BOSS,
        }
    }
}

fn check_hit_points(side: Side, hit_points: i32) -> Result<(), ScenarioError> {
    if hit_points <= 0 {
        return Err(ScenarioError::NonPositiveHitPoints { side, hit_points });
    }
    Ok(())
}

/// Errors raised when validating a scenario.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("{side} must start with positive hit points (got {hit_points})")]
    NonPositiveHitPoints { side: Side, hit_points: i32 },
}
