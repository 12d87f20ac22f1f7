//! Deterministic combat rules and solvers for the arena puzzles.
//!
//! `game-core` defines the canonical rules (damage resolution, equipment
//! duels, spell turns) and exposes pure APIs that the solver binaries and
//! content loaders build on. Every simulation step derives a new value from
//! the previous one, so branches can be explored without shared state.
pub mod combat;
pub mod config;
pub mod scenario;
pub mod shop;
pub mod wizard;

pub use combat::{Combatant, Outcome, Side, apply_damage, resolve_damage};
pub use config::{Difficulty, GameConfig};
pub use scenario::{Scenario, ScenarioError, ShopScenario, WizardScenario};
pub use shop::{
    Catalog, CatalogError, DuelReport, Item, ItemSlot, Loadout, ShopReport, duel, loadouts,
    optimize,
};
pub use wizard::{
    Battle, EffectKind, Effects, ReplayError, ReplayReport, Resolution, SearchReport, Spell,
    Victory, Wizard, replay, search,
};
