//! Spell-casting duel against a boss.
//!
//! # Turn Sequence
//!
//! ```text
//! player turn:  drain (hard) → lose? → tick effects → win?
//!               castable spells (none → lose)
//! per spell:    pay + cast → tick effects → win?
//! boss turn:    attack (shield: damage - 7, min 1) → lose?
//! ```
//!
//! [`search`] explores every castable spell at every turn with
//! branch-and-bound pruning on mana spent; [`replay`] re-runs a fixed spell
//! sequence through the same turn functions.

pub mod battle;
pub mod effects;
pub mod replay;
pub mod search;
pub mod spell;
pub mod turn;

pub use battle::{Battle, Wizard};
pub use effects::{EffectKind, Effects};
pub use replay::{ReplayError, ReplayReport, replay};
pub use search::{SearchReport, Victory, search};
pub use spell::Spell;
pub use turn::{Resolution, begin_player_turn, castable, resolve_round};
