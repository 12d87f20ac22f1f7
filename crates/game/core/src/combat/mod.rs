//! Combat resolution primitives.
//!
//! This module provides pure functions and value types shared by both
//! solvers. All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `resolve_damage`: Attack vs armor with a minimum of one point
//! - `apply_damage`: HP reduction (not clamped, loss is `hp <= 0`)

pub mod combatant;
pub mod damage;
pub mod outcome;

pub use combatant::Combatant;
pub use damage::{MINIMUM_DAMAGE, apply_damage, resolve_damage};
pub use outcome::{Outcome, Side};
