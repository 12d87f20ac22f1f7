//! Equipment shop: catalog, loadouts and the duel each loadout fights.
//!
//! # Flow
//!
//! 1. [`loadouts`] enumerates every legal combination of catalog items
//! 2. [`duel`] fights the boss once per loadout
//! 3. [`optimize`] folds the results into a [`ShopReport`]

pub mod catalog;
pub mod duel;
pub mod item;
pub mod loadout;
pub mod optimize;

pub use catalog::{Catalog, CatalogError};
pub use duel::{DuelReport, duel};
pub use item::{Item, ItemSlot};
pub use loadout::{Loadout, RingSet, loadouts};
pub use optimize::{ShopReport, optimize};
