//! Data-driven content definitions and loaders.
//!
//! This crate reads solver inputs from data files:
//! - Shop catalogs (RON)
//! - Scenarios: starting stats for both fights (TOML)
//!
//! The files under `data/` are embedded and reproduce the built-in
//! `game-core` defaults exactly. All loaders use game-core types directly.

pub mod loaders;

pub use loaders::{CatalogLoader, LoadResult, ScenarioLoader};
