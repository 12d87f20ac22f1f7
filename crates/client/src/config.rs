//! Solver configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use game_content::{CatalogLoader, ScenarioLoader};
use game_core::{Catalog, Scenario};
use tracing::info;

/// Where the solver inputs come from and how loudly to log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// TOML scenario; the embedded `scenario.toml` when unset.
    pub scenario_path: Option<PathBuf>,
    /// RON shop catalog; the embedded `shop.ron` when unset.
    pub catalog_path: Option<PathBuf>,
    /// `EnvFilter` directive string.
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scenario_path: None,
            catalog_path: None,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_LOG_FILTER: &'static str = "warn";

    /// Construct configuration from process environment variables.
    ///
    /// - `ARENA_SCENARIO`
    /// - `ARENA_CATALOG`
    /// - `ARENA_LOG`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("ARENA_SCENARIO") {
            config.scenario_path = Some(path);
        }

        if let Some(path) = read_env::<PathBuf>("ARENA_CATALOG") {
            config.catalog_path = Some(path);
        }

        if let Some(filter) = read_env::<String>("ARENA_LOG") {
            config.log_filter = filter;
        }

        config
    }

    /// Command-line scenario path, when given, wins over the environment.
    pub fn with_scenario_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.scenario_path = path;
        }
        self
    }

    /// Command-line catalog path, when given, wins over the environment.
    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }

    pub fn load_scenario(&self) -> Result<Scenario> {
        match &self.scenario_path {
            Some(path) => {
                info!("Loading scenario from {}", path.display());
                ScenarioLoader::load(path)
                    .with_context(|| format!("Failed to load scenario {}", path.display()))
            }
            None => ScenarioLoader::embedded().context("Failed to load embedded scenario"),
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                CatalogLoader::load(path)
                    .with_context(|| format!("Failed to load catalog {}", path.display()))
            }
            None => CatalogLoader::embedded().context("Failed to load embedded catalog"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| value.trim().parse().ok())
}
