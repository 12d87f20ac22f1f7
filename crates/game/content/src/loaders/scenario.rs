//! Scenario loader.

use std::path::Path;

use game_core::Scenario;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for scenarios from TOML files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a TOML file.
    ///
    /// Missing `[shop]` or `[wizard]` tables keep their built-in defaults.
    /// The result is validated before it is returned.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let scenario = Self::parse(&content)?;
        debug!(path = %path.display(), ?scenario, "loaded scenario");
        Ok(scenario)
    }

    /// Parse a scenario from TOML text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario TOML: {}", e))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// The embedded puzzle inputs.
    pub fn embedded() -> LoadResult<Scenario> {
        Self::parse(include_str!("../../data/scenario.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Combatant, ShopScenario};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn embedded_scenario_matches_builtin() {
        assert_eq!(ScenarioLoader::embedded().unwrap(), Scenario::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scenario.toml");
        fs::write(
            &path,
            "[wizard]\nplayer_hit_points = 10\nplayer_mana = 250\n\n[wizard.boss]\nhit_points = 13\ndamage = 8\n",
        )
        .unwrap();

        let scenario = ScenarioLoader::load(&path).unwrap();

        assert_eq!(scenario.shop, ShopScenario::default());
        assert_eq!(scenario.wizard.player_hit_points, 10);
        assert_eq!(scenario.wizard.player_mana, 250);
        assert_eq!(scenario.wizard.boss, Combatant::new(13, 8, 0));
    }

    #[test]
    fn rejects_boss_without_hit_points() {
        let result = ScenarioLoader::parse(
            "[shop]\nplayer_hit_points = 100\n\n[shop.boss]\nhit_points = 0\ndamage = 8\n",
        );

        let message = result.unwrap_err().to_string();
        assert!(message.contains("positive hit points"), "{}", message);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ScenarioLoader::parse("[shop\n").is_err());
    }
}
