//! Shop catalog loader.

use std::path::Path;

use game_core::{Catalog, Item, ItemSlot};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Item entry in a catalog file. The slot comes from the list it sits in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    pub cost: u32,
    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub armor: u32,
}

impl ItemEntry {
    fn into_item(self, slot: ItemSlot) -> Item {
        Item::new(self.name, slot, self.cost, self.damage, self.armor)
    }
}

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub weapons: Vec<ItemEntry>,
    #[serde(default)]
    pub armors: Vec<ItemEntry>,
    #[serde(default)]
    pub rings: Vec<ItemEntry>,
}

impl CatalogFile {
    /// Assign slots and validate.
    pub fn into_catalog(self) -> LoadResult<Catalog> {
        let assign = |entries: Vec<ItemEntry>, slot: ItemSlot| {
            entries
                .into_iter()
                .map(|entry| entry.into_item(slot))
                .collect::<Vec<_>>()
        };

        let catalog = Catalog::new(
            assign(self.weapons, ItemSlot::Weapon),
            assign(self.armors, ItemSlot::Armor),
            assign(self.rings, ItemSlot::Ring),
        )?;
        Ok(catalog)
    }
}

/// Loader for shop catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a CatalogFile
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            weapons = catalog.weapons().len(),
            armors = catalog.armors().len(),
            rings = catalog.rings().len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        file.into_catalog()
    }

    /// The embedded standard shop.
    pub fn embedded() -> LoadResult<Catalog> {
        Self::parse(include_str!("../../data/shop.ron"))
    }
}
