use serde::{Deserialize, Serialize};

use crate::models::catalog::{Catalog, PackagingSet};
use crate::models::recipe::Recipe;
use crate::models::settings::{CostModel, Settings};

/// Id of the packaging set that always exists in a fresh store.
pub const DEFAULT_PACKAGING_SET_ID: &str = "pack_default";

/// The full immutable input to every engine call: settings, cost model,
/// catalog, and recipes. Loaded and saved as one JSON document; unknown or
/// missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub settings: Settings,
    pub cost_model: CostModel,
    pub catalog: Catalog,
    pub recipes: Vec<Recipe>,
}

impl Snapshot {
    /// Fresh store contents: stock settings plus the default packaging set.
    pub fn empty() -> Self {
        let mut snapshot = Snapshot::default();
        snapshot.catalog.packaging_sets.push(PackagingSet {
            id: DEFAULT_PACKAGING_SET_ID.to_string(),
            name: "Standard To-Go".to_string(),
            lines: Vec::new(),
        });
        snapshot
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Find a recipe by name, case-insensitive.
    pub fn recipe_by_name(&self, name: &str) -> Option<&Recipe> {
        let key = name.to_lowercase();
        self.recipes.iter().find(|r| r.key() == key)
    }
}
