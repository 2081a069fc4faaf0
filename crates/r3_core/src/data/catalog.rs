use std::fs;
use std::path::Path;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{DefName, HediffDef, RecipeDef, ThingCategoryDef, ThingDef};

/// Snapshot of every def kind the reclamation pipeline consumes.
///
/// In the host game these all live in one global def database; a catalog
/// is the slice this crate needs, with each section kept in load order.
/// Any section may be absent from the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefCatalog {
    #[serde(default)]
    pub things: Vec<ThingDef>,
    #[serde(default)]
    pub hediffs: Vec<HediffDef>,
    #[serde(default)]
    pub recipes: Vec<RecipeDef>,
    #[serde(default)]
    pub categories: Vec<ThingCategoryDef>,
}

impl DefCatalog {
    /// Parses a catalog from its JSON document form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Thing def with the given name, if the catalog contains one.
    pub fn thing(&self, name: &DefName) -> Option<&ThingDef> {
        self.things.iter().find(|t| &t.def_name == name)
    }

    /// By-name index over `things`, for joins that look up many refs.
    ///
    /// On duplicate names the earliest entry wins, matching [`Self::thing`].
    pub fn things_by_name(&self) -> FxHashMap<&DefName, &ThingDef> {
        let mut index: FxHashMap<&DefName, &ThingDef> = FxHashMap::default();
        for thing in &self.things {
            index.entry(&thing.def_name).or_insert(thing);
        }
        index
    }

    /// True when a category def with this name is present.
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.def_name.as_str() == name)
    }
}
