use serde::{Deserialize, Serialize};

use super::def_name::DefName;
use super::tech::TechLevel;

/// Reference to a research project def, carrying the tier that project
/// belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchProjectRef {
    pub def_name: DefName,
    #[serde(default)]
    pub tech_level: TechLevel,
}

/// A crafting recipe from the host catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDef {
    pub def_name: DefName,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub products: Option<Vec<DefName>>,
    #[serde(default)]
    pub research_prerequisite: Option<ResearchProjectRef>,
}

impl RecipeDef {
    /// Tier of the recipe's research prerequisite, if it has one.
    ///
    /// A recipe without a prerequisite yields `None`; a prerequisite
    /// whose project has no tier yields `Some(Undefined)`, which callers
    /// are expected to discard.
    pub fn research_tech_level(&self) -> Option<TechLevel> {
        self.research_prerequisite.as_ref().map(|r| r.tech_level)
    }
}
