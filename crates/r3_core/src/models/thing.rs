use serde::{Deserialize, Serialize};

use super::def_name::DefName;
use super::stat::{stat_value, StatKind, StatModifier};
use super::tech::TechLevel;

/// Broad engine category of a thing def.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThingCategory {
    Item,
    Building,
    Plant,
    Pawn,
}

/// How often the engine ticks a spawned thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickerType {
    Never,
    Rare,
    Normal,
}

/// Draw layer for spawned things.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AltitudeLayer {
    Terrain,
    Item,
    Building,
    Pawn,
}

/// Graphic class resolved by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphicClass {
    Single,
    Random,
}

/// Texture reference carried by generated defs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicData {
    pub tex_path: String,
    pub graphic_class: GraphicClass,
}

impl GraphicData {
    pub fn single(tex_path: impl Into<String>) -> Self {
        Self {
            tex_path: tex_path.into(),
            graphic_class: GraphicClass::Single,
        }
    }
}

/// Component behaviour attached to a def.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompKind {
    Forbiddable,
    Rottable,
}

/// A source item definition as loaded from the host catalog.
///
/// Only the fields the reclamation pipeline reads are modelled here; the
/// host def format carries far more. Absent fields deserialize to their
/// neutral defaults so sparse catalogs stay valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThingDef {
    pub def_name: DefName,
    pub label: String,
    #[serde(default)]
    pub tech_level: TechLevel,
    #[serde(default)]
    pub tech_hediffs_tags: Option<Vec<String>>,
    #[serde(default)]
    pub stat_bases: Vec<StatModifier>,
    #[serde(default)]
    pub thing_categories: Vec<DefName>,
}

impl ThingDef {
    /// Label with its first letter capitalized, as surfaced to players.
    pub fn label_cap(&self) -> String {
        let mut chars = self.label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    pub fn stat_base(&self, kind: StatKind) -> Option<f32> {
        stat_value(&self.stat_bases, kind)
    }

    pub fn has_tech_hediff_tag(&self, tag: &str) -> bool {
        self.tech_hediffs_tags
            .as_deref()
            .map_or(false, |tags| tags.iter().any(|t| t == tag))
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.thing_categories.iter().any(|c| c.as_str() == category)
    }
}
