use std::fmt;

use serde::{Deserialize, Serialize};

use super::def_name::DefName;
use super::stat::{stat_value, StatKind, StatModifier};
use super::tech::Complexity;
use super::thing::{AltitudeLayer, CompKind, GraphicData, ThingCategory, TickerType};

/// Degradation state of a reclaimed part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReclamationKind {
    /// Intact but contaminated; can be restored to an installable part.
    NonSterile,
    /// Damaged beyond reuse; only good for salvaging components.
    Mangled,
}

impl ReclamationKind {
    pub const ALL: [ReclamationKind; 2] = [ReclamationKind::NonSterile, ReclamationKind::Mangled];

    /// Def-name prefix for generated defs of this kind.
    pub fn def_name_prefix(&self) -> &'static str {
        match self {
            ReclamationKind::NonSterile => "NonSterile_",
            ReclamationKind::Mangled => "Mangled_",
        }
    }

    /// Texture path shared by all generated defs of this kind.
    pub fn tex_path(&self) -> &'static str {
        match self {
            ReclamationKind::NonSterile => "Things/Item/BodyPart/NonSterile",
            ReclamationKind::Mangled => "Things/Item/BodyPart/Mangled",
        }
    }

    /// Language key for generated labels.
    pub fn label_key(&self) -> &'static str {
        match self {
            ReclamationKind::NonSterile => "R3_NonSterile_Label",
            ReclamationKind::Mangled => "R3_Mangled_Label",
        }
    }

    /// Language key for generated descriptions.
    pub fn description_key(&self) -> &'static str {
        match self {
            ReclamationKind::NonSterile => "R3_NonSterile_Description",
            ReclamationKind::Mangled => "R3_Mangled_Description",
        }
    }

    /// Deterministic name of the def generated from `source`.
    pub fn packed_def_name(&self, source: &DefName) -> DefName {
        DefName::new(format!("{}{}", self.def_name_prefix(), source))
    }
}

impl fmt::Display for ReclamationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReclamationKind::NonSterile => "NonSterile",
            ReclamationKind::Mangled => "Mangled",
        };
        f.write_str(name)
    }
}

/// A generated item definition representing a reclaimed body part.
///
/// Two of these exist per eligible source def, one per [`ReclamationKind`].
/// The def is complete except for its category membership, which the
/// deferred cross-reference pass attaches once the category catalog is
/// available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedThingDef {
    pub def_name: DefName,
    pub label: String,
    pub description: String,
    pub category: ThingCategory,
    pub ticker_type: TickerType,
    pub altitude_layer: AltitudeLayer,
    pub graphic: GraphicData,
    pub use_hit_points: bool,
    pub selectable: bool,
    pub always_haulable: bool,
    pub is_body_part_or_implant: bool,
    pub path_cost: u16,
    pub trade_tags: Vec<String>,
    pub comps: Vec<CompKind>,
    pub tech_hediffs_tags: Option<Vec<String>>,
    pub stat_bases: Vec<StatModifier>,
    pub thing_categories: Vec<DefName>,
    /// The installable def this part was reclaimed from; unpacking a
    /// spawned instance yields that def again.
    pub spawn_on_unpack: DefName,
    pub reclamation: ReclamationKind,
    pub complexity: Complexity,
}

impl PackedThingDef {
    pub fn stat_base(&self, kind: StatKind) -> Option<f32> {
        stat_value(&self.stat_bases, kind)
    }
}
