use serde::{Deserialize, Serialize};

use super::def_name::DefName;

/// Runtime class of a health-record def.
///
/// Only added parts and implants leave a recoverable item behind when
/// removed from a pawn; the other classes never feed the reclamation
/// pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HediffClass {
    AddedPart,
    Implant,
    Injury,
    MissingPart,
    WithComps,
}

/// A health-record definition from the host catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HediffDef {
    pub def_name: DefName,
    #[serde(default)]
    pub label: String,
    pub hediff_class: HediffClass,
    #[serde(default)]
    pub spawn_thing_on_removed: Option<DefName>,
}
