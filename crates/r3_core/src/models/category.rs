use serde::{Deserialize, Serialize};

use super::def_name::DefName;

// Category defs the reclamation pipeline knows by name. The six leaf
// categories sit under BodyPartsNonSterile / BodyPartsMangled, which in
// turn sit under BodyPartsReclaimed in the shipped category tree.

/// Natural body parts (organs, harvested limbs). Defs spawned into this
/// category are never reclaimed.
pub const BODY_PARTS_NATURAL: &str = "BodyPartsNatural";

/// Root of the reclaimed-parts category tree and last-resort fallback
/// when a kind cannot even be determined.
pub const BODY_PARTS_RECLAIMED: &str = "BodyPartsReclaimed";

/// Per-kind fallbacks used when a (kind, complexity) pair has no mapping.
pub const BODY_PARTS_NON_STERILE: &str = "BodyPartsNonSterile";
pub const BODY_PARTS_MANGLED: &str = "BodyPartsMangled";

pub const BODY_PARTS_NON_STERILE_PRIMITIVE: &str = "BodyPartsNonSterilePrimitive";
pub const BODY_PARTS_NON_STERILE_ADVANCED: &str = "BodyPartsNonSterileAdvanced";
pub const BODY_PARTS_NON_STERILE_GLITTERTECH: &str = "BodyPartsNonSterileGlittertech";
pub const BODY_PARTS_MANGLED_PRIMITIVE: &str = "BodyPartsMangledPrimitive";
pub const BODY_PARTS_MANGLED_ADVANCED: &str = "BodyPartsMangledAdvanced";
pub const BODY_PARTS_MANGLED_GLITTERTECH: &str = "BodyPartsMangledGlittertech";

/// A thing-category definition from the host catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThingCategoryDef {
    pub def_name: DefName,
    pub label: String,
}
