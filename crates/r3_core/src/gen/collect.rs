use fxhash::{FxHashMap, FxHashSet};

use crate::data::DefCatalog;
use crate::models::category::BODY_PARTS_NATURAL;
use crate::models::{DefName, HediffClass, TechLevel, ThingDef};

/// Hediff classes whose removal leaves a recoverable item behind.
pub(crate) const VALID_HEDIFF_CLASSES: [HediffClass; 2] =
    [HediffClass::AddedPart, HediffClass::Implant];

/// A source def eligible for reclamation, paired with the cheapest tier
/// any recipe produces it at.
#[derive(Debug, Clone, Copy)]
pub struct ReclaimCandidate<'a> {
    pub def: &'a ThingDef,
    /// Minimum defined tier across recipe research prerequisites whose
    /// products include this def. Absent when no recipe says anything.
    pub tier_hint: Option<TechLevel>,
}

/// Cheapest defined research tier per product def, across all recipes.
///
/// Recipes without a research prerequisite contribute nothing, and
/// prerequisites sitting at the undefined tier are stripped before the
/// minimum is taken.
pub fn recipe_tier_hints(catalog: &DefCatalog) -> FxHashMap<&DefName, TechLevel> {
    let mut hints: FxHashMap<&DefName, TechLevel> = FxHashMap::default();
    for recipe in &catalog.recipes {
        let tier = match recipe.research_tech_level() {
            Some(tier) if tier.is_defined() => tier,
            _ => continue,
        };
        let products = match &recipe.products {
            Some(products) => products,
            None => continue,
        };
        for product in products {
            let entry = hints.entry(product).or_insert(tier);
            if tier < *entry {
                *entry = tier;
            }
        }
    }
    hints
}

/// Every distinct reclaimable source def, in first-seen hediff order.
///
/// A def qualifies when some added-part or implant hediff spawns it on
/// removal and it is not a natural body part. The hediff list is the
/// authoritative source here: scanning things by their body-part flag
/// instead would drag in vanilla oddities like wood logs.
pub fn reclaimable_candidates(catalog: &DefCatalog) -> Vec<ReclaimCandidate<'_>> {
    let hints = recipe_tier_hints(catalog);
    let things = catalog.things_by_name();
    let mut seen: FxHashSet<&DefName> = FxHashSet::default();
    let mut candidates = Vec::new();

    for hediff in &catalog.hediffs {
        if !VALID_HEDIFF_CLASSES.contains(&hediff.hediff_class) {
            continue;
        }
        let spawn = match &hediff.spawn_thing_on_removed {
            Some(name) => name,
            None => continue,
        };
        let def = match things.get(spawn) {
            Some(def) => *def,
            None => {
                log::debug!("hediff {} spawns unknown def {}", hediff.def_name, spawn);
                continue;
            }
        };
        if def.in_category(BODY_PARTS_NATURAL) {
            continue;
        }
        if !seen.insert(&def.def_name) {
            continue;
        }
        candidates.push(ReclaimCandidate {
            def,
            tier_hint: hints.get(&def.def_name).copied(),
        });
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> DefCatalog {
        DefCatalog::from_json_str(
            r#"{
                "things": [
                    { "def_name": "BionicEye", "label": "bionic eye" },
                    { "def_name": "PegLeg", "label": "peg leg" },
                    {
                        "def_name": "Heart",
                        "label": "heart",
                        "thing_categories": ["BodyPartsNatural"]
                    }
                ],
                "hediffs": [
                    {
                        "def_name": "BionicEye",
                        "hediff_class": "AddedPart",
                        "spawn_thing_on_removed": "BionicEye"
                    },
                    {
                        "def_name": "BionicEyeLeft",
                        "hediff_class": "AddedPart",
                        "spawn_thing_on_removed": "BionicEye"
                    },
                    {
                        "def_name": "PegLeg",
                        "hediff_class": "AddedPart",
                        "spawn_thing_on_removed": "PegLeg"
                    },
                    {
                        "def_name": "Heart",
                        "hediff_class": "AddedPart",
                        "spawn_thing_on_removed": "Heart"
                    },
                    { "def_name": "Burn", "hediff_class": "Injury" },
                    {
                        "def_name": "Scar",
                        "hediff_class": "Injury",
                        "spawn_thing_on_removed": "PegLeg"
                    },
                    {
                        "def_name": "Ghost",
                        "hediff_class": "Implant",
                        "spawn_thing_on_removed": "DoesNotExist"
                    }
                ],
                "recipes": [
                    {
                        "def_name": "Make_BionicEye",
                        "products": ["BionicEye"],
                        "research_prerequisite": { "def_name": "Bionics", "tech_level": "Spacer" }
                    },
                    {
                        "def_name": "Craft_BionicEye",
                        "products": ["BionicEye"],
                        "research_prerequisite": { "def_name": "FieldSurgery", "tech_level": "Medieval" }
                    },
                    {
                        "def_name": "Scavenge_BionicEye",
                        "products": ["BionicEye"],
                        "research_prerequisite": { "def_name": "Scavenging", "tech_level": "Undefined" }
                    },
                    { "def_name": "Make_PegLeg", "products": ["PegLeg"] }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_candidates_distinct_in_first_seen_order() {
        let catalog = catalog();
        let candidates = reclaimable_candidates(&catalog);

        let names: Vec<&str> = candidates
            .iter()
            .map(|c| c.def.def_name.as_str())
            .collect();
        assert_eq!(names, vec!["BionicEye", "PegLeg"]);
    }

    #[test]
    fn test_natural_parts_and_injuries_excluded() {
        let catalog = catalog();
        let candidates = reclaimable_candidates(&catalog);

        assert!(candidates.iter().all(|c| c.def.def_name.as_str() != "Heart"));
        // The Scar injury also points at PegLeg but must not be what
        // qualifies it; remove the real hediff and PegLeg drops out.
        let mut trimmed = catalog.clone();
        trimmed.hediffs.retain(|h| h.def_name.as_str() != "PegLeg");
        let remaining = reclaimable_candidates(&trimmed);
        assert!(remaining.iter().all(|c| c.def.def_name.as_str() != "PegLeg"));
    }

    #[test]
    fn test_tier_hint_takes_minimum_defined_tier() {
        let catalog = catalog();
        let candidates = reclaimable_candidates(&catalog);

        let eye = candidates
            .iter()
            .find(|c| c.def.def_name.as_str() == "BionicEye")
            .unwrap();
        // Spacer and Medieval recipes both produce it; Undefined is
        // stripped, Medieval wins.
        assert_eq!(eye.tier_hint, Some(TechLevel::Medieval));
    }

    #[test]
    fn test_tier_hint_absent_without_research() {
        let catalog = catalog();
        let candidates = reclaimable_candidates(&catalog);

        let leg = candidates
            .iter()
            .find(|c| c.def.def_name.as_str() == "PegLeg")
            .unwrap();
        assert_eq!(leg.tier_hint, None);
    }

    #[test]
    fn test_dangling_spawn_ref_skipped() {
        let catalog = catalog();
        let candidates = reclaimable_candidates(&catalog);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_recipe_tier_hints_keyed_by_product() {
        let catalog = catalog();
        let hints = recipe_tier_hints(&catalog);

        assert_eq!(hints.len(), 1);
        assert_eq!(
            hints.get(&DefName::from("BionicEye")),
            Some(&TechLevel::Medieval)
        );
        assert_eq!(hints.get(&DefName::from("PegLeg")), None);
    }
}
