use crate::diag::{DiagSink, Diagnostic};
use crate::models::category::{
    BODY_PARTS_MANGLED, BODY_PARTS_MANGLED_ADVANCED, BODY_PARTS_MANGLED_GLITTERTECH,
    BODY_PARTS_MANGLED_PRIMITIVE, BODY_PARTS_NON_STERILE, BODY_PARTS_NON_STERILE_ADVANCED,
    BODY_PARTS_NON_STERILE_GLITTERTECH, BODY_PARTS_NON_STERILE_PRIMITIVE,
};
use crate::models::{Complexity, DefName, ReclamationKind};

/// Leaf category names keyed by (kind, complexity). Row order mirrors
/// the shipped category tree.
const CATEGORY_TABLE: &[(ReclamationKind, Complexity, &str)] = &[
    (
        ReclamationKind::NonSterile,
        Complexity::Primitive,
        BODY_PARTS_NON_STERILE_PRIMITIVE,
    ),
    (
        ReclamationKind::NonSterile,
        Complexity::Advanced,
        BODY_PARTS_NON_STERILE_ADVANCED,
    ),
    (
        ReclamationKind::NonSterile,
        Complexity::Glittertech,
        BODY_PARTS_NON_STERILE_GLITTERTECH,
    ),
    (
        ReclamationKind::Mangled,
        Complexity::Primitive,
        BODY_PARTS_MANGLED_PRIMITIVE,
    ),
    (
        ReclamationKind::Mangled,
        Complexity::Advanced,
        BODY_PARTS_MANGLED_ADVANCED,
    ),
    (
        ReclamationKind::Mangled,
        Complexity::Glittertech,
        BODY_PARTS_MANGLED_GLITTERTECH,
    ),
];

/// Table row for a (kind, complexity) pair, if one exists.
pub(crate) fn find_category(kind: ReclamationKind, complexity: Complexity) -> Option<&'static str> {
    CATEGORY_TABLE
        .iter()
        .find(|(k, c, _)| *k == kind && *c == complexity)
        .map(|(_, _, name)| *name)
}

/// Umbrella category for a kind, used when no leaf row matches.
fn umbrella_category(kind: ReclamationKind) -> &'static str {
    match kind {
        ReclamationKind::NonSterile => BODY_PARTS_NON_STERILE,
        ReclamationKind::Mangled => BODY_PARTS_MANGLED,
    }
}

/// Category a generated def belongs in.
///
/// When the table has no row for the pair, the def lands in the kind's
/// umbrella category and the miss is reported; generation always yields
/// a category.
pub fn resolve_category(
    source: &DefName,
    kind: ReclamationKind,
    complexity: Complexity,
    diag: &mut dyn DiagSink,
) -> DefName {
    match find_category(kind, complexity) {
        Some(name) => DefName::from(name),
        None => {
            diag.report(Diagnostic::UnmappedCategoryPair {
                def_name: source.clone(),
                kind,
                complexity,
            });
            DefName::from(umbrella_category(kind))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectSink;

    #[test]
    fn test_every_pair_has_a_leaf_category() {
        for kind in ReclamationKind::ALL {
            for complexity in Complexity::ALL {
                let name = find_category(kind, complexity)
                    .unwrap_or_else(|| panic!("missing row for {} {}", kind, complexity));
                assert!(name.starts_with("BodyParts"));
            }
        }
    }

    #[test]
    fn test_all_six_categories_distinct() {
        let mut names: Vec<&str> = ReclamationKind::ALL
            .iter()
            .flat_map(|&k| Complexity::ALL.iter().map(move |&c| find_category(k, c).unwrap()))
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_resolution_is_stable() {
        let mut sink = CollectSink::default();
        let source = DefName::from("BionicEye");
        let first = resolve_category(
            &source,
            ReclamationKind::NonSterile,
            Complexity::Glittertech,
            &mut sink,
        );
        let second = resolve_category(
            &source,
            ReclamationKind::NonSterile,
            Complexity::Glittertech,
            &mut sink,
        );

        assert_eq!(first, second);
        assert_eq!(first.as_str(), "BodyPartsNonSterileGlittertech");
        assert!(sink.diags.is_empty());
    }

    #[test]
    fn test_mangled_primitive_row() {
        let mut sink = CollectSink::default();
        let name = resolve_category(
            &DefName::from("PegLeg"),
            ReclamationKind::Mangled,
            Complexity::Primitive,
            &mut sink,
        );
        assert_eq!(name.as_str(), "BodyPartsMangledPrimitive");
    }
}
